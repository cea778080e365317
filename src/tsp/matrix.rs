//! Immutable N×N cost table.

use crate::error::{Result, TspError};

/// Square table of travel costs between cities `0..n`.
///
/// Row `i`, column `j` holds the cost of travelling from city `i` to city
/// `j`. The matrix need not be symmetric and the diagonal is never read by
/// tour evaluation. All costs are finite and non-negative; this is checked
/// once at construction and the matrix is read-only afterwards.
///
/// # Examples
///
/// ```
/// use u_tsp::tsp::DistanceMatrix;
///
/// let m = DistanceMatrix::from_rows(&[[0, 2], [1, 0]]).unwrap();
/// assert_eq!(m.size(), 2);
/// assert_eq!(m.distance(0, 1), 2.0);
/// assert_eq!(m.distance(1, 0), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    n: usize,
    costs: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from owned rows.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(TspError::InvalidMatrix("matrix has no cities".into()));
        }
        let mut costs = Vec::with_capacity(cell_count(n)?);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(TspError::InvalidMatrix(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            costs.extend(row);
        }
        Self::from_flat(n, costs)
    }

    /// Builds a matrix from any numeric rows losslessly convertible to `f64`.
    ///
    /// Convenient for integer literal tables.
    pub fn from_rows<T, Row>(rows: &[Row]) -> Result<Self>
    where
        T: Copy + Into<f64>,
        Row: AsRef<[T]>,
    {
        let rows: Vec<Vec<f64>> = rows
            .iter()
            .map(|row| row.as_ref().iter().map(|&c| c.into()).collect())
            .collect();
        Self::new(rows)
    }

    /// Builds a matrix from a row-major buffer of `n * n` costs.
    pub fn from_flat(n: usize, costs: Vec<f64>) -> Result<Self> {
        if n == 0 {
            return Err(TspError::InvalidMatrix("matrix has no cities".into()));
        }
        let expected = cell_count(n)?;
        if costs.len() != expected {
            return Err(TspError::InvalidMatrix(format!(
                "expected {expected} costs for {n} cities, got {}",
                costs.len()
            )));
        }
        if let Some(pos) = costs.iter().position(|c| !c.is_finite() || *c < 0.0) {
            return Err(TspError::InvalidMatrix(format!(
                "cost ({}, {}) = {} is not a finite non-negative number",
                pos / n,
                pos % n,
                costs[pos]
            )));
        }
        Ok(Self { n, costs })
    }

    /// Four-city asymmetric table used by the reference OX program.
    pub fn four_city_sample() -> Self {
        Self::sample(&[
            [0.0, 2.0, 9.0, 10.0],
            [1.0, 0.0, 6.0, 4.0],
            [15.0, 7.0, 0.0, 8.0],
            [6.0, 3.0, 12.0, 0.0],
        ])
    }

    /// Five-city asymmetric table used by the reference PMX program.
    pub fn five_city_sample() -> Self {
        Self::sample(&[
            [0.0, 2.0, 9.0, 10.0, 3.0],
            [1.0, 0.0, 6.0, 4.0, 7.0],
            [15.0, 7.0, 0.0, 8.0, 2.0],
            [6.0, 3.0, 12.0, 0.0, 5.0],
            [10.0, 8.0, 4.0, 9.0, 0.0],
        ])
    }

    fn sample<const N: usize>(rows: &[[f64; N]; N]) -> Self {
        Self {
            n: N,
            costs: rows.iter().flatten().copied().collect(),
        }
    }

    /// Number of cities.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Cost of travelling from `from` to `to`.
    ///
    /// # Panics
    /// Panics if either index is `>= size()`.
    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        assert!(from < self.n && to < self.n, "city index out of range");
        self.costs[from * self.n + to]
    }

    /// Outgoing costs of city `from`.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.costs[from * self.n..(from + 1) * self.n]
    }

    /// Whether `distance(i, j) == distance(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (i + 1..self.n).all(|j| self.distance(i, j) == self.distance(j, i)))
    }
}

/// `n * n`, or an error when it does not fit in `usize`.
fn cell_count(n: usize) -> Result<usize> {
    n.checked_mul(n)
        .ok_or_else(|| TspError::InvalidMatrix(format!("{n} cities overflow the cost table")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_lookup() {
        let m = DistanceMatrix::new(vec![vec![0.0, 1.5], vec![2.5, 0.0]]).unwrap();
        assert_eq!(m.size(), 2);
        assert_eq!(m.distance(0, 1), 1.5);
        assert_eq!(m.distance(1, 0), 2.5);
        assert_eq!(m.row(1), &[2.5, 0.0]);
    }

    #[test]
    fn test_from_integer_rows() {
        let m = DistanceMatrix::from_rows(&[[0u32, 3, 4], [3, 0, 5], [4, 5, 0]]).unwrap();
        assert_eq!(m.distance(2, 1), 5.0);
        assert!(m.is_symmetric());
    }

    #[test]
    fn test_samples() {
        let m = DistanceMatrix::four_city_sample();
        assert_eq!(m.size(), 4);
        assert_eq!(m.distance(2, 0), 15.0);
        assert!(!m.is_symmetric());

        let m = DistanceMatrix::five_city_sample();
        assert_eq!(m.size(), 5);
        assert_eq!(m.distance(4, 2), 4.0);
    }

    #[test]
    fn test_rejects_non_square() {
        let err = DistanceMatrix::new(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, TspError::InvalidMatrix(_)));

        assert!(DistanceMatrix::from_flat(3, vec![0.0; 8]).is_err());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(DistanceMatrix::new(Vec::new()).is_err());
        assert!(DistanceMatrix::from_flat(0, Vec::new()).is_err());
    }

    #[test]
    fn test_rejects_negative_and_non_finite() {
        assert!(DistanceMatrix::new(vec![vec![0.0, -1.0], vec![1.0, 0.0]]).is_err());
        assert!(DistanceMatrix::new(vec![vec![0.0, f64::NAN], vec![1.0, 0.0]]).is_err());
        assert!(DistanceMatrix::new(vec![vec![0.0, f64::INFINITY], vec![1.0, 0.0]]).is_err());
    }

    #[test]
    fn test_rejects_overflowing_city_count() {
        let n = 1usize << (usize::BITS / 2);
        let err = DistanceMatrix::from_flat(n, Vec::new()).unwrap_err();
        assert!(matches!(err, TspError::InvalidMatrix(_)));
        assert!(DistanceMatrix::from_flat(usize::MAX, Vec::new()).is_err());
    }

    #[test]
    fn test_all_zero_is_valid() {
        let m = DistanceMatrix::from_flat(4, vec![0.0; 16]).unwrap();
        assert!(m.is_symmetric());
    }

    #[test]
    #[should_panic(expected = "city index out of range")]
    fn test_out_of_range_panics() {
        let m = DistanceMatrix::four_city_sample();
        m.distance(4, 0);
    }
}
