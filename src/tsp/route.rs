//! Permutation-encoded tours.

use crate::error::{Result, TspError};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// An ordering of cities `0..n`, each visited exactly once.
///
/// The tour is cyclic: after the last city the salesman returns to the
/// first. Every constructor and operator in this crate keeps the
/// permutation property; [`Route::is_permutation`] checks it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route(Vec<usize>);

impl Route {
    /// The route `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// A uniformly random permutation of `0..n` in freshly allocated storage.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut cities: Vec<usize> = (0..n).collect();
        cities.shuffle(rng);
        Self(cities)
    }

    /// Wraps `cities` after checking it is a permutation of `0..len`.
    pub fn try_from_vec(cities: Vec<usize>) -> Result<Self> {
        check_permutation(&cities)?;
        Ok(Self(cities))
    }

    /// Wraps `cities` without validation.
    ///
    /// Operators use this for buffers they have built themselves; the
    /// engine re-checks every route before a generation is swapped in.
    pub(crate) fn from_vec_unchecked(cities: Vec<usize>) -> Self {
        Self(cities)
    }

    /// Number of cities in the tour.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the route visits no cities.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// City order as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Mutable city order, for in-place operators.
    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [usize] {
        &mut self.0
    }

    /// Consumes the route, returning the city order.
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    /// Whether every city `0..len` appears exactly once.
    pub fn is_permutation(&self) -> bool {
        check_permutation(&self.0).is_ok()
    }
}

impl AsRef<[usize]> for Route {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl TryFrom<Vec<usize>> for Route {
    type Error = TspError;

    fn try_from(cities: Vec<usize>) -> Result<Self> {
        Self::try_from_vec(cities)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, city) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{city}")?;
        }
        write!(f, "]")
    }
}

/// Checks that `cities` is a permutation of `0..cities.len()`.
pub(crate) fn check_permutation(cities: &[usize]) -> Result<()> {
    let n = cities.len();
    let mut seen = vec![false; n];
    for (pos, &city) in cities.iter().enumerate() {
        if city >= n {
            return Err(TspError::InvalidRoute {
                len: n,
                reason: format!("city {city} at position {pos} is out of range"),
            });
        }
        if seen[city] {
            return Err(TspError::InvalidRoute {
                len: n,
                reason: format!("city {city} appears more than once"),
            });
        }
        seen[city] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_identity() {
        let r = Route::identity(4);
        assert_eq!(r.as_slice(), &[0, 1, 2, 3]);
        assert!(r.is_permutation());
        assert_eq!(r.len(), 4);
    }

    #[test]
    fn test_random_is_permutation() {
        let mut rng = create_rng(42);
        for n in 1..30 {
            let r = Route::random(n, &mut rng);
            assert_eq!(r.len(), n);
            assert!(r.is_permutation(), "not a permutation: {r}");
        }
    }

    #[test]
    fn test_try_from_rejects_duplicates() {
        let err = Route::try_from_vec(vec![0, 1, 1]).unwrap_err();
        assert!(matches!(err, TspError::InvalidRoute { len: 3, .. }));
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert!(Route::try_from(vec![0, 3, 1]).is_err());
    }

    #[test]
    fn test_try_from_accepts_permutation() {
        let r = Route::try_from(vec![2, 0, 1]).unwrap();
        assert_eq!(r.into_vec(), vec![2, 0, 1]);
    }

    #[test]
    fn test_display() {
        let r = Route::try_from_vec(vec![0, 2, 3, 1]).unwrap();
        assert_eq!(r.to_string(), "[0, 2, 3, 1]");
        assert_eq!(Route::identity(0).to_string(), "[]");
    }
}
