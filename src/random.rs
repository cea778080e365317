//! Random source helpers.
//!
//! Every stochastic component takes `&mut R where R: Rng` so that runs are
//! reproducible from a single seed. [`create_rng`] is the canonical way to
//! build that source.

use crate::error::{Result, TspError};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

/// Creates a seeded RNG.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws `k` distinct indices from `0..n`, in draw order.
///
/// Returns [`TspError::Sampling`] when `k > n`.
pub fn sample_distinct<R: Rng + ?Sized>(rng: &mut R, n: usize, k: usize) -> Result<Vec<usize>> {
    if k > n {
        return Err(TspError::Sampling {
            requested: k,
            available: n,
        });
    }
    Ok(index::sample(rng, n, k).into_vec())
}

/// Draws two distinct positions from `0..n`, returned as `(low, high)`.
///
/// Returns [`TspError::Sampling`] when `n < 2`.
pub fn distinct_pair<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Result<(usize, usize)> {
    let picked = sample_distinct(rng, n, 2)?;
    let (a, b) = (picked[0], picked[1]);
    Ok(if a < b { (a, b) } else { (b, a) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..32 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_sample_distinct_has_no_duplicates() {
        let mut rng = create_rng(42);
        for _ in 0..200 {
            let picked = sample_distinct(&mut rng, 10, 4).unwrap();
            assert_eq!(picked.len(), 4);
            let set: HashSet<usize> = picked.iter().copied().collect();
            assert_eq!(set.len(), 4);
            assert!(picked.iter().all(|&i| i < 10));
        }
    }

    #[test]
    fn test_sample_whole_pool() {
        let mut rng = create_rng(42);
        let mut picked = sample_distinct(&mut rng, 5, 5).unwrap();
        picked.sort_unstable();
        assert_eq!(picked, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_sample_too_many() {
        let mut rng = create_rng(42);
        assert_eq!(
            sample_distinct(&mut rng, 3, 4),
            Err(TspError::Sampling {
                requested: 4,
                available: 3
            })
        );
    }

    #[test]
    fn test_distinct_pair_ordered() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let (lo, hi) = distinct_pair(&mut rng, 6).unwrap();
            assert!(lo < hi);
            assert!(hi < 6);
        }
    }

    #[test]
    fn test_distinct_pair_needs_two() {
        let mut rng = create_rng(42);
        assert!(distinct_pair(&mut rng, 1).is_err());
        assert_eq!(distinct_pair(&mut rng, 2).unwrap(), (0, 1));
    }
}
