//! Tournament selection.
//!
//! Each output slot is filled by the fittest of `k` **distinct** population
//! slots drawn uniformly at random. Tournaments are independent, so the
//! same individual may win many slots; that duplication is the selection
//! pressure.
//!
//! # References
//!
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Candidate;
use crate::error::{Result, TspError};
use crate::random::sample_distinct;
use rand::Rng;

/// Tournament selection with `k` distinct contestants per tournament.
///
/// - k=1: uniform random choice (no pressure)
/// - k=2–3: light to moderate pressure
/// - k close to the population size: near-deterministic choice of the best
///
/// Contestants are drawn as slot indices, so two slots holding equal routes
/// are still two different contestants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tournament {
    size: usize,
}

impl Tournament {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Runs one tournament and returns the winning slot index.
    ///
    /// Contestants are ranked by fitness descending; among equal fitness
    /// the one drawn first wins. Fails with [`TspError::InvalidConfig`] when
    /// `k` is zero and [`TspError::Sampling`] when `k` exceeds the
    /// population size.
    pub fn select_one<R: Rng + ?Sized>(
        &self,
        population: &[Candidate],
        rng: &mut R,
    ) -> Result<usize> {
        if self.size == 0 {
            return Err(TspError::InvalidConfig(
                "tournament_size must be at least 1".into(),
            ));
        }
        let contestants = sample_distinct(rng, population.len(), self.size)?;
        let mut winner = contestants[0];
        for &idx in &contestants[1..] {
            if population[idx].fitness() > population[winner].fitness() {
                winner = idx;
            }
        }
        Ok(winner)
    }

    /// Runs `count` independent tournaments and returns the winners in order.
    pub fn select<R: Rng + ?Sized>(
        &self,
        population: &[Candidate],
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>> {
        (0..count)
            .map(|_| self.select_one(population, rng))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::tsp::Route;

    fn make_population(distances: &[f64]) -> Vec<Candidate> {
        distances
            .iter()
            .map(|&d| Candidate {
                route: Route::identity(3),
                distance: d,
            })
            .collect()
    }

    #[test]
    fn test_full_tournament_always_picks_best() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);
        let winners = Tournament::new(4).select(&pop, 500, &mut rng).unwrap();
        assert!(winners.iter().all(|&w| w == 2));
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0, 12.0, 7.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 6];
        let n = 10000;
        for w in Tournament::new(3).select(&pop, n, &mut rng).unwrap() {
            counts[w] += 1;
        }
        // P(best among 3 of 6 distinct) = 1 - C(5,3)/C(6,3) = 0.5
        assert!(
            counts[2] > 4000,
            "expected best to win ~50% of tournaments, got {counts:?}"
        );
        // Worst can never beat two others
        assert_eq!(counts[4], 0);
    }

    #[test]
    fn test_tournament_size_1_is_uniform() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for w in Tournament::new(1).select(&pop, 10000, &mut rng).unwrap() {
            counts[w] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_equal_fitness_is_deterministic() {
        let pop = make_population(&[5.0, 5.0, 5.0, 5.0]);
        let a = Tournament::new(2).select(&pop, 50, &mut create_rng(3)).unwrap();
        let b = Tournament::new(2).select(&pop, 50, &mut create_rng(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_distance_wins() {
        let pop = make_population(&[3.0, 0.0]);
        let mut rng = create_rng(42);
        assert_eq!(Tournament::new(2).select_one(&pop, &mut rng).unwrap(), 1);
    }

    #[test]
    fn test_select_count() {
        let pop = make_population(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let mut rng = create_rng(42);
        let winners = Tournament::new(3).select(&pop, 6, &mut rng).unwrap();
        assert_eq!(winners.len(), 6);
        assert!(winners.iter().all(|&w| w < 6));
    }

    #[test]
    fn test_empty_tournament_is_rejected() {
        let pop = make_population(&[1.0, 2.0]);
        let mut rng = create_rng(42);
        assert!(matches!(
            Tournament::new(0).select_one(&pop, &mut rng),
            Err(TspError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_oversized_tournament_is_sampling_error() {
        let pop = make_population(&[1.0, 2.0]);
        let mut rng = create_rng(42);
        assert_eq!(
            Tournament::new(3).select_one(&pop, &mut rng),
            Err(TspError::Sampling {
                requested: 3,
                available: 2
            })
        );
    }
}
