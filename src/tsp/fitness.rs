//! Tour length and fitness.

use super::matrix::DistanceMatrix;
use super::route::Route;
use crate::error::{Result, TspError};
use crate::ga::{inverse_fitness, PermutationProblem};

/// Evaluates routes against a borrowed [`DistanceMatrix`].
///
/// Tour length is the **closed** cycle: the edge from the last city back
/// to the first is included. Fitness is the inverse of tour length, so
/// higher fitness means a shorter tour.
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator<'a> {
    matrix: &'a DistanceMatrix,
}

impl<'a> FitnessEvaluator<'a> {
    pub fn new(matrix: &'a DistanceMatrix) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &'a DistanceMatrix {
        self.matrix
    }

    /// Sum of `distance(route[i], route[(i + 1) % n])` over the whole cycle.
    pub fn tour_length(&self, route: &Route) -> f64 {
        tour_length(self.matrix, route.as_slice())
    }

    /// `1 / tour_length`, or `+∞` for a zero-length tour.
    pub fn fitness(&self, route: &Route) -> f64 {
        inverse_fitness(self.tour_length(route))
    }

    /// Like [`fitness`](Self::fitness) but rejects zero-length tours.
    pub fn checked_fitness(&self, route: &Route) -> Result<f64> {
        let length = self.tour_length(route);
        if length > 0.0 {
            Ok(1.0 / length)
        } else {
            Err(TspError::DegenerateTour)
        }
    }
}

/// Closed-tour length of `cities` over `matrix`.
///
/// Empty and single-city tours have length 0 unless the diagonal says
/// otherwise (a one-city tour is the self-loop `c -> c`).
pub fn tour_length(matrix: &DistanceMatrix, cities: &[usize]) -> f64 {
    let n = cities.len();
    if n == 0 {
        return 0.0;
    }
    (0..n)
        .map(|i| matrix.distance(cities[i], cities[(i + 1) % n]))
        .sum()
}

impl PermutationProblem for DistanceMatrix {
    fn size(&self) -> usize {
        DistanceMatrix::size(self)
    }

    fn cost(&self, perm: &[usize]) -> f64 {
        tour_length(self, perm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn route(cities: &[usize]) -> Route {
        Route::try_from_vec(cities.to_vec()).unwrap()
    }

    #[test]
    fn test_tour_length_includes_return_edge() {
        let m = DistanceMatrix::four_city_sample();
        let eval = FitnessEvaluator::new(&m);
        // 0->1 (2) + 1->3 (4) + 3->2 (12) + 2->0 (15)
        assert_eq!(eval.tour_length(&route(&[0, 1, 3, 2])), 33.0);
        // 0->2 (9) + 2->3 (8) + 3->1 (3) + 1->0 (1)
        assert_eq!(eval.tour_length(&route(&[0, 2, 3, 1])), 21.0);
    }

    #[test]
    fn test_rotation_invariant() {
        let m = DistanceMatrix::five_city_sample();
        let eval = FitnessEvaluator::new(&m);
        let a = eval.tour_length(&route(&[0, 3, 1, 4, 2]));
        let b = eval.tour_length(&route(&[4, 2, 0, 3, 1]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_asymmetric_direction_matters() {
        let m = DistanceMatrix::four_city_sample();
        let eval = FitnessEvaluator::new(&m);
        let forward = eval.tour_length(&route(&[0, 1, 2, 3]));
        let backward = eval.tour_length(&route(&[3, 2, 1, 0]));
        assert_eq!(forward, 22.0);
        assert_eq!(backward, 30.0);
    }

    #[test]
    fn test_fitness_is_inverse_length() {
        let m = DistanceMatrix::four_city_sample();
        let eval = FitnessEvaluator::new(&m);
        let r = route(&[0, 2, 3, 1]);
        assert!((eval.fitness(&r) - 1.0 / 21.0).abs() < 1e-12);
        assert_eq!(eval.checked_fitness(&r), Ok(1.0 / 21.0));
    }

    #[test]
    fn test_non_negative_length() {
        let m = DistanceMatrix::five_city_sample();
        let eval = FitnessEvaluator::new(&m);
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let r = Route::random(5, &mut rng);
            assert!(eval.tour_length(&r) >= 0.0);
        }
    }

    #[test]
    fn test_degenerate_matrix() {
        let m = DistanceMatrix::from_flat(5, vec![0.0; 25]).unwrap();
        let eval = FitnessEvaluator::new(&m);
        let mut rng = create_rng(42);
        for _ in 0..20 {
            let r = Route::random(5, &mut rng);
            assert_eq!(eval.tour_length(&r), 0.0);
            assert_eq!(eval.fitness(&r), f64::INFINITY);
            assert_eq!(eval.checked_fitness(&r), Err(TspError::DegenerateTour));
        }
    }

    #[test]
    fn test_problem_impl() {
        let m = DistanceMatrix::four_city_sample();
        assert_eq!(PermutationProblem::size(&m), 4);
        assert_eq!(m.cost(&[0, 2, 3, 1]), 21.0);
    }
}
