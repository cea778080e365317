//! Core trait and individual type for the permutation GA.
//!
//! [`PermutationProblem`] is the contract between the generic evolution
//! engine and a concrete problem; [`Candidate`] is a route paired with its
//! evaluated cost.

use crate::tsp::Route;

/// A minimization problem whose solutions are permutations of `0..size()`.
///
/// [`DistanceMatrix`](crate::tsp::DistanceMatrix) implements this with the
/// closed-tour length as cost. Any other permutation-encoded problem
/// (assignment, sequencing, ...) can reuse the engine by implementing it.
///
/// # Thread Safety
///
/// `PermutationProblem` must be `Send + Sync` because the engine may
/// evaluate individuals in parallel using rayon.
///
/// ```ignore
/// struct Sequencing { durations: Vec<f64> }
///
/// impl PermutationProblem for Sequencing {
///     fn size(&self) -> usize { self.durations.len() }
///     fn cost(&self, perm: &[usize]) -> f64 { /* weighted completion time */ }
/// }
/// ```
pub trait PermutationProblem: Send + Sync {
    /// Number of elements in every permutation.
    fn size(&self) -> usize;

    /// Non-negative cost of `perm`. Lower is better.
    fn cost(&self, perm: &[usize]) -> f64;

    /// Fitness derived from cost: `1 / cost`, or `+∞` when cost is zero.
    ///
    /// Higher fitness is better.
    fn fitness(&self, perm: &[usize]) -> f64 {
        inverse_fitness(self.cost(perm))
    }
}

/// `1 / cost`, mapping a zero cost to `+∞` instead of dividing by zero.
#[inline]
pub fn inverse_fitness(cost: f64) -> f64 {
    if cost > 0.0 {
        1.0 / cost
    } else {
        f64::INFINITY
    }
}

/// A population slot: a route and its cached cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// The permutation held by this slot.
    pub route: Route,
    /// Cost of `route` under the problem being optimized.
    pub distance: f64,
}

impl Candidate {
    /// Evaluates `route` against `problem`.
    pub fn evaluate<P: PermutationProblem + ?Sized>(problem: &P, route: Route) -> Self {
        let distance = problem.cost(route.as_slice());
        Self { route, distance }
    }

    /// Inverse-distance fitness (higher is better).
    #[inline]
    pub fn fitness(&self) -> f64 {
        inverse_fitness(self.distance)
    }
}
