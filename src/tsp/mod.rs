//! Traveling Salesman Problem data model.
//!
//! - [`DistanceMatrix`]: immutable, possibly asymmetric N×N cost table
//! - [`Route`]: permutation of city indices, read as a closed tour
//! - [`FitnessEvaluator`]: tour length and inverse-length fitness
//! - [`solve_exact`]: brute-force optimum for small instances
//!
//! [`DistanceMatrix`] implements [`PermutationProblem`](crate::ga::PermutationProblem),
//! so it plugs straight into the [`EvolutionEngine`](crate::ga::EvolutionEngine).

mod exact;
mod fitness;
mod matrix;
mod route;

pub use exact::{solve_exact, MAX_EXACT_CITIES};
pub use fitness::{tour_length, FitnessEvaluator};
pub use matrix::DistanceMatrix;
pub use route::Route;
