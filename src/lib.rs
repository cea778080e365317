//! Evolutionary optimizer for permutation-encoded combinatorial problems.
//!
//! The crate is built around the Traveling Salesman Problem:
//!
//! - **TSP model** ([`tsp`]): an immutable, possibly asymmetric
//!   [`DistanceMatrix`](tsp::DistanceMatrix), permutation
//!   [`Route`](tsp::Route)s read as closed tours, tour length and inverse
//!   fitness, and a brute-force reference solver for small instances.
//! - **Genetic Algorithm** ([`ga`]): tournament selection, Ordered and
//!   Partially Matched crossover, swap mutation, and an
//!   [`EvolutionEngine`](ga::EvolutionEngine) that tracks the best route
//!   ever found across generations.
//!
//! All randomness flows through an explicit, seedable RNG, so a fixed
//! seed reproduces a run exactly.
//!
//! # Example
//!
//! ```
//! use u_tsp::ga::{EvolutionEngine, GaConfig};
//! use u_tsp::tsp::DistanceMatrix;
//!
//! let matrix = DistanceMatrix::from_rows(&[
//!     [0, 2, 9, 10],
//!     [1, 0, 6, 4],
//!     [15, 7, 0, 8],
//!     [6, 3, 12, 0],
//! ])?;
//! let result = EvolutionEngine::new(&matrix, GaConfig::classic().with_seed(7))?.run()?;
//! println!("best {} = {:.2}", result.best_route, result.best_distance);
//! # Ok::<(), u_tsp::TspError>(())
//! ```
//!
//! # Logging
//!
//! The engine reports through the [`log`] facade: one `info` record per
//! generation and a final summary, `debug` records when the best route
//! improves. Install any logger to see them.

mod error;
pub mod ga;
pub mod random;
pub mod tsp;

pub use error::{Result, TspError};
