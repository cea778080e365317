//! Genetic Algorithm for permutation-encoded problems.
//!
//! A generational GA whose individuals are [`Route`](crate::tsp::Route)s.
//! Problems plug in by implementing [`PermutationProblem`];
//! [`DistanceMatrix`](crate::tsp::DistanceMatrix) does so for the TSP.
//!
//! # Core Trait
//!
//! - [`PermutationProblem`]: problem size and permutation cost
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, tournament size)
//! - [`EvolutionEngine`]: Executes the evolutionary loop, one generation per step
//! - [`RunResult`]: Best route ever found plus per-generation reports
//!
//! # Submodules
//!
//! - [`operators`]: Permutation crossover (OX, PMX) and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Larrañaga et al. (1999), "Genetic Algorithms for the Travelling Salesman
//!   Problem: A Review of Representations and Operators"

mod config;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::{CrossoverKind, GaConfig};
pub use population::initial_population;
pub use runner::{EngineState, EvolutionEngine, GenerationReport, RunResult};
pub use selection::Tournament;
pub use types::{inverse_fitness, Candidate, PermutationProblem};
