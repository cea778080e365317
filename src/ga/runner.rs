//! Evolutionary loop execution.
//!
//! [`EvolutionEngine`] orchestrates the generational process:
//! selection → crossover → mutation → replacement → elite tracking.
//!
//! # Lifecycle
//!
//! ```text
//! Initialized ──step()──▶ Evolving(1) ──step()──▶ ... ──▶ Evolving(G) ──▶ Terminated
//! ```
//!
//! Construction validates the configuration and builds the initial
//! population. Each [`step`](EvolutionEngine::step) runs exactly one
//! generation; the engine terminates after `generations` steps.

use super::config::GaConfig;
use super::operators::swap_mutation;
use super::population::initial_population;
use super::selection::Tournament;
use super::types::{Candidate, PermutationProblem};
use crate::error::{Result, TspError};
use crate::random::create_rng;
use crate::tsp::Route;
use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Position of the engine in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Initial population built, no generation run yet.
    Initialized,
    /// `generation` (1-based) is the last completed generation.
    Evolving { generation: usize },
    /// All generations ran, or a run aborted.
    Terminated,
}

/// Observable outcome of one generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationReport {
    /// 1-based generation index.
    pub generation: usize,
    /// Shortest tour length in this generation's population.
    pub best_distance: f64,
    /// Shortest tour length seen so far, this generation included.
    pub best_ever_distance: f64,
}

/// Result of an optimization run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// The best route found during the entire run.
    pub best_route: Route,

    /// Tour length of `best_route`.
    pub best_distance: f64,

    /// Number of generations completed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Whether the run hit [`GaConfig::time_limit_ms`].
    pub timed_out: bool,

    /// One report per completed generation.
    pub history: Vec<GenerationReport>,
}

/// Generational GA over a [`PermutationProblem`].
///
/// # Usage
///
/// ```
/// use u_tsp::ga::{EvolutionEngine, GaConfig};
/// use u_tsp::tsp::DistanceMatrix;
///
/// let matrix = DistanceMatrix::four_city_sample();
/// let config = GaConfig::classic().with_seed(42);
/// let result = EvolutionEngine::new(&matrix, config)?.run()?;
///
/// assert!(result.best_route.is_permutation());
/// assert_eq!(result.generations, 100);
/// # Ok::<(), u_tsp::TspError>(())
/// ```
pub struct EvolutionEngine<'a, P: ?Sized, R = StdRng> {
    problem: &'a P,
    config: GaConfig,
    rng: R,
    tournament: Tournament,
    population: Vec<Candidate>,
    best: Option<Candidate>,
    state: EngineState,
    history: Vec<GenerationReport>,
}

impl<'a, P> EvolutionEngine<'a, P, StdRng>
where
    P: PermutationProblem + ?Sized,
{
    /// Creates an engine whose RNG is seeded from [`GaConfig::seed`]
    /// (a random seed when `None`).
    pub fn new(problem: &'a P, config: GaConfig) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_rng(problem, config, create_rng(seed))
    }
}

impl<'a, P, R> EvolutionEngine<'a, P, R>
where
    P: PermutationProblem + ?Sized,
    R: Rng,
{
    /// Creates an engine drawing all randomness from `rng`.
    ///
    /// Validates `config` against the problem size and builds the initial
    /// population. [`GaConfig::seed`] is ignored.
    pub fn with_rng(problem: &'a P, config: GaConfig, mut rng: R) -> Result<Self> {
        let n = problem.size();
        config.validate(n)?;

        let routes = initial_population(n, config.population_size, &mut rng);
        let population = evaluate_population(problem, routes, config.parallel);

        debug!(
            "initialized {} routes over {n} cities, initial best {:.2}",
            population.len(),
            find_best(&population).distance
        );

        Ok(Self {
            problem,
            tournament: Tournament::new(config.tournament_size),
            history: Vec::new(),
            config,
            rng,
            population,
            best: None,
            state: EngineState::Initialized,
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// The current generation's population.
    pub fn population(&self) -> &[Candidate] {
        &self.population
    }

    /// Best route produced by any completed generation, `None` before the
    /// first one.
    pub fn best(&self) -> Option<&Candidate> {
        self.best.as_ref()
    }

    pub fn history(&self) -> &[GenerationReport] {
        &self.history
    }

    /// Runs one generation.
    ///
    /// Returns `Ok(None)` once the engine has terminated. An operator
    /// producing a non-permutation aborts the run with
    /// [`TspError::CorruptedPopulation`] and terminates the engine.
    pub fn step(&mut self) -> Result<Option<GenerationReport>> {
        let generation = match self.state {
            EngineState::Initialized => 1,
            EngineState::Evolving { generation } => generation + 1,
            EngineState::Terminated => return Ok(None),
        };
        let size = self.config.population_size;

        // 1. Selection
        let parents = match self.tournament.select(&self.population, size, &mut self.rng) {
            Ok(parents) => parents,
            Err(e) => {
                self.state = EngineState::Terminated;
                return Err(e);
            }
        };

        // 2-3. Pair consecutive parents, recombine, mutate
        let mut children = Vec::with_capacity(size + 1);
        for i in (0..size).step_by(2) {
            let parent1 = &self.population[parents[i]].route;
            let parent2 = &self.population[parents[(i + 1) % size]].route;
            let (mut child1, mut child2) = self.config.crossover.recombine(
                parent1,
                parent2,
                self.config.crossover_rate,
                &mut self.rng,
            );
            swap_mutation(&mut child1, self.config.mutation_rate, &mut self.rng);
            swap_mutation(&mut child2, self.config.mutation_rate, &mut self.rng);
            children.push(child1);
            children.push(child2);
        }

        // 4. Keep population size fixed
        children.truncate(size);
        if let Err(e) = verify_routes(&children, self.problem.size(), generation) {
            error!("aborting run: {e}");
            self.state = EngineState::Terminated;
            return Err(e);
        }

        // 5. Replace
        self.population = evaluate_population(self.problem, children, self.config.parallel);

        // 6. Elite tracking
        let gen_best = find_best(&self.population);
        let best_distance = gen_best.distance;
        let improved = self
            .best
            .as_ref()
            .map_or(true, |best| distance_key(best_distance) < distance_key(best.distance));
        if improved {
            if let Some(previous) = &self.best {
                debug!(
                    "generation {generation}: best ever improved {:.2} -> {best_distance:.2}",
                    previous.distance
                );
            }
            self.best = Some(gen_best.clone());
        }
        let best_ever_distance = self.best.as_ref().map_or(best_distance, |best| best.distance);

        // 7. Report
        let report = GenerationReport {
            generation,
            best_distance,
            best_ever_distance,
        };
        info!("Generation {generation}: Best Distance = {best_distance:.2}");
        self.history.push(report.clone());

        self.state = if generation >= self.config.generations {
            EngineState::Terminated
        } else {
            EngineState::Evolving { generation }
        };
        Ok(Some(report))
    }

    /// Runs all remaining generations.
    pub fn run(self) -> Result<RunResult> {
        self.drive(None, |_| {})
    }

    /// Runs all remaining generations, calling `observer` after each one.
    pub fn run_with<F>(self, observer: F) -> Result<RunResult>
    where
        F: FnMut(&GenerationReport),
    {
        self.drive(None, observer)
    }

    /// Runs with a cancellation token.
    ///
    /// The flag is checked before each generation; once it is `true` the
    /// run stops and returns the best route found so far.
    pub fn run_with_cancel(self, cancel: Arc<AtomicBool>) -> Result<RunResult> {
        self.drive(Some(&cancel), |_| {})
    }

    fn drive<F>(mut self, cancel: Option<&AtomicBool>, mut observer: F) -> Result<RunResult>
    where
        F: FnMut(&GenerationReport),
    {
        let started = Instant::now();
        let deadline = self.config.time_limit_ms.map(Duration::from_millis);
        let mut cancelled = false;
        let mut timed_out = false;

        while self.state != EngineState::Terminated {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                cancelled = true;
                break;
            }
            if deadline.is_some_and(|limit| started.elapsed() >= limit) {
                timed_out = true;
                break;
            }
            if let Some(report) = self.step()? {
                observer(&report);
            }
        }

        let result = self.into_result(cancelled, timed_out);
        info!(
            "Best route found: {} (distance {:.2}) after {} generations",
            result.best_route, result.best_distance, result.generations
        );
        Ok(result)
    }

    /// A run stopped before its first generation reports the best route of
    /// the initial population.
    fn into_result(self, cancelled: bool, timed_out: bool) -> RunResult {
        let best = match self.best {
            Some(best) => best,
            None => find_best(&self.population).clone(),
        };
        RunResult {
            best_route: best.route,
            best_distance: best.distance,
            generations: self.history.len(),
            cancelled,
            timed_out,
            history: self.history,
        }
    }
}

/// Evaluate every route against the problem.
fn evaluate_population<P>(problem: &P, routes: Vec<Route>, parallel: bool) -> Vec<Candidate>
where
    P: PermutationProblem + ?Sized,
{
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            return routes
                .into_par_iter()
                .map(|route| Candidate::evaluate(problem, route))
                .collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    routes
        .into_iter()
        .map(|route| Candidate::evaluate(problem, route))
        .collect()
}

/// Find the candidate with the shortest tour; ties go to the earliest slot.
///
/// A NaN distance ranks after every number.
fn find_best(population: &[Candidate]) -> &Candidate {
    population
        .iter()
        .min_by(|a, b| distance_key(a.distance).total_cmp(&distance_key(b.distance)))
        .expect("population is never empty after validation")
}

/// Sort key for tour lengths: NaN ranks as `+inf`.
fn distance_key(distance: f64) -> f64 {
    if distance.is_nan() {
        f64::INFINITY
    } else {
        distance
    }
}

/// Check that every route is a permutation of `0..n`.
fn verify_routes(routes: &[Route], n: usize, generation: usize) -> Result<()> {
    match routes
        .iter()
        .position(|route| route.len() != n || !route.is_permutation())
    {
        Some(slot) => Err(TspError::CorruptedPopulation { generation, slot }),
        None => Ok(()),
    }
}

// ============================================================================
// Tests
// ============================================================================
