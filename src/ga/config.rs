//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.
//! The city count is not part of the config; it comes from the problem
//! and is checked by [`GaConfig::validate`].

use crate::error::{Result, TspError};

/// Recombination operator used to produce children.
///
/// Both operators copy a slice from one parent and fill the remaining
/// positions from the other parent's relative order, so children are
/// always valid permutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossoverKind {
    /// Ordered Crossover (OX). Always recombines; each child draws its own
    /// cut points. Ignores [`GaConfig::crossover_rate`].
    #[default]
    Ordered,

    /// Partially Matched Crossover (PMX). With probability
    /// [`GaConfig::crossover_rate`] both children share one pair of cut
    /// points; otherwise the parents are returned unchanged.
    PartiallyMatched,
}

/// Configuration for the evolutionary run.
///
/// # Defaults
///
/// ```
/// use u_tsp::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 500);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp::ga::{CrossoverKind, GaConfig};
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_generations(200)
///     .with_crossover(CrossoverKind::PartiallyMatched)
///     .with_crossover_rate(0.8)
///     .with_mutation_rate(0.05)
///     .with_seed(7);
/// assert!(config.validate(10).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of routes in the population. Must be even and at least 2 so
    /// that consecutive parent pairs cover it exactly.
    pub population_size: usize,

    /// Number of generations to run. The engine always runs exactly this
    /// many unless cancelled or timed out.
    pub generations: usize,

    /// Probability that a child undergoes a swap mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Recombination operator.
    pub crossover: CrossoverKind,

    /// Probability of recombining a parent pair (0.0–1.0).
    ///
    /// Only consulted by [`CrossoverKind::PartiallyMatched`].
    pub crossover_rate: f64,

    /// Number of distinct individuals competing in each tournament.
    ///
    /// Higher `k` = stronger selection pressure. Must not exceed
    /// `population_size`.
    pub tournament_size: usize,

    /// Whether to evaluate routes in parallel.
    ///
    /// Only effective with the `parallel` feature. Results are identical
    /// either way because evaluation draws no random numbers.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked at the start of each generation, so the actual runtime may
    /// exceed it by one generation's worth of work.
    pub time_limit_ms: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 500,
            mutation_rate: 0.1,
            crossover: CrossoverKind::Ordered,
            crossover_rate: 0.8,
            tournament_size: 3,
            parallel: false,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate. Out-of-range values are rejected by
    /// [`validate`](Self::validate), not clamped.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the crossover operator.
    pub fn with_crossover(mut self, kind: CrossoverKind) -> Self {
        self.crossover = kind;
        self
    }

    /// Sets the crossover rate. Out-of-range values are rejected by
    /// [`validate`](Self::validate), not clamped.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// The classic OX setup: 6 routes, 100 generations, mutation 0.1,
    /// tournaments of 3.
    pub fn classic() -> Self {
        Self {
            population_size: 6,
            generations: 100,
            mutation_rate: 0.1,
            crossover: CrossoverKind::Ordered,
            tournament_size: 3,
            ..Self::default()
        }
    }

    /// The classic PMX setup: 10 routes, 50 generations, mutation 0.1,
    /// crossover 0.8, tournaments of 3.
    pub fn classic_pmx() -> Self {
        Self {
            population_size: 10,
            generations: 50,
            mutation_rate: 0.1,
            crossover: CrossoverKind::PartiallyMatched,
            crossover_rate: 0.8,
            tournament_size: 3,
            ..Self::default()
        }
    }

    /// Validates the configuration against a problem of `city_count` cities.
    ///
    /// Returns [`TspError::InvalidConfig`] for out-of-range parameters and
    /// [`TspError::Sampling`] when tournaments or cut points would need more
    /// distinct items than exist.
    pub fn validate(&self, city_count: usize) -> Result<()> {
        if city_count < 2 {
            return Err(TspError::Sampling {
                requested: 2,
                available: city_count,
            });
        }
        if self.population_size < 2 {
            return Err(invalid("population_size must be at least 2"));
        }
        if self.population_size % 2 != 0 {
            return Err(invalid(format!(
                "population_size must be even, got {}",
                self.population_size
            )));
        }
        if self.generations == 0 {
            return Err(invalid("generations must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(invalid(format!(
                "crossover_rate must be in [0, 1], got {}",
                self.crossover_rate
            )));
        }
        if self.tournament_size == 0 {
            return Err(invalid("tournament_size must be at least 1"));
        }
        if self.tournament_size > self.population_size {
            return Err(TspError::Sampling {
                requested: self.tournament_size,
                available: self.population_size,
            });
        }
        if self.time_limit_ms == Some(0) {
            return Err(invalid("time_limit_ms must be positive or None"));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> TspError {
    TspError::InvalidConfig(msg.into())
}
