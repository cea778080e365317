//! Initial population.

use crate::tsp::Route;
use rand::Rng;

/// Generates `population_size` independent, uniformly random routes over
/// `city_count` cities.
///
/// Each route is shuffled from its own buffer.
pub fn initial_population<R: Rng + ?Sized>(
    city_count: usize,
    population_size: usize,
    rng: &mut R,
) -> Vec<Route> {
    (0..population_size)
        .map(|_| Route::random(city_count, rng))
        .collect()
}
