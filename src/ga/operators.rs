//! Permutation-preserving genetic operators.
//!
//! Crossover and mutation operators for routes. Every operator maps valid
//! permutations to valid permutations.
//!
//! # Crossover Operators
//!
//! - [`order_crossover`] (OX): Davis (1985) — one child per call, own cut points
//! - [`pmx_crossover`] (PMX): Goldberg & Lingle (1985) — two children sharing
//!   one pair of cut points, gated by the crossover rate
//!
//! Both copy the slice `[start, end]` of one parent verbatim and fill the
//! remaining positions, left to right, with the other parent's cities in
//! that parent's order, skipping cities already placed. The copied slice
//! holds `end - start + 1` cities and exactly the other `n - (end - start + 1)`
//! are missing, so a single forward pass over the donor fills every gap.
//!
//! # Mutation Operators
//!
//! - [`swap_mutation`]: with probability `rate`, exchange two distinct positions
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"

use super::config::CrossoverKind;
use crate::random::distinct_pair;
use crate::tsp::Route;
use rand::Rng;

/// Marks a child position that has not been filled yet.
const EMPTY: usize = usize::MAX;

// ============================================================================
// Crossover operators
// ============================================================================

/// Ordered Crossover (OX): one child from `parent1`'s slice and `parent2`'s order.
///
/// Cut points are two distinct positions drawn uniformly from `0..n`.
/// Call again with the parents swapped for a second child.
///
/// Routes with fewer than two cities are returned as a clone of `parent1`.
pub fn order_crossover<R: Rng + ?Sized>(parent1: &Route, parent2: &Route, rng: &mut R) -> Route {
    let Ok((start, end)) = distinct_pair(rng, parent1.len()) else {
        return parent1.clone();
    };
    Route::from_vec_unchecked(order_crossover_with_cuts(
        parent1.as_slice(),
        parent2.as_slice(),
        start,
        end,
    ))
}

/// OX with explicit cut points: copies `template[start..=end]` in place and
/// fills the rest from `donor`.
///
/// # Panics
/// Panics if the parents differ in length or `start > end` or `end >= n`.
pub fn order_crossover_with_cuts(
    template: &[usize],
    donor: &[usize],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let n = template.len();
    assert_eq!(n, donor.len(), "parents must have equal length");
    assert!(start <= end && end < n, "cut points out of range");

    let mut child = vec![EMPTY; n];
    let mut present = vec![false; n];

    for i in start..=end {
        child[i] = template[i];
        if let Some(p) = present.get_mut(template[i]) {
            *p = true;
        }
    }
    fill_from_donor(&mut child, &mut present, donor);
    child
}

/// Partially Matched Crossover (PMX).
///
/// With probability `crossover_rate`, picks one pair of distinct cut points,
/// copies `parent1`'s slice into child 1 and `parent2`'s slice into child 2
/// at the same positions, then fills child 1 from `parent2`'s order and
/// child 2 from `parent1`'s order. Otherwise the parents are returned
/// unchanged.
pub fn pmx_crossover<R: Rng + ?Sized>(
    parent1: &Route,
    parent2: &Route,
    crossover_rate: f64,
    rng: &mut R,
) -> (Route, Route) {
    if rng.random::<f64>() >= crossover_rate {
        return (parent1.clone(), parent2.clone());
    }
    let Ok((start, end)) = distinct_pair(rng, parent1.len()) else {
        return (parent1.clone(), parent2.clone());
    };
    let (c1, c2) = pmx_crossover_with_cuts(parent1.as_slice(), parent2.as_slice(), start, end);
    (Route::from_vec_unchecked(c1), Route::from_vec_unchecked(c2))
}

/// PMX with explicit cut points.
///
/// # Panics
/// Panics if the parents differ in length or `start > end` or `end >= n`.
pub fn pmx_crossover_with_cuts(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> (Vec<usize>, Vec<usize>) {
    (
        order_crossover_with_cuts(parent1, parent2, start, end),
        order_crossover_with_cuts(parent2, parent1, start, end),
    )
}

/// Fills every [`EMPTY`] slot of `child`, left to right, with the next city
/// of `donor` not yet marked in `present`.
///
/// The donor is walked once. If it runs out early (only possible when a
/// parent is not a permutation) the remaining slots stay [`EMPTY`], which
/// the engine's permutation check reports.
fn fill_from_donor(child: &mut [usize], present: &mut [bool], donor: &[usize]) {
    let mut genes = donor.iter().copied();
    for slot in child.iter_mut().filter(|slot| **slot == EMPTY) {
        let Some(gene) = genes.find(|&g| present.get(g).is_some_and(|&p| !p)) else {
            return;
        };
        present[gene] = true;
        *slot = gene;
    }
}

impl CrossoverKind {
    /// Produces two children from a parent pair.
    ///
    /// [`Ordered`](CrossoverKind::Ordered) runs OX twice with the parents
    /// swapped; [`PartiallyMatched`](CrossoverKind::PartiallyMatched) runs
    /// one rate-gated PMX.
    pub fn recombine<R: Rng + ?Sized>(
        self,
        parent1: &Route,
        parent2: &Route,
        crossover_rate: f64,
        rng: &mut R,
    ) -> (Route, Route) {
        match self {
            CrossoverKind::Ordered => {
                let child1 = order_crossover(parent1, parent2, rng);
                let child2 = order_crossover(parent2, parent1, rng);
                (child1, child2)
            }
            CrossoverKind::PartiallyMatched => pmx_crossover(parent1, parent2, crossover_rate, rng),
        }
    }
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Swap mutation: with probability `rate`, exchange the cities at two
/// distinct random positions.
///
/// Returns whether the route was changed. A failed roll leaves the route
/// untouched; routes with fewer than two cities are never changed.
pub fn swap_mutation<R: Rng + ?Sized>(route: &mut Route, rate: f64, rng: &mut R) -> bool {
    if rng.random::<f64>() >= rate {
        return false;
    }
    let Ok((i, j)) = distinct_pair(rng, route.len()) else {
        return false;
    };
    route.as_mut_slice().swap(i, j);
    true
}

// ============================================================================
// Tests
// ============================================================================
