//! Exhaustive reference solver for small instances.
//!
//! Enumerates every tour with city 0 fixed in front, i.e. `(n - 1)!`
//! candidates. Intended for validating the GA on toy matrices.

use super::fitness::tour_length;
use super::matrix::DistanceMatrix;
use super::route::Route;
use crate::error::{Result, TspError};

/// Largest instance [`solve_exact`] accepts (9! = 362 880 tours).
pub const MAX_EXACT_CITIES: usize = 10;

/// Returns an optimal tour and its length.
///
/// Ties resolve to the first tour in lexicographic order of the tail.
pub fn solve_exact(matrix: &DistanceMatrix) -> Result<(Route, f64)> {
    let n = matrix.size();
    if n > MAX_EXACT_CITIES {
        return Err(TspError::InvalidConfig(format!(
            "exhaustive search supports at most {MAX_EXACT_CITIES} cities, got {n}"
        )));
    }

    let mut current: Vec<usize> = (0..n).collect();
    let mut best = current.clone();
    let mut best_len = tour_length(matrix, &current);

    if n > 2 {
        while next_permutation(&mut current[1..]) {
            let len = tour_length(matrix, &current);
            if len < best_len {
                best_len = len;
                best.copy_from_slice(&current);
            }
        }
    }

    Ok((Route::from_vec_unchecked(best), best_len))
}

/// Advances `seq` to its next lexicographic permutation.
///
/// Returns `false` (leaving `seq` sorted descending) once the last
/// permutation has been reached.
fn next_permutation(seq: &mut [usize]) -> bool {
    let n = seq.len();
    if n < 2 {
        return false;
    }
    let mut i = n - 1;
    while i > 0 && seq[i - 1] >= seq[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = n - 1;
    while seq[j] <= seq[i - 1] {
        j -= 1;
    }
    seq.swap(i - 1, j);
    seq[i..].reverse();
    true
}
