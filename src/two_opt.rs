//! 2-opt local search.
//!
//! For each pair of tour edges (a, b) = (t[i], t[i+1]) and
//! (c, d) = (t[j], t[j+1]) with i < j, reversing `t[i+1..=j]` changes the
//! length by
//!
//! ```text
//! delta = d(a, c) + d(b, d) - d(a, b) - d(c, d)
//! ```
//!
//! Any delta below `-MIN_GAIN` (1e-9) is applied immediately (first
//! improvement) and passes repeat until one finds nothing. Every accepted move
//! strictly shortens the tour, so the search terminates. The result is a 2-opt
//! local optimum up to that tolerance: a reversal gaining less than 1e-9 may
//! remain.
//!
//! # Complexity
//!
//! O(n²) per pass.

use crate::matrix::DistanceMatrix;

/// Smallest gain accepted as an improvement. Guards against float noise
/// cycling between equal-length tours.
const MIN_GAIN: f64 = 1e-9;

/// Improves `tour` with 2-opt until no improving reversal remains.
///
/// With `closed` unset the tour is a path and only its interior edges are
/// considered. With `closed` set the return edge `t[n-1] -> t[0]` takes part
/// too. The first node never moves, so a closed tour keeps its start.
pub fn two_opt(tour: &[usize], matrix: &DistanceMatrix, closed: bool) -> Vec<usize> {
    let mut current = tour.to_vec();
    let n = current.len();
    if n < 4 {
        return current;
    }

    // Index of the last edge's start node.
    let last_edge = if closed { n - 1 } else { n - 2 };
    let mut improved = true;

    while improved {
        improved = false;

        for i in 0..last_edge {
            for j in (i + 2)..=last_edge {
                if closed && i == 0 && j == n - 1 {
                    // Both edges touch t[0]; reversing only flips direction.
                    continue;
                }
                if reversal_delta(&current, matrix, i, j) < -MIN_GAIN {
                    current[i + 1..=j].reverse();
                    improved = true;
                }
            }
        }
    }

    current
}

/// Length change from reversing `tour[i+1..=j]`. Edge `j` wraps to the
/// first node when `j` is the last position.
fn reversal_delta(tour: &[usize], matrix: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let n = tour.len();
    let (a, b) = (tour[i], tour[i + 1]);
    let (c, d) = (tour[j], tour[(j + 1) % n]);

    let old_cost = matrix.get(a, b) + matrix.get(c, d);
    let new_cost = matrix.get(a, c) + matrix.get(b, d);

    new_cost - old_cost
}
