//! Brute-force exact solver.
//!
//! Node 0 is fixed as the start, which removes rotational duplicates, and
//! every ordering of the remaining nodes is scored as a closed tour.
//! O((n-1)!) so callers must keep n small; the selector only routes
//! instances at or below its exact threshold here.

use rayon::prelude::*;

use crate::matrix::DistanceMatrix;

/// Returns the shortest closed tour as an open visiting order starting at 0.
///
/// Candidates crossing an unreachable edge are discarded. Returns `None`
/// when every candidate is unreachable. On equal length the
/// lexicographically first ordering wins.
pub fn exact_tour(matrix: &DistanceMatrix) -> Option<Vec<usize>> {
    let n = matrix.size();
    if n <= 2 {
        return Some((0..n).collect());
    }

    // One branch per second node. Branches are disjoint and in
    // lexicographic order, so the reduction below stays deterministic.
    let branches: Vec<Option<(f64, Vec<usize>)>> = (1..n)
        .into_par_iter()
        .map(|second| best_in_branch(matrix, second))
        .collect();

    let mut best: Option<(f64, Vec<usize>)> = None;
    for (length, tour) in branches.into_iter().flatten() {
        let improves = match &best {
            Some((best_length, _)) => length < *best_length,
            None => true,
        };
        if improves {
            best = Some((length, tour));
        }
    }

    best.map(|(_, tour)| tour)
}

fn best_in_branch(matrix: &DistanceMatrix, second: usize) -> Option<(f64, Vec<usize>)> {
    let n = matrix.size();
    let mut rest: Vec<usize> = (1..n).filter(|&node| node != second).collect();
    let mut candidate = Vec::with_capacity(n);
    let mut best: Option<(f64, Vec<usize>)> = None;

    loop {
        candidate.clear();
        candidate.push(0);
        candidate.push(second);
        candidate.extend_from_slice(&rest);

        let length = matrix.tour_length(&candidate, true);
        if length.is_finite() {
            let improves = match &best {
                Some((best_length, _)) => length < *best_length,
                None => true,
            };
            if improves {
                best = Some((length, candidate.clone()));
            }
        }

        if !next_permutation(&mut rest) {
            break;
        }
    }

    best
}

/// Advances `items` to the next lexicographic permutation.
///
/// Returns `false` (leaving `items` in the last ordering) when there is none.
fn next_permutation(items: &mut [usize]) -> bool {
    if items.len() < 2 {
        return false;
    }

    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    let mut j = items.len() - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}
