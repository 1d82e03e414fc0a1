//! Nearest-neighbor constructive heuristic.
//!
//! Starting from a given node, always move to the closest unvisited node.
//! Deterministic for a given (matrix, start): ties go to the lowest index.
//!
//! # Complexity
//!
//! O(n²) per start.

use rayon::prelude::*;

use crate::matrix::DistanceMatrix;
use crate::two_opt::two_opt;

/// Builds an open tour over every node starting at `start`.
///
/// Unreachable nodes (infinite distance) are still appended once nothing
/// closer remains, lowest index first.
pub fn nearest_neighbor_tour(matrix: &DistanceMatrix, start: usize) -> Vec<usize> {
    let n = matrix.size();
    if n == 0 || start >= n {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    visited[start] = true;
    let mut tour = Vec::with_capacity(n);
    tour.push(start);
    let mut current = start;

    for _ in 1..n {
        let mut best: Option<(usize, f64)> = None;
        for i in 0..n {
            if visited[i] {
                continue;
            }
            let d = matrix.get(current, i);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((i, d)),
            }
        }

        let Some((next, _)) = best else { break };
        visited[next] = true;
        tour.push(next);
        current = next;
    }

    tour
}

/// Runs nearest-neighbor from every start, improves each with closed-tour
/// 2-opt and keeps the shortest cycle.
///
/// Starts are evaluated in parallel. On equal length the lowest start index
/// wins, so the result matches a sequential scan.
pub fn best_multi_start(matrix: &DistanceMatrix) -> Vec<usize> {
    let n = matrix.size();
    if n == 0 {
        return Vec::new();
    }

    let candidates: Vec<(usize, f64, Vec<usize>)> = (0..n)
        .into_par_iter()
        .map(|start| {
            let tour = two_opt(&nearest_neighbor_tour(matrix, start), matrix, true);
            let length = matrix.tour_length(&tour, true);
            (start, length, tour)
        })
        .collect();

    let mut best: Option<(usize, f64, Vec<usize>)> = None;
    for candidate in candidates {
        let improves = match &best {
            Some((_, best_length, _)) => candidate.1 < *best_length,
            None => true,
        };
        if improves {
            best = Some(candidate);
        }
    }

    tracing::debug!(
        starts = n,
        best_start = best.as_ref().map(|(start, _, _)| *start),
        "multi-start nearest neighbor finished"
    );

    best.map(|(_, _, tour)| tour).unwrap_or_default()
}
