//! Named tour strategies behind [`TourStrategy`].

use crate::exact::exact_tour;
use crate::matrix::DistanceMatrix;
use crate::mst::{preorder_tour, prim_mst};
use crate::nearest_neighbor::{best_multi_start, nearest_neighbor_tour};
use crate::solver::Algorithm;
use crate::traits::TourStrategy;

/// Exhaustive search over all orderings. Optimal, factorial time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactSearch;

impl TourStrategy for ExactSearch {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BruteForce
    }

    fn build_tour(&self, matrix: &DistanceMatrix) -> Vec<usize> {
        exact_tour(matrix).unwrap_or_else(|| {
            tracing::warn!(nodes = matrix.size(), "no finite tour exists, keeping input order");
            (0..matrix.size()).collect()
        })
    }
}

/// Preorder walk of a Prim minimum spanning tree rooted at node 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct MstPreorder;

impl TourStrategy for MstPreorder {
    fn algorithm(&self) -> Algorithm {
        Algorithm::MstPreorder
    }

    fn build_tour(&self, matrix: &DistanceMatrix) -> Vec<usize> {
        let mut tour = preorder_tour(&prim_mst(matrix));
        // Drop the repeated root; the selector closes the cycle.
        tour.pop();
        tour
    }
}

/// Nearest neighbor from every start, each improved by 2-opt.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighborTwoOpt;

impl TourStrategy for NearestNeighborTwoOpt {
    fn algorithm(&self) -> Algorithm {
        Algorithm::NearestNeighborTwoOpt
    }

    fn build_tour(&self, matrix: &DistanceMatrix) -> Vec<usize> {
        best_multi_start(matrix)
    }
}

/// A single greedy nearest-neighbor pass from the first location.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyNearestNeighbor;

impl TourStrategy for GreedyNearestNeighbor {
    fn algorithm(&self) -> Algorithm {
        Algorithm::NearestNeighbor
    }

    fn build_tour(&self, matrix: &DistanceMatrix) -> Vec<usize> {
        nearest_neighbor_tour(matrix, 0)
    }
}
