//! Route selector: picks a solving strategy by instance size and packages
//! the chosen tour into a [`RouteResult`].

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::matrix::{DistanceMatrix, DistanceMetric};
use crate::polyline::Polyline;
use crate::strategy::{ExactSearch, GreedyNearestNeighbor, MstPreorder, NearestNeighborTwoOpt};
use crate::traits::{Coordinate, CoordinateLookup, TourStrategy};

/// Average urban travel speed assumption.
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 25.0;

/// Largest instance handed to the exact solver.
pub const DEFAULT_EXACT_THRESHOLD: usize = 8;

/// Upper bound on `exact_threshold`; enumeration is `(n - 1)!` tours.
pub const MAX_EXACT_THRESHOLD: usize = 10;

/// Which heuristic runs above the exact threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// Preorder walk of a minimum spanning tree.
    MstPreorder,
    /// Multi-start nearest neighbor, each start improved by 2-opt.
    #[default]
    NearestNeighborTwoOpt,
    /// One greedy nearest-neighbor pass from the first location.
    NearestNeighbor,
    /// Run MST preorder and nearest neighbor + 2-opt, keep the shorter.
    Best,
}

impl FromStr for Heuristic {
    type Err = RouteError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "mst" | "mst_preorder" => Ok(Heuristic::MstPreorder),
            "optimized" | "nearest_neighbor_two_opt" | "nn_two_opt" => {
                Ok(Heuristic::NearestNeighborTwoOpt)
            }
            "basic" | "nearest_neighbor" | "nn" => Ok(Heuristic::NearestNeighbor),
            "best" => Ok(Heuristic::Best),
            other => Err(RouteError::invalid_config(format!("unknown heuristic '{}'", other))),
        }
    }
}

/// The algorithm that produced a [`RouteResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Zero or one location, nothing to solve.
    Trivial,
    BruteForce,
    MstPreorder,
    NearestNeighborTwoOpt,
    NearestNeighbor,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Trivial => "trivial",
            Algorithm::BruteForce => "brute_force",
            Algorithm::MstPreorder => "mst_preorder",
            Algorithm::NearestNeighborTwoOpt => "nearest_neighbor_two_opt",
            Algorithm::NearestNeighbor => "nearest_neighbor",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteOptions {
    /// Average travel speed used for time estimates (km/h).
    pub average_speed_kmh: f64,
    /// Instances with at most this many locations are solved exactly.
    pub exact_threshold: usize,
    /// Heuristic used above the exact threshold.
    pub heuristic: Heuristic,
    /// Distance function for the matrix.
    pub metric: DistanceMetric,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
            exact_threshold: DEFAULT_EXACT_THRESHOLD,
            heuristic: Heuristic::default(),
            metric: DistanceMetric::default(),
        }
    }
}

impl RouteOptions {
    /// Defaults overridden by `ROUTE_AVG_SPEED_KMH`, `ROUTE_EXACT_THRESHOLD`,
    /// `ROUTE_HEURISTIC` and `ROUTE_DISTANCE_METRIC` when set.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Same as [`RouteOptions::from_env`], reading variables through `var`.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(value) = var("ROUTE_AVG_SPEED_KMH") {
            options.average_speed_kmh = value.trim().parse().map_err(|_| {
                RouteError::invalid_config(format!(
                    "ROUTE_AVG_SPEED_KMH is not a number: '{}'",
                    value
                ))
            })?;
        }
        if let Some(value) = var("ROUTE_EXACT_THRESHOLD") {
            options.exact_threshold = value.trim().parse().map_err(|_| {
                RouteError::invalid_config(format!(
                    "ROUTE_EXACT_THRESHOLD is not a count: '{}'",
                    value
                ))
            })?;
        }
        if let Some(value) = var("ROUTE_HEURISTIC") {
            options.heuristic = value.parse()?;
        }
        if let Some(value) = var("ROUTE_DISTANCE_METRIC") {
            options.metric = value.parse()?;
        }

        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.average_speed_kmh.is_finite() || self.average_speed_kmh <= 0.0 {
            return Err(RouteError::invalid_config(format!(
                "average speed must be positive, got {}",
                self.average_speed_kmh
            )));
        }
        if self.exact_threshold > MAX_EXACT_THRESHOLD {
            return Err(RouteError::invalid_config(format!(
                "exact threshold must be at most {}, got {}",
                MAX_EXACT_THRESHOLD, self.exact_threshold
            )));
        }
        Ok(())
    }

    /// Travel time in minutes for `distance_km` at the configured speed.
    pub fn minutes_for(&self, distance_km: f64) -> f64 {
        if distance_km <= 0.0 {
            return 0.0;
        }
        distance_km / self.average_speed_kmh * 60.0
    }
}

/// The single output shape of the optimizer.
///
/// For two or more locations the path is closed: it starts and ends at the
/// first requested location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub optimized_path: Vec<String>,
    /// Total distance in kilometers.
    pub total_distance_km: f64,
    /// Estimated travel time in minutes.
    pub estimated_time_min: f64,
    pub route_coordinates: Polyline,
    pub algorithm: Algorithm,
}

/// Computes the shortest closed tour the configured strategies can find.
///
/// Every location must resolve through `lookup`. Positions in `locations`
/// are distinct nodes even when identifiers repeat.
pub fn optimize_route<S, L>(
    locations: &[S],
    lookup: &L,
    options: &RouteOptions,
) -> Result<RouteResult>
where
    S: AsRef<str>,
    L: CoordinateLookup + ?Sized,
{
    options.validate()?;
    if locations.is_empty() {
        return Err(RouteError::InsufficientLocations { found: 0 });
    }

    let coordinates = resolve_all(locations, lookup)?;
    let n = locations.len();

    if n == 1 {
        return Ok(RouteResult {
            optimized_path: vec![locations[0].as_ref().to_string()],
            total_distance_km: 0.0,
            estimated_time_min: 0.0,
            route_coordinates: Polyline::new(coordinates),
            algorithm: Algorithm::Trivial,
        });
    }

    let resolved: Vec<Option<Coordinate>> = coordinates.iter().copied().map(Some).collect();
    let matrix = DistanceMatrix::from_coordinates(&resolved, options.metric);

    let (algorithm, tour) = select_tour(&matrix, options);
    let tour = rotate_to_start(tour);
    assert_closed_tour(&tour, n);

    let total_distance_km = matrix.reachable_length(&tour, true);
    let estimated_time_min = options.minutes_for(total_distance_km);

    tracing::info!(
        locations = n,
        %algorithm,
        metric = %options.metric,
        distance_km = total_distance_km,
        time_min = estimated_time_min,
        "route optimized"
    );

    let mut closed = tour;
    closed.push(closed[0]);

    Ok(RouteResult {
        optimized_path: closed
            .iter()
            .map(|&node| locations[node].as_ref().to_string())
            .collect(),
        total_distance_km,
        estimated_time_min,
        route_coordinates: Polyline::from_tour(&closed, &coordinates),
        algorithm,
    })
}

fn resolve_all<S, L>(locations: &[S], lookup: &L) -> Result<Vec<Coordinate>>
where
    S: AsRef<str>,
    L: CoordinateLookup + ?Sized,
{
    locations
        .iter()
        .map(|location| {
            let location = location.as_ref();
            lookup
                .coordinate_for(location)
                .ok_or_else(|| RouteError::missing_coordinate(location))
        })
        .collect()
}

/// Dispatches on instance size and returns the open tour together with the
/// algorithm that produced it.
fn select_tour(matrix: &DistanceMatrix, options: &RouteOptions) -> (Algorithm, Vec<usize>) {
    let n = matrix.size();
    if n <= options.exact_threshold {
        tracing::debug!(nodes = n, threshold = options.exact_threshold, "solving exactly");
        return run(&ExactSearch, matrix);
    }

    tracing::debug!(nodes = n, heuristic = ?options.heuristic, "solving heuristically");
    match options.heuristic {
        Heuristic::MstPreorder => run(&MstPreorder, matrix),
        Heuristic::NearestNeighborTwoOpt => run(&NearestNeighborTwoOpt, matrix),
        Heuristic::NearestNeighbor => run(&GreedyNearestNeighbor, matrix),
        Heuristic::Best => {
            let mst = run(&MstPreorder, matrix);
            let nn = run(&NearestNeighborTwoOpt, matrix);
            let mst_length = matrix.tour_length(&mst.1, true);
            let nn_length = matrix.tour_length(&nn.1, true);
            tracing::debug!(mst_km = mst_length, nn_km = nn_length, "compared heuristics");
            if nn_length < mst_length { nn } else { mst }
        }
    }
}

fn run(strategy: &dyn TourStrategy, matrix: &DistanceMatrix) -> (Algorithm, Vec<usize>) {
    (strategy.algorithm(), strategy.build_tour(matrix))
}

/// Rotates a cyclic tour so it begins at node 0. Cost is rotation invariant.
fn rotate_to_start(mut tour: Vec<usize>) -> Vec<usize> {
    if let Some(position) = tour.iter().position(|&node| node == 0) {
        tour.rotate_left(position);
    }
    tour
}

/// Every strategy must return each node exactly once, starting at node 0.
/// Anything else is a bug in the strategy, not a recoverable condition.
fn assert_closed_tour(tour: &[usize], n: usize) {
    let mut seen = vec![false; n];
    let well_formed = tour.len() == n
        && tour.first() == Some(&0)
        && tour.iter().all(|&node| node < n && !std::mem::replace(&mut seen[node], true));
    assert!(well_formed, "unexpected result shape from solver: {:?}", tour);
}
