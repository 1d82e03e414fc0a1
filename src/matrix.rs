//! Pairwise distance matrix over an ordered list of coordinates.
//!
//! Nodes are indexed by their position in the input sequence, never by
//! location identifier, so duplicate identifiers are simply distinct nodes.
//! A missing coordinate makes every edge touching that node
//! [`f64::INFINITY`], which downstream code treats as "unreachable".

use std::fmt;
use std::str::FromStr;

use crate::error::RouteError;
use crate::haversine::haversine_km;
use crate::traits::Coordinate;

/// Kilometers per degree used by the planar approximation.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Distance function used to fill the matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DistanceMetric {
    /// Euclidean distance in degree space scaled by [`KM_PER_DEGREE`].
    #[default]
    Planar,
    /// Great-circle distance.
    Haversine,
}

impl DistanceMetric {
    pub fn distance_km(&self, from: Coordinate, to: Coordinate) -> f64 {
        match self {
            DistanceMetric::Planar => planar_km(from, to),
            DistanceMetric::Haversine => haversine_km(from, to),
        }
    }
}

impl FromStr for DistanceMetric {
    type Err = RouteError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "planar" | "euclidean" => Ok(DistanceMetric::Planar),
            "haversine" => Ok(DistanceMetric::Haversine),
            other => Err(RouteError::invalid_config(format!(
                "unknown distance metric '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceMetric::Planar => write!(f, "planar"),
            DistanceMetric::Haversine => write!(f, "haversine"),
        }
    }
}

/// Planar distance in kilometers: `sqrt(dlat² + dlon²) * 111`.
///
/// Not geodesic. Error grows with separation and with latitude.
pub fn planar_km(from: Coordinate, to: Coordinate) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;
    ((lat2 - lat1).powi(2) + (lon2 - lon1).powi(2)).sqrt() * KM_PER_DEGREE
}

/// A dense n×n distance matrix (kilometers) stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Builds the matrix from resolved coordinates using `metric`.
    ///
    /// A `None` entry marks a node without a coordinate; all of its
    /// off-diagonal cells become infinite.
    pub fn from_coordinates(coordinates: &[Option<Coordinate>], metric: DistanceMetric) -> Self {
        let size = coordinates.len();
        let mut data = vec![0.0; size * size];

        for i in 0..size {
            for j in (i + 1)..size {
                let d = match (coordinates[i], coordinates[j]) {
                    (Some(from), Some(to)) => metric.distance_km(from, to),
                    _ => f64::INFINITY,
                };
                data[i * size + j] = d;
                data[j * size + i] = d;
            }
        }

        Self { data, size }
    }

    /// Creates a matrix from explicit rows.
    ///
    /// Returns `None` unless every row has exactly `rows.len()` entries.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        Some(Self {
            data: rows.into_iter().flatten().collect(),
            size,
        })
    }

    /// Distance from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Sum of consecutive edge distances along `tour`.
    ///
    /// When `closed` is set the edge from the last node back to the first is
    /// included. Any unreachable edge makes the result infinite.
    pub fn tour_length(&self, tour: &[usize], closed: bool) -> f64 {
        self.edges(tour, closed).sum()
    }

    /// Like [`Self::tour_length`] but skips unreachable edges, giving a
    /// best-effort length over the reachable legs.
    pub fn reachable_length(&self, tour: &[usize], closed: bool) -> f64 {
        self.edges(tour, closed).filter(|d| d.is_finite()).sum()
    }

    fn edges<'a>(&'a self, tour: &'a [usize], closed: bool) -> impl Iterator<Item = f64> + 'a {
        let closing = match (closed, tour.first(), tour.last()) {
            (true, Some(&first), Some(&last)) if tour.len() > 1 => Some(self.get(last, first)),
            _ => None,
        };
        tour.windows(2)
            .map(|pair| self.get(pair[0], pair[1]))
            .chain(closing)
    }
}
