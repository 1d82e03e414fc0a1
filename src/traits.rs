//! Core seams for the route optimizer.
//!
//! These are intentionally small. Callers provide coordinates through a
//! [`CoordinateLookup`], place names are resolved through a [`Geocoder`],
//! and every solving approach is a [`TourStrategy`].

use std::collections::HashMap;

use crate::error::GeocodeError;
use crate::matrix::DistanceMatrix;
use crate::solver::Algorithm;

/// A (latitude, longitude) pair in decimal degrees.
pub type Coordinate = (f64, f64);

/// Resolves a location identifier to its coordinate.
pub trait CoordinateLookup {
    fn coordinate_for(&self, location: &str) -> Option<Coordinate>;
}

impl CoordinateLookup for HashMap<String, Coordinate> {
    fn coordinate_for(&self, location: &str) -> Option<Coordinate> {
        self.get(location).copied()
    }
}

impl CoordinateLookup for HashMap<&str, Coordinate> {
    fn coordinate_for(&self, location: &str) -> Option<Coordinate> {
        self.get(location).copied()
    }
}

/// Turns a free-form place name into a coordinate.
pub trait Geocoder {
    fn geocode(&self, place: &str) -> Result<Coordinate, GeocodeError>;
}

/// Produces a visiting order over every node of a distance matrix.
///
/// The returned tour is open: each index appears exactly once and the
/// return leg to the first node is implied.
pub trait TourStrategy {
    fn algorithm(&self) -> Algorithm;

    fn build_tour(&self, matrix: &DistanceMatrix) -> Vec<usize>;
}
