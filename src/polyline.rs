//! Ordered route coordinates.
//!
//! Matches the visiting order of a route, closing point included, so a
//! frontend can draw the tour directly. Serializes as a plain list of
//! `[lat, lon]` pairs.

use serde::{Deserialize, Serialize};

use crate::traits::Coordinate;

/// A polyline representing a route geometry as (latitude, longitude) points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Builds the polyline for a tour of node indices into `coordinates`.
    ///
    /// # Panics
    ///
    /// Panics if the tour references a node outside `coordinates`.
    pub fn from_tour(tour: &[usize], coordinates: &[Coordinate]) -> Self {
        Self {
            points: tour.iter().map(|&node| coordinates[node]).collect(),
        }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
