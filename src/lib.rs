//! route-optimizer
//!
//! Shortest closed tours through named locations: an exact solver for
//! small instances, MST-preorder and nearest-neighbor + 2-opt heuristics
//! above that, and a selector that packages the result with distance and
//! travel time.

pub mod error;
pub mod traits;
pub mod matrix;
pub mod haversine;
pub mod mst;
pub mod nearest_neighbor;
pub mod two_opt;
pub mod exact;
pub mod strategy;
pub mod solver;
pub mod summary;
pub mod polyline;
pub mod geocode;
pub mod planner;

pub use error::{GeocodeError, Result, RouteError};
pub use solver::{Algorithm, Heuristic, RouteOptions, RouteResult, optimize_route};
