//! Test fixtures for route-optimizer.
//!
//! Provides real Las Vegas / Henderson locations (from OpenStreetMap) and
//! lookup builders.

#![allow(dead_code)]

pub mod las_vegas_locations;

pub use las_vegas_locations::*;
