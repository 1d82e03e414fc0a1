//! Geocode-then-solve orchestration.
//!
//! Known coordinates are used as given; every other place name is resolved
//! through the [`Geocoder`] before the selector runs.

use std::collections::HashMap;

use crate::error::{Result, RouteError};
use crate::solver::{RouteOptions, RouteResult, optimize_route};
use crate::traits::{Coordinate, Geocoder};

#[derive(Debug, Clone)]
pub struct RoutePlanner<G> {
    geocoder: G,
    options: RouteOptions,
}

impl<G: Geocoder> RoutePlanner<G> {
    pub fn new(geocoder: G, options: RouteOptions) -> Self {
        Self { geocoder, options }
    }

    /// Plans a closed route through `place_names`.
    ///
    /// Requires at least two names. Places missing from `known` are geocoded
    /// in input order; the first failure aborts the plan.
    pub fn plan<S: AsRef<str>>(
        &self,
        place_names: &[S],
        known: Option<&HashMap<String, Coordinate>>,
    ) -> Result<RouteResult> {
        if place_names.len() < 2 {
            return Err(RouteError::InsufficientLocations {
                found: place_names.len(),
            });
        }

        let coordinates = self.resolve(place_names, known)?;
        optimize_route(place_names, &coordinates, &self.options)
    }

    /// Builds a complete lookup for `place_names`, geocoding the gaps.
    pub fn resolve<S: AsRef<str>>(
        &self,
        place_names: &[S],
        known: Option<&HashMap<String, Coordinate>>,
    ) -> Result<HashMap<String, Coordinate>> {
        let mut coordinates = known.cloned().unwrap_or_default();

        for place in place_names {
            let place = place.as_ref();
            if coordinates.contains_key(place) {
                continue;
            }
            tracing::debug!(place, "geocoding");
            let coordinate = self
                .geocoder
                .geocode(place)
                .map_err(|source| RouteError::GeocodingFailed {
                    location: place.to_string(),
                    source,
                })?;
            coordinates.insert(place.to_string(), coordinate);
        }

        Ok(coordinates)
    }
}
