//! Error types for route optimization and geocoding.

use thiserror::Error;

/// Errors surfaced by the route optimizer.
#[derive(Debug, Error)]
pub enum RouteError {
    /// A requested location has no coordinate in the lookup.
    #[error("missing coordinates for location: {location}")]
    MissingCoordinate { location: String },

    /// Too few locations to build a route.
    #[error("at least two locations are required, got {found}")]
    InsufficientLocations { found: usize },

    /// The geocoding collaborator could not resolve a place.
    #[error("geocoding failed for '{location}': {source}")]
    GeocodingFailed {
        location: String,
        #[source]
        source: GeocodeError,
    },

    /// A summary was requested for an empty route.
    #[error("no optimized route found")]
    NoRouteFound,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, RouteError>;

impl RouteError {
    pub fn missing_coordinate(location: impl Into<String>) -> Self {
        Self::MissingCoordinate {
            location: location.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

/// Failures reported by a [`crate::traits::Geocoder`].
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoding API key required (OPENCAGE_API_KEY)")]
    MissingApiKey,

    #[error("location not found: {0}")]
    NotFound(String),

    #[error("geocoding request failed: {0}")]
    RequestFailed(String),

    #[error("invalid geocoding response for: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        GeocodeError::RequestFailed(err.to_string())
    }
}
