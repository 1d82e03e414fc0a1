//! Human-readable summaries of a computed route.

use serde::Serialize;

use crate::error::{Result, RouteError};
use crate::polyline::Polyline;
use crate::solver::{Algorithm, RouteResult};

/// Response-ready summary of a [`RouteResult`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub optimized_path: Vec<String>,
    /// Kilometers, two decimals.
    pub total_distance: f64,
    /// Minutes, two decimals.
    pub estimated_time: f64,
    pub formatted_time: String,
    pub summary_message: String,
    pub route_coordinates: Polyline,
    pub algorithm: Algorithm,
}

impl RouteSummary {
    /// Fails with [`RouteError::NoRouteFound`] when the route is empty.
    pub fn from_result(result: &RouteResult) -> Result<Self> {
        if result.optimized_path.is_empty() {
            return Err(RouteError::NoRouteFound);
        }

        let total_distance = round2(result.total_distance_km);
        let formatted_time = format_duration(result.estimated_time_min);
        let summary_message = format!(
            "Optimized route covers {:.2} km and will take approximately {}.",
            total_distance, formatted_time
        );

        Ok(Self {
            optimized_path: result.optimized_path.clone(),
            total_distance,
            estimated_time: round2(result.estimated_time_min),
            formatted_time,
            summary_message,
            route_coordinates: result.route_coordinates.clone(),
            algorithm: result.algorithm,
        })
    }
}

/// Uniform error body for callers that report failures alongside summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorSummary {
    pub error: String,
}

impl ErrorSummary {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl From<&RouteError> for ErrorSummary {
    fn from(err: &RouteError) -> Self {
        Self::new(err.to_string())
    }
}

/// Formats minutes as `"N min"` below an hour, otherwise `"X hr Y min"`
/// (or `"X hr"` on the hour).
///
/// Under an hour the value is rounded half-to-even; from an hour up the
/// minute part is truncated.
pub fn format_duration(minutes: f64) -> String {
    let whole = if minutes < 60.0 {
        minutes.round_ties_even() as i64
    } else {
        minutes.floor() as i64
    };
    if whole < 60 {
        return format!("{} min", whole);
    }
    let hours = whole / 60;
    let mins = whole % 60;
    if mins == 0 {
        format!("{} hr", hours)
    } else {
        format!("{} hr {} min", hours, mins)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
