//! OpenCage HTTP adapter for geocoding place names.

use std::env;

use serde::Deserialize;

use crate::error::GeocodeError;
use crate::traits::{Coordinate, Geocoder};

#[derive(Debug, Clone)]
pub struct OpenCageConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for OpenCageConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.opencagedata.com".to_string(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}

impl OpenCageConfig {
    /// Defaults with the API key taken from `OPENCAGE_API_KEY`.
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Same as [`OpenCageConfig::from_env`], reading variables through `var`.
    /// A blank key counts as unset.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_key: var("OPENCAGE_API_KEY").filter(|key| !key.trim().is_empty()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct OpenCageClient {
    config: OpenCageConfig,
    client: reqwest::blocking::Client,
}

impl OpenCageClient {
    pub fn new(config: OpenCageConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl Geocoder for OpenCageClient {
    fn geocode(&self, place: &str) -> Result<Coordinate, GeocodeError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GeocodeError::MissingApiKey)?;

        let url = format!("{}/geocode/v1/json", self.config.base_url.trim_end_matches('/'));

        let body = self
            .client
            .get(url)
            .query(&[("q", place), ("key", key), ("limit", "1")])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OpenCageResponse>())
            .map_err(|err| {
                tracing::warn!(place, error = %err, "geocoding request failed");
                GeocodeError::from(err)
            })?;

        coordinate_from(body, place)
    }
}

fn coordinate_from(body: OpenCageResponse, place: &str) -> Result<Coordinate, GeocodeError> {
    let first = body
        .results
        .into_iter()
        .next()
        .ok_or_else(|| GeocodeError::NotFound(place.to_string()))?;

    match first.geometry {
        Some(OpenCageGeometry {
            lat: Some(lat),
            lng: Some(lng),
        }) => Ok((lat, lng)),
        _ => Err(GeocodeError::InvalidResponse(place.to_string())),
    }
}

#[derive(Debug, Deserialize)]
struct OpenCageResponse {
    #[serde(default)]
    results: Vec<OpenCageResult>,
}

#[derive(Debug, Deserialize)]
struct OpenCageResult {
    geometry: Option<OpenCageGeometry>,
}

#[derive(Debug, Deserialize)]
struct OpenCageGeometry {
    lat: Option<f64>,
    lng: Option<f64>,
}
