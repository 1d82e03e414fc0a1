//! Real Las Vegas / Henderson locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap via Overpass API.

use std::collections::HashMap;

/// A named location with coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Major Casinos / Hotels
// ============================================================================

pub const CASINOS: &[Location] = &[
    Location::new("Wynn Las Vegas", 36.1263781, -115.1658180),
    Location::new("Encore at Wynn", 36.1289345, -115.1653620),
    Location::new("MGM Grand", 36.1023654, -115.1688720),
    Location::new("Bellagio", 36.1126, -115.1767),
    Location::new("Caesars Palace", 36.1162, -115.1745),
    Location::new("Longhorn Casino", 36.1070664, -115.0591256),
];

// ============================================================================
// Henderson / East Las Vegas Area
// ============================================================================

pub const HENDERSON_LOCATIONS: &[Location] = &[
    Location::new("I Love Sushi Henderson", 35.9916660, -115.1028343),
    Location::new("Extended Stay America Henderson", 36.1283949, -115.0826989),
    Location::new("Islander's Grill", 36.0335058, -114.9856162),
    Location::new("Naga", 36.0137634, -114.9928676),
    Location::new("RibCage", 35.9949754, -115.0999810),
    Location::new("Buffalo Wild Wings Henderson", 36.0090449, -114.9917034),
    Location::new("Green Valley Ranch Area", 36.0308, -115.0825),
    Location::new("Sunset Station Area", 36.0614, -115.0631),
];

// ============================================================================
// North Las Vegas / South Strip
// ============================================================================

pub const OUTLYING_LOCATIONS: &[Location] = &[
    Location::new("Rivas Mexican Grill North", 36.1450055, -115.0482587),
    Location::new("Monarca Mexican Restaurant", 36.1440711, -115.0634197),
    Location::new("Beers and Bets", 36.1428945, -115.1573836),
    Location::new("Bootlegger Bistro", 36.0492047, -115.1715744),
    Location::new("kabuki Japanese", 36.0675472, -115.1779391),
    Location::new("Mikos Izakaya", 36.0429503, -115.1527627),
    Location::new("Pei Wei Town Square", 36.0810469, -115.1472694),
    Location::new("Hello Tokyo", 36.1161627, -115.0902096),
];

/// All fixture locations, casinos first.
pub fn all_locations() -> Vec<Location> {
    CASINOS
        .iter()
        .chain(HENDERSON_LOCATIONS)
        .chain(OUTLYING_LOCATIONS)
        .copied()
        .collect()
}

/// The first `count` fixture locations.
pub fn sample_locations(count: usize) -> Vec<Location> {
    all_locations().into_iter().take(count).collect()
}

pub fn names(locations: &[Location]) -> Vec<&'static str> {
    locations.iter().map(|location| location.name).collect()
}

/// Coordinate lookup keyed by location name.
pub fn lookup(locations: &[Location]) -> HashMap<String, (f64, f64)> {
    locations
        .iter()
        .map(|location| (location.name.to_string(), location.coords()))
        .collect()
}
