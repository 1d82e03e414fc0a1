//! End-to-end route selection tests
//!
//! Tests for strategy dispatch, error reporting, tour shape and summaries.

mod fixtures;

use std::collections::HashMap;

use route_optimizer::error::{GeocodeError, RouteError};
use route_optimizer::matrix::planar_km;
use route_optimizer::planner::RoutePlanner;
use route_optimizer::summary::RouteSummary;
use route_optimizer::traits::{Coordinate, Geocoder};
use route_optimizer::{Algorithm, Heuristic, RouteOptions, RouteResult, optimize_route};

use fixtures::{Location, lookup, names, sample_locations};

// ============================================================================
// Test Fixtures
// ============================================================================

fn triangle() -> HashMap<String, Coordinate> {
    [
        ("A".to_string(), (0.0, 0.0)),
        ("B".to_string(), (0.0, 1.0)),
        ("C".to_string(), (1.0, 0.0)),
    ]
    .into()
}

const SINGLE_HEURISTICS: [Heuristic; 3] = [
    Heuristic::MstPreorder,
    Heuristic::NearestNeighborTwoOpt,
    Heuristic::NearestNeighbor,
];

fn heuristic_only(heuristic: Heuristic) -> RouteOptions {
    RouteOptions {
        exact_threshold: 0,
        heuristic,
        ..RouteOptions::default()
    }
}

fn solve(locations: &[Location], options: &RouteOptions) -> RouteResult {
    optimize_route(&names(locations), &lookup(locations), options).expect("fixture locations route")
}

fn assert_visits_each_once(result: &RouteResult, expected: &[&str]) {
    let path = &result.optimized_path;
    assert_eq!(path.first(), path.last(), "route must be closed");
    let mut visited: Vec<&str> = path[..path.len() - 1].iter().map(String::as_str).collect();
    let mut expected = expected.to_vec();
    visited.sort_unstable();
    expected.sort_unstable();
    assert_eq!(visited, expected);
}

/// Looks places up in the fixture set, failing for anything unknown.
struct FixtureGeocoder(HashMap<String, Coordinate>);

impl Geocoder for FixtureGeocoder {
    fn geocode(&self, place: &str) -> Result<Coordinate, GeocodeError> {
        self.0
            .get(place)
            .copied()
            .ok_or_else(|| GeocodeError::NotFound(place.to_string()))
    }
}

// ============================================================================
// Small Instances
// ============================================================================

#[test]
fn triangle_routes_exactly() {
    let result = optimize_route(&["A", "B", "C"], &triangle(), &RouteOptions::default())
        .expect("triangle routes");

    assert_eq!(result.algorithm, Algorithm::BruteForce);
    assert_eq!(result.optimized_path, vec!["A", "B", "C", "A"]);

    let expected = 111.0 + 111.0 + 2f64.sqrt() * 111.0;
    assert!(
        (result.total_distance_km - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        result.total_distance_km
    );
}

#[test]
fn triangle_agrees_across_strategies() {
    let exact = optimize_route(&["A", "B", "C"], &triangle(), &RouteOptions::default())
        .expect("exact routes");

    for heuristic in [
        Heuristic::MstPreorder,
        Heuristic::NearestNeighborTwoOpt,
        Heuristic::NearestNeighbor,
        Heuristic::Best,
    ] {
        let result = optimize_route(&["A", "B", "C"], &triangle(), &heuristic_only(heuristic))
            .expect("heuristic routes");
        assert!(
            (result.total_distance_km - exact.total_distance_km).abs() < 1e-9,
            "{:?} disagrees with the exact solver",
            heuristic
        );
    }
}

#[test]
fn two_locations_identical_on_every_path() {
    let locations = sample_locations(2);
    let exact = solve(&locations, &RouteOptions::default());
    assert_eq!(exact.algorithm, Algorithm::BruteForce);

    for heuristic in SINGLE_HEURISTICS {
        let result = solve(&locations, &heuristic_only(heuristic));
        assert_eq!(result.total_distance_km, exact.total_distance_km);
        assert_eq!(result.optimized_path.len(), 3);
    }
}

#[test]
fn single_location_is_returned_as_is() {
    let coords = triangle();
    let result = optimize_route(&["B"], &coords, &RouteOptions::default()).expect("routes");
    assert_eq!(result.optimized_path, vec!["B"]);
    assert_eq!(result.total_distance_km, 0.0);
    assert_eq!(result.estimated_time_min, 0.0);
    assert_eq!(result.algorithm, Algorithm::Trivial);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn missing_coordinate_names_the_location() {
    let result = optimize_route(&["A", "Z", "B"], &triangle(), &RouteOptions::default());
    match result {
        Err(RouteError::MissingCoordinate { location }) => assert_eq!(location, "Z"),
        other => panic!("expected MissingCoordinate, got {:?}", other),
    }
}

#[test]
fn missing_coordinate_reported_for_single_location() {
    let result = optimize_route(&["Q"], &triangle(), &RouteOptions::default());
    assert!(matches!(result, Err(RouteError::MissingCoordinate { .. })));
}

#[test]
fn invalid_speed_is_rejected() {
    let options = RouteOptions {
        average_speed_kmh: 0.0,
        ..RouteOptions::default()
    };
    let result = optimize_route(&["A", "B"], &triangle(), &options);
    assert!(matches!(result, Err(RouteError::InvalidConfig(_))));
}

#[test]
fn oversized_exact_threshold_is_rejected() {
    let options = RouteOptions {
        exact_threshold: 50,
        ..RouteOptions::default()
    };
    let locations = sample_locations(12);
    let result = optimize_route(&names(&locations), &lookup(&locations), &options);
    assert!(matches!(result, Err(RouteError::InvalidConfig(_))));
}

// ============================================================================
// Larger Instances
// ============================================================================

#[test]
fn ten_locations_take_the_heuristic_path() {
    let locations = sample_locations(10);
    let result = solve(&locations, &RouteOptions::default());

    assert_eq!(result.algorithm, Algorithm::NearestNeighborTwoOpt);
    assert_visits_each_once(&result, &names(&locations));
    assert_eq!(result.optimized_path[0], locations[0].name);
}

#[test]
fn configured_heuristic_is_used_above_threshold() {
    let locations = sample_locations(12);

    let mst = solve(
        &locations,
        &RouteOptions {
            heuristic: Heuristic::MstPreorder,
            ..RouteOptions::default()
        },
    );
    assert_eq!(mst.algorithm, Algorithm::MstPreorder);
    assert_visits_each_once(&mst, &names(&locations));

    let basic = solve(
        &locations,
        &RouteOptions {
            heuristic: Heuristic::NearestNeighbor,
            ..RouteOptions::default()
        },
    );
    assert_eq!(basic.algorithm, Algorithm::NearestNeighbor);
    assert_visits_each_once(&basic, &names(&locations));
}

#[test]
fn best_heuristic_keeps_the_shorter_tour() {
    let locations = sample_locations(14);
    let mst = solve(&locations, &heuristic_only(Heuristic::MstPreorder));
    let nn = solve(&locations, &heuristic_only(Heuristic::NearestNeighborTwoOpt));
    let best = solve(&locations, &heuristic_only(Heuristic::Best));

    let shortest = mst.total_distance_km.min(nn.total_distance_km);
    assert!((best.total_distance_km - shortest).abs() < 1e-9);
    assert!(matches!(best.algorithm, Algorithm::MstPreorder | Algorithm::NearestNeighborTwoOpt));
}

#[test]
fn heuristics_never_beat_the_exact_solver() {
    for count in 3..=8 {
        let locations = sample_locations(count);
        let exact = solve(&locations, &RouteOptions::default());
        assert_eq!(exact.algorithm, Algorithm::BruteForce);

        for heuristic in SINGLE_HEURISTICS {
            let result = solve(&locations, &heuristic_only(heuristic));
            assert!(
                result.total_distance_km >= exact.total_distance_km - 1e-9,
                "{:?} beat the optimum on {} locations",
                heuristic,
                count
            );
        }
    }
}

// ============================================================================
// Tour Shape and Accounting
// ============================================================================

#[test]
fn duplicate_identifiers_are_distinct_nodes() {
    let result = optimize_route(&["A", "A", "B", "C"], &triangle(), &RouteOptions::default())
        .expect("duplicates route");
    assert_eq!(result.optimized_path.len(), 5);
    assert_eq!(result.optimized_path.iter().filter(|name| *name == "A").count(), 3);
}

#[test]
fn distance_is_sum_of_legs_including_return() {
    let locations = sample_locations(9);
    let result = solve(&locations, &RouteOptions::default());

    let points = result.route_coordinates.points();
    assert_eq!(points.len(), result.optimized_path.len());
    assert_eq!(points.first(), points.last());

    let legs: f64 = points.windows(2).map(|pair| planar_km(pair[0], pair[1])).sum();
    assert!((legs - result.total_distance_km).abs() < 1e-9);
}

#[test]
fn estimated_time_is_minutes_at_configured_speed() {
    let options = RouteOptions {
        average_speed_kmh: 40.0,
        ..RouteOptions::default()
    };
    let result = optimize_route(&["A", "B", "C"], &triangle(), &options).expect("routes");
    let expected = result.total_distance_km / 40.0 * 60.0;
    assert!((result.estimated_time_min - expected).abs() < 1e-9);
}

#[test]
fn result_serializes_with_algorithm_tag() {
    let result = optimize_route(&["A", "B", "C"], &triangle(), &RouteOptions::default())
        .expect("routes");
    let json = serde_json::to_value(&result).expect("serializes");
    assert_eq!(json["algorithm"], "brute_force");
    assert_eq!(json["route_coordinates"][0], serde_json::json!([0.0, 0.0]));
}

// ============================================================================
// Summary and Planner
// ============================================================================

#[test]
fn summary_reports_rounded_values() {
    let result = optimize_route(&["A", "B", "C"], &triangle(), &RouteOptions::default())
        .expect("routes");
    let summary = RouteSummary::from_result(&result).expect("non-empty");

    assert_eq!(summary.total_distance, 378.98);
    assert_eq!(summary.formatted_time, "15 hr 9 min");
    assert!(summary.summary_message.starts_with("Optimized route covers 378.98 km"));
}

#[test]
fn planner_geocodes_missing_places() {
    let locations = sample_locations(5);
    let planner = RoutePlanner::new(FixtureGeocoder(lookup(&locations)), RouteOptions::default());

    let known: HashMap<String, Coordinate> = lookup(&locations[..2]);
    let result = planner.plan(&names(&locations), Some(&known)).expect("plans");
    assert_visits_each_once(&result, &names(&locations));
}

#[test]
fn planner_surfaces_geocoding_failure() {
    let planner = RoutePlanner::new(FixtureGeocoder(HashMap::new()), RouteOptions::default());
    match planner.plan(&["Bellagio", "MGM Grand"], None) {
        Err(RouteError::GeocodingFailed { location, source }) => {
            assert_eq!(location, "Bellagio");
            assert!(matches!(source, GeocodeError::NotFound(_)));
        }
        other => panic!("expected GeocodingFailed, got {:?}", other),
    }
}
