//! Route calculation shapes.
//!
//! Positions are `[longitude, latitude]` pairs in WGS 84. A calculator
//! resource must exist on the service side before either operation is called.

use locus_shape::{Shape, Timestamp};
use serde::{Deserialize, Serialize};

/// Input of `CalculateRoute`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct CalculateRouteRequest {
    /// Name of the route calculator resource.
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    calculator_name: Option<String>,
    /// Route preferences used when `TravelMode` is `Car`.
    car_mode_options: Option<CalculateRouteCarModeOptions>,
    /// Calculate for the current time; overrides `DepartureTime`.
    depart_now: Option<bool>,
    /// Start of the route. A position off the road network snaps to the
    /// nearest road.
    #[shape(required, length(min = 2, max = 2))]
    departure_position: Option<Vec<f64>>,
    departure_time: Option<Timestamp>,
    #[shape(required, length(min = 2, max = 2))]
    destination_position: Option<Vec<f64>>,
    /// `Kilometers` (default) or `Miles`.
    distance_unit: Option<String>,
    /// Return each leg's geometry as a line string.
    include_leg_geometry: Option<bool>,
    /// `Car` (default), `Truck` or `Walking`.
    travel_mode: Option<String>,
    truck_mode_options: Option<CalculateRouteTruckModeOptions>,
    /// Up to 23 intermediate stops, visited in order.
    #[shape(length(min = 0, max = 23))]
    waypoint_positions: Option<Vec<Vec<f64>>>,
}

/// Output of `CalculateRoute`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct CalculateRouteResult {
    /// One leg between each pair of consecutive positions.
    #[shape(required)]
    legs: Option<Vec<Leg>>,
    #[shape(required)]
    summary: Option<CalculateRouteSummary>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct CalculateRouteCarModeOptions {
    avoid_ferries: Option<bool>,
    avoid_tolls: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct CalculateRouteTruckModeOptions {
    avoid_ferries: Option<bool>,
    avoid_tolls: Option<bool>,
    dimensions: Option<TruckDimensions>,
    weight: Option<TruckWeight>,
}

/// Truck size, used to avoid low bridges and narrow roads.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct TruckDimensions {
    #[shape(range(min = 0))]
    height: Option<f64>,
    #[shape(range(min = 0))]
    length: Option<f64>,
    /// `Meters` (default) or `Feet`.
    unit: Option<String>,
    #[shape(range(min = 0))]
    width: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct TruckWeight {
    #[shape(range(min = 0))]
    total: Option<f64>,
    unit: Option<String>,
}

/// Route between two consecutive positions of a request.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct Leg {
    #[shape(required, range(min = 0))]
    distance: Option<f64>,
    #[shape(required, range(min = 0))]
    duration_seconds: Option<f64>,
    #[shape(required, length(min = 2, max = 2))]
    end_position: Option<Vec<f64>>,
    /// Present when the request set `IncludeLegGeometry`.
    geometry: Option<LegGeometry>,
    #[shape(required, length(min = 2, max = 2))]
    start_position: Option<Vec<f64>>,
    #[shape(required)]
    steps: Option<Vec<Step>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct LegGeometry {
    #[shape(length(min = 2))]
    line_string: Option<Vec<Vec<f64>>>,
}

/// One maneuver within a leg.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct Step {
    #[shape(required, range(min = 0))]
    distance: Option<f64>,
    #[shape(required, range(min = 0))]
    duration_seconds: Option<f64>,
    #[shape(required, length(min = 2, max = 2))]
    end_position: Option<Vec<f64>>,
    /// Index of the step's first point in the leg's line string.
    #[shape(range(min = 0))]
    geometry_offset: Option<i32>,
    #[shape(required, length(min = 2, max = 2))]
    start_position: Option<Vec<f64>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct CalculateRouteSummary {
    /// Data provider, e.g. `Esri` or `Here`.
    #[shape(required)]
    data_source: Option<String>,
    #[shape(required, range(min = 0))]
    distance: Option<f64>,
    #[shape(required)]
    distance_unit: Option<String>,
    #[shape(required, range(min = 0))]
    duration_seconds: Option<f64>,
    /// `[min_x, min_y, max_x, max_y]` of the whole route.
    #[shape(required, wire = "RouteBBox", length(min = 4, max = 6))]
    #[serde(rename = "RouteBBox")]
    route_bbox: Option<Vec<f64>>,
}

/// Input of `CalculateRouteMatrix`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct CalculateRouteMatrixRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    calculator_name: Option<String>,
    car_mode_options: Option<CalculateRouteCarModeOptions>,
    depart_now: Option<bool>,
    /// Origins; the matrix has one row per departure.
    #[shape(required, length(min = 1, max = 350))]
    departure_positions: Option<Vec<Vec<f64>>>,
    departure_time: Option<Timestamp>,
    /// Destinations; the matrix has one column per destination.
    #[shape(required, length(min = 1, max = 350))]
    destination_positions: Option<Vec<Vec<f64>>>,
    distance_unit: Option<String>,
    travel_mode: Option<String>,
    truck_mode_options: Option<CalculateRouteTruckModeOptions>,
}

/// Output of `CalculateRouteMatrix`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct CalculateRouteMatrixResult {
    /// `RouteMatrix[i][j]` is the route from departure `i` to destination `j`.
    #[shape(required)]
    route_matrix: Option<Vec<Vec<RouteMatrixEntry>>>,
    #[shape(length(min = 1, max = 350))]
    snapped_departure_positions: Option<Vec<Vec<f64>>>,
    #[shape(length(min = 1, max = 350))]
    snapped_destination_positions: Option<Vec<Vec<f64>>>,
    #[shape(required)]
    summary: Option<CalculateRouteMatrixSummary>,
}

/// A cell of the route matrix: either a distance and duration, or an error.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct RouteMatrixEntry {
    #[shape(range(min = 0))]
    distance: Option<f64>,
    #[shape(range(min = 0))]
    duration_seconds: Option<f64>,
    error: Option<RouteMatrixEntryError>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct RouteMatrixEntryError {
    #[shape(required)]
    code: Option<String>,
    message: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct CalculateRouteMatrixSummary {
    #[shape(required)]
    data_source: Option<String>,
    #[shape(required)]
    distance_unit: Option<String>,
    #[shape(required, range(min = 0, max = 160000))]
    error_count: Option<i32>,
    #[shape(required, range(min = 1, max = 160000))]
    route_count: Option<i32>,
}
