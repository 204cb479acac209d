//! Amazon Location Service shapes.
//!
//! Every request, result and nested structure of the catalogued operations,
//! each deriving the shape contract from `locus-shape`. Shapes are plain
//! values: build requests with the `with_*` methods, read results through
//! the getters, and call [`Shape::validate`](locus_shape::Shape::validate)
//! to check documented constraints before sending.
//!
//! # Modules
//!
//! - [`route`]: `CalculateRoute` and `CalculateRouteMatrix`
//! - [`calculator`]: route calculator resources
//! - [`geofence`]: geofence collections, geofences, batch evaluation, event forecasts
//! - [`tracker`]: trackers, consumers, device positions and history, cellular/Wi-Fi verification
//! - [`map`]: map resources, tiles, glyphs, sprites, style descriptors
//! - [`place`]: place index resources, text and position search
//! - [`tag`]: resource tags
//! - [`operation`]: the operation catalogue
//! - [`registry`]: runtime lookup of shapes by name

pub mod calculator;
pub mod enums;
pub mod error;
pub mod geofence;
pub mod map;
pub mod operation;
pub mod place;
pub mod registry;
pub mod route;
pub mod tag;
pub mod tracker;

pub use enums::{
    BatchItemErrorCode, DimensionUnit, DistanceUnit, ForecastedGeofenceEventType, GeofenceStatus,
    IntendedUse, PositionFiltering, PricingPlan, RouteMatrixErrorCode, SpeedUnit, TravelMode,
    VehicleWeightUnit,
};
pub use error::{ModelError, ModelResult};
pub use operation::{Operation, OperationInfo};
pub use registry::{CheckReport, ShapeEntry};

pub use locus_shape::{Blob, Shape, ShapeError, ShapeResult, Timestamp, ValidationConfig, Violation};
