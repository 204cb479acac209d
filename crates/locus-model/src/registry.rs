//! Name-indexed registry of every shape, for tools that pick a shape at
//! runtime (the `locus` CLI).

use std::fmt;

use locus_shape::{Shape, ShapeKind, ShapeSchema, ValidationConfig, Violation};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::calculator::*;
use crate::error::{ModelError, ModelResult};
use crate::geofence::*;
use crate::map::*;
use crate::place::*;
use crate::route::*;
use crate::tag::*;
use crate::tracker::*;

/// Result of checking one JSON document against a shape.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CheckReport {
    pub shape: &'static str,
    /// `Display` rendering of the parsed shape.
    pub rendering: String,
    pub violations: Vec<Violation>,
}

impl CheckReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Type-erased handle on one shape type.
#[derive(Clone, Copy)]
pub struct ShapeEntry {
    pub name: &'static str,
    pub kind: ShapeKind,
    schema: fn() -> &'static ShapeSchema,
    check: fn(&str, &ValidationConfig) -> ModelResult<CheckReport>,
}

impl ShapeEntry {
    pub fn schema(&self) -> &'static ShapeSchema {
        (self.schema)()
    }

    /// Parses `json` as this shape, renders it and validates it.
    pub fn check(&self, json: &str, config: &ValidationConfig) -> ModelResult<CheckReport> {
        (self.check)(json, config)
    }
}

impl fmt::Debug for ShapeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeEntry")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

const fn entry<S: Shape + DeserializeOwned>() -> ShapeEntry {
    ShapeEntry {
        name: S::NAME,
        kind: S::KIND,
        schema: S::schema,
        check: check_document::<S>,
    }
}

fn check_document<S: Shape + DeserializeOwned>(
    json: &str,
    config: &ValidationConfig,
) -> ModelResult<CheckReport> {
    let shape: S = serde_json::from_str(json).map_err(|source| ModelError::Document {
        shape: S::NAME,
        source,
    })?;
    let violations = shape.validate_with(config);
    debug!(shape = S::NAME, violations = violations.len(), "checked document");
    Ok(CheckReport {
        shape: S::NAME,
        rendering: shape.to_string(),
        violations,
    })
}

static ENTRIES: &[ShapeEntry] = &[
    // routes
    entry::<CalculateRouteRequest>(),
    entry::<CalculateRouteResult>(),
    entry::<CalculateRouteCarModeOptions>(),
    entry::<CalculateRouteTruckModeOptions>(),
    entry::<TruckDimensions>(),
    entry::<TruckWeight>(),
    entry::<Leg>(),
    entry::<LegGeometry>(),
    entry::<Step>(),
    entry::<CalculateRouteSummary>(),
    entry::<CalculateRouteMatrixRequest>(),
    entry::<CalculateRouteMatrixResult>(),
    entry::<RouteMatrixEntry>(),
    entry::<RouteMatrixEntryError>(),
    entry::<CalculateRouteMatrixSummary>(),
    // geofences
    entry::<GeofenceGeometry>(),
    entry::<Circle>(),
    entry::<CreateGeofenceCollectionRequest>(),
    entry::<CreateGeofenceCollectionResult>(),
    entry::<DescribeGeofenceCollectionRequest>(),
    entry::<DescribeGeofenceCollectionResult>(),
    entry::<PutGeofenceRequest>(),
    entry::<PutGeofenceResult>(),
    entry::<GetGeofenceRequest>(),
    entry::<GetGeofenceResult>(),
    entry::<ListGeofencesRequest>(),
    entry::<ListGeofencesResult>(),
    entry::<ListGeofenceResponseEntry>(),
    entry::<BatchDeleteGeofenceRequest>(),
    entry::<BatchDeleteGeofenceResult>(),
    entry::<BatchDeleteGeofenceError>(),
    entry::<BatchItemError>(),
    entry::<ForecastGeofenceEventsRequest>(),
    entry::<ForecastGeofenceEventsDeviceState>(),
    entry::<ForecastGeofenceEventsResult>(),
    entry::<ForecastedEvent>(),
    entry::<DeleteGeofenceCollectionRequest>(),
    entry::<DeleteGeofenceCollectionResult>(),
    entry::<ListGeofenceCollectionsRequest>(),
    entry::<ListGeofenceCollectionsResult>(),
    entry::<ListGeofenceCollectionsResponseEntry>(),
    entry::<UpdateGeofenceCollectionRequest>(),
    entry::<UpdateGeofenceCollectionResult>(),
    entry::<BatchPutGeofenceRequest>(),
    entry::<BatchPutGeofenceRequestEntry>(),
    entry::<BatchPutGeofenceResult>(),
    entry::<BatchPutGeofenceError>(),
    entry::<BatchPutGeofenceSuccess>(),
    entry::<BatchEvaluateGeofencesRequest>(),
    entry::<BatchEvaluateGeofencesResult>(),
    entry::<BatchEvaluateGeofencesError>(),
    // trackers and device positions
    entry::<VerifyDevicePositionRequest>(),
    entry::<VerifyDevicePositionResult>(),
    entry::<DeviceState>(),
    entry::<PositionalAccuracy>(),
    entry::<CellSignals>(),
    entry::<LteCellDetails>(),
    entry::<LteLocalId>(),
    entry::<LteNetworkMeasurements>(),
    entry::<WiFiAccessPoint>(),
    entry::<InferredState>(),
    entry::<GetDevicePositionRequest>(),
    entry::<GetDevicePositionResult>(),
    entry::<DevicePositionUpdate>(),
    entry::<DevicePosition>(),
    entry::<BatchUpdateDevicePositionRequest>(),
    entry::<BatchUpdateDevicePositionResult>(),
    entry::<BatchUpdateDevicePositionError>(),
    entry::<BatchGetDevicePositionRequest>(),
    entry::<BatchGetDevicePositionResult>(),
    entry::<BatchGetDevicePositionError>(),
    entry::<BatchDeleteDevicePositionHistoryRequest>(),
    entry::<BatchDeleteDevicePositionHistoryResult>(),
    entry::<BatchDeleteDevicePositionHistoryError>(),
    entry::<GetDevicePositionHistoryRequest>(),
    entry::<GetDevicePositionHistoryResult>(),
    entry::<ListDevicePositionsRequest>(),
    entry::<TrackingFilterGeometry>(),
    entry::<ListDevicePositionsResult>(),
    entry::<ListDevicePositionsResponseEntry>(),
    entry::<CreateTrackerRequest>(),
    entry::<CreateTrackerResult>(),
    entry::<DeleteTrackerRequest>(),
    entry::<DeleteTrackerResult>(),
    entry::<DescribeTrackerRequest>(),
    entry::<DescribeTrackerResult>(),
    entry::<ListTrackersRequest>(),
    entry::<ListTrackersResult>(),
    entry::<ListTrackersResponseEntry>(),
    entry::<UpdateTrackerRequest>(),
    entry::<UpdateTrackerResult>(),
    entry::<AssociateTrackerConsumerRequest>(),
    entry::<AssociateTrackerConsumerResult>(),
    entry::<DisassociateTrackerConsumerRequest>(),
    entry::<DisassociateTrackerConsumerResult>(),
    entry::<ListTrackerConsumersRequest>(),
    entry::<ListTrackerConsumersResult>(),
    // maps
    entry::<CreateMapRequest>(),
    entry::<CreateMapResult>(),
    entry::<MapConfiguration>(),
    entry::<DescribeMapRequest>(),
    entry::<DescribeMapResult>(),
    entry::<GetMapTileRequest>(),
    entry::<GetMapTileResult>(),
    entry::<GetMapGlyphsRequest>(),
    entry::<GetMapGlyphsResult>(),
    entry::<GetMapStyleDescriptorRequest>(),
    entry::<GetMapStyleDescriptorResult>(),
    entry::<GetMapSpritesRequest>(),
    entry::<GetMapSpritesResult>(),
    entry::<DeleteMapRequest>(),
    entry::<DeleteMapResult>(),
    entry::<ListMapsRequest>(),
    entry::<ListMapsResult>(),
    entry::<ListMapsResponseEntry>(),
    entry::<UpdateMapRequest>(),
    entry::<MapConfigurationUpdate>(),
    entry::<UpdateMapResult>(),
    // places
    entry::<SearchPlaceIndexForTextRequest>(),
    entry::<SearchPlaceIndexForTextResult>(),
    entry::<SearchPlaceIndexForTextSummary>(),
    entry::<SearchForTextResult>(),
    entry::<SearchPlaceIndexForPositionRequest>(),
    entry::<SearchPlaceIndexForPositionResult>(),
    entry::<SearchPlaceIndexForPositionSummary>(),
    entry::<SearchForPositionResult>(),
    entry::<Place>(),
    entry::<PlaceGeometry>(),
    entry::<TimeZone>(),
    entry::<CreatePlaceIndexRequest>(),
    entry::<DataSourceConfiguration>(),
    entry::<CreatePlaceIndexResult>(),
    entry::<DeletePlaceIndexRequest>(),
    entry::<DeletePlaceIndexResult>(),
    entry::<DescribePlaceIndexRequest>(),
    entry::<DescribePlaceIndexResult>(),
    entry::<ListPlaceIndexesRequest>(),
    entry::<ListPlaceIndexesResult>(),
    entry::<ListPlaceIndexesResponseEntry>(),
    entry::<UpdatePlaceIndexRequest>(),
    entry::<UpdatePlaceIndexResult>(),
    // route calculators
    entry::<CreateRouteCalculatorRequest>(),
    entry::<CreateRouteCalculatorResult>(),
    entry::<DeleteRouteCalculatorRequest>(),
    entry::<DeleteRouteCalculatorResult>(),
    entry::<DescribeRouteCalculatorRequest>(),
    entry::<DescribeRouteCalculatorResult>(),
    entry::<ListRouteCalculatorsRequest>(),
    entry::<ListRouteCalculatorsResult>(),
    entry::<ListRouteCalculatorsResponseEntry>(),
    entry::<UpdateRouteCalculatorRequest>(),
    entry::<UpdateRouteCalculatorResult>(),
    // tags
    entry::<ListTagsForResourceRequest>(),
    entry::<ListTagsForResourceResult>(),
    entry::<TagResourceRequest>(),
    entry::<TagResourceResult>(),
    entry::<UntagResourceRequest>(),
    entry::<UntagResourceResult>(),
];

/// Every registered shape, grouped by resource area.
pub fn entries() -> &'static [ShapeEntry] {
    ENTRIES
}

/// Case-sensitive lookup by shape name.
pub fn lookup(name: &str) -> ModelResult<&'static ShapeEntry> {
    ENTRIES
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| ModelError::UnknownShape(name.to_string()))
}

pub fn by_kind(kind: ShapeKind) -> impl Iterator<Item = &'static ShapeEntry> {
    ENTRIES.iter().filter(move |entry| entry.kind == kind)
}
