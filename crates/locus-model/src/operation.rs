//! Operation catalogue: which request goes in and which result comes out.

use locus_shape::Shape;
use serde::Serialize;

use crate::calculator::*;
use crate::geofence::*;
use crate::map::*;
use crate::place::*;
use crate::route::*;
use crate::tag::*;
use crate::tracker::*;

/// One remote API call, typed by its input and output shapes.
pub trait Operation {
    const NAME: &'static str;
    type Input: Shape;
    type Output: Shape;
}

/// Untyped catalogue entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OperationInfo {
    pub name: &'static str,
    pub input: &'static str,
    pub output: &'static str,
}

macro_rules! operations {
    ($($(#[$meta:meta])* $name:ident => $input:ty, $output:ty;)+) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
            pub struct $name;

            impl Operation for $name {
                const NAME: &'static str = stringify!($name);
                type Input = $input;
                type Output = $output;
            }
        )+

        /// Every catalogued operation, alphabetical.
        pub const ALL: &[OperationInfo] = &[
            $(OperationInfo {
                name: stringify!($name),
                input: <$input as Shape>::NAME,
                output: <$output as Shape>::NAME,
            },)+
        ];
    };
}

operations! {
    /// Links a geofence collection to a tracker.
    AssociateTrackerConsumer => AssociateTrackerConsumerRequest, AssociateTrackerConsumerResult;
    BatchDeleteDevicePositionHistory => BatchDeleteDevicePositionHistoryRequest, BatchDeleteDevicePositionHistoryResult;
    BatchDeleteGeofence => BatchDeleteGeofenceRequest, BatchDeleteGeofenceResult;
    /// Evaluates device positions against a collection's geofences.
    BatchEvaluateGeofences => BatchEvaluateGeofencesRequest, BatchEvaluateGeofencesResult;
    BatchGetDevicePosition => BatchGetDevicePositionRequest, BatchGetDevicePositionResult;
    BatchPutGeofence => BatchPutGeofenceRequest, BatchPutGeofenceResult;
    BatchUpdateDevicePosition => BatchUpdateDevicePositionRequest, BatchUpdateDevicePositionResult;
    /// Route between a departure, optional waypoints and a destination.
    CalculateRoute => CalculateRouteRequest, CalculateRouteResult;
    /// Routes between every departure and every destination.
    CalculateRouteMatrix => CalculateRouteMatrixRequest, CalculateRouteMatrixResult;
    CreateGeofenceCollection => CreateGeofenceCollectionRequest, CreateGeofenceCollectionResult;
    CreateMap => CreateMapRequest, CreateMapResult;
    CreatePlaceIndex => CreatePlaceIndexRequest, CreatePlaceIndexResult;
    CreateRouteCalculator => CreateRouteCalculatorRequest, CreateRouteCalculatorResult;
    CreateTracker => CreateTrackerRequest, CreateTrackerResult;
    DeleteGeofenceCollection => DeleteGeofenceCollectionRequest, DeleteGeofenceCollectionResult;
    DeleteMap => DeleteMapRequest, DeleteMapResult;
    DeletePlaceIndex => DeletePlaceIndexRequest, DeletePlaceIndexResult;
    DeleteRouteCalculator => DeleteRouteCalculatorRequest, DeleteRouteCalculatorResult;
    DeleteTracker => DeleteTrackerRequest, DeleteTrackerResult;
    DescribeGeofenceCollection => DescribeGeofenceCollectionRequest, DescribeGeofenceCollectionResult;
    DescribeMap => DescribeMapRequest, DescribeMapResult;
    DescribePlaceIndex => DescribePlaceIndexRequest, DescribePlaceIndexResult;
    DescribeRouteCalculator => DescribeRouteCalculatorRequest, DescribeRouteCalculatorResult;
    DescribeTracker => DescribeTrackerRequest, DescribeTrackerResult;
    DisassociateTrackerConsumer => DisassociateTrackerConsumerRequest, DisassociateTrackerConsumerResult;
    ForecastGeofenceEvents => ForecastGeofenceEventsRequest, ForecastGeofenceEventsResult;
    GetDevicePosition => GetDevicePositionRequest, GetDevicePositionResult;
    /// Positions of one device within a time window.
    GetDevicePositionHistory => GetDevicePositionHistoryRequest, GetDevicePositionHistoryResult;
    GetGeofence => GetGeofenceRequest, GetGeofenceResult;
    GetMapGlyphs => GetMapGlyphsRequest, GetMapGlyphsResult;
    GetMapSprites => GetMapSpritesRequest, GetMapSpritesResult;
    GetMapStyleDescriptor => GetMapStyleDescriptorRequest, GetMapStyleDescriptorResult;
    GetMapTile => GetMapTileRequest, GetMapTileResult;
    /// Latest position of each device in a tracker.
    ListDevicePositions => ListDevicePositionsRequest, ListDevicePositionsResult;
    ListGeofenceCollections => ListGeofenceCollectionsRequest, ListGeofenceCollectionsResult;
    ListGeofences => ListGeofencesRequest, ListGeofencesResult;
    ListMaps => ListMapsRequest, ListMapsResult;
    ListPlaceIndexes => ListPlaceIndexesRequest, ListPlaceIndexesResult;
    ListRouteCalculators => ListRouteCalculatorsRequest, ListRouteCalculatorsResult;
    ListTagsForResource => ListTagsForResourceRequest, ListTagsForResourceResult;
    ListTrackerConsumers => ListTrackerConsumersRequest, ListTrackerConsumersResult;
    ListTrackers => ListTrackersRequest, ListTrackersResult;
    PutGeofence => PutGeofenceRequest, PutGeofenceResult;
    /// Reverse geocoding.
    SearchPlaceIndexForPosition => SearchPlaceIndexForPositionRequest, SearchPlaceIndexForPositionResult;
    /// Geocoding of free-form text.
    SearchPlaceIndexForText => SearchPlaceIndexForTextRequest, SearchPlaceIndexForTextResult;
    TagResource => TagResourceRequest, TagResourceResult;
    UntagResource => UntagResourceRequest, UntagResourceResult;
    UpdateGeofenceCollection => UpdateGeofenceCollectionRequest, UpdateGeofenceCollectionResult;
    UpdateMap => UpdateMapRequest, UpdateMapResult;
    UpdatePlaceIndex => UpdatePlaceIndexRequest, UpdatePlaceIndexResult;
    UpdateRouteCalculator => UpdateRouteCalculatorRequest, UpdateRouteCalculatorResult;
    UpdateTracker => UpdateTrackerRequest, UpdateTrackerResult;
    VerifyDevicePosition => VerifyDevicePositionRequest, VerifyDevicePositionResult;
}

/// Case-sensitive lookup by operation name.
pub fn find(name: &str) -> Option<&'static OperationInfo> {
    ALL.iter().find(|op| op.name == name)
}
