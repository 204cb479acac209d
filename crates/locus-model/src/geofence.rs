//! Geofence collection shapes.
//!
//! Polygon rings are sequences of `[longitude, latitude]` vertices. The
//! service requires at least four vertices per ring, the first equal to the
//! last, counter-clockwise exterior winding, and no holes; none of that is
//! checked locally.

use std::collections::HashMap;

use locus_shape::{Blob, Shape, Timestamp};
use serde::{Deserialize, Serialize};

use crate::tracker::DevicePositionUpdate;

/// Exactly one of `Polygon`, `Circle` or `Geobuf` is expected.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct GeofenceGeometry {
    circle: Option<Circle>,
    /// Base64-encoded geobuf, for polygons with many vertices.
    #[shape(length(max = 300000))]
    geobuf: Option<Blob>,
    /// Linear rings; only the first (exterior) ring is used.
    #[shape(length(min = 1))]
    polygon: Option<Vec<Vec<Vec<f64>>>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct Circle {
    #[shape(required, length(min = 2, max = 2))]
    center: Option<Vec<f64>>,
    /// Meters.
    #[shape(required, range(min = 0))]
    radius: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct CreateGeofenceCollectionRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    collection_name: Option<String>,
    #[shape(length(min = 0, max = 1000))]
    description: Option<String>,
    /// Customer managed KMS key for encryption at rest.
    #[shape(length(min = 1, max = 2048))]
    kms_key_id: Option<String>,
    pricing_plan: Option<String>,
    pricing_plan_data_source: Option<String>,
    #[shape(length(min = 0, max = 50))]
    tags: Option<HashMap<String, String>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct CreateGeofenceCollectionResult {
    #[shape(required, length(min = 0, max = 1600))]
    collection_arn: Option<String>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    collection_name: Option<String>,
    #[shape(required)]
    create_time: Option<Timestamp>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct DescribeGeofenceCollectionRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    collection_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct DescribeGeofenceCollectionResult {
    #[shape(required, length(min = 0, max = 1600))]
    collection_arn: Option<String>,
    #[shape(required, length(min = 1, max = 100))]
    collection_name: Option<String>,
    #[shape(required)]
    create_time: Option<Timestamp>,
    #[shape(required, length(min = 0, max = 1000))]
    description: Option<String>,
    /// Number of geofences stored in the collection.
    #[shape(range(min = 0))]
    geofence_count: Option<i32>,
    #[shape(length(min = 1, max = 2048))]
    kms_key_id: Option<String>,
    pricing_plan: Option<String>,
    pricing_plan_data_source: Option<String>,
    #[shape(length(min = 0, max = 50))]
    tags: Option<HashMap<String, String>>,
    #[shape(required)]
    update_time: Option<Timestamp>,
}

/// Input of `PutGeofence`: stores or replaces one geofence.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct PutGeofenceRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    collection_name: Option<String>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\p{L}\p{N}]+$")]
    geofence_id: Option<String>,
    /// Up to three key/value pairs returned with geofence events.
    #[shape(length(min = 0, max = 3))]
    geofence_properties: Option<HashMap<String, String>>,
    #[shape(required)]
    geometry: Option<GeofenceGeometry>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct PutGeofenceResult {
    #[shape(required)]
    create_time: Option<Timestamp>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\p{L}\p{N}]+$")]
    geofence_id: Option<String>,
    #[shape(required)]
    update_time: Option<Timestamp>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct GetGeofenceRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    collection_name: Option<String>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\p{L}\p{N}]+$")]
    geofence_id: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct GetGeofenceResult {
    #[shape(required)]
    create_time: Option<Timestamp>,
    #[shape(required)]
    geofence_id: Option<String>,
    #[shape(length(min = 0, max = 3))]
    geofence_properties: Option<HashMap<String, String>>,
    #[shape(required)]
    geometry: Option<GeofenceGeometry>,
    /// `ACTIVE`, `PENDING`, `FAILED`, `DELETED` or `DELETING`.
    #[shape(required)]
    status: Option<String>,
    #[shape(required)]
    update_time: Option<Timestamp>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct ListGeofencesRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    collection_name: Option<String>,
    #[shape(range(min = 1, max = 100))]
    max_results: Option<i32>,
    /// Token from a previous page.
    #[shape(length(min = 1, max = 60000))]
    next_token: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct ListGeofencesResult {
    #[shape(required)]
    entries: Option<Vec<ListGeofenceResponseEntry>>,
    /// Absent on the last page.
    #[shape(length(min = 1, max = 60000))]
    next_token: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListGeofenceResponseEntry {
    #[shape(required)]
    create_time: Option<Timestamp>,
    #[shape(required)]
    geofence_id: Option<String>,
    #[shape(length(min = 0, max = 3))]
    geofence_properties: Option<HashMap<String, String>>,
    #[shape(required)]
    geometry: Option<GeofenceGeometry>,
    #[shape(required)]
    status: Option<String>,
    #[shape(required)]
    update_time: Option<Timestamp>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct BatchDeleteGeofenceRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    collection_name: Option<String>,
    #[shape(required, length(min = 1, max = 10), pattern = r"^[-._\p{L}\p{N}]+$")]
    geofence_ids: Option<Vec<String>>,
}

/// Only geofences that could not be deleted are reported.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct BatchDeleteGeofenceResult {
    #[shape(required)]
    errors: Option<Vec<BatchDeleteGeofenceError>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct BatchDeleteGeofenceError {
    #[shape(required)]
    error: Option<BatchItemError>,
    #[shape(required)]
    geofence_id: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct BatchItemError {
    code: Option<String>,
    message: Option<String>,
}

/// Input of `ForecastGeofenceEvents`: predicts which geofences a moving
/// device will enter, exit or stay idle in.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct ForecastGeofenceEventsRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    collection_name: Option<String>,
    #[shape(required)]
    device_state: Option<ForecastGeofenceEventsDeviceState>,
    distance_unit: Option<String>,
    #[shape(range(min = 1, max = 20))]
    max_results: Option<i32>,
    #[shape(length(min = 1, max = 60000))]
    next_token: Option<String>,
    speed_unit: Option<String>,
    #[shape(range(min = 0))]
    time_horizon_minutes: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct ForecastGeofenceEventsDeviceState {
    #[shape(required, length(min = 2, max = 2))]
    position: Option<Vec<f64>>,
    #[shape(range(min = 0))]
    speed: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct ForecastGeofenceEventsResult {
    #[shape(required)]
    distance_unit: Option<String>,
    #[shape(required)]
    forecasted_events: Option<Vec<ForecastedEvent>>,
    #[shape(length(min = 1, max = 60000))]
    next_token: Option<String>,
    #[shape(required)]
    speed_unit: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct ForecastedEvent {
    #[shape(required, length(min = 1, max = 36))]
    event_id: Option<String>,
    /// `ENTER`, `EXIT` or `IDLE`.
    #[shape(required)]
    event_type: Option<String>,
    forecasted_breach_time: Option<Timestamp>,
    #[shape(required)]
    geofence_id: Option<String>,
    #[shape(length(min = 0, max = 3))]
    geofence_properties: Option<HashMap<String, String>>,
    #[shape(required)]
    is_device_in_geofence: Option<bool>,
    #[shape(required, range(min = 0))]
    nearest_distance: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct DeleteGeofenceCollectionRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    collection_name: Option<String>,
}

/// Deleting a collection also deletes every geofence in it.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default)]
#[shape(result)]
pub struct DeleteGeofenceCollectionResult {}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct ListGeofenceCollectionsRequest {
    #[shape(range(min = 1, max = 100))]
    max_results: Option<i32>,
    #[shape(length(min = 1, max = 60000))]
    next_token: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct ListGeofenceCollectionsResult {
    #[shape(required)]
    entries: Option<Vec<ListGeofenceCollectionsResponseEntry>>,
    #[shape(length(min = 1, max = 60000))]
    next_token: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListGeofenceCollectionsResponseEntry {
    #[shape(required, length(min = 1, max = 100))]
    collection_name: Option<String>,
    #[shape(required)]
    create_time: Option<Timestamp>,
    #[shape(required, length(min = 0, max = 1000))]
    description: Option<String>,
    pricing_plan: Option<String>,
    pricing_plan_data_source: Option<String>,
    #[shape(required)]
    update_time: Option<Timestamp>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct UpdateGeofenceCollectionRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    collection_name: Option<String>,
    #[shape(length(min = 0, max = 1000))]
    description: Option<String>,
    pricing_plan: Option<String>,
    pricing_plan_data_source: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct UpdateGeofenceCollectionResult {
    #[shape(required, length(min = 0, max = 1600))]
    collection_arn: Option<String>,
    #[shape(required, length(min = 1, max = 100))]
    collection_name: Option<String>,
    #[shape(required)]
    update_time: Option<Timestamp>,
}

/// Input of `BatchPutGeofence`: stores or replaces up to ten geofences.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct BatchPutGeofenceRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    collection_name: Option<String>,
    #[shape(required, length(min = 1, max = 10))]
    entries: Option<Vec<BatchPutGeofenceRequestEntry>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct BatchPutGeofenceRequestEntry {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\p{L}\p{N}]+$")]
    geofence_id: Option<String>,
    #[shape(length(min = 0, max = 3))]
    geofence_properties: Option<HashMap<String, String>>,
    #[shape(required)]
    geometry: Option<GeofenceGeometry>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct BatchPutGeofenceResult {
    #[shape(required)]
    errors: Option<Vec<BatchPutGeofenceError>>,
    #[shape(required)]
    successes: Option<Vec<BatchPutGeofenceSuccess>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct BatchPutGeofenceError {
    #[shape(required)]
    error: Option<BatchItemError>,
    #[shape(required)]
    geofence_id: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct BatchPutGeofenceSuccess {
    #[shape(required)]
    create_time: Option<Timestamp>,
    #[shape(required)]
    geofence_id: Option<String>,
    #[shape(required)]
    update_time: Option<Timestamp>,
}

/// Input of `BatchEvaluateGeofences`: checks device positions against every
/// geofence in the collection and emits enter/exit events.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct BatchEvaluateGeofencesRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    collection_name: Option<String>,
    #[shape(required, length(min = 1, max = 10))]
    device_position_updates: Option<Vec<DevicePositionUpdate>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct BatchEvaluateGeofencesResult {
    #[shape(required)]
    errors: Option<Vec<BatchEvaluateGeofencesError>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct BatchEvaluateGeofencesError {
    #[shape(required, length(min = 1, max = 100))]
    device_id: Option<String>,
    #[shape(required)]
    error: Option<BatchItemError>,
    #[shape(required)]
    sample_time: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ForecastedGeofenceEventType;
    use locus_shape::{ShapeError, ShapeHash};

    fn square() -> Vec<Vec<f64>> {
        vec![
            vec![-5.716, -15.916],
            vec![-5.716, -15.896],
            vec![-5.736, -15.896],
            vec![-5.736, -15.916],
            vec![-5.716, -15.916],
        ]
    }

    #[test]
    fn tags_reject_duplicates_and_reset() {
        let mut request = CreateGeofenceCollectionRequest::new().with_collection_name("fleet");
        request
            .add_tags_entry("team", "logistics")
            .and_then(|r| r.add_tags_entry("env", "prod"))
            .unwrap();
        assert_eq!(request.tags().map(HashMap::len), Some(2));

        let err = request.add_tags_entry("team", "other").unwrap_err();
        assert!(matches!(err, ShapeError::DuplicateKey { field: "Tags", ref key } if key == "team"));
        assert_eq!(request.tags().unwrap()["team"], "logistics");

        request.clear_tags_entries();
        assert_eq!(request.tags(), None);
        request.add_tags_entry("team", "other").unwrap();
        assert_eq!(request.tags().unwrap()["team"], "other");
    }

    #[test]
    fn tag_order_does_not_affect_equality() {
        let mut a = CreateGeofenceCollectionRequest::new();
        a.add_tags_entry("x", "1").unwrap();
        a.add_tags_entry("y", "2").unwrap();
        let mut b = CreateGeofenceCollectionRequest::new();
        b.add_tags_entry("y", "2").unwrap();
        b.add_tags_entry("x", "1").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.shape_hash(), b.shape_hash());
        assert_eq!(a.to_string(), "{Tags: {x=1, y=2}}");
    }

    #[test]
    fn polygon_geometry_renders() {
        let geometry = GeofenceGeometry::new().with_polygon([square()]);
        let rendered = geometry.to_string();
        assert!(rendered.starts_with("{Polygon: [[[-5.716, -15.916], [-5.716, -15.896]"));
        assert!(!rendered.contains("Circle"));
    }

    #[test]
    fn geofence_id_accepts_unicode_letters() {
        let request = PutGeofenceRequest::new()
            .with_collection_name("fleet")
            .with_geofence_id("zone-Ü1")
            .with_geometry(
                GeofenceGeometry::new()
                    .with_circle(Circle::new().with_center([-123.1, 49.2]).with_radius(50.0)),
            );
        assert!(request.validate().is_empty());

        let bad = request.with_geofence_id("zone 1");
        let paths: Vec<_> = bad.validate().into_iter().map(|v| v.path).collect();
        assert_eq!(paths, vec!["GeofenceId"]);
    }

    #[test]
    fn batch_delete_ids_checked_individually() {
        let request = BatchDeleteGeofenceRequest::new()
            .with_collection_name("fleet")
            .with_geofence_ids(["a".to_string(), "b c".to_string()]);
        let violations = request.validate();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "GeofenceIds[1]");
    }

    #[test]
    fn geobuf_roundtrips_as_base64() {
        let geometry = GeofenceGeometry::new().with_geobuf(Blob::new(vec![1, 2, 3]));
        let json = serde_json::to_value(&geometry).unwrap();
        assert_eq!(json["Geobuf"], "AQID");
        let back: GeofenceGeometry = serde_json::from_value(json).unwrap();
        assert_eq!(back, geometry);
    }

    #[test]
    fn forecast_result_parses() {
        let json = r#"{
            "DistanceUnit": "Kilometers",
            "SpeedUnit": "KilometersPerHour",
            "ForecastedEvents": [{
                "EventId": "e-1", "EventType": "ENTER", "GeofenceId": "g-1",
                "IsDeviceInGeofence": false, "NearestDistance": 0.25,
                "ForecastedBreachTime": "2024-01-01T00:05:00Z"
            }]
        }"#;
        let result: ForecastGeofenceEventsResult = serde_json::from_str(json).unwrap();
        let event = &result.forecasted_events().unwrap()[0];
        assert_eq!(
            event.event_type().map(str::parse::<ForecastedGeofenceEventType>).transpose().unwrap(),
            Some(ForecastedGeofenceEventType::Enter)
        );
        assert_eq!(event.is_device_in_geofence(), Some(false));
        assert!(result.validate().is_empty());
    }

    #[test]
    fn batch_put_bounds_entries_and_checks_each() {
        let entry = |id: &str| {
            BatchPutGeofenceRequestEntry::new()
                .with_geofence_id(id)
                .with_geometry(GeofenceGeometry::new().with_polygon([square()]))
        };
        let request = BatchPutGeofenceRequest::new()
            .with_collection_name("fleet")
            .with_entries([entry("depot"), entry("yard 2")]);
        let paths: Vec<_> = request.validate().into_iter().map(|v| v.path).collect();
        assert_eq!(paths, vec!["Entries[1].GeofenceId"]);

        let crowded = request.with_entries((0..11).map(|i| entry(&format!("g{i}"))));
        let violations = crowded.validate();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "Entries");
    }

    #[test]
    fn batch_put_result_splits_outcomes() {
        let json = r#"{
            "Successes": [{
                "GeofenceId": "depot",
                "CreateTime": "2024-01-01T00:00:00Z",
                "UpdateTime": "2024-01-01T00:00:00Z"
            }],
            "Errors": [{
                "GeofenceId": "yard",
                "Error": {"Code": "ValidationError", "Message": "ring is not closed"}
            }]
        }"#;
        let result: BatchPutGeofenceResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.successes().map(<[_]>::len), Some(1));
        let error = result.errors().unwrap()[0].error().unwrap();
        assert_eq!(error.code(), Some("ValidationError"));
        assert!(result.validate().is_empty());
    }

    #[test]
    fn evaluate_requires_position_updates() {
        let request = BatchEvaluateGeofencesRequest::new().with_collection_name("fleet");
        let paths: Vec<_> = request.validate().into_iter().map(|v| v.path).collect();
        assert_eq!(paths, vec!["DevicePositionUpdates"]);

        let update = DevicePositionUpdate::new()
            .with_device_id("truck-7")
            .with_position([-123.1, 49.2])
            .with_sample_time("2024-01-01T00:00:00Z".parse::<Timestamp>().unwrap());
        assert!(request.with_device_position_updates([update]).validate().is_empty());
    }

    #[test]
    fn collection_update_and_delete() {
        let request = UpdateGeofenceCollectionRequest::new()
            .with_collection_name("fleet")
            .with_description("depots");
        assert_eq!(request.to_string(), "{CollectionName: fleet,Description: depots}");
        assert_eq!(DeleteGeofenceCollectionResult::new().to_string(), "{}");
    }
}
