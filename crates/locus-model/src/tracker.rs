//! Tracker resource and device position shapes, including the cellular and
//! Wi-Fi measurements used by `VerifyDevicePosition`.

use std::collections::HashMap;

use locus_shape::{Shape, Timestamp};
use serde::{Deserialize, Serialize};

use crate::geofence::BatchItemError;

/// Input of `VerifyDevicePosition`: checks a reported position against the
/// network measurements the device observed.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct VerifyDevicePositionRequest {
    #[shape(required)]
    device_state: Option<DeviceState>,
    distance_unit: Option<String>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    tracker_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct VerifyDevicePositionResult {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\p{L}\p{N}]+$")]
    device_id: Option<String>,
    #[shape(required)]
    distance_unit: Option<String>,
    #[shape(required)]
    inferred_state: Option<InferredState>,
    #[shape(required)]
    received_time: Option<Timestamp>,
    #[shape(required)]
    sample_time: Option<Timestamp>,
}

/// Position and network observations reported by a device.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeviceState {
    accuracy: Option<PositionalAccuracy>,
    cell_signals: Option<CellSignals>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\p{L}\p{N}]+$")]
    device_id: Option<String>,
    /// Public IPv4 address of the device, dotted-quad.
    #[shape(pattern = r"^(?:(?:25[0-5]|2[0-4]\d|1?\d?\d)\.){3}(?:25[0-5]|2[0-4]\d|1?\d?\d)$")]
    ipv4_address: Option<String>,
    #[shape(required, length(min = 2, max = 2))]
    position: Option<Vec<f64>>,
    #[shape(required)]
    sample_time: Option<Timestamp>,
    #[shape(wire = "WiFiAccessPoints")]
    #[serde(rename = "WiFiAccessPoints")]
    wifi_access_points: Option<Vec<WiFiAccessPoint>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct PositionalAccuracy {
    /// Radius in meters of the circle the true position lies in.
    #[shape(required, range(min = 0, max = 10000000))]
    horizontal: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct CellSignals {
    #[shape(required, length(min = 1, max = 16))]
    lte_cell_details: Option<Vec<LteCellDetails>>,
}

/// Serving LTE cell, with optional neighbor measurements.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct LteCellDetails {
    /// E-UTRAN cell identifier.
    #[shape(required, range(min = 0, max = 268435455))]
    cell_id: Option<i32>,
    local_id: Option<LteLocalId>,
    /// Mobile country code.
    #[shape(required, range(min = 200, max = 999))]
    mcc: Option<i32>,
    /// Mobile network code.
    #[shape(required, range(min = 0, max = 999))]
    mnc: Option<i32>,
    #[shape(length(min = 1, max = 32))]
    network_measurements: Option<Vec<LteNetworkMeasurements>>,
    nr_capable: Option<bool>,
    /// Reference signal received power, dBm.
    #[shape(range(min = -140, max = -44))]
    rsrp: Option<i32>,
    /// Reference signal received quality, dB.
    #[shape(range(min = -19.5, max = -3))]
    rsrq: Option<f64>,
    /// Tracking area code.
    #[shape(range(min = 0, max = 65535))]
    tac: Option<i32>,
    #[shape(range(min = 0, max = 1282))]
    timing_advance: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct LteLocalId {
    #[shape(required, range(min = 0, max = 262143))]
    earfcn: Option<i32>,
    /// Physical cell id.
    #[shape(required, range(min = 0, max = 503))]
    pci: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct LteNetworkMeasurements {
    #[shape(required, range(min = 0, max = 268435455))]
    cell_id: Option<i32>,
    #[shape(required, range(min = 0, max = 262143))]
    earfcn: Option<i32>,
    #[shape(required, range(min = 0, max = 503))]
    pci: Option<i32>,
    #[shape(range(min = -140, max = -44))]
    rsrp: Option<i32>,
    #[shape(range(min = -19.5, max = -3))]
    rsrq: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct WiFiAccessPoint {
    #[shape(
        required,
        length(min = 12, max = 17),
        pattern = r"^([0-9A-Fa-f]{2}[:-]?){5}([0-9A-Fa-f]{2})$"
    )]
    mac_address: Option<String>,
    /// Received signal strength, dBm.
    #[shape(required, range(min = -128, max = 0))]
    rss: Option<i32>,
}

/// Where the service believes the device is, and whether a proxy was seen.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct InferredState {
    accuracy: Option<PositionalAccuracy>,
    /// Distance between the reported and inferred positions.
    #[shape(range(min = 0))]
    deviation_distance: Option<f64>,
    #[shape(length(min = 2, max = 2))]
    position: Option<Vec<f64>>,
    #[shape(required)]
    proxy_detected: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct GetDevicePositionRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\p{L}\p{N}]+$")]
    device_id: Option<String>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    tracker_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct GetDevicePositionResult {
    accuracy: Option<PositionalAccuracy>,
    #[shape(length(min = 1, max = 100))]
    device_id: Option<String>,
    #[shape(required, length(min = 2, max = 2))]
    position: Option<Vec<f64>>,
    #[shape(length(min = 0, max = 3))]
    position_properties: Option<HashMap<String, String>>,
    #[shape(required)]
    received_time: Option<Timestamp>,
    #[shape(required)]
    sample_time: Option<Timestamp>,
}

/// One position sample reported by a device.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct DevicePositionUpdate {
    accuracy: Option<PositionalAccuracy>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\p{L}\p{N}]+$")]
    device_id: Option<String>,
    #[shape(required, length(min = 2, max = 2))]
    position: Option<Vec<f64>>,
    #[shape(length(min = 0, max = 3))]
    position_properties: Option<HashMap<String, String>>,
    #[shape(required)]
    sample_time: Option<Timestamp>,
}

/// A stored position, as returned by history and batch lookups.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct DevicePosition {
    accuracy: Option<PositionalAccuracy>,
    #[shape(length(min = 1, max = 100))]
    device_id: Option<String>,
    #[shape(required, length(min = 2, max = 2))]
    position: Option<Vec<f64>>,
    #[shape(length(min = 0, max = 3))]
    position_properties: Option<HashMap<String, String>>,
    #[shape(required)]
    received_time: Option<Timestamp>,
    #[shape(required)]
    sample_time: Option<Timestamp>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct BatchUpdateDevicePositionRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    tracker_name: Option<String>,
    #[shape(required, length(min = 1, max = 10))]
    updates: Option<Vec<DevicePositionUpdate>>,
}

/// Only updates that were rejected are reported.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct BatchUpdateDevicePositionResult {
    #[shape(required)]
    errors: Option<Vec<BatchUpdateDevicePositionError>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct BatchUpdateDevicePositionError {
    #[shape(required, length(min = 1, max = 100))]
    device_id: Option<String>,
    #[shape(required)]
    error: Option<BatchItemError>,
    #[shape(required)]
    sample_time: Option<Timestamp>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct BatchGetDevicePositionRequest {
    #[shape(required, length(min = 1, max = 10), pattern = r"^[-._\p{L}\p{N}]+$")]
    device_ids: Option<Vec<String>>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    tracker_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct BatchGetDevicePositionResult {
    #[shape(required)]
    device_positions: Option<Vec<DevicePosition>>,
    #[shape(required)]
    errors: Option<Vec<BatchGetDevicePositionError>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct BatchGetDevicePositionError {
    #[shape(required, length(min = 1, max = 100))]
    device_id: Option<String>,
    #[shape(required)]
    error: Option<BatchItemError>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct BatchDeleteDevicePositionHistoryRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\p{L}\p{N}]+$")]
    device_ids: Option<Vec<String>>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    tracker_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct BatchDeleteDevicePositionHistoryResult {
    #[shape(required)]
    errors: Option<Vec<BatchDeleteDevicePositionHistoryError>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct BatchDeleteDevicePositionHistoryError {
    #[shape(required, length(min = 1, max = 100))]
    device_id: Option<String>,
    #[shape(required)]
    error: Option<BatchItemError>,
}

/// Input of `GetDevicePositionHistory`. History is kept for 30 days; the
/// time window defaults to the last 24 hours.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct GetDevicePositionHistoryRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\p{L}\p{N}]+$")]
    device_id: Option<String>,
    end_time_exclusive: Option<Timestamp>,
    #[shape(range(min = 1, max = 100))]
    max_results: Option<i32>,
    #[shape(length(min = 1, max = 2000))]
    next_token: Option<String>,
    start_time_inclusive: Option<Timestamp>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    tracker_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct GetDevicePositionHistoryResult {
    /// Ordered by sample time, oldest first.
    #[shape(required)]
    device_positions: Option<Vec<DevicePosition>>,
    #[shape(length(min = 1, max = 2000))]
    next_token: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct ListDevicePositionsRequest {
    filter_geometry: Option<TrackingFilterGeometry>,
    #[shape(range(min = 1, max = 100))]
    max_results: Option<i32>,
    #[shape(length(min = 1, max = 2000))]
    next_token: Option<String>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    tracker_name: Option<String>,
}

/// Restricts `ListDevicePositions` to devices inside a polygon.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct TrackingFilterGeometry {
    #[shape(length(min = 1))]
    polygon: Option<Vec<Vec<Vec<f64>>>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct ListDevicePositionsResult {
    #[shape(required)]
    entries: Option<Vec<ListDevicePositionsResponseEntry>>,
    #[shape(length(min = 1, max = 2000))]
    next_token: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListDevicePositionsResponseEntry {
    accuracy: Option<PositionalAccuracy>,
    #[shape(required, length(min = 1, max = 100))]
    device_id: Option<String>,
    #[shape(required, length(min = 2, max = 2))]
    position: Option<Vec<f64>>,
    #[shape(length(min = 0, max = 3))]
    position_properties: Option<HashMap<String, String>>,
    #[shape(required)]
    sample_time: Option<Timestamp>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct CreateTrackerRequest {
    #[shape(length(min = 0, max = 1000))]
    description: Option<String>,
    /// Send device position events to EventBridge.
    event_bridge_enabled: Option<bool>,
    kms_key_enable_geospatial_queries: Option<bool>,
    #[shape(length(min = 1, max = 2048))]
    kms_key_id: Option<String>,
    /// `TimeBased`, `DistanceBased` or `AccuracyBased`.
    position_filtering: Option<String>,
    pricing_plan: Option<String>,
    pricing_plan_data_source: Option<String>,
    #[shape(length(min = 0, max = 50))]
    tags: Option<HashMap<String, String>>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    tracker_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct CreateTrackerResult {
    #[shape(required)]
    create_time: Option<Timestamp>,
    #[shape(required, length(min = 0, max = 1600))]
    tracker_arn: Option<String>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    tracker_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct DeleteTrackerRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    tracker_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default)]
#[shape(result)]
pub struct DeleteTrackerResult {}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct DescribeTrackerRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    tracker_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct DescribeTrackerResult {
    #[shape(required)]
    create_time: Option<Timestamp>,
    #[shape(required, length(min = 0, max = 1000))]
    description: Option<String>,
    event_bridge_enabled: Option<bool>,
    kms_key_enable_geospatial_queries: Option<bool>,
    #[shape(length(min = 1, max = 2048))]
    kms_key_id: Option<String>,
    position_filtering: Option<String>,
    pricing_plan: Option<String>,
    pricing_plan_data_source: Option<String>,
    #[shape(length(min = 0, max = 50))]
    tags: Option<HashMap<String, String>>,
    #[shape(required, length(min = 0, max = 1600))]
    tracker_arn: Option<String>,
    #[shape(required, length(min = 1, max = 100))]
    tracker_name: Option<String>,
    #[shape(required)]
    update_time: Option<Timestamp>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct ListTrackersRequest {
    #[shape(range(min = 1, max = 100))]
    max_results: Option<i32>,
    #[shape(length(min = 1, max = 60000))]
    next_token: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct ListTrackersResult {
    #[shape(required)]
    entries: Option<Vec<ListTrackersResponseEntry>>,
    #[shape(length(min = 1, max = 60000))]
    next_token: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListTrackersResponseEntry {
    #[shape(required)]
    create_time: Option<Timestamp>,
    #[shape(required, length(min = 0, max = 1000))]
    description: Option<String>,
    pricing_plan: Option<String>,
    pricing_plan_data_source: Option<String>,
    #[shape(required, length(min = 1, max = 100))]
    tracker_name: Option<String>,
    #[shape(required)]
    update_time: Option<Timestamp>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct UpdateTrackerRequest {
    #[shape(length(min = 0, max = 1000))]
    description: Option<String>,
    event_bridge_enabled: Option<bool>,
    kms_key_enable_geospatial_queries: Option<bool>,
    position_filtering: Option<String>,
    pricing_plan: Option<String>,
    pricing_plan_data_source: Option<String>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    tracker_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct UpdateTrackerResult {
    #[shape(required, length(min = 0, max = 1600))]
    tracker_arn: Option<String>,
    #[shape(required, length(min = 1, max = 100))]
    tracker_name: Option<String>,
    #[shape(required)]
    update_time: Option<Timestamp>,
}

/// Input of `AssociateTrackerConsumer`: links a geofence collection so the
/// tracker's position updates are evaluated against it.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct AssociateTrackerConsumerRequest {
    #[shape(
        required,
        length(min = 0, max = 1600),
        pattern = r"^arn(:[a-z0-9]+([.-][a-z0-9]+)*){2}(:([a-z0-9]+([.-][a-z0-9]+)*)?){2}:([^/].*)?$"
    )]
    consumer_arn: Option<String>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    tracker_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default)]
#[shape(result)]
pub struct AssociateTrackerConsumerResult {}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct DisassociateTrackerConsumerRequest {
    #[shape(
        required,
        length(min = 0, max = 1600),
        pattern = r"^arn(:[a-z0-9]+([.-][a-z0-9]+)*){2}(:([a-z0-9]+([.-][a-z0-9]+)*)?){2}:([^/].*)?$"
    )]
    consumer_arn: Option<String>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    tracker_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default)]
#[shape(result)]
pub struct DisassociateTrackerConsumerResult {}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct ListTrackerConsumersRequest {
    #[shape(range(min = 1, max = 100))]
    max_results: Option<i32>,
    #[shape(length(min = 1, max = 60000))]
    next_token: Option<String>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    tracker_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct ListTrackerConsumersResult {
    #[shape(required)]
    consumer_arns: Option<Vec<String>>,
    #[shape(length(min = 1, max = 60000))]
    next_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use locus_shape::ViolationReason;

    fn serving_cell() -> LteCellDetails {
        LteCellDetails::new()
            .with_cell_id(123_456)
            .with_mcc(262)
            .with_mnc(1)
            .with_rsrp(-90)
            .with_rsrq(-10.5)
            .with_local_id(LteLocalId::new().with_earfcn(6300).with_pci(42))
    }

    fn device_state() -> DeviceState {
        DeviceState::new()
            .with_device_id("truck-7")
            .with_position([13.4, 52.5])
            .with_sample_time(chrono::Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap())
            .with_cell_signals(CellSignals::new().with_lte_cell_details([serving_cell()]))
            .with_wifi_access_points([WiFiAccessPoint::new()
                .with_mac_address("A0:B1:C2:D3:E4:F5")
                .with_rss(-70)])
    }

    #[test]
    fn well_formed_request_validates() {
        let request = VerifyDevicePositionRequest::new()
            .with_tracker_name("fleet-tracker")
            .with_device_state(device_state());
        assert!(request.validate().is_empty());
    }

    #[test]
    fn negative_ranges_are_checked() {
        let cell = serving_cell().with_rsrp(-30).with_rsrq(-20.0);
        let reasons: Vec<_> = cell.validate().into_iter().map(|v| (v.path, v.reason)).collect();
        assert_eq!(
            reasons,
            vec![
                (
                    "Rsrp".to_string(),
                    ViolationReason::Range { min: Some(-140.0), max: Some(-44.0), actual: -30.0 }
                ),
                (
                    "Rsrq".to_string(),
                    ViolationReason::Range { min: Some(-19.5), max: Some(-3.0), actual: -20.0 }
                ),
            ]
        );
    }

    #[test]
    fn wifi_member_keeps_service_spelling() {
        let json = serde_json::to_value(device_state()).unwrap();
        assert!(json.get("WiFiAccessPoints").is_some());
        assert!(json.get("WifiAccessPoints").is_none());
        assert!(device_state().to_string().contains("WiFiAccessPoints: [{MacAddress: A0:B1:C2:D3:E4:F5,Rss: -70}]"));
    }

    #[test]
    fn bad_mac_and_ip_are_reported() {
        let state = device_state()
            .with_ipv4_address("300.1.1.1")
            .with_wifi_access_points([WiFiAccessPoint::new().with_mac_address("zz:zz").with_rss(-50)]);
        let paths: Vec<_> = state.validate().into_iter().map(|v| v.path).collect();
        assert_eq!(
            paths,
            vec![
                "Ipv4Address",
                "WiFiAccessPoints[0].MacAddress",
                "WiFiAccessPoints[0].MacAddress",
            ]
        );
    }

    #[test]
    fn result_parses_timestamps() {
        let json = r#"{
            "DeviceId": "truck-7",
            "DistanceUnit": "Kilometers",
            "InferredState": {"Position": [13.4, 52.5], "ProxyDetected": false},
            "ReceivedTime": "2024-03-01T08:00:01.250Z",
            "SampleTime": "2024-03-01T08:00:00Z"
        }"#;
        let result: VerifyDevicePositionResult = serde_json::from_str(json).unwrap();
        assert_eq!(
            result.inferred_state().and_then(InferredState::proxy_detected),
            Some(false)
        );
        assert!(result.to_string().contains("ReceivedTime: 2024-03-01T08:00:01.250Z"));
        assert!(result.validate().is_empty());
    }

    #[test]
    fn batch_update_checks_each_sample() {
        let update = |id: &str| {
            DevicePositionUpdate::new()
                .with_device_id(id)
                .with_position([13.4, 52.5])
                .with_sample_time(chrono::Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap())
        };
        let request = BatchUpdateDevicePositionRequest::new()
            .with_tracker_name("fleet-tracker")
            .with_updates([update("truck-7"), update("truck 8").with_position([13.4])]);
        let paths: Vec<_> = request.validate().into_iter().map(|v| v.path).collect();
        assert_eq!(paths, vec!["Updates[1].DeviceId", "Updates[1].Position"]);
    }

    #[test]
    fn history_delete_allows_a_hundred_devices() {
        let request = BatchDeleteDevicePositionHistoryRequest::new()
            .with_tracker_name("fleet-tracker")
            .with_device_ids((0..100).map(|i| format!("truck-{i}")));
        assert!(request.validate().is_empty());
        let crowded = request.with_device_ids((0..101).map(|i| format!("truck-{i}")));
        assert!(matches!(
            crowded.validate()[0].reason,
            ViolationReason::Length { max: Some(100), actual: 101, .. }
        ));
    }

    #[test]
    fn batch_get_result_parses_positions_and_errors() {
        let json = r#"{
            "DevicePositions": [{
                "DeviceId": "truck-7",
                "Position": [13.4, 52.5],
                "PositionProperties": {"driver": "ana"},
                "ReceivedTime": "2024-03-01T08:00:01Z",
                "SampleTime": "2024-03-01T08:00:00Z"
            }],
            "Errors": [{
                "DeviceId": "truck-9",
                "Error": {"Code": "ResourceNotFoundError"}
            }]
        }"#;
        let result: BatchGetDevicePositionResult = serde_json::from_str(json).unwrap();
        let position = &result.device_positions().unwrap()[0];
        assert_eq!(position.position_properties().unwrap()["driver"], "ana");
        assert_eq!(result.errors().unwrap()[0].device_id(), Some("truck-9"));
        assert!(result.validate().is_empty());
    }

    #[test]
    fn list_positions_filters_by_polygon() {
        let ring = vec![
            vec![13.0, 52.0],
            vec![14.0, 52.0],
            vec![14.0, 53.0],
            vec![13.0, 52.0],
        ];
        let request = ListDevicePositionsRequest::new()
            .with_tracker_name("fleet-tracker")
            .with_filter_geometry(TrackingFilterGeometry::new().with_polygon([ring]));
        assert!(request.validate().is_empty());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["FilterGeometry"]["Polygon"][0][1][0], 14.0);
    }

    #[test]
    fn consumer_arn_must_be_an_arn() {
        let request = AssociateTrackerConsumerRequest::new()
            .with_tracker_name("fleet-tracker")
            .with_consumer_arn("arn:aws:geo:us-east-1:123456789012:geofence-collection/fleet");
        assert!(request.validate().is_empty());
        let paths: Vec<_> = request
            .with_consumer_arn("geofence-collection/fleet")
            .validate()
            .into_iter()
            .map(|v| v.path)
            .collect();
        assert_eq!(paths, vec!["ConsumerArn"]);
    }

    #[test]
    fn tracker_describe_renders_flags() {
        let json = r#"{
            "TrackerName": "fleet-tracker",
            "TrackerArn": "arn:aws:geo:us-east-1:123456789012:tracker/fleet-tracker",
            "Description": "",
            "PositionFiltering": "DistanceBased",
            "EventBridgeEnabled": true,
            "CreateTime": "2024-03-01T08:00:00Z",
            "UpdateTime": "2024-03-01T08:00:00Z"
        }"#;
        let result: DescribeTrackerResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.event_bridge_enabled(), Some(true));
        assert!(result.to_string().contains("EventBridgeEnabled: true"));
        assert!(result.validate().is_empty());
    }
}
