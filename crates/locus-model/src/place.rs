//! Place index shapes: the index resource itself, geocoding by text and
//! reverse geocoding by position.

use std::collections::HashMap;

use locus_shape::{Shape, Timestamp};
use serde::{Deserialize, Serialize};

/// Input of `SearchPlaceIndexForText`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct SearchPlaceIndexForTextRequest {
    /// Results closer to this position rank higher. Exclusive with
    /// `FilterBBox`.
    #[shape(length(min = 2, max = 2))]
    bias_position: Option<Vec<f64>>,
    /// `[min_lon, min_lat, max_lon, max_lat]`.
    #[shape(wire = "FilterBBox", length(min = 4, max = 4))]
    #[serde(rename = "FilterBBox")]
    filter_bbox: Option<Vec<f64>>,
    #[shape(length(min = 1, max = 5))]
    filter_categories: Option<Vec<String>>,
    /// ISO 3166 alpha-3 country codes.
    #[shape(length(min = 1, max = 100), pattern = r"^[A-Z]{3}$")]
    filter_countries: Option<Vec<String>>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    index_name: Option<String>,
    #[shape(length(min = 0, max = 1000))]
    key: Option<String>,
    /// BCP 47 language tag, e.g. `en` or `pt-BR`.
    #[shape(length(min = 2, max = 35))]
    language: Option<String>,
    #[shape(range(min = 1, max = 50))]
    max_results: Option<i32>,
    #[shape(required, length(min = 1, max = 200))]
    text: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct SearchPlaceIndexForTextResult {
    /// Ordered by relevance.
    #[shape(required)]
    results: Option<Vec<SearchForTextResult>>,
    #[shape(required)]
    summary: Option<SearchPlaceIndexForTextSummary>,
}

/// Echo of the search parameters, plus the bounding box of all results.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct SearchPlaceIndexForTextSummary {
    #[shape(length(min = 2, max = 2))]
    bias_position: Option<Vec<f64>>,
    #[shape(required)]
    data_source: Option<String>,
    #[shape(wire = "FilterBBox", length(min = 4, max = 4))]
    #[serde(rename = "FilterBBox")]
    filter_bbox: Option<Vec<f64>>,
    #[shape(length(min = 1, max = 5))]
    filter_categories: Option<Vec<String>>,
    #[shape(length(min = 1, max = 100))]
    filter_countries: Option<Vec<String>>,
    #[shape(length(min = 2, max = 35))]
    language: Option<String>,
    #[shape(range(min = 1, max = 50))]
    max_results: Option<i32>,
    #[shape(wire = "ResultBBox", length(min = 4, max = 4))]
    #[serde(rename = "ResultBBox")]
    result_bbox: Option<Vec<f64>>,
    #[shape(required)]
    text: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct SearchForTextResult {
    /// Meters from `BiasPosition`; only present when a bias was given.
    #[shape(range(min = 0))]
    distance: Option<f64>,
    #[shape(required)]
    place: Option<Place>,
    #[shape(length(min = 0, max = 100))]
    place_id: Option<String>,
    /// 0 to 1; 1 means an exact match.
    #[shape(range(min = 0, max = 1))]
    relevance: Option<f64>,
}

/// Input of `SearchPlaceIndexForPosition` (reverse geocoding).
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct SearchPlaceIndexForPositionRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    index_name: Option<String>,
    #[shape(length(min = 0, max = 1000))]
    key: Option<String>,
    #[shape(length(min = 2, max = 35))]
    language: Option<String>,
    #[shape(range(min = 1, max = 50))]
    max_results: Option<i32>,
    #[shape(required, length(min = 2, max = 2))]
    position: Option<Vec<f64>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct SearchPlaceIndexForPositionResult {
    /// Ordered nearest first.
    #[shape(required)]
    results: Option<Vec<SearchForPositionResult>>,
    #[shape(required)]
    summary: Option<SearchPlaceIndexForPositionSummary>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct SearchPlaceIndexForPositionSummary {
    #[shape(required)]
    data_source: Option<String>,
    #[shape(length(min = 2, max = 35))]
    language: Option<String>,
    #[shape(range(min = 1, max = 50))]
    max_results: Option<i32>,
    #[shape(required, length(min = 2, max = 2))]
    position: Option<Vec<f64>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct SearchForPositionResult {
    #[shape(required, range(min = 0))]
    distance: Option<f64>,
    #[shape(required)]
    place: Option<Place>,
    #[shape(length(min = 0, max = 100))]
    place_id: Option<String>,
}

/// Geocoded address or point of interest.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct Place {
    address_number: Option<String>,
    #[shape(length(min = 1, max = 10))]
    categories: Option<Vec<String>>,
    /// ISO 3166 alpha-3 country code.
    country: Option<String>,
    #[shape(required)]
    geometry: Option<PlaceGeometry>,
    /// Position estimated between known address points.
    interpolated: Option<bool>,
    /// Full formatted address, e.g. `123 Any Street, Any Town, USA`.
    label: Option<String>,
    municipality: Option<String>,
    neighborhood: Option<String>,
    postal_code: Option<String>,
    region: Option<String>,
    street: Option<String>,
    sub_municipality: Option<String>,
    sub_region: Option<String>,
    #[shape(length(min = 1, max = 10))]
    supplemental_categories: Option<Vec<String>>,
    time_zone: Option<TimeZone>,
    unit_number: Option<String>,
    unit_type: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct PlaceGeometry {
    #[shape(length(min = 2, max = 2))]
    point: Option<Vec<f64>>,
}

/// IANA time zone of a place.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct TimeZone {
    #[shape(required)]
    name: Option<String>,
    /// Seconds from UTC.
    offset: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct CreatePlaceIndexRequest {
    /// `Esri`, `Grab` or `Here`. Fixed for the life of the index.
    #[shape(required)]
    data_source: Option<String>,
    data_source_configuration: Option<DataSourceConfiguration>,
    #[shape(length(min = 0, max = 1000))]
    description: Option<String>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    index_name: Option<String>,
    pricing_plan: Option<String>,
    #[shape(length(min = 0, max = 50))]
    tags: Option<HashMap<String, String>>,
}

/// How search results may be used.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct DataSourceConfiguration {
    /// `SingleUse` (the default) or `Storage`, which allows keeping results.
    intended_use: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct CreatePlaceIndexResult {
    #[shape(required)]
    create_time: Option<Timestamp>,
    #[shape(required, length(min = 0, max = 1600))]
    index_arn: Option<String>,
    #[shape(required, length(min = 1, max = 100))]
    index_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct DeletePlaceIndexRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    index_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default)]
#[shape(result)]
pub struct DeletePlaceIndexResult {}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct DescribePlaceIndexRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    index_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct DescribePlaceIndexResult {
    #[shape(required)]
    create_time: Option<Timestamp>,
    #[shape(required)]
    data_source: Option<String>,
    #[shape(required)]
    data_source_configuration: Option<DataSourceConfiguration>,
    #[shape(required, length(min = 0, max = 1000))]
    description: Option<String>,
    #[shape(required, length(min = 0, max = 1600))]
    index_arn: Option<String>,
    #[shape(required, length(min = 1, max = 100))]
    index_name: Option<String>,
    pricing_plan: Option<String>,
    #[shape(length(min = 0, max = 50))]
    tags: Option<HashMap<String, String>>,
    #[shape(required)]
    update_time: Option<Timestamp>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct ListPlaceIndexesRequest {
    #[shape(range(min = 1, max = 100))]
    max_results: Option<i32>,
    #[shape(length(min = 1, max = 60000))]
    next_token: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct ListPlaceIndexesResult {
    #[shape(required)]
    entries: Option<Vec<ListPlaceIndexesResponseEntry>>,
    #[shape(length(min = 1, max = 60000))]
    next_token: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListPlaceIndexesResponseEntry {
    #[shape(required)]
    create_time: Option<Timestamp>,
    #[shape(required)]
    data_source: Option<String>,
    #[shape(required, length(min = 0, max = 1000))]
    description: Option<String>,
    #[shape(required, length(min = 1, max = 100))]
    index_name: Option<String>,
    pricing_plan: Option<String>,
    #[shape(required)]
    update_time: Option<Timestamp>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct UpdatePlaceIndexRequest {
    data_source_configuration: Option<DataSourceConfiguration>,
    #[shape(length(min = 0, max = 1000))]
    description: Option<String>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    index_name: Option<String>,
    pricing_plan: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct UpdatePlaceIndexResult {
    #[shape(required, length(min = 0, max = 1600))]
    index_arn: Option<String>,
    #[shape(required, length(min = 1, max = 100))]
    index_name: Option<String>,
    #[shape(required)]
    update_time: Option<Timestamp>,
}
