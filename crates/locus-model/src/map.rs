//! Map resource and rendering-asset shapes.

use std::collections::HashMap;

use locus_shape::{Blob, Shape, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct CreateMapRequest {
    #[shape(required)]
    configuration: Option<MapConfiguration>,
    #[shape(length(min = 0, max = 1000))]
    description: Option<String>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    map_name: Option<String>,
    pricing_plan: Option<String>,
    #[shape(length(min = 0, max = 50))]
    tags: Option<HashMap<String, String>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct CreateMapResult {
    #[shape(required)]
    create_time: Option<Timestamp>,
    #[shape(required, length(min = 0, max = 1600))]
    map_arn: Option<String>,
    #[shape(required, length(min = 1, max = 100))]
    map_name: Option<String>,
}

/// Style and data options of a map resource.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct MapConfiguration {
    /// Optional layers, e.g. `POI`, the style supports.
    #[shape(length(min = 0, max = 10))]
    custom_layers: Option<Vec<String>>,
    /// ISO 3166 alpha-3 country code for disputed borders.
    #[shape(length(min = 3, max = 3), pattern = r"^[A-Z]{3}$")]
    political_view: Option<String>,
    /// Map style, e.g. `VectorEsriStreets` or `VectorHereExplore`.
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    style: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct DescribeMapRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    map_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct DescribeMapResult {
    #[shape(required)]
    configuration: Option<MapConfiguration>,
    #[shape(required)]
    create_time: Option<Timestamp>,
    #[shape(required)]
    data_source: Option<String>,
    #[shape(required, length(min = 0, max = 1000))]
    description: Option<String>,
    #[shape(required, length(min = 0, max = 1600))]
    map_arn: Option<String>,
    #[shape(required, length(min = 1, max = 100))]
    map_name: Option<String>,
    pricing_plan: Option<String>,
    #[shape(length(min = 0, max = 50))]
    tags: Option<HashMap<String, String>>,
    #[shape(required)]
    update_time: Option<Timestamp>,
}

/// Input of `GetMapTile`: one vector tile addressed by zoom and tile
/// coordinates.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct GetMapTileRequest {
    /// API key authorized for the map.
    #[shape(length(min = 0, max = 1000))]
    key: Option<String>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    map_name: Option<String>,
    #[shape(required, pattern = r"^\d+$")]
    x: Option<String>,
    #[shape(required, pattern = r"^\d+$")]
    y: Option<String>,
    #[shape(required, pattern = r"^\d+$")]
    z: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct GetMapTileResult {
    /// Tile body, usually `application/vnd.mapbox-vector-tile`.
    blob: Option<Blob>,
    cache_control: Option<String>,
    content_type: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct GetMapGlyphsRequest {
    /// Comma-separated font names, e.g. `Noto Sans Regular,Arial Unicode MS Regular`.
    #[shape(required)]
    font_stack: Option<String>,
    /// 256-codepoint range, e.g. `0-255.pbf`.
    #[shape(required, pattern = r"^[0-9]+-[0-9]+\.pbf$")]
    font_unicode_range: Option<String>,
    #[shape(length(min = 0, max = 1000))]
    key: Option<String>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    map_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct GetMapGlyphsResult {
    blob: Option<Blob>,
    cache_control: Option<String>,
    content_type: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct GetMapStyleDescriptorRequest {
    #[shape(length(min = 0, max = 1000))]
    key: Option<String>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    map_name: Option<String>,
}

/// Output of `GetMapStyleDescriptor`: a MapLibre style document.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct GetMapStyleDescriptorResult {
    blob: Option<Blob>,
    cache_control: Option<String>,
    content_type: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct GetMapSpritesRequest {
    /// `sprites.png`, `sprites@2x.png`, `sprites.json` or `sprites@2x.json`.
    #[shape(required, pattern = r"^sprites(@2x)?\.(png|json)$")]
    file_name: Option<String>,
    #[shape(length(min = 0, max = 1000))]
    key: Option<String>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    map_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct GetMapSpritesResult {
    blob: Option<Blob>,
    cache_control: Option<String>,
    content_type: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct DeleteMapRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    map_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default)]
#[shape(result)]
pub struct DeleteMapResult {}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct ListMapsRequest {
    #[shape(range(min = 1, max = 100))]
    max_results: Option<i32>,
    #[shape(length(min = 1, max = 60000))]
    next_token: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct ListMapsResult {
    #[shape(required)]
    entries: Option<Vec<ListMapsResponseEntry>>,
    #[shape(length(min = 1, max = 60000))]
    next_token: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListMapsResponseEntry {
    #[shape(required)]
    create_time: Option<Timestamp>,
    #[shape(required)]
    data_source: Option<String>,
    #[shape(required, length(min = 0, max = 1000))]
    description: Option<String>,
    #[shape(required, length(min = 1, max = 100))]
    map_name: Option<String>,
    pricing_plan: Option<String>,
    #[shape(required)]
    update_time: Option<Timestamp>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct UpdateMapRequest {
    configuration_update: Option<MapConfigurationUpdate>,
    #[shape(length(min = 0, max = 1000))]
    description: Option<String>,
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    map_name: Option<String>,
    pricing_plan: Option<String>,
}

/// Style options that may change after creation. The style itself is fixed.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct MapConfigurationUpdate {
    #[shape(length(min = 0, max = 10))]
    custom_layers: Option<Vec<String>>,
    /// An empty string clears the political view.
    #[shape(length(min = 0, max = 3), pattern = r"^([A-Z]{3})?$")]
    political_view: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct UpdateMapResult {
    #[shape(required, length(min = 0, max = 1600))]
    map_arn: Option<String>,
    #[shape(required, length(min = 1, max = 100))]
    map_name: Option<String>,
    #[shape(required)]
    update_time: Option<Timestamp>,
}
