//! Resource tagging shapes, shared by every taggable resource type.

use std::collections::HashMap;

use locus_shape::Shape;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct ListTagsForResourceRequest {
    #[shape(
        required,
        length(min = 0, max = 1600),
        pattern = r"^arn(:[a-z0-9]+([.-][a-z0-9]+)*){2}(:([a-z0-9]+([.-][a-z0-9]+)*)?){2}:([^/].*)?$"
    )]
    resource_arn: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct ListTagsForResourceResult {
    #[shape(length(min = 0, max = 50))]
    tags: Option<HashMap<String, String>>,
}

/// Input of `TagResource`: adds tags, overwriting values of existing keys.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct TagResourceRequest {
    #[shape(
        required,
        length(min = 0, max = 1600),
        pattern = r"^arn(:[a-z0-9]+([.-][a-z0-9]+)*){2}(:([a-z0-9]+([.-][a-z0-9]+)*)?){2}:([^/].*)?$"
    )]
    resource_arn: Option<String>,
    #[shape(required, length(min = 0, max = 50))]
    tags: Option<HashMap<String, String>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default)]
#[shape(result)]
pub struct TagResourceResult {}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct UntagResourceRequest {
    #[shape(
        required,
        length(min = 0, max = 1600),
        pattern = r"^arn(:[a-z0-9]+([.-][a-z0-9]+)*){2}(:([a-z0-9]+([.-][a-z0-9]+)*)?){2}:([^/].*)?$"
    )]
    resource_arn: Option<String>,
    #[shape(required, length(min = 1, max = 50))]
    tag_keys: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default)]
#[shape(result)]
pub struct UntagResourceResult {}
