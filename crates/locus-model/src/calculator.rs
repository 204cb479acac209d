//! Route calculator resource shapes. A calculator fixes the data provider
//! that `CalculateRoute` and `CalculateRouteMatrix` use.

use std::collections::HashMap;

use locus_shape::{Shape, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct CreateRouteCalculatorRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    calculator_name: Option<String>,
    /// `Esri`, `Grab` or `Here`. Fixed for the life of the calculator.
    #[shape(required)]
    data_source: Option<String>,
    #[shape(length(min = 0, max = 1000))]
    description: Option<String>,
    pricing_plan: Option<String>,
    #[shape(length(min = 0, max = 50))]
    tags: Option<HashMap<String, String>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct CreateRouteCalculatorResult {
    #[shape(required, length(min = 0, max = 1600))]
    calculator_arn: Option<String>,
    #[shape(required, length(min = 1, max = 100))]
    calculator_name: Option<String>,
    #[shape(required)]
    create_time: Option<Timestamp>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct DeleteRouteCalculatorRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    calculator_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default)]
#[shape(result)]
pub struct DeleteRouteCalculatorResult {}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct DescribeRouteCalculatorRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    calculator_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct DescribeRouteCalculatorResult {
    #[shape(required, length(min = 0, max = 1600))]
    calculator_arn: Option<String>,
    #[shape(required, length(min = 1, max = 100))]
    calculator_name: Option<String>,
    #[shape(required)]
    create_time: Option<Timestamp>,
    #[shape(required)]
    data_source: Option<String>,
    #[shape(required, length(min = 0, max = 1000))]
    description: Option<String>,
    pricing_plan: Option<String>,
    #[shape(length(min = 0, max = 50))]
    tags: Option<HashMap<String, String>>,
    #[shape(required)]
    update_time: Option<Timestamp>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct ListRouteCalculatorsRequest {
    #[shape(range(min = 1, max = 100))]
    max_results: Option<i32>,
    #[shape(length(min = 1, max = 60000))]
    next_token: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct ListRouteCalculatorsResult {
    #[shape(required)]
    entries: Option<Vec<ListRouteCalculatorsResponseEntry>>,
    #[shape(length(min = 1, max = 60000))]
    next_token: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListRouteCalculatorsResponseEntry {
    #[shape(required, length(min = 1, max = 100))]
    calculator_name: Option<String>,
    #[shape(required)]
    create_time: Option<Timestamp>,
    #[shape(required)]
    data_source: Option<String>,
    #[shape(required, length(min = 0, max = 1000))]
    description: Option<String>,
    pricing_plan: Option<String>,
    #[shape(required)]
    update_time: Option<Timestamp>,
}

/// Input of `UpdateRouteCalculator`. Absent members keep their current value.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(request)]
pub struct UpdateRouteCalculatorRequest {
    #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
    calculator_name: Option<String>,
    #[shape(length(min = 0, max = 1000))]
    description: Option<String>,
    pricing_plan: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Shape)]
#[serde(default, rename_all = "PascalCase")]
#[shape(result)]
pub struct UpdateRouteCalculatorResult {
    #[shape(required, length(min = 0, max = 1600))]
    calculator_arn: Option<String>,
    #[shape(required, length(min = 1, max = 100))]
    calculator_name: Option<String>,
    #[shape(required)]
    update_time: Option<Timestamp>,
}
