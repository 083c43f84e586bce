// src/model/plot.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// Declarative description of a chart, as emitted by the plot generator.
// Trace fields that carry point data stay raw JSON values: their shape is
// validated when the chart is built, not when the file is loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlotSpec {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<TraceSpec>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub layout: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TraceSpec {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub textposition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
