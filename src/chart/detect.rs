// src/chart/detect.rs
use crate::model::PlotSpec;

const UNKNOWN_CHART_TYPE: &str = "Unknown";

/// Human-readable chart category from the first trace's type tag. Empty
/// data and a first trace without a tag both read as "Unknown".
pub fn detect(spec: &PlotSpec) -> String {
    match spec.data.first().and_then(|trace| trace.kind.as_deref()) {
        Some(kind) => capitalize(kind),
        None => UNKNOWN_CHART_TYPE.to_string(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
