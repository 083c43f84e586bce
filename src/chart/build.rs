// src/chart/build.rs
use anyhow::{anyhow, Result};
use serde_json::Value;

use crate::chart::layout::Layout;
use crate::chart::trace::{AxisValues, BarTrace, LineTrace, PieTrace, Trace};
use crate::model::{PlotSpec, TraceSpec};

// The renderable result of mapping a plot spec: traces in input order plus
// the merged layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub traces: Vec<Trace>,
    pub layout: Layout,
}

type TraceBuilder = fn(&TraceSpec) -> Result<Trace>;

// Fixed type-tag dispatch table; tags without an entry are skipped.
const TRACE_BUILDERS: &[(&str, TraceBuilder)] = &[
    ("bar", build_bar),
    ("line", build_line),
    ("scatter", build_line),
    ("pie", build_pie),
];

fn builder_for(kind: &str) -> Option<TraceBuilder> {
    TRACE_BUILDERS
        .iter()
        .find(|(tag, _)| *tag == kind)
        .map(|(_, builder)| *builder)
}

/// Map a declarative plot spec to a renderable chart. Unknown trace types
/// are skipped; a recognized trace whose point data has the wrong JSON shape
/// is an error the render boundary must surface.
pub fn build(spec: &PlotSpec) -> Result<Chart> {
    let mut traces = Vec::new();

    for trace in &spec.data {
        if let Some(builder) = trace.kind.as_deref().and_then(builder_for) {
            traces.push(builder(trace)?);
        }
    }

    Ok(Chart {
        traces,
        layout: Layout::merged(&spec.layout),
    })
}

fn build_bar(trace: &TraceSpec) -> Result<Trace> {
    Ok(Trace::Bar(BarTrace {
        x: axis_series("x", trace.x.as_ref())?,
        y: number_series("y", trace.y.as_ref())?,
        name: trace.name.clone(),
        marker: trace.marker.clone(),
        text: string_series(trace.text.as_ref()),
        textposition: trace
            .textposition
            .clone()
            .unwrap_or_else(|| "auto".to_string()),
    }))
}

fn build_line(trace: &TraceSpec) -> Result<Trace> {
    Ok(Trace::Line(LineTrace {
        x: axis_series("x", trace.x.as_ref())?,
        y: number_series("y", trace.y.as_ref())?,
        name: trace.name.clone(),
    }))
}

fn build_pie(trace: &TraceSpec) -> Result<Trace> {
    Ok(Trace::Pie(PieTrace {
        labels: string_series(trace.labels.as_ref()),
        values: number_series("values", trace.values.as_ref())?,
        name: trace.name.clone(),
        textinfo: "percent+label".to_string(),
    }))
}

fn elements<'a>(field: &str, value: Option<&'a Value>) -> Result<&'a [Value]> {
    match value {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(anyhow!("trace field `{}` is not an array: {}", field, other)),
    }
}

fn number_series(field: &str, value: Option<&Value>) -> Result<Vec<f64>> {
    elements(field, value)?
        .iter()
        .map(|item| {
            item.as_f64().ok_or_else(|| {
                anyhow!("trace field `{}` has a non-numeric element: {}", field, item)
            })
        })
        .collect()
}

// Numeric when every element is a number, categorical otherwise.
fn axis_series(field: &str, value: Option<&Value>) -> Result<AxisValues> {
    let items = elements(field, value)?;
    let numbers: Option<Vec<f64>> = items.iter().map(Value::as_f64).collect();

    Ok(match numbers {
        Some(numbers) => AxisValues::Numeric(numbers),
        None => AxisValues::Categories(items.iter().map(display_value).collect()),
    })
}

fn string_series(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().map(display_value).collect(),
        None | Some(Value::Null) => Vec::new(),
        Some(single) => vec![display_value(single)],
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spec_from(value: Value) -> PlotSpec {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn bar_trace_maps_points_and_defaults() {
        let spec = spec_from(json!({
            "data": [{"type": "bar", "x": [1, 2], "y": [3, 4], "name": "A"}]
        }));

        let chart = build(&spec).unwrap();
        assert_eq!(chart.traces.len(), 1);
        match &chart.traces[0] {
            Trace::Bar(bar) => {
                assert_eq!(bar.x, AxisValues::Numeric(vec![1.0, 2.0]));
                assert_eq!(bar.y, vec![3.0, 4.0]);
                assert_eq!(bar.name.as_deref(), Some("A"));
                assert_eq!(bar.textposition, "auto");
            }
            other => panic!("expected a bar trace, got {:?}", other),
        }
    }

    #[test]
    fn unsupported_trace_type_is_skipped_without_error() {
        let spec = spec_from(json!({
            "data": [
                {"type": "unsupported", "x": [1], "y": [2]},
                {"type": "line", "x": [1, 2], "y": [3, 4]}
            ]
        }));

        let chart = build(&spec).unwrap();
        assert_eq!(chart.traces.len(), 1);
        assert!(matches!(chart.traces[0], Trace::Line(_)));
    }

    #[test]
    fn trace_without_type_is_skipped() {
        let spec = spec_from(json!({"data": [{"x": [1], "y": [2]}]}));
        assert!(build(&spec).unwrap().traces.is_empty());
    }

    #[test]
    fn scatter_shares_the_line_builder() {
        let spec = spec_from(json!({
            "data": [{"type": "scatter", "x": [0, 1], "y": [5, 6], "name": "S"}]
        }));

        let chart = build(&spec).unwrap();
        match &chart.traces[0] {
            Trace::Line(line) => assert_eq!(line.name.as_deref(), Some("S")),
            other => panic!("expected a line trace, got {:?}", other),
        }
    }

    #[test]
    fn categorical_x_axis_is_detected() {
        let spec = spec_from(json!({
            "data": [{"type": "bar", "x": ["a", "b"], "y": [1, 2]}]
        }));

        let chart = build(&spec).unwrap();
        match &chart.traces[0] {
            Trace::Bar(bar) => {
                assert_eq!(
                    bar.x,
                    AxisValues::Categories(vec!["a".to_string(), "b".to_string()])
                );
            }
            other => panic!("expected a bar trace, got {:?}", other),
        }
    }

    #[test]
    fn malformed_point_data_is_an_error() {
        let spec = spec_from(json!({
            "data": [{"type": "bar", "x": [1], "y": "oops"}]
        }));
        assert!(build(&spec).is_err());

        let spec = spec_from(json!({
            "data": [{"type": "line", "x": [1], "y": [{"not": "a number"}]}]
        }));
        assert!(build(&spec).is_err());
    }

    #[test]
    fn pie_trace_carries_percent_label_textinfo() {
        let spec = spec_from(json!({
            "data": [{"type": "pie", "labels": ["a", "b"], "values": [30, 70]}]
        }));

        let chart = build(&spec).unwrap();
        match &chart.traces[0] {
            Trace::Pie(pie) => {
                assert_eq!(pie.labels, vec!["a", "b"]);
                assert_eq!(pie.values, vec![30.0, 70.0]);
                assert_eq!(pie.textinfo, "percent+label");
            }
            other => panic!("expected a pie trace, got {:?}", other),
        }
    }

    #[test]
    fn layout_overrides_reach_the_chart() {
        let spec = spec_from(json!({
            "data": [],
            "layout": {"title": "Custom", "template": "plotly_white"}
        }));

        let chart = build(&spec).unwrap();
        assert_eq!(chart.layout.title(), Some("Custom"));
        assert_eq!(chart.layout.get("template"), Some(&json!("plotly_white")));
        assert_eq!(chart.layout.get("title_x"), Some(&json!(0.5)));
    }
}
