// src/ui/chart.rs
use eframe::egui;
use serde_json::Value;

use crate::chart::{BarTrace, Chart, Layout, LineTrace, PieTrace, Trace};

const TRACE_COLORS: &[egui::Color32] = &[
    egui::Color32::from_rgb(100, 150, 255),
    egui::Color32::from_rgb(255, 160, 90),
    egui::Color32::from_rgb(100, 200, 100),
    egui::Color32::from_rgb(220, 120, 200),
    egui::Color32::from_rgb(240, 200, 90),
    egui::Color32::from_rgb(120, 210, 220),
];

pub fn draw_chart(ui: &mut egui::Ui, chart: &Chart) {
    ui.add_space(margin(&chart.layout, "t"));

    if let Some(title) = chart.layout.title() {
        // title_x 0.5 in the merged layout: centered title
        ui.vertical_centered(|ui| {
            ui.heading(title);
        });
        ui.add_space(4.0);
    }

    if chart.traces.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No drawable traces in this plot.");
        });
        return;
    }

    let (xy, pies): (Vec<&Trace>, Vec<&Trace>) = chart
        .traces
        .iter()
        .partition(|trace| !matches!(trace, Trace::Pie(_)));

    if !xy.is_empty() {
        draw_xy_plot(ui, &xy);
    }

    for (offset, trace) in pies.iter().enumerate() {
        if let Trace::Pie(pie) = trace {
            draw_pie(ui, pie, offset);
        }
    }

    ui.add_space(margin(&chart.layout, "b"));
}

// Merged layout margins are plotly-style pixel values {l, r, t, b}
fn margin(layout: &Layout, side: &str) -> f32 {
    layout
        .get("margin")
        .and_then(|margin| margin.get(side))
        .and_then(Value::as_f64)
        .unwrap_or(0.0) as f32
}

fn draw_xy_plot(ui: &mut egui::Ui, traces: &[&Trace]) {
    let plot = egui_plot::Plot::new("result_plot")
        .height(360.0)
        .legend(egui_plot::Legend::default());

    plot.show(ui, |plot_ui| {
        for (index, trace) in traces.iter().enumerate() {
            match trace {
                Trace::Bar(bar) => draw_bar_trace(plot_ui, bar, index),
                Trace::Line(line) => draw_line_trace(plot_ui, line, index),
                Trace::Pie(_) => {}
            }
        }
    });
}

fn draw_bar_trace(plot_ui: &mut egui_plot::PlotUi, trace: &BarTrace, trace_index: usize) {
    let mut bars = Vec::new();

    for (i, &value) in trace.y.iter().enumerate() {
        let fill =
            marker_color(trace.marker.as_ref(), i).unwrap_or_else(|| trace_color(trace_index));
        let mut bar = egui_plot::Bar::new(trace.x.position(i), value)
            .width(0.6)
            .fill(fill);

        let hover = match (trace.x.label(i), trace.text.get(i)) {
            (Some(category), Some(text)) => format!("{}: {}", category, text),
            (Some(category), None) => category.to_string(),
            (None, Some(text)) => text.clone(),
            (None, None) => trace.name.clone().unwrap_or_default(),
        };
        if !hover.is_empty() {
            bar = bar.name(hover);
        }

        bars.push(bar);
    }

    plot_ui.bar_chart(egui_plot::BarChart::new(bars));
}

fn draw_line_trace(plot_ui: &mut egui_plot::PlotUi, trace: &LineTrace, trace_index: usize) {
    let color = trace_color(trace_index);
    let points: Vec<[f64; 2]> = trace
        .y
        .iter()
        .enumerate()
        .map(|(i, &value)| [trace.x.position(i), value])
        .collect();

    // Connected markers + lines
    let mut line = egui_plot::Line::new(points.clone()).color(color).width(2.0);
    if let Some(name) = &trace.name {
        line = line.name(name);
    }
    plot_ui.line(line);
    plot_ui.points(egui_plot::Points::new(points).color(color).radius(3.0));
}

// egui_plot has no pie primitive; slices are filled polygons on a painter,
// with a percent+label legend underneath.
fn draw_pie(ui: &mut egui::Ui, pie: &PieTrace, pie_index: usize) {
    let total: f64 = pie.values.iter().filter(|value| **value > 0.0).sum();
    if total <= 0.0 {
        ui.label("Pie has no positive values to draw.");
        return;
    }

    if let Some(name) = &pie.name {
        ui.strong(name);
    }

    let size = 240.0;
    let (response, painter) = ui.allocate_painter(egui::vec2(size, size), egui::Sense::hover());
    let center = response.rect.center();
    let radius = response.rect.width().min(response.rect.height()) * 0.45;

    let mut start_angle = -std::f32::consts::FRAC_PI_2;
    for (i, &value) in pie.values.iter().enumerate() {
        if value <= 0.0 {
            continue;
        }
        let sweep = (value / total) as f32 * std::f32::consts::TAU;
        painter.add(pie_slice(
            center,
            radius,
            start_angle,
            sweep,
            trace_color(pie_index + i),
        ));
        start_angle += sweep;
    }

    for (i, &value) in pie.values.iter().enumerate() {
        if value <= 0.0 {
            continue;
        }
        let label = pie.labels.get(i).map(String::as_str).unwrap_or("");
        let percent = value / total * 100.0;
        ui.horizontal(|ui| {
            let (swatch, painter) =
                ui.allocate_painter(egui::vec2(10.0, 10.0), egui::Sense::hover());
            painter.rect_filled(swatch.rect, 2.0, trace_color(pie_index + i));
            ui.label(format!("{:.1}% {}", percent, label));
        });
    }
}

fn pie_slice(
    center: egui::Pos2,
    radius: f32,
    start_angle: f32,
    sweep: f32,
    color: egui::Color32,
) -> egui::Shape {
    let steps = ((sweep / 0.05).ceil() as usize).max(2);
    let mut points = vec![center];
    for step in 0..=steps {
        let angle = start_angle + sweep * step as f32 / steps as f32;
        points.push(center + radius * egui::vec2(angle.cos(), angle.sin()));
    }
    egui::Shape::convex_polygon(points, color, egui::Stroke::NONE)
}

// Plotly-style marker colors: a single color string or one color per point
fn marker_color(marker: Option<&Value>, index: usize) -> Option<egui::Color32> {
    match marker?.get("color")? {
        Value::String(hex) => parse_hex_color(hex),
        Value::Array(items) => items
            .get(index)
            .and_then(Value::as_str)
            .and_then(parse_hex_color),
        _ => None,
    }
}

fn parse_hex_color(hex: &str) -> Option<egui::Color32> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    Some(egui::Color32::from_rgb(
        (value >> 16) as u8,
        (value >> 8) as u8,
        value as u8,
    ))
}

fn trace_color(index: usize) -> egui::Color32 {
    TRACE_COLORS[index % TRACE_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn marker_color_reads_single_and_per_point_forms() {
        let single = json!({"color": "#ff0000"});
        assert_eq!(
            marker_color(Some(&single), 3),
            Some(egui::Color32::from_rgb(255, 0, 0))
        );

        let per_point = json!({"color": ["#ff0000", "#00ff00"]});
        assert_eq!(
            marker_color(Some(&per_point), 1),
            Some(egui::Color32::from_rgb(0, 255, 0))
        );
        assert_eq!(marker_color(Some(&per_point), 9), None);
        assert_eq!(marker_color(None, 0), None);
    }

    #[test]
    fn bad_hex_strings_are_ignored() {
        assert_eq!(parse_hex_color("ff0000"), None);
        assert_eq!(parse_hex_color("#ff00"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }
}
