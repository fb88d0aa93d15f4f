use std::fmt::Write;
use tracing::debug;

use crate::config::SparklineConfig;
use crate::models::{Color, GradientId, GradientSplit, Trajectory, Trend};
use crate::services::gradient_service::{gradient_stops, value_range};

const STROKE_WIDTH: f64 = 1.5;

/// Line color for a trend: the "above" color when rising, the "below" color when falling
pub fn stroke_color(trend: Trend, config: &SparklineConfig) -> Color {
    match trend {
        Trend::Up => config.above_color,
        Trend::Down => config.below_color,
        Trend::Flat => Color::NEUTRAL,
    }
}

/// Canvas coordinates for each point. The value axis spans exactly
/// `[min, max]` so the gradient's bounding box lines up with the split.
fn project(trajectory: &Trajectory, width: f64, height: f64) -> (Vec<(f64, f64)>, f64) {
    let values: Vec<f64> = trajectory.values().collect();
    let Some((min, max)) = value_range(&values) else {
        return (Vec::new(), height / 2.0);
    };

    let last_index = values.len().saturating_sub(1);
    let to_x = |i: usize| {
        if last_index == 0 {
            width / 2.0
        } else {
            i as f64 / last_index as f64 * width
        }
    };
    let to_y = |v: f64| {
        if max > min {
            (max - v) / (max - min) * height
        } else {
            height / 2.0
        }
    };

    let coords = values.iter().enumerate().map(|(i, &v)| (to_x(i), to_y(v))).collect();
    let baseline = to_y(0.0).clamp(0.0, height);
    (coords, baseline)
}

/// Render a standalone SVG sparkline whose area fill switches color at the
/// zero baseline via a hard-stop linear gradient
pub fn render_svg(
    trajectory: &Trajectory,
    split: GradientSplit,
    config: &SparklineConfig,
    gradient_id: &GradientId,
) -> String {
    let width = config.width as f64;
    let height = config.height as f64;
    let (coords, baseline) = project(trajectory, width, height);

    let mut svg = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = config.width,
        h = config.height
    );
    let _ = writeln!(svg, "  <defs>");
    let _ = writeln!(
        svg,
        r#"    <linearGradient id="{}" x1="0" y1="0" x2="0" y2="1">"#,
        gradient_id
    );
    for stop in gradient_stops(split, config.above_color, config.below_color) {
        let _ = writeln!(
            svg,
            r#"      <stop offset="{}" stop-color="{}"/>"#,
            stop.offset.as_percent(),
            stop.color.to_hex()
        );
    }
    let _ = writeln!(svg, "    </linearGradient>");
    let _ = writeln!(svg, "  </defs>");

    if let (Some(&(first_x, _)), Some(&(last_x, _))) = (coords.first(), coords.last()) {
        let line = coords
            .iter()
            .enumerate()
            .map(|(i, (x, y))| format!("{}{:.2},{:.2}", if i == 0 { "M" } else { "L" }, x, y))
            .collect::<Vec<_>>()
            .join(" ");
        let area = format!(
            "{} L{:.2},{:.2} L{:.2},{:.2} Z",
            line, last_x, baseline, first_x, baseline
        );

        let _ = writeln!(
            svg,
            r#"  <path d="{}" fill="url(#{})" fill-opacity="{}" stroke="none"/>"#,
            area, gradient_id, config.fill_opacity
        );
        let _ = writeln!(
            svg,
            r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linejoin="round" stroke-linecap="round"/>"#,
            line,
            stroke_color(trajectory.trend(), config).to_hex(),
            STROKE_WIDTH
        );
    }

    svg.push_str("</svg>\n");

    debug!(
        "Rendered SVG sparkline: {} points, split {}, gradient {}",
        coords.len(),
        split.as_percent(),
        gradient_id
    );
    svg
}
