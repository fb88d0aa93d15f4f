use plotters::prelude::*;
use std::path::Path;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::SparklineConfig;
use crate::models::Trajectory;
use crate::services::gradient_service::value_range;
use crate::services::svg_service::stroke_color;
use crate::utils::{Result, SparklineError};

/// Points of the series with an extra point inserted wherever a segment
/// crosses zero, so clamped area fills meet exactly on the baseline
pub fn insert_zero_crossings(values: &[f64]) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(values.len() * 2);

    for (i, &value) in values.iter().enumerate() {
        if i > 0 {
            let previous = values[i - 1];
            if (previous < 0.0 && value > 0.0) || (previous > 0.0 && value < 0.0) {
                let t = previous / (previous - value);
                points.push(((i - 1) as f64 + t, 0.0));
            }
        }
        points.push((i as f64, value));
    }

    points
}

/// Run `render` against a scratch file and remove the file afterwards,
/// whether or not rendering succeeded
pub fn with_temp_file<T, F>(path: &Path, render: F) -> Result<T>
where
    F: FnOnce(&Path) -> Result<T>,
{
    let result = render(path);

    // Clean up temporary file
    if path.exists() {
        if let Err(e) = std::fs::remove_file(path) {
            warn!("Failed to delete temporary chart file {}: {}", path.display(), e);
        }
    }

    result
}

/// Render the sparkline as PNG bytes
///
/// The positive part of the area is filled with the "above" color and the
/// negative part with the "below" color, both against the zero baseline.
pub fn render_png(trajectory: &Trajectory, config: &SparklineConfig) -> Result<Vec<u8>> {
    let values: Vec<f64> = trajectory.values().collect();
    let (min_value, max_value) = value_range(&values)
        .ok_or_else(|| SparklineError::Render("Trajectory has no points".to_string()))?;

    // Use a temporary file path for BitMapBackend
    let temp_file = std::env::temp_dir().join(format!("sparkline_{}.png", Uuid::new_v4().simple()));

    let image_data = with_temp_file(&temp_file, |path| {
        let backend = BitMapBackend::new(path, (config.width, config.height));
        let root = backend.into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| SparklineError::Render(format!("Failed to fill canvas: {}", e)))?;

        // Avoid a zero-height value axis for flat series
        let range = (max_value - min_value).max(1e-8);
        let padding = range * 0.05;
        let y_min = min_value.min(0.0) - padding;
        let y_max = max_value.max(0.0) + padding;
        let x_max = (values.len().saturating_sub(1) as f64).max(1.0);

        let mut chart = ChartBuilder::on(&root)
            .margin(1)
            .build_cartesian_2d(0.0..x_max, y_min..y_max)
            .map_err(|e| SparklineError::Render(format!("Failed to build chart: {}", e)))?;

        let above: RGBColor = config.above_color.into();
        let below: RGBColor = config.below_color.into();
        let points = insert_zero_crossings(&values);

        chart
            .draw_series(AreaSeries::new(
                points.iter().map(|&(x, y)| (x, y.max(0.0))),
                0.0,
                above.mix(config.fill_opacity),
            ))
            .map_err(|e| SparklineError::Render(format!("Failed to draw area: {}", e)))?;

        chart
            .draw_series(AreaSeries::new(
                points.iter().map(|&(x, y)| (x, y.min(0.0))),
                0.0,
                below.mix(config.fill_opacity),
            ))
            .map_err(|e| SparklineError::Render(format!("Failed to draw area: {}", e)))?;

        let line: RGBColor = stroke_color(trajectory.trend(), config).into();
        chart
            .draw_series(LineSeries::new(points.iter().copied(), line.stroke_width(2)))
            .map_err(|e| SparklineError::Render(format!("Failed to draw line: {}", e)))?;

        root.present()
            .map_err(|e| SparklineError::Render(format!("Failed to render chart: {}", e)))?;

        // Read the temporary file into memory
        Ok(std::fs::read(path)?)
    })?;

    debug!(
        "Rendered PNG sparkline: {}x{}, {} bytes",
        config.width,
        config.height,
        image_data.len()
    );
    Ok(image_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::trajectory_service::synthesize;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn test_insert_zero_crossings() {
        let points = insert_zero_crossings(&[0.0, 8.0, -4.0, -2.0]);
        assert_eq!(points.len(), 5);
        assert_eq!(points[2].1, 0.0);
        assert!((points[2].0 - (1.0 + 2.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_no_crossings_keeps_points() {
        let points = insert_zero_crossings(&[0.0, 1.0, 2.0]);
        assert_eq!(points, vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
    }

    #[test]
    fn test_render_png() {
        let trajectory = synthesize(100.0, 25.0, 24);
        let png = render_png(&trajectory, &SparklineConfig::default()).expect("png renders");

        assert!(png.len() > PNG_MAGIC.len());
        assert_eq!(&png[..8], &PNG_MAGIC);
    }

    #[test]
    fn test_render_flat_png() {
        let trajectory = synthesize(100.0, -100.0, 24);
        let png = render_png(&trajectory, &SparklineConfig::default()).expect("flat png renders");
        assert_eq!(&png[..8], &PNG_MAGIC);
    }

    #[test]
    fn test_temp_file_removed_after_failure() {
        let path = std::env::temp_dir().join(format!("sparkline_test_{}.png", Uuid::new_v4().simple()));

        let result: Result<()> = with_temp_file(&path, |path| {
            std::fs::write(path, b"partial")?;
            Err(SparklineError::Render("Failed to draw area".to_string()))
        });

        assert!(matches!(result, Err(SparklineError::Render(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_temp_file_removed_after_success() {
        let path = std::env::temp_dir().join(format!("sparkline_test_{}.png", Uuid::new_v4().simple()));

        let bytes = with_temp_file(&path, |path| {
            std::fs::write(path, b"png")?;
            Ok(std::fs::read(path)?)
        })
        .expect("scratch file readable");

        assert_eq!(bytes, b"png");
        assert!(!path.exists());
    }

    #[test]
    fn test_render_empty_fails() {
        let trajectory = Trajectory {
            reference_price: 1.0,
            current_price: 1.0,
            points: Vec::new(),
        };
        let err = render_png(&trajectory, &SparklineConfig::default()).unwrap_err();
        assert!(matches!(err, SparklineError::Render(_)));
    }
}
