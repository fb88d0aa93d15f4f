use tracing::debug;

use crate::models::{Color, GradientSplit, GradientStop, Trajectory};

/// Compute where the fill color must switch so the transition lands on the
/// zero baseline of the trajectory
pub fn compute_split(trajectory: &Trajectory) -> GradientSplit {
    let values: Vec<f64> = trajectory.values().collect();
    compute_split_values(&values)
}

/// Split position for an arbitrary baseline-relative series
///
/// An empty series is treated as entirely below the baseline.
pub fn compute_split_values(values: &[f64]) -> GradientSplit {
    let Some((min, max)) = value_range(values) else {
        return GradientSplit::ALL_BELOW;
    };

    let split = if max <= 0.0 {
        GradientSplit::ALL_BELOW
    } else if min >= 0.0 {
        GradientSplit::ALL_ABOVE
    } else {
        // max > 0 and min < 0 here, so the range is strictly positive
        GradientSplit::new(max / (max - min))
    };

    debug!("Gradient split: min={} max={} offset={}", min, max, split.offset());
    split
}

/// Lowest and highest value of a series, or `None` when it is empty
pub fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }

    Some(values.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
        (min.min(v), max.max(v))
    }))
}

/// Stops for a hard two-color gradient running from the highest value
/// (offset 0) to the lowest value (offset 1)
pub fn gradient_stops(split: GradientSplit, above: Color, below: Color) -> [GradientStop; 4] {
    [
        GradientStop { offset: GradientSplit::ALL_BELOW, color: above },
        GradientStop { offset: split, color: above },
        GradientStop { offset: split, color: below },
        GradientStop { offset: GradientSplit::ALL_ABOVE, color: below },
    ]
}
