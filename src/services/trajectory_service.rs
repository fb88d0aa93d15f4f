use tracing::{debug, warn};

use crate::models::{PricePoint, Trajectory};

/// Default number of points in a 24h sparkline (one per hour)
pub const DEFAULT_POINT_COUNT: usize = 24;

/// Smallest trajectory that still has two endpoints
pub const MIN_POINT_COUNT: usize = 2;

/// Derive the 24h-ago price implied by the current price and percent change
///
/// A -100% change (or a quotient that overflows) has no meaningful reference,
/// so the current price is used instead and the sparkline is flat.
pub fn reference_price(current_price: f64, percent_change_24h: f64) -> f64 {
    let denominator = 1.0 + percent_change_24h / 100.0;

    if denominator == 0.0 {
        warn!("24h change of {}% leaves no reference price, drawing flat", percent_change_24h);
        return current_price;
    }

    let reference = current_price / denominator;
    if !reference.is_finite() {
        warn!(
            "Reference price for {} at {}% is not finite, drawing flat",
            current_price, percent_change_24h
        );
        return current_price;
    }

    reference
}

/// Build an evenly spaced straight-line trajectory from the reference price to
/// the current price, expressed as offsets from the reference price.
///
/// `point_count` below 2 is raised to 2.
pub fn synthesize(current_price: f64, percent_change_24h: f64, point_count: usize) -> Trajectory {
    let point_count = if point_count < MIN_POINT_COUNT {
        warn!("Point count {} is below {}, using {}", point_count, MIN_POINT_COUNT, MIN_POINT_COUNT);
        MIN_POINT_COUNT
    } else {
        point_count
    };

    let mut reference = reference_price(current_price, percent_change_24h);
    let mut delta = current_price - reference;
    if !delta.is_finite() {
        warn!(
            "Move from {} to {} is not finite, drawing flat",
            reference, current_price
        );
        reference = current_price;
        delta = 0.0;
    }
    let last_index = (point_count - 1) as f64;

    debug!(
        "Synthesizing {} points: reference={} current={} delta={}",
        point_count, reference, current_price, delta
    );

    let points = (0..point_count)
        .map(|index| {
            let value = if index == 0 {
                0.0
            } else {
                let t = index as f64 / last_index;
                delta * t
            };
            PricePoint { index, value }
        })
        .collect();

    Trajectory {
        reference_price: reference,
        current_price,
        points,
    }
}
