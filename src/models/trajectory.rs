//! Synthesized 24h trajectory models

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A single point on a synthesized sparkline.
///
/// `value` is the offset from the 24h-ago reference price, so `0.0` means
/// "unchanged" and the sign tells whether the point sits above or below it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub index: usize,
    pub value: f64,
}

/// Direction of the 24h move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Classify a move from the reference price to the current price
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Trend::Up
        } else if delta < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}

/// Ordered, baseline-relative points between the reference price and the
/// current price. Built fresh for every render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub reference_price: f64,
    pub current_price: f64,
    pub points: Vec<PricePoint>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Current price minus reference price
    pub fn delta(&self) -> f64 {
        self.current_price - self.reference_price
    }

    pub fn trend(&self) -> Trend {
        Trend::from_delta(self.delta())
    }

    /// Absolute prices reconstructed from the offsets
    pub fn absolute_prices(&self) -> Vec<f64> {
        self.values().map(|v| self.reference_price + v).collect()
    }

    /// Timestamps for each point, spread evenly over the 24 hours ending at `end`
    pub fn time_axis(&self, end: DateTime<Utc>) -> Vec<DateTime<Utc>> {
        let start = end - Duration::hours(24);
        let steps = self.points.len().saturating_sub(1).max(1) as i64;
        let span_ms = Duration::hours(24).num_milliseconds();

        self.points
            .iter()
            .map(|p| start + Duration::milliseconds(span_ms * p.index as i64 / steps))
            .collect()
    }
}
