//! Split-gradient models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::color::Color;

/// Fractional stop position in `[0, 1]` where the fill switches from the
/// "above baseline" color to the "below baseline" color.
///
/// The gradient axis runs from the highest value (offset 0) down to the
/// lowest value (offset 1), so the split lands exactly on value zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct GradientSplit(f64);

impl GradientSplit {
    /// Whole fill uses the "below" color
    pub const ALL_BELOW: GradientSplit = GradientSplit(0.0);
    /// Whole fill uses the "above" color
    pub const ALL_ABOVE: GradientSplit = GradientSplit(1.0);

    /// Clamps into `[0, 1]`; NaN maps to `0`
    pub fn new(offset: f64) -> Self {
        if offset.is_nan() {
            GradientSplit(0.0)
        } else {
            GradientSplit(offset.clamp(0.0, 1.0))
        }
    }

    pub fn offset(&self) -> f64 {
        self.0
    }

    /// Offset formatted for an SVG `<stop offset="...">`
    pub fn as_percent(&self) -> String {
        format!("{:.2}%", self.0 * 100.0)
    }
}

impl TryFrom<f64> for GradientSplit {
    type Error = std::convert::Infallible;

    fn try_from(offset: f64) -> Result<Self, Self::Error> {
        Ok(GradientSplit::new(offset))
    }
}

impl From<GradientSplit> for f64 {
    fn from(split: GradientSplit) -> Self {
        split.0
    }
}

/// One stop of a linear gradient definition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: GradientSplit,
    pub color: Color,
}

/// Identifier for a gradient definition inside a shared document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GradientId(String);

impl GradientId {
    /// Fresh process-unique id
    pub fn generate() -> Self {
        GradientId(format!("sparkline-{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GradientId {
    fn from(id: &str) -> Self {
        GradientId(id.to_string())
    }
}

impl std::fmt::Display for GradientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
