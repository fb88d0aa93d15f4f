//! Data models for sparkline synthesis and rendering
//!
//! Each model is either an input from the price feed or an output handed to
//! a rendering surface.

pub mod color;
pub mod gradient;
pub mod snapshot;
pub mod trajectory;

// Re-export commonly used types for convenience
pub use color::Color;
pub use gradient::{GradientId, GradientSplit, GradientStop};
pub use snapshot::{MarketSnapshot, SparklineData};
pub use trajectory::{PricePoint, Trajectory, Trend};
