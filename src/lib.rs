//! Synthetic 24h price sparklines.
//!
//! When only the current price and the 24h percent change are known, the
//! [`services::trajectory_service`] draws a straight-line trajectory from the
//! implied 24h-ago price to the current price, and the
//! [`services::gradient_service`] computes where a two-color fill must switch
//! so the color change lands on the zero baseline. Both are pure functions;
//! the SVG and PNG renderers and the command line front end sit on top.

pub mod commands;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use config::SparklineConfig;
pub use models::{GradientSplit, MarketSnapshot, PricePoint, SparklineData, Trajectory, Trend};
pub use services::gradient_service::compute_split;
pub use services::trajectory_service::synthesize;
