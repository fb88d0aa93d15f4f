//! Market feed records and render bundles

use serde::{Deserialize, Serialize};

use super::gradient::GradientSplit;
use super::trajectory::{Trajectory, Trend};

/// The two market fields a sparkline is drawn from, as delivered by the price feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub symbol: String,
    #[serde(alias = "currentPrice", alias = "price")]
    pub current_price: f64,
    #[serde(alias = "priceChange24h", alias = "percentChange24h", alias = "change_24h")]
    pub percent_change_24h: f64,
}

/// Everything a rendering surface needs for one sparkline
#[derive(Debug, Clone, Serialize)]
pub struct SparklineData {
    pub symbol: String,
    pub change_label: String,
    pub trend: Trend,
    pub reference_price: f64,
    pub split: GradientSplit,
    pub trajectory: Trajectory,
}
