use tracing::info;

use crate::config::SparklineConfig;
use crate::models::{MarketSnapshot, SparklineData};
use crate::services::{gradient_service, trajectory_service};
use crate::utils::format_percent_change;

/// Synthesize the trajectory for a feed snapshot and derive its gradient split
pub fn build(snapshot: &MarketSnapshot, config: &SparklineConfig) -> SparklineData {
    let trajectory = trajectory_service::synthesize(
        snapshot.current_price,
        snapshot.percent_change_24h,
        config.point_count,
    );
    let split = gradient_service::compute_split(&trajectory);

    info!(
        "📈 Sparkline {}: {} -> {} ({}), split {}",
        snapshot.symbol,
        trajectory.reference_price,
        snapshot.current_price,
        format_percent_change(snapshot.percent_change_24h),
        split.as_percent()
    );

    SparklineData {
        symbol: snapshot.symbol.clone(),
        change_label: format_percent_change(snapshot.percent_change_24h),
        trend: trajectory.trend(),
        reference_price: trajectory.reference_price,
        split,
        trajectory,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GradientSplit, Trend};

    fn snapshot(price: f64, change: f64) -> MarketSnapshot {
        MarketSnapshot {
            symbol: "SOL".to_string(),
            current_price: price,
            percent_change_24h: change,
        }
    }

    #[test]
    fn test_build_rising() {
        let config = SparklineConfig {
            point_count: 5,
            ..SparklineConfig::default()
        };
        let data = build(&snapshot(100.0, 25.0), &config);

        assert_eq!(data.symbol, "SOL");
        assert_eq!(data.change_label, "+25.00%");
        assert_eq!(data.trend, Trend::Up);
        assert_eq!(data.split, GradientSplit::ALL_ABOVE);
        assert_eq!(data.trajectory.len(), 5);
        assert!((data.reference_price - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_build_wiped_out() {
        let data = build(&snapshot(0.0, -100.0), &SparklineConfig::default());

        assert_eq!(data.trend, Trend::Flat);
        assert_eq!(data.split, GradientSplit::ALL_BELOW);
        assert_eq!(data.trajectory.len(), 24);
    }

    #[test]
    fn test_build_serializes() {
        let data = build(&snapshot(64.0, -20.0), &SparklineConfig::default());
        let json = serde_json::to_value(&data).expect("serializable");

        assert_eq!(json["trend"], "down");
        assert_eq!(json["split"], 0.0);
        assert_eq!(json["trajectory"]["points"].as_array().map(|a| a.len()), Some(24));
    }
}
