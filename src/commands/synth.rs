use chrono::{DateTime, Utc};

use crate::commands::parse_market_args;
use crate::config::SparklineConfig;
use crate::models::{MarketSnapshot, SparklineData};
use crate::services::sparkline_service;
use crate::utils::{format_price, Result, SparklineError, Table};

/// Print the synthesized trajectory as a table
pub fn execute(config: &SparklineConfig, args: &[&str]) -> Result<()> {
    let data = build_from_args(config, args)?;
    println!("{}", format_report(&data, Utc::now()));
    Ok(())
}

/// Print the render bundle as JSON
pub fn execute_json(config: &SparklineConfig, args: &[&str]) -> Result<()> {
    let data = build_from_args(config, args)?;
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}

/// `<price> <change%> [points]`
fn build_from_args(config: &SparklineConfig, args: &[&str]) -> Result<SparklineData> {
    let (current_price, percent_change_24h) = parse_market_args(args)?;

    let mut config = config.clone();
    if let Some(points) = args.get(2) {
        config.point_count = points.parse().map_err(|_| {
            SparklineError::InvalidArgument(format!("❌ Point count must be a whole number, got '{}'", points))
        })?;
    }

    let snapshot = MarketSnapshot {
        symbol: "CLI".to_string(),
        current_price,
        percent_change_24h,
    };
    Ok(sparkline_service::build(&snapshot, &config))
}

/// Summary lines followed by one table row per point
pub fn format_report(data: &SparklineData, now: DateTime<Utc>) -> String {
    let trajectory = &data.trajectory;

    let mut table = Table::new(&["#", "Time (UTC)", "Offset", "Price"]);
    let times = trajectory.time_axis(now);
    for ((point, price), time) in trajectory.points.iter().zip(trajectory.absolute_prices()).zip(times) {
        table.add_row(vec![
            point.index.to_string(),
            time.format("%m-%d %H:%M").to_string(),
            format_price(point.value),
            format_price(price),
        ]);
    }

    format!(
        "Reference (24h ago): {}\nCurrent: {} ({})\nTrend: {:?}\nGradient split: {}\n\n{}",
        format_price(data.reference_price),
        format_price(trajectory.current_price),
        data.change_label,
        data.trend,
        data.split.as_percent(),
        table.render()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_points_override() {
        let data = build_from_args(&SparklineConfig::default(), &["100", "25", "5"]).expect("valid args");
        assert_eq!(data.trajectory.len(), 5);
    }

    #[test]
    fn test_bad_points() {
        let err = build_from_args(&SparklineConfig::default(), &["100", "25", "many"]).unwrap_err();
        assert!(err.to_string().contains("Point count"));
    }

    #[test]
    fn test_format_report() {
        let data = build_from_args(&SparklineConfig::default(), &["100", "25", "5"]).expect("valid args");
        let now = Utc.with_ymd_and_hms(2024, 5, 2, 12, 0, 0).unwrap();
        let report = format_report(&data, now);

        assert!(report.contains("Reference (24h ago): 80.0000"));
        assert!(report.contains("Current: 100.0000 (+25.00%)"));
        assert!(report.contains("Trend: Up"));
        assert!(report.contains("Gradient split: 100.00%"));
        assert!(report.contains("05-01 12:00"));
        assert!(report.contains("05-02 12:00"));
        assert!(report.contains("20.0000"));
    }
}
