use std::path::PathBuf;
use tracing::info;

use crate::commands::parse_market_args;
use crate::config::SparklineConfig;
use crate::models::{GradientId, MarketSnapshot};
use crate::services::{chart_service, sparkline_service, svg_service};
use crate::utils::Result;

/// Output image format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Png,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
        }
    }
}

/// `<price> <change%> [file]`: render one sparkline to disk
pub async fn execute(config: &SparklineConfig, args: &[&str], format: ImageFormat) -> Result<()> {
    let (current_price, percent_change_24h) = parse_market_args(args)?;
    let snapshot = MarketSnapshot {
        symbol: "sparkline".to_string(),
        current_price,
        percent_change_24h,
    };

    let path = match args.get(2) {
        Some(file) => PathBuf::from(file),
        None => config.output_dir.join(format!("sparkline_24h.{}", format.extension())),
    };

    let bytes = render_bytes(&snapshot, config, format)?;
    tokio::fs::write(&path, &bytes).await?;

    info!("✓ Wrote {} ({} bytes)", path.display(), bytes.len());
    println!("{}", path.display());
    Ok(())
}

/// Render a snapshot in the requested format
pub fn render_bytes(snapshot: &MarketSnapshot, config: &SparklineConfig, format: ImageFormat) -> Result<Vec<u8>> {
    let data = sparkline_service::build(snapshot, config);
    match format {
        ImageFormat::Svg => {
            let svg = svg_service::render_svg(&data.trajectory, data.split, config, &GradientId::generate());
            Ok(svg.into_bytes())
        }
        ImageFormat::Png => chart_service::render_png(&data.trajectory, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_svg_to_explicit_file() {
        let path = std::env::temp_dir().join(format!("sparkline_test_{}.svg", Uuid::new_v4().simple()));
        let path_str = path.to_string_lossy().to_string();

        execute(&SparklineConfig::default(), &["100", "-12.5", path_str.as_str()], ImageFormat::Svg)
            .await
            .expect("svg written");

        let svg = std::fs::read_to_string(&path).expect("file exists");
        assert!(svg.contains("<linearGradient"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_png_bytes() {
        let snapshot = MarketSnapshot {
            symbol: "ETH".to_string(),
            current_price: 3100.0,
            percent_change_24h: 4.2,
        };
        let bytes = render_bytes(&snapshot, &SparklineConfig::default(), ImageFormat::Png).expect("png renders");
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
