use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::commands::render::{render_bytes, ImageFormat};
use crate::config::SparklineConfig;
use crate::models::MarketSnapshot;
use crate::utils::{Result, SparklineError};

/// `<snapshots.json>`: render an SVG for every snapshot in a feed dump
pub async fn execute(config: &SparklineConfig, args: &[&str]) -> Result<()> {
    let feed_path = args.first().ok_or_else(|| {
        SparklineError::InvalidArgument("❌ Usage: `sparkline24 feed <snapshots.json>`".to_string())
    })?;

    let written = render_feed(config, Path::new(feed_path)).await?;
    for path in &written {
        println!("{}", path.display());
    }
    Ok(())
}

/// Read the snapshots and render each one on the blocking pool
pub async fn render_feed(config: &SparklineConfig, feed_path: &Path) -> Result<Vec<PathBuf>> {
    let raw = tokio::fs::read_to_string(feed_path).await?;
    let snapshots: Vec<MarketSnapshot> = serde_json::from_str(&raw)?;
    info!("📥 Loaded {} snapshots from {}", snapshots.len(), feed_path.display());

    tokio::fs::create_dir_all(&config.output_dir).await?;

    let handles: Vec<_> = snapshots
        .into_iter()
        .map(|snapshot| {
            let config = config.clone();
            tokio::task::spawn_blocking(move || {
                let bytes = render_bytes(&snapshot, &config, ImageFormat::Svg);
                (snapshot.symbol, bytes)
            })
        })
        .collect();

    let mut written = Vec::with_capacity(handles.len());
    let mut used_names = HashSet::new();
    for handle in handles {
        let (symbol, bytes) = match handle.await {
            Ok(result) => result,
            Err(e) => {
                error!("Render task failed: {}", e);
                continue;
            }
        };

        let bytes = match bytes {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Skipping {}: {}", symbol, e);
                continue;
            }
        };

        let path = config.output_dir.join(unique_file_name(&symbol, &mut used_names));
        tokio::fs::write(&path, &bytes).await?;
        info!("✓ {} -> {}", symbol, path.display());
        written.push(path);
    }

    Ok(written)
}

/// File name for a symbol, keeping only characters safe in paths
pub fn output_file_name(symbol: &str) -> String {
    let safe: String = symbol
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    let safe = if safe.is_empty() { "unnamed".to_string() } else { safe };
    format!("{}_24h.svg", safe)
}

/// File name that no earlier snapshot in the same feed has taken.
/// Names are compared case-insensitively so case-folding filesystems never overwrite.
fn unique_file_name(symbol: &str, used: &mut HashSet<String>) -> String {
    let base = output_file_name(symbol);
    if used.insert(base.to_lowercase()) {
        return base;
    }

    let stem = base.trim_end_matches(".svg");
    let mut n = 2;
    loop {
        let candidate = format!("{}_{}.svg", stem, n);
        if used.insert(candidate.to_lowercase()) {
            warn!("Duplicate symbol {} in feed, writing {}", symbol, candidate);
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name("BTC"), "BTC_24h.svg");
        assert_eq!(output_file_name("wETH/USDC"), "wETH_USDC_24h.svg");
        assert_eq!(output_file_name(""), "unnamed_24h.svg");
    }

    #[test]
    fn test_duplicate_symbols_get_distinct_names() {
        let mut used = HashSet::new();
        assert_eq!(unique_file_name("BTC", &mut used), "BTC_24h.svg");
        assert_eq!(unique_file_name("btc", &mut used), "btc_24h_2.svg");
        assert_eq!(unique_file_name("BTC", &mut used), "BTC_24h_3.svg");
    }

    #[tokio::test]
    async fn test_render_feed_keeps_duplicate_symbols() {
        let dir = std::env::temp_dir().join(format!("sparkline_feed_{}", Uuid::new_v4().simple()));
        std::fs::create_dir_all(&dir).expect("temp dir");
        let feed = dir.join("feed.json");
        std::fs::write(
            &feed,
            r#"[
                {"symbol": "BTC", "current_price": 64000, "percent_change_24h": 2.5},
                {"symbol": "btc", "current_price": 63000, "percent_change_24h": -1.5}
            ]"#,
        )
        .expect("feed written");

        let config = SparklineConfig {
            output_dir: dir.join("out"),
            ..SparklineConfig::default()
        };
        let written = render_feed(&config, &feed).await.expect("feed renders");

        assert_eq!(written.len(), 2);
        assert_ne!(written[0], written[1]);
        let rising = std::fs::read_to_string(&written[0]).expect("first svg exists");
        let falling = std::fs::read_to_string(&written[1]).expect("second svg exists");
        assert!(rising.contains(r##"stroke="#16c784""##));
        assert!(falling.contains(r##"stroke="#ea3943""##));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_render_feed() {
        let dir = std::env::temp_dir().join(format!("sparkline_feed_{}", Uuid::new_v4().simple()));
        std::fs::create_dir_all(&dir).expect("temp dir");
        let feed = dir.join("feed.json");
        std::fs::write(
            &feed,
            r#"[
                {"symbol": "BTC", "currentPrice": 64000, "priceChange24h": 2.5},
                {"symbol": "LUNA", "current_price": 0.0001, "percent_change_24h": -100},
                {"symbol": "ETH", "price": 3100, "change_24h": -4.2}
            ]"#,
        )
        .expect("feed written");

        let config = SparklineConfig {
            output_dir: dir.join("out"),
            ..SparklineConfig::default()
        };
        let written = render_feed(&config, &feed).await.expect("feed renders");

        assert_eq!(written.len(), 3);
        assert_eq!(written[0], dir.join("out").join("BTC_24h.svg"));
        for path in &written {
            let svg = std::fs::read_to_string(path).expect("svg exists");
            assert!(svg.contains("<linearGradient"));
        }

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_missing_feed() {
        let config = SparklineConfig::default();
        let err = render_feed(&config, Path::new("/nonexistent/feed.json")).await.unwrap_err();
        assert!(matches!(err, SparklineError::Io(_)));
    }
}
