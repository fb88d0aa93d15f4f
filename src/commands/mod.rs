pub mod feed;
pub mod help;
pub mod render;
pub mod synth;

use tracing::debug;

use crate::config::SparklineConfig;
use crate::utils::{Result, SparklineError};
use render::ImageFormat;

/// Dispatch a command line to its command
pub async fn handle_args(config: &SparklineConfig, parts: &[&str]) -> Result<()> {
    let Some((&command, args)) = parts.split_first() else {
        help::execute();
        return Ok(());
    };
    debug!("Command {} with args {:?}", command, args);

    match command {
        "synth" | "table" => synth::execute(config, args),
        "json" => synth::execute_json(config, args),
        "svg" => render::execute(config, args, ImageFormat::Svg).await,
        "png" => render::execute(config, args, ImageFormat::Png).await,
        "feed" => feed::execute(config, args).await,
        "help" | "-h" | "--help" => {
            help::execute();
            Ok(())
        }
        _ => Err(SparklineError::InvalidArgument(format!(
            "❌ Unknown command '{}'. Run `sparkline24 help` for usage",
            command
        ))),
    }
}

/// Parse the leading `<price> <change%>` pair; a trailing `%` on the change is allowed
pub fn parse_market_args(args: &[&str]) -> Result<(f64, f64)> {
    let (Some(price), Some(change)) = (args.first(), args.get(1)) else {
        return Err(SparklineError::InvalidArgument(
            "❌ Expected `<price> <change%>`, e.g. `100 25` or `64 -20%`".to_string(),
        ));
    };

    let current_price: f64 = price.trim().parse().map_err(|_| {
        SparklineError::InvalidArgument(format!("❌ Price must be a number, got '{}'", price))
    })?;
    let percent_change_24h: f64 = change.trim().trim_end_matches('%').parse().map_err(|_| {
        SparklineError::InvalidArgument(format!("❌ 24h change must be a number, got '{}'", change))
    })?;

    if !current_price.is_finite() || !percent_change_24h.is_finite() {
        return Err(SparklineError::InvalidArgument(
            "❌ Price and 24h change must be finite".to_string(),
        ));
    }

    Ok((current_price, percent_change_24h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_market_args() {
        assert_eq!(parse_market_args(&["100", "25"]).unwrap(), (100.0, 25.0));
        assert_eq!(parse_market_args(&["64", "-20%"]).unwrap(), (64.0, -20.0));
    }

    #[test]
    fn test_parse_market_args_errors() {
        assert!(parse_market_args(&["100"]).is_err());
        assert!(parse_market_args(&["abc", "1"]).is_err());
        assert!(parse_market_args(&["1", "inf"]).is_err());
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let err = handle_args(&SparklineConfig::default(), &["plot", "1", "2"]).await.unwrap_err();
        assert!(err.to_string().contains("Unknown command 'plot'"));
    }

    #[tokio::test]
    async fn test_empty_args_show_help() {
        assert!(handle_args(&SparklineConfig::default(), &[]).await.is_ok());
    }
}
