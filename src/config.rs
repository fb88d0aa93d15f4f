//! Sparkline configuration loaded from environment variables

use std::path::PathBuf;
use thiserror::Error;

use crate::models::Color;
use crate::services::trajectory_service::{DEFAULT_POINT_COUNT, MIN_POINT_COUNT};

pub const DEFAULT_WIDTH: u32 = 120;
pub const DEFAULT_HEIGHT: u32 = 40;
pub const DEFAULT_ABOVE_COLOR: Color = Color::new(0x16, 0xc7, 0x84);
pub const DEFAULT_BELOW_COLOR: Color = Color::new(0xea, 0x39, 0x43);
pub const DEFAULT_FILL_OPACITY: f64 = 0.3;

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} is not a valid number: '{value}'")]
    InvalidNumber { key: String, value: String },
    #[error("{key} is not a #rrggbb color: '{value}'")]
    InvalidColor { key: String, value: String },
    #[error("{key} out of range: {reason}")]
    OutOfRange { key: String, reason: String },
}

/// Rendering parameters shared by every sparkline
#[derive(Debug, Clone, PartialEq)]
pub struct SparklineConfig {
    pub point_count: usize,
    pub width: u32,
    pub height: u32,
    pub above_color: Color,
    pub below_color: Color,
    pub fill_opacity: f64,
    pub output_dir: PathBuf,
}

impl Default for SparklineConfig {
    fn default() -> Self {
        SparklineConfig {
            point_count: DEFAULT_POINT_COUNT,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            above_color: DEFAULT_ABOVE_COLOR,
            below_color: DEFAULT_BELOW_COLOR,
            fill_opacity: DEFAULT_FILL_OPACITY,
            output_dir: PathBuf::from("."),
        }
    }
}

impl SparklineConfig {
    /// Load from the process environment (call `dotenv::dotenv()` first)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup; unset variables keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = SparklineConfig::default();

        let point_count = parse_number(&lookup, "SPARKLINE_POINTS", defaults.point_count)?;
        if point_count < MIN_POINT_COUNT {
            return Err(ConfigError::OutOfRange {
                key: "SPARKLINE_POINTS".to_string(),
                reason: format!("need at least {} points, got {}", MIN_POINT_COUNT, point_count),
            });
        }

        let width = parse_number(&lookup, "SPARKLINE_WIDTH", defaults.width)?;
        let height = parse_number(&lookup, "SPARKLINE_HEIGHT", defaults.height)?;
        if width == 0 || height == 0 {
            return Err(ConfigError::OutOfRange {
                key: "SPARKLINE_WIDTH/SPARKLINE_HEIGHT".to_string(),
                reason: format!("canvas must be non-empty, got {}x{}", width, height),
            });
        }

        let fill_opacity = parse_number(&lookup, "SPARKLINE_FILL_OPACITY", defaults.fill_opacity)?;
        if !(0.0..=1.0).contains(&fill_opacity) {
            return Err(ConfigError::OutOfRange {
                key: "SPARKLINE_FILL_OPACITY".to_string(),
                reason: format!("must be within [0, 1], got {}", fill_opacity),
            });
        }

        Ok(SparklineConfig {
            point_count,
            width,
            height,
            above_color: parse_color(&lookup, "SPARKLINE_ABOVE_COLOR", defaults.above_color)?,
            below_color: parse_color(&lookup, "SPARKLINE_BELOW_COLOR", defaults.below_color)?,
            fill_opacity,
            output_dir: lookup("SPARKLINE_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
        })
    }
}

fn parse_number<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
            key: key.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

fn parse_color<F>(lookup: &F, key: &str, default: Color) -> Result<Color, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => Color::parse_hex(&value).ok_or(ConfigError::InvalidColor {
            key: key.to_string(),
            value,
        }),
        None => Ok(default),
    }
}
