use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised by the outer surfaces (argument parsing, rendering, file output).
/// Synthesis and gradient partitioning never fail.
#[derive(Debug, Error)]
pub enum SparklineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Render failed: {0}")]
    Render(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SparklineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SparklineError::InvalidArgument("price must be a number".to_string());
        assert_eq!(err.to_string(), "Invalid argument: price must be a number");
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<f64>("not json").unwrap_err();
        let err: SparklineError = json_err.into();
        assert!(matches!(err, SparklineError::Json(_)));
    }
}
