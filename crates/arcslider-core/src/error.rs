//! Configuration errors.

use thiserror::Error;

/// A slider configuration that violates the engine's contracts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Empty value range: maxValue ({max}) must be greater than minValue ({min})")]
    EmptyRange { min: f64, max: f64 },
    #[error("Step value must be positive, got {0}")]
    NonPositiveStep(f64),
    #[error("Invalid angle span {start}..{end}: sweep must be in (0, 360]")]
    InvalidSpan { start: f64, end: f64 },
    #[error("SVG size must be positive, got {0}")]
    NonPositiveSize(f64),
    #[error("Handle radius must not be negative, got {0}")]
    NegativeHandleRadius(f64),
    #[error("Field {0} must be finite")]
    NonFinite(&'static str),
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Fail with [`ConfigError::NonFinite`] unless `value` is finite.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite(field))
    }
}
