//! Value range and angle span value objects.

use crate::angle::{FULL_TURN, normalize_degrees};
use crate::error::{ConfigError, ConfigResult, ensure_finite};
use serde::{Deserialize, Serialize};

/// The numeric range a slider covers, with its step size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderRange {
    pub min_value: f64,
    pub max_value: f64,
    pub step_value: f64,
}

impl Default for SliderRange {
    fn default() -> Self {
        Self {
            min_value: 0.0,
            max_value: 100.0,
            step_value: 1.0,
        }
    }
}

impl SliderRange {
    /// Create a validated range.
    pub fn new(min_value: f64, max_value: f64, step_value: f64) -> ConfigResult<Self> {
        let range = Self {
            min_value,
            max_value,
            step_value,
        };
        range.validate()?;
        Ok(range)
    }

    /// Check `max > min` and `step > 0`.
    pub fn validate(&self) -> ConfigResult<()> {
        ensure_finite("minValue", self.min_value)?;
        ensure_finite("maxValue", self.max_value)?;
        ensure_finite("stepValue", self.step_value)?;
        if self.max_value <= self.min_value {
            return Err(ConfigError::EmptyRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        if self.step_value <= 0.0 {
            return Err(ConfigError::NonPositiveStep(self.step_value));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// `max - min`.
    pub fn extent(&self) -> f64 {
        self.max_value - self.min_value
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min_value, self.max_value)
    }
}

/// The arc, in degrees, over which the value range is laid out.
///
/// `end_angle` may exceed 360 to describe a span crossing the 0/360 seam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AngleSpan {
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Default for AngleSpan {
    fn default() -> Self {
        Self {
            start_angle: 0.0,
            end_angle: FULL_TURN,
        }
    }
}

impl AngleSpan {
    /// Create a validated span.
    pub fn new(start_angle: f64, end_angle: f64) -> ConfigResult<Self> {
        let span = Self {
            start_angle,
            end_angle,
        };
        span.validate()?;
        Ok(span)
    }

    /// Check that the sweep lies in (0, 360].
    pub fn validate(&self) -> ConfigResult<()> {
        ensure_finite("startAngle", self.start_angle)?;
        ensure_finite("endAngle", self.end_angle)?;
        let sweep = self.sweep();
        if sweep <= 0.0 || sweep > FULL_TURN {
            return Err(ConfigError::InvalidSpan {
                start: self.start_angle,
                end: self.end_angle,
            });
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// `end - start`.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Whether the span reaches or passes the 0/360 seam, counting from its
    /// start within one turn.
    pub fn reaches_seam(&self) -> bool {
        normalize_degrees(self.start_angle) + self.sweep() >= FULL_TURN
    }
}
