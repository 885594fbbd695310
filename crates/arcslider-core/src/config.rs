//! Slider configuration.
//!
//! Field names follow the host's camelCase prop names so a JSON object of
//! props deserializes directly. Missing fields take the defaults below.

use crate::angle::AngleType;
use crate::error::{ConfigError, ConfigResult, ensure_finite};
use crate::range::{AngleSpan, SliderRange};
use serde::{Deserialize, Serialize};

/// Default side of the square viewport.
pub const DEFAULT_SVG_SIZE: f64 = 200.0;
/// Default handle radius.
pub const DEFAULT_HANDLE_RADIUS: f64 = 10.0;

/// Everything a slider needs besides its current value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderConfig {
    /// Side of the square viewport, in local units.
    pub svg_size: f64,
    /// Radius of the handle. Display only: it never enters the value math.
    pub handle_radius: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub step_value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub angle_type: AngleType,
    /// Blocks value changes from dragging. Gestures still start and end.
    pub disabled: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        let range = SliderRange::default();
        let span = AngleSpan::default();
        Self {
            svg_size: DEFAULT_SVG_SIZE,
            handle_radius: DEFAULT_HANDLE_RADIUS,
            min_value: range.min_value,
            max_value: range.max_value,
            step_value: range.step_value,
            start_angle: span.start_angle,
            end_angle: span.end_angle,
            angle_type: AngleType::default(),
            disabled: false,
        }
    }
}

impl SliderConfig {
    /// Parse a JSON props object and validate it.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every contract the geometry relies on.
    pub fn validate(&self) -> ConfigResult<()> {
        ensure_finite("svgSize", self.svg_size)?;
        ensure_finite("handleRadius", self.handle_radius)?;
        if self.svg_size <= 0.0 {
            return Err(ConfigError::NonPositiveSize(self.svg_size));
        }
        if self.handle_radius < 0.0 {
            return Err(ConfigError::NegativeHandleRadius(self.handle_radius));
        }
        self.range().validate()?;
        self.span().validate()
    }

    pub fn range(&self) -> SliderRange {
        SliderRange {
            min_value: self.min_value,
            max_value: self.max_value,
            step_value: self.step_value,
        }
    }

    pub fn span(&self) -> AngleSpan {
        AngleSpan {
            start_angle: self.start_angle,
            end_angle: self.end_angle,
        }
    }

    pub fn with_range(mut self, range: SliderRange) -> Self {
        self.min_value = range.min_value;
        self.max_value = range.max_value;
        self.step_value = range.step_value;
        self
    }

    pub fn with_span(mut self, span: AngleSpan) -> Self {
        self.start_angle = span.start_angle;
        self.end_angle = span.end_angle;
        self
    }

    pub fn with_svg_size(mut self, svg_size: f64) -> Self {
        self.svg_size = svg_size;
        self
    }

    pub fn with_handle_radius(mut self, handle_radius: f64) -> Self {
        self.handle_radius = handle_radius;
        self
    }

    pub fn with_angle_type(mut self, angle_type: AngleType) -> Self {
        self.angle_type = angle_type;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}
