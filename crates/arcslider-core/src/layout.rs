//! Per-render outputs: where the handle sits and the track/fill arcs.

use crate::config::SliderConfig;
use crate::geometry::angle_to_position;
use crate::mapping::value_to_angle;
use crate::path::{ArcPath, ArcPathParams, arc_shaped_path};
use crate::step::trim_align_value;
use kurbo::Point;

/// Distance from the viewport edge to the track centerline.
pub const TRACK_INSET: f64 = 20.0;

/// Radius of the track for a viewport of side `svg_size`.
pub fn track_radius(svg_size: f64) -> f64 {
    (svg_size / 2.0 - TRACK_INSET).max(0.0)
}

/// Geometry of a slider showing a given value.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderLayout {
    /// The value actually shown (clamped and step-aligned).
    pub aligned_value: f64,
    pub track_radius: f64,
    /// Angle of the handle in the configured convention.
    pub handle_angle: f64,
    pub handle_center: Point,
    pub handle_radius: f64,
    /// From the handle to `end_angle`: the unfilled remainder.
    pub track: ArcPath,
    /// From `start_angle` to the handle.
    pub fill: ArcPath,
}

impl SliderLayout {
    /// Lay out `config` showing `value`. The value is aligned first, so the
    /// handle never sits between steps or outside the range.
    pub fn compute(config: &SliderConfig, value: f64) -> Self {
        let range = config.range();
        let span = config.span();
        let aligned_value = trim_align_value(value, &range);
        let radius = track_radius(config.svg_size);
        let handle_angle = value_to_angle(aligned_value, &range, &span);
        let handle_center =
            angle_to_position(handle_angle, config.angle_type, radius, config.svg_size);

        let arc = |start_angle, end_angle| {
            arc_shaped_path(&ArcPathParams {
                start_angle,
                end_angle,
                angle_type: config.angle_type,
                radius,
                svg_size: config.svg_size,
                direction: config.angle_type.direction,
            })
        };

        Self {
            aligned_value,
            track_radius: radius,
            handle_angle,
            handle_center,
            handle_radius: config.handle_radius,
            track: arc(handle_angle, span.end_angle),
            fill: arc(span.start_angle, handle_angle),
        }
    }

    /// Whether a local point lies on the handle.
    ///
    /// For hosts that cannot ask their scene graph which element was pressed.
    pub fn hits_handle(&self, point: Point) -> bool {
        let dx = point.x - self.handle_center.x;
        let dy = point.y - self.handle_center.y;
        dx * dx + dy * dy <= self.handle_radius * self.handle_radius
    }
}
