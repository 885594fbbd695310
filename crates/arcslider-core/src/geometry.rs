//! Conversion between local viewport positions and angles.
//!
//! Positions live in the local space of a square viewport of side `size`,
//! with `(0, 0)` at the top-left corner and y growing downward. The circle is
//! centered in the viewport.

use crate::angle::{AngleType, normalize_degrees};
use kurbo::{Point, Vec2};

/// Angle reported for a position exactly at the center of the viewport.
///
/// The direction is undefined there; the pointer only crosses the center
/// transiently during a drag.
pub const CENTER_ANGLE: f64 = 0.0;

/// Center of a square viewport of side `size`.
pub fn viewport_center(size: f64) -> Point {
    Point::new(size / 2.0, size / 2.0)
}

/// Angle of `position` around the viewport center, in `angle_type`'s
/// convention, normalized to [0, 360).
pub fn position_to_angle(position: Point, size: f64, angle_type: AngleType) -> f64 {
    let center = viewport_center(size);
    let dx = position.x - center.x;
    // Flip y so that up is +90 in the standard frame.
    let dy = center.y - position.y;

    if dx.hypot(dy) < f64::EPSILON {
        return CENTER_ANGLE;
    }

    let standard = normalize_degrees(dy.atan2(dx).to_degrees());
    angle_type.from_standard(standard)
}

/// Position on a circle of `radius` around the viewport center at `degrees`
/// in `angle_type`'s convention.
///
/// `degrees` may lie outside [0, 360).
pub fn angle_to_position(degrees: f64, angle_type: AngleType, radius: f64, size: f64) -> Point {
    let radians = angle_type.to_standard(degrees).to_radians();
    let unit = Vec2::from_angle(radians);
    viewport_center(size) + Vec2::new(unit.x * radius, -unit.y * radius)
}
