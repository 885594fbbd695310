//! Linear mapping between the value range and the angle span.
//!
//! Neither direction clamps: values outside the range map to angles outside
//! the span and vice versa. Callers snap with [`crate::step::trim_align_value`].

use crate::angle::{FULL_TURN, normalize_degrees};
use crate::range::{AngleSpan, SliderRange};

/// Angle (in the span's units, not normalized) at which `value` sits.
pub fn value_to_angle(value: f64, range: &SliderRange, span: &AngleSpan) -> f64 {
    debug_assert!(range.is_valid(), "invalid slider range: {range:?}");
    let ratio = (value - range.min_value) / range.extent();
    span.start_angle + ratio * span.sweep()
}

/// Raw (unclamped, unaligned) value for a measured angle in [0, 360).
///
/// When the span reaches the 0/360 seam, angles below `start_angle` are
/// un-wrapped by a full turn so dragging across the seam stays continuous.
/// Every other angle is interpolated as measured: dead-zone angles before the
/// start give values below min, those past the end give values above max.
pub fn angle_to_value(angle: f64, range: &SliderRange, span: &AngleSpan) -> f64 {
    debug_assert!(range.is_valid(), "invalid slider range: {range:?}");
    debug_assert!(span.is_valid(), "invalid angle span: {span:?}");

    // Measured angles live in [0, 360), so compare against the start in the
    // same turn.
    let start = normalize_degrees(span.start_angle);
    let angle = if angle < start && span.reaches_seam() {
        angle + FULL_TURN
    } else {
        angle
    };
    range.min_value + (angle - start) / span.sweep() * range.extent()
}
