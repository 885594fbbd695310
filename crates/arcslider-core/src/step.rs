//! Clamping and step alignment of slider values.

use crate::range::SliderRange;

/// Clamp `value` into the range and snap it to the nearest step.
///
/// Steps are counted from `min_value`, so with `min = 16, step = 5` the
/// aligned values are 16, 21, 26, ... An exact halfway value rounds up. The
/// result is re-clamped, because `max_value` need not sit on a step.
///
/// The range must be valid (`step > 0`, `max > min`); this is only checked
/// in debug builds.
pub fn trim_align_value(value: f64, range: &SliderRange) -> f64 {
    debug_assert!(range.is_valid(), "invalid slider range: {range:?}");
    debug_assert!(!value.is_nan(), "cannot align NaN");

    let clamped = range.clamp(value);
    let steps = ((clamped - range.min_value) / range.step_value).round();
    range.clamp(range.min_value + steps * range.step_value)
}
