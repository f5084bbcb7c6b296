//! Range clamping for drag offsets.

/// Clamp `value` into `[min, max]`.
///
/// Callers must pass `min <= max`. This is not checked: with `min > max`
/// the result is always `max`. A `NaN` value resolves to `min`.
pub fn number_in_range(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
