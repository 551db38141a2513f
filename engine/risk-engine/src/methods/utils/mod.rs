pub mod validation;

/// Clamps money and ratios to `[0, +inf)`, NaN and negatives become zero
pub(crate) fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
