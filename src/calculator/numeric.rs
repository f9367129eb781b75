use crate::calculator::constants::BAR_MAX_PCT;

/// Round to the nearest integer with ties toward positive infinity.
///
/// `2.5 -> 3`, `-2.5 -> -2`. Differs from `f64::round`, which rounds ties
/// away from zero.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    // value - floor(value) is exact, unlike value + 0.5.
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// `part / whole * 100`, or zero when the ratio is undefined.
#[inline]
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    let pct = part / whole * 100.0;
    if pct.is_finite() { pct } else { 0.0 }
}

/// Clamp a percentage to a drawable bar width in `[0, 100]`.
#[inline]
pub fn bar_width(pct: f64) -> f64 {
    if pct.is_nan() {
        return 0.0;
    }
    pct.clamp(0.0, BAR_MAX_PCT)
}
