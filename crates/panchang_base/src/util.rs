//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
///
/// Uses `((deg % 360) + 360) % 360` so that both negative inputs and inputs
/// of several revolutions land in the principal range. Non-finite input maps
/// to 0.0 so that downstream bucket lookups still produce an element.
pub fn normalize_360(deg: f64) -> f64 {
    if !deg.is_finite() {
        return 0.0;
    }
    let r = ((deg % 360.0) + 360.0) % 360.0;
    // -1e-17 % 360 + 360 rounds to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Bucket index of `lon` for a circle divided into `count` equal segments.
///
/// The result is clamped to `[0, count - 1]`.
pub(crate) fn segment_index(lon: f64, count: u8) -> u8 {
    let span = 360.0 / count as f64;
    let idx = (normalize_360(lon) / span).floor() as u8;
    idx.min(count - 1)
}
