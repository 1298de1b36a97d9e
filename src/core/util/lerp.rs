/// Linear interpolation between `lo` and `hi`.
///
/// Evaluated as a weighted sum so that `t == 0.0` yields exactly `lo` and
/// `t == 1.0` yields exactly `hi`.
#[inline]
#[must_use]
pub fn lerp(lo: f64, hi: f64, t: f64) -> f64 {
    lo * (1.0 - t) + hi * t
}
