//! Tolerant comparison of measured ratios

/// Supports and confidences closer than this are treated as equal
///
/// Weighted supports are sums of floating-point fractions, so two itemsets
/// with mathematically equal support can differ in their last few bits
/// depending on summation order or weight scale.
pub const SUPPORT_TOLERANCE: f64 = 1e-12;

/// Step used when ranking by lift, which is not bounded by 1
pub(crate) const LIFT_TOLERANCE: f64 = 1e-9;

/// Bucket a measure so values a few ulps apart compare equal
///
/// Comparing keys keeps the ordering total, which a pairwise
/// `|a - b| < tolerance` test would not be.
pub(crate) fn tolerance_key(value: f64, step: f64) -> f64 {
    (value / step).round()
}
