//! Safe-division helpers.
//!
//! Every ratio metric in the engine uses the same convention: a zero
//! denominator yields `None` (undefined), never zero and never a panic.
//! Aggregates over ratios must exclude undefined values rather than
//! treating them as zero.

/// Divide, returning `None` when the denominator is zero or non-finite.
pub fn safe_div(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 || !denominator.is_finite() || !numerator.is_finite() {
        None
    } else {
        Some(numerator / denominator)
    }
}

/// Divide and scale to percent, with the same zero-denominator convention.
pub fn safe_pct(numerator: f64, denominator: f64) -> Option<f64> {
    safe_div(numerator, denominator).map(|r| r * 100.0)
}

/// Mean over the defined values only; `None` when nothing is defined.
pub fn mean_defined<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut sum = 0.0;
    let mut count = 0u64;
    for value in values.into_iter().flatten() {
        sum += value;
        count += 1;
    }
    safe_div(sum, count as f64)
}
