use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
///
/// Results with a larger magnitude may print digits the double does not
/// actually hold.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// `2^63`, the first magnitude a truncation to `i64` cannot hold.
pub const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Truncates `value` toward zero and converts it to `i64`.
///
/// ## Errors
/// `RuntimeError::IntegerOutOfRange` for NaN, infinities, and values whose
/// truncation lies outside `i64`.
///
/// ## Example
/// ```
/// use bracalc::{error::RuntimeError, util::num::truncate_to_i64};
///
/// assert_eq!(truncate_to_i64(-7.9), Ok(-7));
///
/// let err = truncate_to_i64(1e19).unwrap_err();
/// assert!(matches!(err, RuntimeError::IntegerOutOfRange { .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn truncate_to_i64(value: f64) -> EvalResult<i64> {
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated < -I64_BOUND || truncated >= I64_BOUND {
        return Err(RuntimeError::IntegerOutOfRange { value });
    }
    Ok(truncated as i64)
}

/// Returns `true` if `value` is within machine epsilon of its integer part.
#[must_use]
pub fn is_integral(value: f64) -> bool {
    (value - value.trunc()).abs() <= f64::EPSILON
}

/// Equality within relative machine epsilon:
/// `|a - b| <= ε · max(|a|, |b|)`.
///
/// ## Example
/// ```
/// use bracalc::util::num::approx_equal;
///
/// assert!(approx_equal(0.1 + 0.2, 0.3));
/// assert!(!approx_equal(1.0, 1.0001));
/// ```
#[must_use]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= f64::EPSILON * a.abs().max(b.abs())
}
