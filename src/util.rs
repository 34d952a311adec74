/// Numeric conversion helpers.
///
/// This module provides the checked float-to-integer truncation used by the
/// modulo operator, the tolerance comparison behind `==`, and the bounds the
/// evaluator uses to decide whether a result prints exactly.
///
/// Conversions return a `Result`, which is `Ok` if the value fits and an
/// error if it is out of range or not finite.
pub mod num;
