use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Interpreter},
    util::num::{I64_BOUND, approx_equal, truncate_to_i64},
};

impl Interpreter<'_> {
    /// Evaluates a binary operation.
    ///
    /// Operands are evaluated left to right, except for `%`: its right operand
    /// is evaluated first, and the left operand is not evaluated at all when
    /// the divisor truncates to zero.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr)
                                 -> EvalResult<f64> {
        if op == BinaryOperator::Mod {
            let divisor = self.eval(right)?;
            if truncate_to_i64(divisor)? == 0 {
                return Ok(f64::NAN);
            }
            let dividend = self.eval(left)?;
            return modulo(dividend, divisor);
        }

        let lhs = self.eval(left)?;
        let rhs = self.eval(right)?;
        apply_binary(op, lhs, rhs)
    }
}

/// Applies a binary operator to two values.
///
/// Comparisons return `1` or `0`; `==` compares within relative machine
/// epsilon.
///
/// # Errors
/// Range errors from `%`, see [`modulo`].
///
/// ## Example
/// ```
/// use bracalc::{ast::BinaryOperator, interpreter::evaluator::binary::apply_binary};
///
/// assert_eq!(apply_binary(BinaryOperator::IntDiv, 10.0, 3.0), Ok(3.0));
/// assert_eq!(apply_binary(BinaryOperator::LessEqual, 2.0, 2.0), Ok(1.0));
/// ```
pub fn apply_binary(op: BinaryOperator, lhs: f64, rhs: f64) -> EvalResult<f64> {
    Ok(match op {
        BinaryOperator::Add => lhs + rhs,
        BinaryOperator::Sub => lhs - rhs,
        BinaryOperator::Mul => lhs * rhs,
        BinaryOperator::Div => lhs / rhs,
        BinaryOperator::IntDiv => integer_divide(lhs, rhs),
        BinaryOperator::Mod => return modulo(lhs, rhs),
        BinaryOperator::Pow => lhs.powf(rhs),
        BinaryOperator::Equal => truth(approx_equal(lhs, rhs)),
        BinaryOperator::Less => truth(lhs < rhs),
        BinaryOperator::Greater => truth(lhs > rhs),
        BinaryOperator::LessEqual => truth(lhs <= rhs),
        BinaryOperator::GreaterEqual => truth(lhs >= rhs),
    })
}

const fn truth(condition: bool) -> f64 {
    if condition { 1.0 } else { 0.0 }
}

/// Divides as floats, then truncates the quotient toward zero.
///
/// A quotient whose magnitude exceeds `i64::MAX` becomes `+inf`; NaN passes
/// through unchanged.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn integer_divide(lhs: f64, rhs: f64) -> f64 {
    let quotient = lhs / rhs;
    if quotient.abs() > I64_BOUND {
        f64::INFINITY
    } else if quotient.is_finite() {
        quotient as i64 as f64
    } else {
        quotient
    }
}

/// Truncates both operands to `i64` and takes the remainder, which has the
/// sign of the dividend. A divisor that truncates to zero gives NaN.
///
/// # Errors
/// - `RuntimeError::IntegerOutOfRange` if an operand does not fit `i64`.
/// - `RuntimeError::RemainderOverflow` for `i64::MIN % -1`.
#[allow(clippy::cast_precision_loss)]
pub fn modulo(lhs: f64, rhs: f64) -> EvalResult<f64> {
    let divisor = truncate_to_i64(rhs)?;
    if divisor == 0 {
        return Ok(f64::NAN);
    }
    let dividend = truncate_to_i64(lhs)?;

    dividend.checked_rem(divisor)
            .map(|remainder| remainder as f64)
            .ok_or(RuntimeError::RemainderOverflow { left:  dividend,
                                                     right: divisor, })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(op: BinaryOperator, lhs: f64, rhs: f64) -> f64 {
        apply_binary(op, lhs, rhs).unwrap()
    }

    #[test]
    fn arithmetic() {
        assert_eq!(apply(BinaryOperator::Add, 3.0, 4.0), 7.0);
        assert_eq!(apply(BinaryOperator::Sub, 3.0, 4.0), -1.0);
        assert_eq!(apply(BinaryOperator::Mul, 3.0, 4.0), 12.0);
        assert_eq!(apply(BinaryOperator::Div, 1.0, 4.0), 0.25);
        assert_eq!(apply(BinaryOperator::Pow, 2.0, 10.0), 1024.0);
    }

    #[test]
    fn integer_division_truncates() {
        assert_eq!(integer_divide(10.0, 3.0), 3.0);
        assert_eq!(integer_divide(-7.0, 2.0), -3.0);
        assert_eq!(integer_divide(10.0, 2.5), 4.0);
    }

    #[test]
    fn integer_division_never_yields_negative_zero() {
        let value = integer_divide(-1.0, 3.0);
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
    }

    #[test]
    fn integer_division_out_of_range() {
        assert_eq!(integer_divide(1.0, 0.0), f64::INFINITY);
        assert_eq!(integer_divide(-1.0, 0.0), f64::INFINITY);
        assert_eq!(integer_divide(1e300, 1e-10), f64::INFINITY);
        assert!(integer_divide(0.0, 0.0).is_nan());
    }

    #[test]
    fn modulo_truncates_operands() {
        assert_eq!(modulo(10.0, 3.0), Ok(1.0));
        assert_eq!(modulo(10.9, 3.7), Ok(1.0));
        assert_eq!(modulo(-7.0, 3.0), Ok(-1.0));
        assert!(modulo(10.0, 0.0).unwrap().is_nan());
        assert!(modulo(10.0, 0.5).unwrap().is_nan());
    }

    #[test]
    fn modulo_range_errors() {
        assert!(matches!(modulo(1e30, 7.0), Err(RuntimeError::IntegerOutOfRange { .. })));
        assert!(matches!(modulo(1.0, f64::NAN), Err(RuntimeError::IntegerOutOfRange { .. })));
        assert_eq!(modulo(-I64_BOUND, -1.0),
                   Err(RuntimeError::RemainderOverflow { left:  i64::MIN,
                                                         right: -1, }));
    }

    #[test]
    fn comparisons() {
        assert_eq!(apply(BinaryOperator::Less, 1.0, 2.0), 1.0);
        assert_eq!(apply(BinaryOperator::Greater, 1.0, 2.0), 0.0);
        assert_eq!(apply(BinaryOperator::GreaterEqual, 2.0, 2.0), 1.0);
        assert_eq!(apply(BinaryOperator::Equal, 0.1 + 0.2, 0.3), 1.0);
        assert_eq!(apply(BinaryOperator::Equal, 1.0, 2.0), 0.0);
        assert_eq!(apply(BinaryOperator::Less, f64::NAN, 1.0), 0.0);
    }
}
