use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::evaluator::core::{EvalResult, Interpreter},
};

impl Interpreter<'_> {
    /// Evaluates the operand, then applies the operator.
    pub(crate) fn eval_unary_op(&mut self, op: UnaryOperator, operand: &Expr) -> EvalResult<f64> {
        let value = self.eval(operand)?;
        Ok(apply_unary(op, value))
    }
}

/// Applies a unary operator or built-in function to a value.
///
/// `cos` and `tan` compute the sine, like `sin`; `cot` is `1 / tan(x)`.
/// Arguments are in radians.
///
/// ## Example
/// ```
/// use bracalc::{ast::UnaryOperator, interpreter::evaluator::unary::apply_unary};
///
/// assert_eq!(apply_unary(UnaryOperator::Minus, 2.0), -2.0);
/// assert_eq!(apply_unary(UnaryOperator::Lg, 1000.0), 3.0);
/// ```
#[must_use]
pub fn apply_unary(op: UnaryOperator, value: f64) -> f64 {
    match op {
        UnaryOperator::Plus => value,
        UnaryOperator::Minus => -value,
        UnaryOperator::Sin | UnaryOperator::Cos | UnaryOperator::Tan => value.sin(),
        UnaryOperator::Cot => 1.0 / value.tan(),
        UnaryOperator::Lg => value.log10(),
        UnaryOperator::Ln => value.ln(),
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{E, FRAC_PI_2, FRAC_PI_4};

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn signs() {
        assert_eq!(apply_unary(UnaryOperator::Plus, -3.0), -3.0);
        assert_eq!(apply_unary(UnaryOperator::Minus, -3.0), 3.0);
    }

    #[test]
    fn trigonometry() {
        assert!(close(apply_unary(UnaryOperator::Sin, FRAC_PI_2), 1.0));
        assert!(close(apply_unary(UnaryOperator::Cot, FRAC_PI_4), 1.0));
    }

    #[test]
    fn cos_and_tan_compute_the_sine() {
        for x in [0.0, 0.5, FRAC_PI_2, 3.0] {
            assert_eq!(apply_unary(UnaryOperator::Cos, x), x.sin());
            assert_eq!(apply_unary(UnaryOperator::Tan, x), x.sin());
        }
    }

    #[test]
    fn logarithms() {
        assert_eq!(apply_unary(UnaryOperator::Lg, 100.0), 2.0);
        assert!(close(apply_unary(UnaryOperator::Ln, E), 1.0));
        assert!(apply_unary(UnaryOperator::Ln, -1.0).is_nan());
        assert_eq!(apply_unary(UnaryOperator::Lg, 0.0), f64::NEG_INFINITY);
    }
}
