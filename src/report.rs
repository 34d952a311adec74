use std::fmt::Write;

use crate::{
    interpreter::{evaluator::rewrite::OPERATOR_CODES, scope::Scope},
    Evaluation,
};

/// Marker printed in front of results that may not be exact.
pub const INACCURATE_MARKER: &str = "~";

/// Formats a value as the shortest decimal that parses back to the same
/// double, without exponent, trailing zeros or trailing point.
///
/// ## Example
/// ```
/// use bracalc::report::format_value;
///
/// assert_eq!(format_value(7.0), "7");
/// assert_eq!(format_value(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_value(f64::NAN), "nan");
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{value}")
    }
}

/// Formats an evaluation the way the interactive session prints it.
///
/// ## Example
/// ```
/// use bracalc::{report::format_evaluation, Evaluation};
///
/// let exact = Evaluation { value:    3.0,
///                          accurate: true, };
/// let rough = Evaluation { value:    0.5,
///                          accurate: false, };
/// assert_eq!(format_evaluation(&exact), "3");
/// assert_eq!(format_evaluation(&rough), "~0.5");
/// ```
#[must_use]
pub fn format_evaluation(evaluation: &Evaluation) -> String {
    let marker = if evaluation.accurate { "" } else { INACCURATE_MARKER };
    format!("{marker}{}", format_value(evaluation.value))
}

/// Lists every variable as a `name value` line, in name order.
#[must_use]
pub fn describe_scope(scope: &Scope) -> String {
    scope.iter().fold(String::new(), |mut out, (name, value)| {
                    let _ = writeln!(out, "{name} {}", format_value(value));
                    out
                })
}

/// The text printed by the `help` command: the bracket operator codes and the
/// built-in functions.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn help_text() -> String {
    let mut out = String::from("Bracket operator codes:\n");

    for (index, (code, operator)) in OPERATOR_CODES.iter().enumerate() {
        let shadowed = OPERATOR_CODES[..index].iter().any(|(earlier, _)| earlier == code);
        if shadowed {
            let _ = writeln!(out, "{code:>4} {operator} (unreachable, shadowed)");
        } else {
            let _ = writeln!(out, "{code:>4} {operator}");
        }
    }

    out.push_str("Built-in functions:\n");
    out.push_str("  lg x     base-10 logarithm\n");
    out.push_str("  ln x     natural logarithm\n");
    out.push_str("  sin x    sine of x radians\n");
    out.push_str("  cos x    same as sin x\n");
    out.push_str("  tan x    same as sin x\n");
    out.push_str("  cot x    cotangent of x radians\n");
    out.push_str("Constants: pi, exp\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_print_without_trailing_zeros() {
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(-4.0), "-4");
        assert_eq!(format_value(1e21), "1000000000000000000000");
    }

    #[test]
    fn infinities() {
        assert_eq!(format_value(f64::INFINITY), "inf");
        assert_eq!(format_value(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn scope_dump_is_sorted() {
        let mut scope = Scope::new();
        *scope.slot("y") = 0.5;
        *scope.slot("x") = 2.0;
        assert_eq!(describe_scope(&scope), "x 2\ny 0.5\n");
    }

    #[test]
    fn help_lists_codes_and_functions() {
        let help = help_text();
        assert!(help.contains("  13 cot\n"));
        assert!(help.contains("  -3 % (unreachable, shadowed)\n"));
        assert!(help.contains("natural logarithm"));
    }
}
