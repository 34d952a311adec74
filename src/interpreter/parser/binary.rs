use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::parser::core::{ParseResult, Parser},
};

impl Parser<'_> {
    /// Parses comparison expressions.
    ///
    /// Handles left-associative operators: `==`, `<`, `>`, `<=` and `>=`.
    ///
    /// The rule is: `comparison := additive (("==" | "<" | ">" | "<=" | ">=")
    /// additive)*`
    pub(crate) fn parse_comparison(&mut self) -> ParseResult<Expr> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual};

        let mut left = self.parse_additive()?;
        while let Some(op) = self.match_binary(&[Equal, Less, Greater, LessEqual, GreaterEqual])? {
            let right = self.parse_additive()?;
            left = Expr::binary(left, op, right);
        }
        Ok(left)
    }

    /// Parses addition and subtraction expressions.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    pub(crate) fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = self.match_binary(&[BinaryOperator::Add, BinaryOperator::Sub])? {
            let right = self.parse_multiplicative()?;
            left = Expr::binary(left, op, right);
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// The rule is: `multiplicative := exponent (("*" | "//" | "/" | "%")
    /// exponent)*`
    pub(crate) fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        use BinaryOperator::{Div, IntDiv, Mod, Mul};

        let mut left = self.parse_exponent()?;
        while let Some(op) = self.match_binary(&[Mul, IntDiv, Div, Mod])? {
            let right = self.parse_exponent()?;
            left = Expr::binary(left, op, right);
        }
        Ok(left)
    }

    /// Parses exponentiation.
    ///
    /// The right operand is a whole comparison, so `2^3+1` is `2^(3+1)` and
    /// `2^1==1` is `2^(1==1)`.
    ///
    /// The rule is: `exponent := factor ("^" comparison)*`
    pub(crate) fn parse_exponent(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_factor()?;
        while let Some(op) = self.match_binary(&[BinaryOperator::Pow])? {
            let right = self.parse_comparison()?;
            left = Expr::binary(left, op, right);
        }
        Ok(left)
    }

    /// Consumes the lookahead if it is one of the `accepted` operators.
    ///
    /// End of input here simply ends the operator chain; it never requests
    /// continuation.
    fn match_binary(&mut self, accepted: &[BinaryOperator]) -> ParseResult<Option<BinaryOperator>> {
        let Some(token) = &self.current else {
            return Ok(None);
        };
        let Ok(op) = BinaryOperator::try_from(token) else {
            return Ok(None);
        };
        if !accepted.contains(&op) {
            return Ok(None);
        }

        self.advance()?;
        Ok(Some(op))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{BinaryOperator, Expr},
        interpreter::{lexer::Lexer, parser::core::Parser, source::NoInput},
    };

    fn parse(text: &str) -> Expr {
        Parser::new(Lexer::new(text), &mut NoInput).unwrap()
                                                   .parse()
                                                   .unwrap()
    }

    fn num(text: &str) -> Expr {
        Expr::number(text)
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(parse("1+2*3"),
                   Expr::binary(num("1"),
                                BinaryOperator::Add,
                                Expr::binary(num("2"), BinaryOperator::Mul, num("3"))));
    }

    #[test]
    fn additive_is_left_associative() {
        assert_eq!(parse("1-2+3"),
                   Expr::binary(Expr::binary(num("1"), BinaryOperator::Sub, num("2")),
                                BinaryOperator::Add,
                                num("3")));
    }

    #[test]
    fn comparison_binds_loosest() {
        assert_eq!(parse("1+1==2"),
                   Expr::binary(Expr::binary(num("1"), BinaryOperator::Add, num("1")),
                                BinaryOperator::Equal,
                                num("2")));
    }

    #[test]
    fn exponent_right_operand_is_a_comparison() {
        assert_eq!(parse("2^3+1"),
                   Expr::binary(num("2"),
                                BinaryOperator::Pow,
                                Expr::binary(num("3"), BinaryOperator::Add, num("1"))));
    }

    #[test]
    fn integer_division_and_modulo() {
        assert_eq!(parse("7//2%3"),
                   Expr::binary(Expr::binary(num("7"), BinaryOperator::IntDiv, num("2")),
                                BinaryOperator::Mod,
                                num("3")));
    }
}
