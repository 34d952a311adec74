use crate::{
    ast::{AssignOperator, Expr, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a factor, the highest-binding level of the grammar.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ("+" | "-") factor
    ///             | INTEGER | REAL
    ///             | "(" comparison ")"
    ///             | function ( "(" comparison ")" | factor )
    ///             | "if" "(" comparison ")" comparison? ("else" comparison)?
    ///             | IDENT (assign_op comparison)?
    /// ```
    /// If the input ends where a factor is required, one more line is
    /// requested and the factor is parsed from it.
    ///
    /// # Errors
    /// `ParseError::UnexpectedToken` if the lookahead cannot start a factor.
    pub(crate) fn parse_factor(&mut self) -> ParseResult<Expr> {
        let token = loop {
            match &self.current {
                Some(token) => break token.clone(),
                None => self.continue_input()?,
            }
        };

        match token {
            Token::Plus | Token::Minus => {
                let op = UnaryOperator::try_from(&token)?;
                self.advance()?;
                let operand = self.parse_factor()?;
                Ok(Expr::unary(op, operand))
            },
            Token::Integer(text) | Token::Real(text) => {
                self.advance()?;
                Ok(Expr::Number { text })
            },
            Token::LParen => self.parse_grouping(),
            Token::Sin | Token::Cos | Token::Tan | Token::Cot | Token::Lg | Token::Ln => {
                self.parse_function(&token)
            },
            Token::If => self.parse_conditional(),
            Token::Identifier(name) => self.parse_identifier(name),
            other => Err(self.unexpected(&other)),
        }
    }

    /// Parses `"(" comparison ")"`.
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        self.eat(&Token::LParen)?;
        let expr = self.parse_comparison()?;
        self.eat(&Token::RParen)?;
        Ok(expr)
    }

    /// Parses a built-in function application.
    ///
    /// The argument is either parenthesized, or a bare factor: `sin2` and
    /// `sin(2)` are the same, while `sin2+1` is `sin(2)+1`.
    fn parse_function(&mut self, token: &Token) -> ParseResult<Expr> {
        let op = UnaryOperator::try_from(token)?;
        self.eat(token)?;

        let operand = if self.current == Some(Token::LParen) {
            self.parse_grouping()?
        } else {
            self.parse_factor()?
        };
        Ok(Expr::unary(op, operand))
    }

    /// Parses an `if` expression.
    ///
    /// Syntax:
    /// ```text
    ///     if ( <condition> ) <then>? else <otherwise>
    /// ```
    /// The then-branch is [`Expr::Absent`] when the condition is directly
    /// followed by `else`, a closing bracket, or the end of input. Ending the
    /// input after the condition does not request continuation.
    fn parse_conditional(&mut self) -> ParseResult<Expr> {
        self.eat(&Token::If)?;
        self.eat(&Token::LParen)?;
        let condition = self.parse_comparison()?;
        self.eat(&Token::RParen)?;

        let then_branch = if matches!(self.current,
                                      None | Some(Token::Else | Token::RParen | Token::RBracket))
        {
            Expr::Absent
        } else {
            self.parse_comparison()?
        };

        let else_branch = if self.current == Some(Token::Else) {
            self.advance()?;
            self.parse_comparison()?
        } else {
            Expr::Absent
        };

        Ok(Expr::Conditional { condition:   Box::new(condition),
                               then_branch: Box::new(then_branch),
                               else_branch: Box::new(else_branch), })
    }

    /// Parses a variable reference, or an assignment if an assignment
    /// operator follows the name.
    fn parse_identifier(&mut self, name: String) -> ParseResult<Expr> {
        self.advance()?;

        if let Some(token) = &self.current
           && let Ok(op) = AssignOperator::try_from(token)
        {
            self.advance()?;
            let value = self.parse_comparison()?;
            return Ok(Expr::Assignment { name,
                                         op,
                                         value: Box::new(value) });
        }
        Ok(Expr::Variable { name })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{AssignOperator, BinaryOperator, Expr, UnaryOperator},
        error::ParseError,
        interpreter::{
            lexer::Lexer,
            parser::core::{Interrupt, ParseResult, Parser},
            source::NoInput,
        },
    };

    fn try_parse(text: &str) -> ParseResult<Expr> {
        Parser::new(Lexer::new(text), &mut NoInput)?.parse()
    }

    fn parse(text: &str) -> Expr {
        try_parse(text).unwrap()
    }

    fn conditional(condition: Expr, then_branch: Expr, else_branch: Expr) -> Expr {
        Expr::Conditional { condition:   Box::new(condition),
                            then_branch: Box::new(then_branch),
                            else_branch: Box::new(else_branch), }
    }

    #[test]
    fn signs_nest() {
        assert_eq!(parse("-+2"),
                   Expr::unary(UnaryOperator::Minus,
                               Expr::unary(UnaryOperator::Plus, Expr::number("2"))));
    }

    #[test]
    fn function_argument_forms() {
        let expected = Expr::unary(UnaryOperator::Sin, Expr::number("2"));
        assert_eq!(parse("sin(2)"), expected);
        assert_eq!(parse("sin 2"), expected);
        assert_eq!(parse("sin2+1"),
                   Expr::binary(expected, BinaryOperator::Add, Expr::number("1")));
        assert_eq!(parse("ln(1+1)"),
                   Expr::unary(UnaryOperator::Ln,
                               Expr::binary(Expr::number("1"),
                                            BinaryOperator::Add,
                                            Expr::number("1"))));
    }

    #[test]
    fn conditional_with_both_branches() {
        assert_eq!(parse("if(1)5else9"),
                   conditional(Expr::number("1"), Expr::number("5"), Expr::number("9")));
    }

    #[test]
    fn conditional_branches_may_be_absent() {
        assert_eq!(parse("if(0)5"),
                   conditional(Expr::number("0"), Expr::number("5"), Expr::Absent));
        assert_eq!(parse("if(1)"), conditional(Expr::number("1"), Expr::Absent, Expr::Absent));
        assert_eq!(parse("if(0)else7"),
                   conditional(Expr::number("0"), Expr::Absent, Expr::number("7")));
        assert_eq!(parse("(if(1))"), conditional(Expr::number("1"), Expr::Absent, Expr::Absent));
    }

    #[test]
    fn assignments() {
        assert_eq!(parse("x=1"),
                   Expr::Assignment { name:  "x".to_string(),
                                      op:    AssignOperator::Assign,
                                      value: Box::new(Expr::number("1")), });
        assert_eq!(parse("x-=y"),
                   Expr::Assignment { name:  "x".to_string(),
                                      op:    AssignOperator::SubAssign,
                                      value: Box::new(Expr::variable("y")), });
    }

    #[test]
    fn assignment_value_extends_to_comparison() {
        assert_eq!(parse("x=1+2"),
                   Expr::Assignment { name:  "x".to_string(),
                                      op:    AssignOperator::Assign,
                                      value: Box::new(Expr::binary(Expr::number("1"),
                                                                   BinaryOperator::Add,
                                                                   Expr::number("2"))), });
    }

    #[test]
    fn unexpected_token_in_factor() {
        assert_eq!(try_parse("*3").unwrap_err(),
                   Interrupt::Failed(ParseError::UnexpectedToken { token:    "*".to_string(),
                                                                   position: 0, }.into()));
        assert!(matches!(try_parse("if 1").unwrap_err(), Interrupt::Failed(_)));
    }

    #[test]
    fn missing_operand_needs_more_input() {
        assert_eq!(try_parse("sin").unwrap_err(),
                   Interrupt::NeedMoreInput { consumed: "sin".to_string() });
        assert_eq!(try_parse("(1").unwrap_err(),
                   Interrupt::NeedMoreInput { consumed: "(1".to_string() });
    }
}
