use std::f64::consts::{E, PI};

use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Whitespace never reaches the token level: [`Lexer`] strips it before
/// scanning.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Real literal tokens, such as `3.14`, `.5` or `2.`.
    ///
    /// The constants `pi` and `exp` are resolved here to their decimal text,
    /// so the rest of the pipeline only ever sees numbers.
    #[regex(r"[0-9]+\.[0-9]*", |lex| lex.slice().to_string())]
    #[regex(r"\.[0-9]+", |lex| lex.slice().to_string())]
    #[token("pi", |_| constant_text(PI))]
    #[token("exp", |_| constant_text(E))]
    Real(String),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// Variable names. Letters only; `x1` lexes as `x` followed by `1`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `sin`
    #[token("sin")]
    Sin,
    /// `cos`
    #[token("cos")]
    Cos,
    /// `tan`
    #[token("tan")]
    Tan,
    /// `cot`
    #[token("cot")]
    Cot,
    /// `lg`
    #[token("lg")]
    Lg,
    /// `ln`
    #[token("ln")]
    Ln,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    MulAssign,
    /// `/=`
    #[token("/=")]
    DivAssign,
    /// `//`
    #[token("//")]
    SlashSlash,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equals,
}

impl Token {
    /// Returns the source text this token stands for.
    ///
    /// Concatenating the texts of a token stream and lexing the result again
    /// yields the same stream, which is what the bracket rewrite relies on.
    ///
    /// ## Example
    /// ```
    /// use bracalc::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::SlashSlash.text(), "//");
    /// assert_eq!(Token::Identifier("x".to_string()).text(), "x");
    /// ```
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Real(text) | Self::Integer(text) | Self::Identifier(text) => text,
            Self::If => "if",
            Self::Else => "else",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Cot => "cot",
            Self::Lg => "lg",
            Self::Ln => "ln",
            Self::EqualEqual => "==",
            Self::PlusAssign => "+=",
            Self::MinusAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::SlashSlash => "//",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Caret => "^",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equals => "=",
        }
    }
}

/// Formats a constant with 17 fractional digits, enough for the text to parse
/// back to the same double.
fn constant_text(value: f64) -> String {
    format!("{value:.17}")
}

/// A cursor over whitespace-free source text that can grow while it is being
/// scanned.
///
/// Tokens are produced one at a time. [`Lexer::insert`] splices more text in
/// at the cursor, which is how a line read during continuation becomes part of
/// the expression being parsed.
#[derive(Debug, Clone)]
pub struct Lexer {
    text:        String,
    pos:         usize,
    token_start: usize,
}

impl Lexer {
    /// Creates a lexer over `text` with every whitespace character removed.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { text:        strip_whitespace(text),
               pos:         0,
               token_start: 0, }
    }

    /// Scans the next token and advances the cursor past it.
    ///
    /// # Returns
    /// - `Ok(Some(token))` for the next token.
    /// - `Ok(None)` at the end of the text.
    ///
    /// # Errors
    /// `ParseError::InvalidCharacter` if the text at the cursor starts no
    /// token.
    pub fn next_token(&mut self) -> Result<Option<Token>, ParseError> {
        let rest = &self.text[self.pos..];
        let mut lex = Token::lexer(rest);
        self.token_start = self.pos;

        match lex.next() {
            None => Ok(None),
            Some(Ok(token)) => {
                self.pos += lex.span().end;
                Ok(Some(token))
            },
            Some(Err(())) => {
                let found = lex.slice().chars().next().unwrap_or('\0');
                Err(ParseError::InvalidCharacter { found,
                                                   position: self.pos + lex.span().start })
            },
        }
    }

    /// Splices `text`, whitespace stripped, into the source at the cursor.
    pub fn insert(&mut self, text: &str) {
        self.text.insert_str(self.pos, &strip_whitespace(text));
    }

    /// Returns everything scanned so far, including the lookahead token.
    #[must_use]
    pub fn consumed_text(&self) -> &str {
        &self.text[..self.pos]
    }

    /// Byte offset at which the most recently scanned token starts.
    #[must_use]
    pub const fn token_start(&self) -> usize {
        self.token_start
    }
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(text);
        let mut out = Vec::new();
        while let Some(token) = lexer.next_token().unwrap() {
            out.push(token);
        }
        out
    }

    #[test]
    fn strips_whitespace_before_scanning() {
        assert_eq!(tokens(" 3 +\t4 "),
                   vec![Token::Integer("3".into()), Token::Plus, Token::Integer("4".into())]);
        assert_eq!(tokens("s i n"), vec![Token::Sin]);
    }

    #[test]
    fn two_character_operators_win_over_prefixes() {
        assert_eq!(tokens("==+=-=*=/=//<=>="),
                   vec![Token::EqualEqual,
                        Token::PlusAssign,
                        Token::MinusAssign,
                        Token::MulAssign,
                        Token::DivAssign,
                        Token::SlashSlash,
                        Token::LessEqual,
                        Token::GreaterEqual]);
        assert_eq!(tokens("=<>/"),
                   vec![Token::Equals, Token::Less, Token::Greater, Token::Slash]);
    }

    #[test]
    fn numbers() {
        assert_eq!(tokens("12"), vec![Token::Integer("12".into())]);
        assert_eq!(tokens("1.25"), vec![Token::Real("1.25".into())]);
        assert_eq!(tokens(".5"), vec![Token::Real(".5".into())]);
        assert_eq!(tokens("5."), vec![Token::Real("5.".into())]);
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(tokens("if"), vec![Token::If]);
        assert_eq!(tokens("iff"), vec![Token::Identifier("iff".into())]);
        assert_eq!(tokens("sinx"), vec![Token::Identifier("sinx".into())]);
        assert_eq!(tokens("x1"),
                   vec![Token::Identifier("x".into()), Token::Integer("1".into())]);
        assert_eq!(tokens("5else9"),
                   vec![Token::Integer("5".into()), Token::Else, Token::Integer("9".into())]);
    }

    #[test]
    fn constants_resolve_to_numeric_text() {
        let pi: [Token; 1] = tokens("pi").try_into().unwrap();
        let [Token::Real(pi)] = pi else {
            panic!("pi should lex as a single real");
        };
        assert_eq!(pi, "3.14159265358979312");
        assert_eq!(pi.parse::<f64>().unwrap(), PI);

        let e: [Token; 1] = tokens("exp").try_into().unwrap();
        let [Token::Real(e)] = e else {
            panic!("exp should lex as a single real");
        };
        assert_eq!(e.parse::<f64>().unwrap(), E);
    }

    #[test]
    fn unrecognized_character_is_reported() {
        let mut lexer = Lexer::new("1 + $");
        assert!(lexer.next_token().unwrap().is_some());
        assert!(lexer.next_token().unwrap().is_some());
        assert_eq!(lexer.next_token(),
                   Err(ParseError::InvalidCharacter { found:    '$',
                                                      position: 2, }));
    }

    #[test]
    fn insert_splices_at_cursor() {
        let mut lexer = Lexer::new("3+");
        assert_eq!(lexer.next_token().unwrap(), Some(Token::Integer("3".into())));
        assert_eq!(lexer.next_token().unwrap(), Some(Token::Plus));
        assert_eq!(lexer.next_token().unwrap(), None);
        assert_eq!(lexer.consumed_text(), "3+");

        lexer.insert(" 4 ");
        assert_eq!(lexer.next_token().unwrap(), Some(Token::Integer("4".into())));
        assert_eq!(lexer.next_token().unwrap(), None);
        assert_eq!(lexer.consumed_text(), "3+4");
    }

    #[test]
    fn token_text_round_trips() {
        let original = tokens("x+=sin(2)//3.5[1]<=ln4");
        let text: String = original.iter().map(Token::text).collect();
        assert_eq!(tokens(&text), original);
    }
}
