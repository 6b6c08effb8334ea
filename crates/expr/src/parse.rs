use thiserror::Error;

use crate::ast::{Expr, UnaryFn};

/// Errors that can occur while parsing an expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected character `{0}`")]
    UnexpectedChar(char),

    #[error("malformed number `{0}`")]
    InvalidNumber(String),

    #[error("unknown identifier `{0}`")]
    UnknownIdent(String),

    #[error("expected `(` after function `{0}`")]
    MissingParen(String),

    #[error("missing closing parenthesis")]
    UnclosedParen,

    #[error("unexpected token `{0}`")]
    UnexpectedToken(String),

    #[error("unexpected end of expression")]
    UnexpectedEnd,
}

/// Parses a textual formula in the variable `x` into an [`Expr`].
///
/// Supported syntax: decimal numbers (with optional exponent), `x`, the
/// constants `pi` and `e`, the functions `sin`, `cos`, `tan`, `cot`, `exp`,
/// `ln`, `log`, `sqrt`, `abs` (arguments in parentheses), binary `+ - * /`
/// (left-associative), `^` (right-associative), and unary `+`/`-`. `^` binds
/// tighter than unary minus, so `-x^2` parses as `-(x^2)`.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first offending token.
pub fn parse(src: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(src)?;
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.expr_bp(0)?;
    match parser.advance() {
        None => Ok(expr),
        Some(t) => Err(ParseError::UnexpectedToken(t.text())),
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Num(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl Token {
    fn text(&self) -> String {
        match self {
            Token::Num(n) => n.to_string(),
            Token::Ident(s) => s.clone(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Star => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::Caret => "^".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
        }
    }
}

fn tokenize(src: &str) -> Result<Vec<Token>, ParseError> {
    let chars: Vec<char> = src.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' | '\t' | '\r' | '\n' => i += 1,
            '0'..='9' | '.' => {
                let mut text = String::new();
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    text.push(chars[i]);
                    i += 1;
                }
                // An exponent suffix is only consumed when it is complete;
                // otherwise `e` stays available as the Euler constant.
                if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                    let mut j = i + 1;
                    if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
                        j += 1;
                    }
                    if j < chars.len() && chars[j].is_ascii_digit() {
                        while i < j {
                            text.push(chars[i]);
                            i += 1;
                        }
                        while i < chars.len() && chars[i].is_ascii_digit() {
                            text.push(chars[i]);
                            i += 1;
                        }
                    }
                }
                let value = text
                    .parse::<f64>()
                    .map_err(|_| ParseError::InvalidNumber(text.clone()))?;
                tokens.push(Token::Num(value));
            }
            'a'..='z' | 'A'..='Z' | '_' => {
                let mut name = String::new();
                while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                    name.push(chars[i]);
                    i += 1;
                }
                tokens.push(Token::Ident(name));
            }
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '*' => {
                tokens.push(Token::Star);
                i += 1;
            }
            '/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            '^' => {
                tokens.push(Token::Caret);
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            _ => return Err(ParseError::UnexpectedChar(c)),
        }
    }

    Ok(tokens)
}

enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    fn apply(self, lhs: Expr, rhs: Expr) -> Expr {
        match self {
            BinOp::Add => lhs + rhs,
            BinOp::Sub => lhs - rhs,
            BinOp::Mul => lhs * rhs,
            BinOp::Div => lhs / rhs,
            BinOp::Pow => lhs.pow(rhs),
        }
    }
}

/// Binding power of a unary sign: looser than `^`, tighter than `*`.
const UNARY_BP: u8 = 5;

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect_rparen(&mut self) -> Result<(), ParseError> {
        match self.advance() {
            Some(Token::RParen) => Ok(()),
            Some(t) => Err(ParseError::UnexpectedToken(t.text())),
            None => Err(ParseError::UnclosedParen),
        }
    }

    /// Precedence-climbing expression parser.
    fn expr_bp(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let mut lhs = self.prefix()?;

        loop {
            let (op, lbp, rbp) = match self.peek() {
                Some(Token::Plus) => (BinOp::Add, 1, 2),
                Some(Token::Minus) => (BinOp::Sub, 1, 2),
                Some(Token::Star) => (BinOp::Mul, 3, 4),
                Some(Token::Slash) => (BinOp::Div, 3, 4),
                Some(Token::Caret) => (BinOp::Pow, 6, 5),
                _ => break,
            };
            if lbp < min_bp {
                break;
            }
            self.pos += 1;
            let rhs = self.expr_bp(rbp)?;
            lhs = op.apply(lhs, rhs);
        }

        Ok(lhs)
    }

    fn prefix(&mut self) -> Result<Expr, ParseError> {
        match self.advance() {
            None => Err(ParseError::UnexpectedEnd),
            Some(Token::Num(n)) => Ok(Expr::Num(n)),
            Some(Token::Ident(name)) => self.ident(name),
            Some(Token::Minus) => Ok(-(self.expr_bp(UNARY_BP)?)),
            Some(Token::Plus) => self.expr_bp(UNARY_BP),
            Some(Token::LParen) => {
                let expr = self.expr_bp(0)?;
                self.expect_rparen()?;
                Ok(expr)
            }
            Some(t) => Err(ParseError::UnexpectedToken(t.text())),
        }
    }

    fn ident(&mut self, name: String) -> Result<Expr, ParseError> {
        match name.as_str() {
            "x" => Ok(Expr::Var),
            "pi" => Ok(Expr::Num(std::f64::consts::PI)),
            "e" => Ok(Expr::Num(std::f64::consts::E)),
            _ => {
                let Some(fun) = UnaryFn::from_name(&name) else {
                    return Err(ParseError::UnknownIdent(name));
                };
                match self.advance() {
                    Some(Token::LParen) => {}
                    _ => return Err(ParseError::MissingParen(name)),
                }
                let arg = self.expr_bp(0)?;
                self.expect_rparen()?;
                Ok(fun.of(arg))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn eval(src: &str, x: f64) -> f64 {
        parse(src).expect("should parse").eval(x)
    }

    #[test]
    fn parses_numbers() {
        assert_relative_eq!(eval("42", 0.0), 42.0);
        assert_relative_eq!(eval("3.5", 0.0), 3.5);
        assert_relative_eq!(eval("1e-3", 0.0), 1e-3);
        assert_relative_eq!(eval("2.5e2", 0.0), 250.0);
    }

    #[test]
    fn respects_operator_precedence() {
        assert_relative_eq!(eval("2 + 3 * 4", 0.0), 14.0);
        assert_relative_eq!(eval("(2 + 3) * 4", 0.0), 20.0);
        assert_relative_eq!(eval("10 - 4 - 3", 0.0), 3.0);
        assert_relative_eq!(eval("12 / 3 / 2", 0.0), 2.0);
    }

    #[test]
    fn pow_is_right_associative() {
        assert_relative_eq!(eval("2^3^2", 0.0), 512.0);
        assert_relative_eq!(eval("(2^3)^2", 0.0), 64.0);
    }

    #[test]
    fn unary_minus_binds_looser_than_pow() {
        assert_relative_eq!(eval("-x^2", 2.0), -4.0);
        assert_relative_eq!(eval("(-x)^2", 2.0), 4.0);
        assert_relative_eq!(eval("-2 - -3", 0.0), 1.0);
    }

    #[test]
    fn parses_functions_and_constants() {
        assert_relative_eq!(eval("sin(pi)", 0.0), 0.0, epsilon = 1e-15);
        assert_relative_eq!(eval("ln(e)", 0.0), 1.0);
        assert_relative_eq!(eval("sqrt(x)", 9.0), 3.0);
        assert_relative_eq!(eval("log(100)", 0.0), 2.0);
        assert_relative_eq!(eval("abs(x)", -2.5), 2.5);
        assert_relative_eq!(eval("cos(2 * x)", 0.0), 1.0);
    }

    #[test]
    fn euler_constant_survives_after_digits() {
        // `2e` is not a complete exponent; the `e` lexes as the Euler
        // constant, and without implicit multiplication the input is invalid.
        assert!(parse("2e").is_err());
        assert_relative_eq!(eval("2 * e", 0.0), 2.0 * std::f64::consts::E);
    }

    #[test]
    fn reports_unknown_identifier() {
        assert_eq!(
            parse("foo(x)"),
            Err(ParseError::UnknownIdent("foo".to_string()))
        );
    }

    #[test]
    fn reports_missing_function_paren() {
        assert_eq!(
            parse("sin x"),
            Err(ParseError::MissingParen("sin".to_string()))
        );
    }

    #[test]
    fn reports_unclosed_paren() {
        assert_eq!(parse("(x + 1"), Err(ParseError::UnclosedParen));
        assert_eq!(parse("sin(x"), Err(ParseError::UnclosedParen));
    }

    #[test]
    fn reports_trailing_input() {
        assert_eq!(
            parse("x 1"),
            Err(ParseError::UnexpectedToken("1".to_string()))
        );
    }

    #[test]
    fn reports_unexpected_end_and_chars() {
        assert_eq!(parse("x +"), Err(ParseError::UnexpectedEnd));
        assert_eq!(parse("x $ 2"), Err(ParseError::UnexpectedChar('$')));
    }

    #[test]
    fn round_trips_through_display() {
        for src in ["x^2 - 2", "sin(x) * cos(x)", "-x^2 + 3 / (x - 1)"] {
            let parsed = parse(src).expect("should parse");
            let reparsed = parse(&parsed.to_string()).expect("display should parse");
            assert_eq!(parsed, reparsed);
        }
    }
}
