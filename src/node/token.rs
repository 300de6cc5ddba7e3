use alloc::{string::{String, ToString}, vec::Vec};
use core::fmt;

use crate::{constants::ConstantTable, error::ParseError, node::expression::Operator};

/// One lexical item of an expression.
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl Token {
    /// Returns the token for a single-character symbol, if it is an operator or parenthesis.
    pub fn from_symbol(c: char) -> Option<Token> {
        match c {
            '(' => Some(Token::LeftParen),
            ')' => Some(Token::RightParen),
            _ => Operator::from_char(c).map(Token::Operator),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

/// Splits text into raw token strings. Whitespace separates tokens, and every operator or
/// parenthesis character is a token on its own, except that `**` stays together. Anything else is
/// grouped into runs.
fn split(text: &str) -> Vec<String> {
    let mut raw = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            if !current.is_empty() {
                raw.push(core::mem::take(&mut current));
            }
        } else if Token::from_symbol(c).is_some() {
            // Keep the sign of an exponent, as in "1e-3", inside the number
            let next_is_digit = chars.peek().map_or(false, |n| n.is_ascii_digit());
            if (c == '+' || c == '-') && next_is_digit && is_exponent_prefix(&current) {
                current.push(c);
                continue;
            }

            if !current.is_empty() {
                raw.push(core::mem::take(&mut current));
            }

            // `**` is another spelling of `^`
            if c == '*' && chars.peek() == Some(&'*') {
                chars.next();
                raw.push(String::from("**"));
            } else {
                raw.push(c.to_string());
            }
        } else {
            current.push(c);
        }
    }

    if !current.is_empty() {
        raw.push(current);
    }

    raw
}

/// Returns true for strings such as `1e` or `2.5E`: a number still waiting for its exponent.
fn is_exponent_prefix(run: &str) -> bool {
    match run.strip_suffix(|c: char| c == 'e' || c == 'E') {
        Some(mantissa) => looks_numeric(mantissa) && mantissa.parse::<f64>().is_ok(),
        None => false,
    }
}

/// Rust's float parser also accepts spellings like `inf` and `NaN`, which aren't numbers here.
fn looks_numeric(raw: &str) -> bool {
    raw.starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

/// Converts text into a sequence of tokens, replacing constant names with their values.
///
/// Empty input produces an empty sequence; it is up to the caller to reject it.
pub fn tokenize(text: &str, constants: &ConstantTable) -> Result<Vec<Token>, ParseError> {
    let tokens = split(text)
        .into_iter()
        .map(|raw| {
            if let Some(value) = constants.get(&raw) {
                return Ok(Token::Number(value));
            }

            if looks_numeric(&raw) {
                if let Ok(value) = raw.parse::<f64>() {
                    return Ok(Token::Number(value));
                }
            }

            let mut chars = raw.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                if let Some(token) = Token::from_symbol(c) {
                    return Ok(token);
                }
            }

            if let Ok(op) = raw.parse::<Operator>() {
                return Ok(Token::Operator(op));
            }

            Err(ParseError::UnrecognizedToken(raw))
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::trace!("tokenized {:?} into {} tokens", text, tokens.len());
    Ok(tokens)
}
