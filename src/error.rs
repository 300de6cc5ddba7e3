use alloc::{string::String, fmt};

/// An error encountered while turning text into an expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A piece of input which is not a number, a known constant, an operator or a parenthesis.
    UnrecognizedToken(String),

    /// The input contained no tokens at all.
    EmptyExpression,

    /// The tokens do not form a valid expression. The payload briefly describes why.
    MalformedExpression(&'static str),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::UnrecognizedToken(token) => write!(f, "unrecognized token '{}'", token),
            ParseError::EmptyExpression => write!(f, "empty expression"),
            ParseError::MalformedExpression(reason) => write!(f, "malformed expression: {}", reason),
        }
    }
}
impl core::error::Error for ParseError {}

/// An error encountered while evaluating an expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The right-hand side of a division evaluated to zero.
    DivisionByZero,

    /// A node was requested for a symbol which is not one of `^ * / + -`.
    InvalidOperator(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalError::DivisionByZero => write!(f, "division by zero"),
            EvalError::InvalidOperator(symbol) => write!(f, "invalid operator '{}'", symbol),
        }
    }
}
impl core::error::Error for EvalError {}
