//! Token classification.

use std::fmt;

use crate::error::ConvertError;
use crate::operators::{Operator, PAREN_PRECEDENCE};

/// One classified input unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A single uppercase letter `A`-`Z` or digit `0`-`9`.
    Operand(char),
    Operator(Operator),
    OpenParen,
    CloseParen,
}

impl Token {
    /// Classify a raw token string.
    ///
    /// `position` is only used to annotate the error for unrecognised input.
    pub fn classify(raw: &str, position: usize) -> Result<Self, ConvertError> {
        if let Some(c) = single_char(raw) {
            if c.is_ascii_uppercase() || c.is_ascii_digit() {
                return Ok(Token::Operand(c));
            }
        }

        if let Some(op) = Operator::from_symbol(raw) {
            return Ok(Token::Operator(op));
        }

        match raw {
            "(" => Ok(Token::OpenParen),
            ")" => Ok(Token::CloseParen),
            _ => Err(ConvertError::InvalidToken {
                position,
                token: raw.to_string(),
            }),
        }
    }

    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Operand(_))
    }

    pub fn is_paren(&self) -> bool {
        matches!(self, Token::OpenParen | Token::CloseParen)
    }

    /// Precedence of an operator token, or [`PAREN_PRECEDENCE`] for
    /// parentheses. Operands have none.
    pub fn precedence(&self) -> Result<Option<u8>, ConvertError> {
        match self {
            Token::Operand(_) => Ok(None),
            Token::Operator(op) => Ok(Some(op.info()?.precedence)),
            Token::OpenParen | Token::CloseParen => Ok(Some(PAREN_PRECEDENCE)),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operand(c) => write!(f, "{c}"),
            Token::Operator(op) => write!(f, "{op}"),
            Token::OpenParen => f.write_str("("),
            Token::CloseParen => f.write_str(")"),
        }
    }
}

fn single_char(raw: &str) -> Option<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
