//! Error types for infix-to-postfix conversion.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Invalid token at position {position}: [{token}] is not an operand, operator, '(' or ')'")]
    InvalidToken { position: usize, token: String },

    #[error("Unbalanced parentheses at position {position}: ')' has no matching '('")]
    UnbalancedParentheses { position: usize },

    /// The operator set and the metadata table disagree. This is a defect in
    /// the static table, never a property of the input.
    #[error("Unknown operator [{symbol}]: no precedence/associativity entry")]
    UnknownOperator { symbol: String },

    #[error("Parenthesis nesting too deep at position {position} (max: {max_depth})")]
    NestingTooDeep { position: usize, max_depth: usize },

    #[error("Unclosed parenthesis opened at position {position}")]
    UnclosedParenthesis { position: usize },

    #[error("Fixture error: {0}")]
    Fixture(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    /// True when the failure was caused by malformed input rather than an
    /// internal defect or a harness problem.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ConvertError::InvalidToken { .. }
                | ConvertError::UnbalancedParentheses { .. }
                | ConvertError::NestingTooDeep { .. }
                | ConvertError::UnclosedParenthesis { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_token_display() {
        let err = ConvertError::InvalidToken {
            position: 3,
            token: "@".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("position 3"));
        assert!(msg.contains("[@]"));
    }

    #[test]
    fn test_input_errors_are_distinguished_from_defects() {
        assert!(ConvertError::UnbalancedParentheses { position: 2 }.is_input_error());
        assert!(!ConvertError::UnknownOperator {
            symbol: "%".to_string()
        }
        .is_input_error());
        assert!(!ConvertError::Fixture("bad".to_string()).is_input_error());
    }
}
