use super::token::Token;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RecognitionErrorKind {
    MismatchedToken,
    NoViableAlternative,
}

/// A point where the input did not match the grammar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct RecognitionError {
    pub kind: RecognitionErrorKind,
    pub offending: Token,
    /// Token kinds that would have been accepted
    pub expected: Vec<i32>,
    pub message: String,
}

impl RecognitionError {
    /// `expected_display` is the rendered expectation, e.g. `';'` or `{ID, INT}`
    pub fn mismatched(offending: Token, expected: Vec<i32>, expected_display: &str) -> Self {
        let message = format!(
            "line {}:{} mismatched input {} expecting {}",
            offending.line, offending.column, offending, expected_display
        );
        Self {
            kind: RecognitionErrorKind::MismatchedToken,
            offending,
            expected,
            message,
        }
    }

    pub fn no_viable_alternative(offending: Token, expected: Vec<i32>) -> Self {
        let message = format!(
            "line {}:{} no viable alternative at input {}",
            offending.line, offending.column, offending
        );
        Self {
            kind: RecognitionErrorKind::NoViableAlternative,
            offending,
            expected,
            message,
        }
    }

    pub fn line(&self) -> usize {
        self.offending.line
    }

    pub fn column(&self) -> usize {
        self.offending.column
    }
}

/// Signal raised by the fail-fast strategy: the source was rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{cause}")]
pub struct ParseCancellation {
    pub cause: RecognitionError,
}

impl ParseCancellation {
    pub fn new(cause: RecognitionError) -> Self {
        Self { cause }
    }

    pub fn message(&self) -> &str {
        &self.cause.message
    }
}

/// Ways a rule procedure can end without returning normally
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleFailure {
    #[error("parse cancelled: {0}")]
    Cancelled(ParseCancellation),

    #[error("{0}")]
    Internal(String),
}

/// Failure reported by a lexer or parser factory
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ConstructionFailure {
    pub message: String,
}

impl ConstructionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatched_message() {
        let error = RecognitionError::mismatched(Token::new(5, "print", 3, 7), vec![7], "';'");
        assert_eq!(
            error.to_string(),
            "line 3:7 mismatched input 'print' expecting ';'"
        );
        assert_eq!((error.line(), error.column()), (3, 7));
    }

    #[test]
    fn test_cancellation_carries_cause_message() {
        let cause = RecognitionError::no_viable_alternative(Token::eof(4, 0), vec![]);
        let cancellation = ParseCancellation::new(cause);

        assert_eq!(
            cancellation.message(),
            "line 4:0 no viable alternative at input <EOF>"
        );
        assert_eq!(cancellation.to_string(), cancellation.message());
    }
}
