use crate::runtime::ParseCancellation;
use serde::Serialize;

/// Outcome of parsing one source file; the error is present iff it failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    tested_file: String,
    failed: bool,
    #[serde(serialize_with = "serialize_rejection")]
    error: Option<ParseCancellation>,
}

fn serialize_rejection<S>(error: &Option<ParseCancellation>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match error {
        Some(cancellation) => serializer.serialize_some(cancellation.message()),
        None => serializer.serialize_none(),
    }
}

impl ParseResult {
    pub fn passed(tested_file: impl Into<String>) -> Self {
        Self {
            tested_file: tested_file.into(),
            failed: false,
            error: None,
        }
    }

    pub fn failed(tested_file: impl Into<String>, error: ParseCancellation) -> Self {
        Self {
            tested_file: tested_file.into(),
            failed: true,
            error: Some(error),
        }
    }

    pub fn tested_file(&self) -> &str {
        &self.tested_file
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    pub fn error(&self) -> Option<&ParseCancellation> {
        self.error.as_ref()
    }

    /// Rejection message, verbatim as the parser produced it
    pub fn message(&self) -> Option<&str> {
        self.error.as_ref().map(ParseCancellation::message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{RecognitionError, Token};

    fn rejection() -> ParseCancellation {
        ParseCancellation::new(RecognitionError::mismatched(
            Token::new(4, "print", 2, 0),
            vec![7],
            "';'",
        ))
    }

    #[test]
    fn test_passed_has_no_error() {
        let result = ParseResult::passed("some.snf");

        assert!(!result.has_failed());
        assert!(result.error().is_none());
        assert_eq!(result.tested_file(), "some.snf");
    }

    #[test]
    fn test_failed_carries_rejection() {
        let result = ParseResult::failed("with_errors.snf", rejection());

        assert!(result.has_failed());
        assert_eq!(
            result.message(),
            Some("line 2:0 mismatched input 'print' expecting ';'")
        );
        assert_ne!(result, ParseResult::passed("with_errors.snf"));
    }

    #[test]
    fn test_serializes_message_only() {
        let json = serde_json::to_value(ParseResult::failed("x.snf", rejection())).unwrap();

        assert_eq!(json["tested_file"], "x.snf");
        assert_eq!(json["failed"], true);
        assert_eq!(
            json["error"],
            "line 2:0 mismatched input 'print' expecting ';'"
        );
    }
}
