//! Error strategies deciding what a parser does at a recognition error

use super::error::{ParseCancellation, RecognitionError, RuleFailure};
use super::token::Token;
use super::token_stream::BufferedTokenStream;

pub trait ErrorStrategy {
    /// Called when a single expected token is missing or wrong. Returns the
    /// token the parser should treat as matched.
    fn recover_inline(
        &mut self,
        input: &mut BufferedTokenStream,
        error: RecognitionError,
    ) -> Result<Token, RuleFailure>;

    /// Called when no alternative of a decision matches. `follow` lists the
    /// token kinds the enclosing rule can resynchronize on.
    fn recover(
        &mut self,
        input: &mut BufferedTokenStream,
        error: RecognitionError,
        follow: &[i32],
    ) -> Result<(), RuleFailure>;

    /// Errors reported and recovered from so far
    fn reported(&self) -> &[RecognitionError];
}

/// Reports every error and keeps parsing
#[derive(Debug, Default)]
pub struct DefaultErrorStrategy {
    errors: Vec<RecognitionError>,
}

impl DefaultErrorStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ErrorStrategy for DefaultErrorStrategy {
    fn recover_inline(
        &mut self,
        input: &mut BufferedTokenStream,
        error: RecognitionError,
    ) -> Result<Token, RuleFailure> {
        let expected = error.expected.clone();
        let offending = error.offending.clone();
        self.errors.push(error);

        // Single-token deletion: the token after the offending one fits
        if !offending.is_eof() && expected.contains(&input.la(2)) {
            input.consume();
            return Ok(input.consume());
        }

        // Single-token insertion: pretend the expected token was there
        let kind = expected.first().copied().unwrap_or(offending.kind);
        Ok(Token::new(
            kind,
            "<missing>",
            offending.line,
            offending.column,
        ))
    }

    fn recover(
        &mut self,
        input: &mut BufferedTokenStream,
        error: RecognitionError,
        follow: &[i32],
    ) -> Result<(), RuleFailure> {
        self.errors.push(error);

        loop {
            let next = input.lt(1);
            if next.is_eof() || follow.contains(&next.kind) {
                return Ok(());
            }
            input.consume();
        }
    }

    fn reported(&self) -> &[RecognitionError] {
        &self.errors
    }
}

/// Fail-fast strategy: the first error cancels the parse
#[derive(Debug, Default)]
pub struct BailErrorStrategy;

impl BailErrorStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl ErrorStrategy for BailErrorStrategy {
    fn recover_inline(
        &mut self,
        _input: &mut BufferedTokenStream,
        error: RecognitionError,
    ) -> Result<Token, RuleFailure> {
        Err(RuleFailure::Cancelled(ParseCancellation::new(error)))
    }

    fn recover(
        &mut self,
        _input: &mut BufferedTokenStream,
        error: RecognitionError,
        _follow: &[i32],
    ) -> Result<(), RuleFailure> {
        Err(RuleFailure::Cancelled(ParseCancellation::new(error)))
    }

    fn reported(&self) -> &[RecognitionError] {
        &[]
    }
}
