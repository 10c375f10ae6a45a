use super::char_stream::CharStream;
use serde::Serialize;
use std::fmt;

/// Token kind of the end-of-input token
pub const EOF: i32 = -1;

/// Token kind a lexer emits for input it cannot recognize
pub const INVALID_TYPE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Channel {
    Default,
    /// Whitespace and comments; skipped by the buffered token stream
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: i32,
    pub text: String,
    pub channel: Channel,
    pub line: usize,
    pub column: usize,
    /// Position in the token buffer, assigned by the stream
    pub index: usize,
}

impl Token {
    pub fn new(kind: i32, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            channel: Channel::Default,
            line,
            column,
            index: 0,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.channel = Channel::Hidden;
        self
    }

    pub fn eof(line: usize, column: usize) -> Self {
        Self::new(EOF, "<EOF>", line, column)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == EOF
    }

    pub fn is_hidden(&self) -> bool {
        self.channel == Channel::Hidden
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_eof() {
            return write!(f, "<EOF>");
        }
        let escaped = self
            .text
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t");
        write!(f, "'{}'", escaped)
    }
}

/// Lexer capability: turns a character source into tokens
///
/// Implementations return an EOF token once input is exhausted and keep
/// returning it on further calls.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;

    fn source_name(&self) -> &str;
}

/// Construct a lexer over a character source
pub type LexerFactory =
    fn(CharStream) -> Result<Box<dyn TokenSource>, crate::runtime::ConstructionFailure>;
