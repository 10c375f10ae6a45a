//! Recognition runtime shared by generated lexers and parsers
//!
//! Generated grammar crates implement `TokenSource` and `Parser` on top of
//! these types and register factories for them in a symbol registry. The
//! harness only ever talks to grammars through this surface.

mod char_stream;
mod error;
mod parser;
mod strategy;
mod token;
mod token_stream;

pub use char_stream::CharStream;
pub use error::{
    ConstructionFailure, ParseCancellation, RecognitionError, RecognitionErrorKind, RuleFailure,
};
pub use parser::{Parser, ParserCore, ParserFactory, RuleEntry, Visibility};
pub use strategy::{BailErrorStrategy, DefaultErrorStrategy, ErrorStrategy};
pub use token::{Channel, LexerFactory, Token, TokenSource, EOF, INVALID_TYPE};
pub use token_stream::BufferedTokenStream;
