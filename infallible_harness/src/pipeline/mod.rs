//! Per-file pipeline: source text -> lexer -> token stream -> parser
//!
//! Every build produces a fresh parser with the fail-fast strategy
//! installed, so the first syntax error cancels the parse.

mod error;

pub use error::{ConstructionError, PipelineError};

use crate::invoker::panic_message;
use crate::logging::codes;
use crate::runtime::{BailErrorStrategy, BufferedTokenStream, ConstructionFailure, Parser};
use crate::source::SourceFile;
use crate::symbols::{LexerSymbol, ParserSymbol};
use crate::{log_error, log_success};
use std::panic::{self, AssertUnwindSafe};

/// A freshly built parser bound to one file's token stream
pub struct ParserHandle {
    source_name: String,
    parser: Box<dyn Parser>,
}

impl ParserHandle {
    pub fn new(parser: Box<dyn Parser>) -> Self {
        Self {
            source_name: parser.source_name().to_string(),
            parser,
        }
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn parser(&self) -> &dyn Parser {
        self.parser.as_ref()
    }

    pub fn parser_mut(&mut self) -> &mut dyn Parser {
        self.parser.as_mut()
    }
}

impl std::fmt::Debug for ParserHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserHandle")
            .field("source_name", &self.source_name)
            .finish_non_exhaustive()
    }
}

/// Builds parsers from the symbols resolved once per run
#[derive(Debug, Clone)]
pub struct PipelineBuilder {
    lexer: LexerSymbol,
    parser: ParserSymbol,
}

impl PipelineBuilder {
    pub fn new(lexer: LexerSymbol, parser: ParserSymbol) -> Self {
        Self { lexer, parser }
    }

    pub fn lexer(&self) -> &LexerSymbol {
        &self.lexer
    }

    pub fn parser(&self) -> &ParserSymbol {
        &self.parser
    }

    pub fn build(&self, file: &SourceFile) -> Result<ParserHandle, PipelineError> {
        let result = self.build_inner(file);
        match &result {
            Ok(handle) => {
                log_success!(codes::success::PIPELINE_BUILT, "Pipeline built",
                    "file" => handle.source_name(),
                    "lexer" => self.lexer.name(),
                    "parser" => self.parser.name()
                );
            }
            Err(error) => {
                log_error!(error.error_code(), &error.to_string(),
                    "file" => file.path().display()
                );
            }
        }
        result
    }

    fn build_inner(&self, file: &SourceFile) -> Result<ParserHandle, PipelineError> {
        let chars = file.read()?;

        let lexer = contained(|| self.lexer.construct(chars)).map_err(|cause| {
            ConstructionError::Lexer {
                symbol: self.lexer.name().to_string(),
                cause,
            }
        })?;

        let tokens = BufferedTokenStream::new(lexer);

        let mut parser = contained(|| self.parser.construct(tokens)).map_err(|cause| {
            ConstructionError::Parser {
                symbol: self.parser.name().to_string(),
                cause,
            }
        })?;

        parser.set_error_strategy(Box::new(BailErrorStrategy::new()));

        Ok(ParserHandle::new(parser))
    }
}

/// Run a factory, turning a panic into a construction failure
fn contained<T>(
    factory: impl FnOnce() -> Result<T, ConstructionFailure>,
) -> Result<T, ConstructionFailure> {
    panic::catch_unwind(AssertUnwindSafe(factory)).unwrap_or_else(|payload| {
        Err(ConstructionFailure::new(format!(
            "factory panicked: {}",
            panic_message(payload.as_ref())
        )))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GrammarIdentity;
    use crate::runtime::RuleFailure;
    use crate::source::SourceReadError;
    use crate::symbols::SymbolResolver;
    use crate::symbols::SymbolRegistry;
    use crate::test_support::{
        panicking_parser, refusing_lexer, refusing_parser, word_lexer, word_parser, word_registry,
        write_source,
    };
    use assert_matches::assert_matches;
    use tempfile::TempDir;

    fn builder() -> PipelineBuilder {
        let registry = word_registry();
        let resolver = SymbolResolver::new(&registry);
        let identity = GrammarIdentity::new("test", "Word").unwrap();
        PipelineBuilder::new(
            resolver.resolve_lexer(&identity).unwrap(),
            resolver.resolve_parser(&identity).unwrap(),
        )
    }

    #[test]
    fn test_handle_is_tagged_with_path() {
        let dir = TempDir::new().unwrap();
        let path = write_source(dir.path(), "ok.txt", "hello world;");

        let handle = builder().build(&SourceFile::utf8(&path)).unwrap();
        assert_eq!(handle.source_name(), path.display().to_string());
        assert_eq!(handle.parser().source_name(), handle.source_name());
    }

    #[test]
    fn test_bail_strategy_installed() {
        let dir = TempDir::new().unwrap();
        let path = write_source(dir.path(), "bad.txt", "hello world");

        let mut handle = builder().build(&SourceFile::utf8(&path)).unwrap();
        let failure = handle.parser_mut().invoke_rule("sentence").unwrap_err();

        assert_matches!(failure, RuleFailure::Cancelled(ref c)
            if c.message() == "line 1:11 mismatched input <EOF> expecting ';'");
        assert!(handle.parser().syntax_errors().is_empty());
    }

    #[test]
    fn test_source_errors_propagate() {
        let dir = TempDir::new().unwrap();
        let result = builder().build(&SourceFile::utf8(dir.path().join("absent.txt")));

        assert_matches!(
            result,
            Err(PipelineError::Source(SourceReadError::NotFound { .. }))
        );
    }

    fn build_with(
        lexer: crate::runtime::LexerFactory,
        parser: crate::runtime::ParserFactory,
    ) -> PipelineError {
        let mut registry = SymbolRegistry::new();
        registry.register_lexer("WordLexer", lexer).unwrap();
        registry.register_parser("WordParser", parser).unwrap();
        let resolver = SymbolResolver::new(&registry);
        let identity = GrammarIdentity::new("", "Word").unwrap();
        let builder = PipelineBuilder::new(
            resolver.resolve_lexer(&identity).unwrap(),
            resolver.resolve_parser(&identity).unwrap(),
        );

        let dir = TempDir::new().unwrap();
        let path = write_source(dir.path(), "ok.txt", "hi;");
        builder.build(&SourceFile::utf8(&path)).unwrap_err()
    }

    #[test]
    fn test_construction_error_names_symbol() {
        let error = build_with(word_lexer, refusing_parser);

        assert_matches!(&error, PipelineError::Construction(ConstructionError::Parser { symbol, .. })
            if symbol == "WordParser");
        assert_eq!(
            error.error_code(),
            codes::construction::PARSER_CONSTRUCTION_FAILED
        );
    }

    #[test]
    fn test_lexer_construction_error_names_symbol() {
        let error = build_with(refusing_lexer, word_parser);

        assert_matches!(&error, PipelineError::Construction(ConstructionError::Lexer { symbol, cause })
            if symbol == "WordLexer" && cause.message == "lexer refuses to start");
        assert_eq!(
            error.error_code(),
            codes::construction::LEXER_CONSTRUCTION_FAILED
        );
    }

    #[test]
    fn test_factory_panic_becomes_construction_error() {
        let error = build_with(word_lexer, panicking_parser);

        assert_matches!(&error, PipelineError::Construction(ConstructionError::Parser { symbol, cause })
            if symbol == "WordParser" && cause.message == "factory panicked: parser factory exploded");
    }
}
