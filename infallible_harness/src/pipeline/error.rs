use crate::logging::codes;
use crate::runtime::ConstructionFailure;
use crate::source::SourceReadError;

/// A registered factory refused to build its lexer or parser
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConstructionError {
    #[error("Can not construct lexer '{symbol}': {cause}")]
    Lexer {
        symbol: String,
        #[source]
        cause: ConstructionFailure,
    },

    #[error("Can not construct parser '{symbol}': {cause}")]
    Parser {
        symbol: String,
        #[source]
        cause: ConstructionFailure,
    },
}

impl ConstructionError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            ConstructionError::Lexer { .. } => codes::construction::LEXER_CONSTRUCTION_FAILED,
            ConstructionError::Parser { .. } => codes::construction::PARSER_CONSTRUCTION_FAILED,
        }
    }
}

/// Failures building the per-file pipeline; all of them abort the run
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Source read failed: {0}")]
    Source(#[from] SourceReadError),

    #[error("Construction failed: {0}")]
    Construction(#[from] ConstructionError),
}

impl PipelineError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            PipelineError::Source(e) => e.error_code(),
            PipelineError::Construction(e) => e.error_code(),
        }
    }
}
