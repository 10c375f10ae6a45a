use crate::logging::codes;
use std::path::PathBuf;

/// Errors turning a source file into decoded text
#[derive(Debug, thiserror::Error)]
pub enum SourceReadError {
    #[error("Source file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported encoding '{encoding}' for '{}'", path.display())]
    UnsupportedEncoding { path: PathBuf, encoding: String },

    #[error("'{}' is not valid {encoding}", path.display())]
    Malformed { path: PathBuf, encoding: String },

    #[error("Source file too large: '{}' has {size} bytes (max: {max_size})", path.display())]
    TooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },
}

impl SourceReadError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            SourceReadError::NotFound { path }
            | SourceReadError::Io { path, .. }
            | SourceReadError::UnsupportedEncoding { path, .. }
            | SourceReadError::Malformed { path, .. }
            | SourceReadError::TooLarge { path, .. } => path,
        }
    }

    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            SourceReadError::NotFound { .. } => codes::source::FILE_NOT_FOUND,
            SourceReadError::Io { .. } => codes::source::IO_ERROR,
            SourceReadError::UnsupportedEncoding { .. } => codes::source::UNSUPPORTED_ENCODING,
            SourceReadError::Malformed { .. } => codes::source::MALFORMED_INPUT,
            SourceReadError::TooLarge { .. } => codes::source::FILE_TOO_LARGE,
        }
    }

    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
    }
}
