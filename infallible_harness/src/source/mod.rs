//! Source files and their decoding into character streams

mod error;

pub use error::SourceReadError;

use crate::config::constants::compile_time::source::{DEFAULT_ENCODING, MAX_SOURCE_FILE_SIZE};
use crate::log_debug;
use crate::runtime::CharStream;
use encoding_rs::Encoding;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A file claiming conformance, with the encoding its bytes are in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    encoding: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, encoding: &str) -> Self {
        Self {
            path: path.into(),
            encoding: encoding.to_string(),
        }
    }

    pub fn utf8(path: impl Into<PathBuf>) -> Self {
        Self::new(path, DEFAULT_ENCODING)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Path string used as the source name of every stream built from this file
    pub fn source_name(&self) -> String {
        self.path.display().to_string()
    }

    /// Read and decode the whole file
    pub fn read(&self) -> Result<CharStream, SourceReadError> {
        let text = self.read_text()?;
        Ok(CharStream::new(self.source_name(), &text))
    }

    fn read_text(&self) -> Result<String, SourceReadError> {
        let encoding = Encoding::for_label(self.encoding.trim().as_bytes()).ok_or_else(|| {
            SourceReadError::UnsupportedEncoding {
                path: self.path.clone(),
                encoding: self.encoding.clone(),
            }
        })?;

        let metadata = fs::metadata(&self.path).map_err(|e| self.io_error(e))?;
        if !metadata.is_file() {
            return Err(SourceReadError::NotFound {
                path: self.path.clone(),
            });
        }
        if metadata.len() > MAX_SOURCE_FILE_SIZE {
            return Err(SourceReadError::TooLarge {
                path: self.path.clone(),
                size: metadata.len(),
                max_size: MAX_SOURCE_FILE_SIZE,
            });
        }

        let bytes = fs::read(&self.path).map_err(|e| self.io_error(e))?;
        let text = encoding
            .decode_without_bom_handling_and_without_replacement(&bytes)
            .ok_or_else(|| SourceReadError::Malformed {
                path: self.path.clone(),
                encoding: encoding.name().to_string(),
            })?;

        log_debug!("Source decoded",
            "file" => self.path.display(),
            "encoding" => encoding.name(),
            "bytes" => bytes.len()
        );

        Ok(text.into_owned())
    }

    fn io_error(&self, error: std::io::Error) -> SourceReadError {
        if error.kind() == ErrorKind::NotFound {
            SourceReadError::NotFound {
                path: self.path.clone(),
            }
        } else {
            SourceReadError::Io {
                path: self.path.clone(),
                source: error,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::TempDir;

    #[test]
    fn test_reads_utf8_with_source_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("some.snf");
        fs::write(&path, "print \"ü\";").unwrap();

        let stream = SourceFile::utf8(&path).read().unwrap();
        assert_eq!(stream.source_name(), path.display().to_string());
        assert_eq!(stream.len(), 10);
    }

    #[test]
    fn test_decodes_declared_encoding() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin.snf");
        fs::write(&path, [b'"', 0xFC, b'"']).unwrap();

        let stream = SourceFile::new(&path, "ISO-8859-1").read().unwrap();
        assert_eq!(stream.text(0, 3), "\"ü\"");
    }

    #[test]
    fn test_malformed_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.snf");
        fs::write(&path, [0xFF, 0xFE, 0xFD]).unwrap();

        let result = SourceFile::utf8(&path).read();
        assert_matches!(result, Err(SourceReadError::Malformed { ref encoding, .. }) if encoding == "UTF-8");
    }

    #[test]
    fn test_unsupported_encoding() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("any.snf");
        fs::write(&path, "x").unwrap();

        let error = SourceFile::new(&path, "klingon-8").read().unwrap_err();
        assert_matches!(error, SourceReadError::UnsupportedEncoding { .. });
        assert_eq!(error.path(), path.as_path());
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let error = SourceFile::utf8(dir.path().join("absent.snf"))
            .read()
            .unwrap_err();

        assert_matches!(error, SourceReadError::NotFound { .. });
        assert!(error.requires_halt());
    }
}
