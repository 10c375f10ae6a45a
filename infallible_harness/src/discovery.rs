//! Source discovery from directory + include/exclude file sets

use crate::config::constants::compile_time::discovery::DEFAULT_INCLUDE_PATTERN;
use crate::logging::codes;
use crate::{log_error, log_success};
use glob::{MatchOptions, Pattern};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Source directory not found: {}", directory.display())]
    DirectoryNotFound { directory: PathBuf },

    #[error("Invalid file set pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Failed to walk '{}': {source}", directory.display())]
    Walk {
        directory: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl DiscoveryError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            DiscoveryError::DirectoryNotFound { .. } => codes::discovery::DIRECTORY_NOT_FOUND,
            DiscoveryError::InvalidPattern { .. } => codes::discovery::INVALID_PATTERN,
            DiscoveryError::Walk { .. } => codes::discovery::WALK_FAILED,
        }
    }

    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
    }
}

fn default_includes() -> Vec<String> {
    vec![DEFAULT_INCLUDE_PATTERN.to_string()]
}

/// A directory plus the glob patterns selecting files below it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSet {
    pub directory: PathBuf,
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub excludes: Vec<String>,
}

impl FileSet {
    /// File set including everything below `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            includes: default_includes(),
            excludes: Vec::new(),
        }
    }

    pub fn include(mut self, pattern: &str) -> Self {
        if self.includes == default_includes() {
            self.includes.clear();
        }
        self.includes.push(pattern.to_string());
        self
    }

    pub fn exclude(mut self, pattern: &str) -> Self {
        self.excludes.push(pattern.to_string());
        self
    }

    /// Matching files as `directory/relative`, sorted
    pub fn scan(&self) -> Result<Vec<PathBuf>, DiscoveryError> {
        if !self.directory.is_dir() {
            let error = DiscoveryError::DirectoryNotFound {
                directory: self.directory.clone(),
            };
            log_error!(error.error_code(), "Source directory not found",
                "directory" => self.directory.display()
            );
            return Err(error);
        }

        let includes = compile_patterns(&self.includes)?;
        let excludes = compile_patterns(&self.excludes)?;

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.directory).follow_links(true) {
            let entry = entry.map_err(|source| DiscoveryError::Walk {
                directory: self.directory.clone(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = match entry.path().strip_prefix(&self.directory) {
                Ok(relative) => relative,
                Err(_) => continue,
            };

            if matches_any(&includes, relative) && !matches_any(&excludes, relative) {
                files.push(self.directory.join(relative));
            }
        }

        files.sort();
        Ok(files)
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>, DiscoveryError> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| {
                let error = DiscoveryError::InvalidPattern {
                    pattern: p.clone(),
                    message: e.msg.to_string(),
                };
                log_error!(error.error_code(), "Invalid file set pattern",
                    "pattern" => p
                );
                error
            })
        })
        .collect()
}

fn matches_any(patterns: &[Pattern], relative: &Path) -> bool {
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };
    let normalized = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    patterns
        .iter()
        .any(|p| p.matches_with(&normalized, options))
}

/// Scan every file set, concatenating results in file set order
pub fn discover(filesets: &[FileSet]) -> Result<Vec<PathBuf>, DiscoveryError> {
    let mut files = Vec::new();
    for fileset in filesets {
        files.extend(fileset.scan()?);
    }

    log_success!(codes::success::DISCOVERY_COMPLETED, "Source discovery completed",
        "filesets" => filesets.len(),
        "sources" => files.len()
    );

    Ok(files)
}
