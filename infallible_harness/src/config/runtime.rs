// RUNTIME CONFIGURATION

use super::constants::compile_time::source::DEFAULT_ENCODING;
use super::error::ConfigError;
use crate::discovery::FileSet;
use crate::logging::codes;
use crate::logging::events::LogLevel;
use crate::log_success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Minimum level name ("error", "warn", "info", "debug")
    pub level: String,

    /// Whether to emit JSON lines instead of plain text
    pub structured: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            level: env::var("INFALLIBLE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            structured: env::var("INFALLIBLE_LOG_STRUCTURED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

impl LoggingPreferences {
    /// Parsed minimum level; unknown names fall back to info
    pub fn level(&self) -> LogLevel {
        LogLevel::parse(&self.level).unwrap_or(LogLevel::Info)
    }
}

/// Namespace plus grammar name, the two strings symbol names derive from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarIdentity {
    namespace: String,
    grammar_name: String,
}

impl GrammarIdentity {
    pub fn new(namespace: &str, grammar_name: &str) -> Result<Self, ConfigError> {
        let grammar_name = grammar_name.trim();
        if grammar_name.is_empty() {
            return Err(ConfigError::invalid("grammar_name", "must not be empty"));
        }

        Ok(Self {
            namespace: namespace.trim().to_string(),
            grammar_name: grammar_name.to_string(),
        })
    }

    /// Empty when the grammar lives in the default namespace
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn grammar_name(&self) -> &str {
        &self.grammar_name
    }
}

/// Everything one conformance run needs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    pub start_rule: String,
    pub grammar_name: String,
    pub namespace: String,
    pub encoding: String,
    pub skip: bool,
    #[serde(rename = "fileset")]
    pub filesets: Vec<FileSet>,
    pub logging: LoggingPreferences,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            start_rule: String::new(),
            grammar_name: String::new(),
            namespace: String::new(),
            encoding: DEFAULT_ENCODING.to_string(),
            skip: false,
            filesets: Vec::new(),
            logging: LoggingPreferences::default(),
        }
    }
}

impl HarnessConfig {
    pub fn new(start_rule: &str, grammar_name: &str) -> Self {
        Self {
            start_rule: start_rule.to_string(),
            grammar_name: grammar_name.to_string(),
            ..Self::default()
        }
    }

    /// Parse TOML text; `origin` only labels errors
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Apply `INFALLIBLE_SKIP` and `INFALLIBLE_ENCODING` when set
    pub fn apply_env_overrides(&mut self) {
        if let Some(skip) = env::var("INFALLIBLE_SKIP")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.skip = skip;
        }

        if let Some(encoding) = env::var("INFALLIBLE_ENCODING")
            .ok()
            .filter(|v| !v.trim().is_empty())
        {
            self.encoding = encoding;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_rule.trim().is_empty() {
            return Err(ConfigError::invalid("start_rule", "must not be empty"));
        }
        if self.encoding.trim().is_empty() {
            return Err(ConfigError::invalid("encoding", "must not be empty"));
        }
        if self.filesets.iter().any(|set| set.includes.is_empty()) {
            return Err(ConfigError::invalid(
                "fileset.includes",
                "must list at least one pattern",
            ));
        }
        self.grammar_identity().map(|_| ())
    }

    pub fn grammar_identity(&self) -> Result<GrammarIdentity, ConfigError> {
        GrammarIdentity::new(&self.namespace, &self.grammar_name)
    }
}

/// Read a configuration file and apply environment overrides, leaving
/// validation to the caller so further overrides can be layered on
pub fn read_config(path: &Path) -> Result<HarnessConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut config = HarnessConfig::from_toml_str(&text, path)?;
    config.apply_env_overrides();
    Ok(config)
}

/// Load, override and validate a configuration file
pub fn load_config(path: &Path) -> Result<HarnessConfig, ConfigError> {
    let config = read_config(path)?;
    config.validate()?;

    log_success!(
        codes::success::CONFIGURATION_LOADED,
        "Configuration loaded",
        "path" => path.display(),
        "grammar" => &config.grammar_name,
        "start_rule" => &config.start_rule
    );

    Ok(config)
}
