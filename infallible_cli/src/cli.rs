//! Command-line argument parsing for the conformance runner

use clap::Parser;
use infallible_harness::config::read_config;
use infallible_harness::logging::{codes, Code};
use infallible_harness::symbols::RegistryError;
use infallible_harness::{ConfigError, FileSet, HarnessConfig, HarnessError, ReportFormat};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("--include and --exclude need a --dir to apply to")]
    PatternsWithoutDirectory,

    #[error("--start-rule is required when no --config file is given")]
    MissingStartRule,

    #[error("--grammar is required when no --config file is given")]
    MissingGrammar,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Linked grammar failed to register: {0}")]
    Registry(#[from] RegistryError),

    #[error("Logging initialization failed: {0}")]
    Logging(String),

    #[error(transparent)]
    Harness(#[from] HarnessError),

    #[error("Failed to render report: {0}")]
    Report(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    pub fn error_code(&self) -> Code {
        match self {
            CliError::PatternsWithoutDirectory
            | CliError::MissingStartRule
            | CliError::MissingGrammar => codes::config::INVALID_CONFIGURATION,
            CliError::Config(e) => e.error_code(),
            CliError::Registry(e) => e.error_code(),
            CliError::Logging(_) => codes::system::INITIALIZATION_FAILURE,
            CliError::Harness(e) => e.error_code(),
            CliError::Report(_) | CliError::Output(_) => codes::system::INTERNAL_ERROR,
        }
    }
}

/// Grammar conformance runner
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "infallible")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file; other flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Parser rule every source file is parsed from
    #[arg(long)]
    pub start_rule: Option<String>,

    /// Grammar name the lexer and parser symbols derive from
    #[arg(long)]
    pub grammar: Option<String>,

    /// Namespace prefix of the generated symbols
    #[arg(long)]
    pub namespace: Option<String>,

    /// Encoding label used to decode source files
    #[arg(long)]
    pub encoding: Option<String>,

    /// Skip the run entirely
    #[arg(long, default_value_t = false)]
    pub skip: bool,

    /// Extra directory of sources to test
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Include pattern for --dir (repeatable)
    #[arg(long = "include")]
    pub includes: Vec<String>,

    /// Exclude pattern for --dir (repeatable)
    #[arg(long = "exclude")]
    pub excludes: Vec<String>,

    /// Report format: text or json
    #[arg(long, default_value = "text")]
    pub format: ReportFormat,

    /// Minimum log level (error, warn, info, debug)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit log events as JSON lines
    #[arg(long, default_value_t = false)]
    pub structured_logs: bool,

    /// Print the registered symbols and exit
    #[arg(long, default_value_t = false)]
    pub list_symbols: bool,
}

impl Cli {
    pub fn validate(&self) -> Result<(), CliError> {
        if self.dir.is_none() && (!self.includes.is_empty() || !self.excludes.is_empty()) {
            return Err(CliError::PatternsWithoutDirectory);
        }
        if self.config.is_none() {
            if self.start_rule.is_none() {
                return Err(CliError::MissingStartRule);
            }
            if self.grammar.is_none() {
                return Err(CliError::MissingGrammar);
            }
        }
        Ok(())
    }

    /// Layer the flags over the configuration file (or defaults) and validate
    pub fn to_config(&self) -> Result<HarnessConfig, CliError> {
        self.validate()?;

        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => {
                let mut config = HarnessConfig::default();
                config.apply_env_overrides();
                config
            }
        };

        if let Some(start_rule) = &self.start_rule {
            config.start_rule = start_rule.clone();
        }
        if let Some(grammar) = &self.grammar {
            config.grammar_name = grammar.clone();
        }
        if let Some(namespace) = &self.namespace {
            config.namespace = namespace.clone();
        }
        if let Some(encoding) = &self.encoding {
            config.encoding = encoding.clone();
        }
        if self.skip {
            config.skip = true;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if self.structured_logs {
            config.logging.structured = true;
        }

        if let Some(dir) = &self.dir {
            let mut set = FileSet::new(dir.clone());
            for pattern in &self.includes {
                set = set.include(pattern);
            }
            for pattern in &self.excludes {
                set = set.exclude(pattern);
            }
            config.filesets.push(set);
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["infallible"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_flags_build_config() {
        let cli = parse(&[
            "--start-rule",
            "startRule",
            "--grammar",
            "Snafu",
            "--namespace",
            "foo.bar.baz",
            "--dir",
            "src/test/snafu",
            "--exclude",
            "**/*.log",
        ]);

        let config = cli.to_config().unwrap();
        assert_eq!(config.start_rule, "startRule");
        assert_eq!(config.namespace, "foo.bar.baz");
        assert_eq!(config.filesets.len(), 1);
        assert_eq!(config.filesets[0].includes, vec!["**/*".to_string()]);
        assert_eq!(config.filesets[0].excludes, vec!["**/*.log".to_string()]);
        assert_eq!(cli.format, ReportFormat::Text);
    }

    #[test]
    fn test_json_format_flag() {
        let cli = parse(&["--start-rule", "r", "--grammar", "G", "--format", "json"]);
        assert_eq!(cli.format, ReportFormat::Json);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result = Cli::try_parse_from(["infallible", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_patterns_need_directory() {
        let cli = parse(&["--start-rule", "r", "--grammar", "G", "--include", "*.snf"]);
        let error = cli.validate().unwrap_err();

        assert_matches!(error, CliError::PatternsWithoutDirectory);
        assert_eq!(error.error_code(), codes::config::INVALID_CONFIGURATION);
    }

    #[test]
    fn test_start_rule_required_without_config() {
        let cli = parse(&["--grammar", "G"]);
        assert_matches!(cli.to_config(), Err(CliError::MissingStartRule));
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "start_rule = \"startRule\"\ngrammar_name = \"Snafu\"\nnamespace = \"foo.bar.baz\"\n"
        )
        .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let cli = parse(&["--config", &path, "--start-rule", "expr", "--skip"]);
        let config = cli.to_config().unwrap();

        assert_eq!(config.start_rule, "expr");
        assert_eq!(config.grammar_name, "Snafu");
        assert!(config.skip);
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml").to_string_lossy().to_string();

        let cli = parse(&["--config", &path]);
        assert_matches!(cli.to_config(), Err(CliError::Config(ConfigError::Io { .. })));
    }

    #[test]
    fn test_runtime_failures_map_to_system_codes() {
        let logging = CliError::Logging("Global logger already initialized".to_string());
        assert_eq!(logging.error_code(), codes::system::INITIALIZATION_FAILURE);

        let output = CliError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert_eq!(output.error_code(), codes::system::INTERNAL_ERROR);
    }
}
