//! Harness error and success codes with classification metadata
//!
//! Single source of truth for every code the harness logs. Each fatal error
//! kind and the per-file rejection has one code; the registry below carries
//! the category, severity and recommended action used by detailed output.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Configuration error codes
pub mod config {
    use super::Code;

    pub const INVALID_CONFIGURATION: Code = Code::new("E001");
    pub const CONFIG_IO_ERROR: Code = Code::new("E002");
    pub const CONFIG_PARSE_ERROR: Code = Code::new("E003");
}

/// Source discovery error codes
pub mod discovery {
    use super::Code;

    pub const DIRECTORY_NOT_FOUND: Code = Code::new("E010");
    pub const INVALID_PATTERN: Code = Code::new("E011");
    pub const WALK_FAILED: Code = Code::new("E012");
}

/// Symbol resolution error codes
pub mod resolution {
    use super::Code;

    pub const SYMBOL_NOT_FOUND: Code = Code::new("E020");
    pub const WRONG_CAPABILITY: Code = Code::new("E021");
    pub const MISSING_CONSTRUCTOR: Code = Code::new("E022");
    pub const DUPLICATE_SYMBOL: Code = Code::new("E023");
}

/// Source read error codes
pub mod source {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E030");
    pub const IO_ERROR: Code = Code::new("E031");
    pub const UNSUPPORTED_ENCODING: Code = Code::new("E032");
    pub const MALFORMED_INPUT: Code = Code::new("E033");
    pub const FILE_TOO_LARGE: Code = Code::new("E034");
}

/// Lexer/parser construction error codes
pub mod construction {
    use super::Code;

    pub const LEXER_CONSTRUCTION_FAILED: Code = Code::new("E040");
    pub const PARSER_CONSTRUCTION_FAILED: Code = Code::new("E041");
}

/// Entry rule invocation error codes
pub mod invocation {
    use super::Code;

    pub const NO_SUCH_RULE: Code = Code::new("E050");
    pub const RULE_INACCESSIBLE: Code = Code::new("E051");
    pub const UNEXPECTED_FAILURE: Code = Code::new("E052");
    pub const RULE_PANICKED: Code = Code::new("E053");
}

/// Conformance (per-file) codes
pub mod conformance {
    use super::Code;

    pub const SOURCE_REJECTED: Code = Code::new("E060");
    pub const SYNTAX_ERROR_REPORTED: Code = Code::new("E061");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const CONFIGURATION_LOADED: Code = Code::new("I002");
    pub const DISCOVERY_COMPLETED: Code = Code::new("I010");
    pub const SYMBOL_RESOLVED: Code = Code::new("I020");
    pub const PIPELINE_BUILT: Code = Code::new("I030");
    pub const SOURCE_ACCEPTED: Code = Code::new("I040");
    pub const RUN_COMPLETED: Code = Code::new("I050");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let entries = [
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                true,
                "Critical internal harness error",
                "File a bug report with the failing configuration",
            ),
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                true,
                "Harness initialization failure",
                "Check logging configuration and environment overrides",
            ),
            ErrorMetadata::new(
                "E001",
                "Configuration",
                Severity::High,
                false,
                true,
                "Harness configuration is invalid",
                "Set start_rule and grammar_name to non-empty values",
            ),
            ErrorMetadata::new(
                "E002",
                "Configuration",
                Severity::High,
                false,
                true,
                "Configuration file could not be read",
                "Check the configuration path and its permissions",
            ),
            ErrorMetadata::new(
                "E003",
                "Configuration",
                Severity::High,
                false,
                true,
                "Configuration file is not valid TOML for the harness",
                "Fix the reported key or value in the configuration file",
            ),
            ErrorMetadata::new(
                "E010",
                "Discovery",
                Severity::High,
                false,
                true,
                "File set directory does not exist",
                "Point the file set at an existing directory",
            ),
            ErrorMetadata::new(
                "E011",
                "Discovery",
                Severity::High,
                false,
                true,
                "Include or exclude pattern is not a valid glob",
                "Fix the glob syntax of the file set pattern",
            ),
            ErrorMetadata::new(
                "E012",
                "Discovery",
                Severity::High,
                false,
                true,
                "Directory traversal failed",
                "Check directory permissions below the file set root",
            ),
            ErrorMetadata::new(
                "E020",
                "Resolution",
                Severity::Critical,
                false,
                true,
                "Generated lexer or parser symbol not found",
                "Check grammar name and namespace, and that the grammar is registered",
            ),
            ErrorMetadata::new(
                "E021",
                "Resolution",
                Severity::Critical,
                false,
                true,
                "Symbol does not provide the required lexer or parser capability",
                "Check that the grammar name resolves to the generated types",
            ),
            ErrorMetadata::new(
                "E022",
                "Resolution",
                Severity::Critical,
                false,
                true,
                "Symbol lacks the expected constructor",
                "Regenerate the grammar so it registers a stream constructor",
            ),
            ErrorMetadata::new(
                "E023",
                "Resolution",
                Severity::High,
                false,
                true,
                "Symbol registered twice",
                "Register each generated type exactly once",
            ),
            ErrorMetadata::new(
                "E030",
                "SourceRead",
                Severity::High,
                false,
                true,
                "Source file not found",
                "Check the file set configuration",
            ),
            ErrorMetadata::new(
                "E031",
                "SourceRead",
                Severity::High,
                false,
                true,
                "Source file could not be read",
                "Check file permissions",
            ),
            ErrorMetadata::new(
                "E032",
                "SourceRead",
                Severity::High,
                false,
                true,
                "Configured encoding is not supported",
                "Use a WHATWG encoding label such as utf-8",
            ),
            ErrorMetadata::new(
                "E033",
                "SourceRead",
                Severity::High,
                false,
                true,
                "Source bytes are invalid in the configured encoding",
                "Fix the file encoding or the configured encoding",
            ),
            ErrorMetadata::new(
                "E034",
                "SourceRead",
                Severity::High,
                false,
                true,
                "Source file exceeds the maximum size",
                "Split the source file or exclude it from the file set",
            ),
            ErrorMetadata::new(
                "E040",
                "Construction",
                Severity::Critical,
                false,
                true,
                "Generated lexer could not be constructed",
                "Regenerate the grammar against the current runtime",
            ),
            ErrorMetadata::new(
                "E041",
                "Construction",
                Severity::Critical,
                false,
                true,
                "Generated parser could not be constructed",
                "Regenerate the grammar against the current runtime",
            ),
            ErrorMetadata::new(
                "E050",
                "Invocation",
                Severity::Critical,
                false,
                true,
                "Parser has no zero-argument rule with the configured name",
                "Check the start_rule setting against the grammar's rules",
            ),
            ErrorMetadata::new(
                "E051",
                "Invocation",
                Severity::Critical,
                false,
                true,
                "Configured start rule is not publicly accessible",
                "Choose a public entry rule",
            ),
            ErrorMetadata::new(
                "E052",
                "Invocation",
                Severity::Critical,
                false,
                true,
                "Start rule failed with something other than a rejection",
                "Inspect the generated parser for runtime errors",
            ),
            ErrorMetadata::new(
                "E053",
                "Invocation",
                Severity::Critical,
                false,
                true,
                "Start rule panicked",
                "Inspect the generated parser for runtime errors",
            ),
            ErrorMetadata::new(
                "E060",
                "Conformance",
                Severity::Medium,
                true,
                false,
                "Source rejected by the grammar",
                "Fix the source or the grammar",
            ),
            ErrorMetadata::new(
                "E061",
                "Conformance",
                Severity::Low,
                true,
                false,
                "Syntax error reported during recovering parse",
                "Review the reported position",
            ),
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get error metadata for a specific error code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get error severity from error code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Check if error requires immediate halt
pub fn requires_halt(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

/// Get human-readable description for error code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for error code
pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get error category from error code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_fatal_code_requires_halt() {
        let fatal = [
            resolution::SYMBOL_NOT_FOUND,
            resolution::WRONG_CAPABILITY,
            resolution::MISSING_CONSTRUCTOR,
            source::FILE_NOT_FOUND,
            source::UNSUPPORTED_ENCODING,
            construction::LEXER_CONSTRUCTION_FAILED,
            construction::PARSER_CONSTRUCTION_FAILED,
            invocation::NO_SUCH_RULE,
            invocation::RULE_INACCESSIBLE,
            invocation::UNEXPECTED_FAILURE,
        ];

        for code in fatal {
            assert!(requires_halt(code.as_str()), "{} should halt", code);
            assert!(!is_recoverable(code.as_str()));
        }
    }

    #[test]
    fn test_rejection_is_recoverable() {
        let code = conformance::SOURCE_REJECTED;
        assert!(is_recoverable(code.as_str()));
        assert!(!requires_halt(code.as_str()));
        assert_eq!(get_category(code.as_str()), "Conformance");
    }

    #[test]
    fn test_unknown_code_defaults() {
        assert_eq!(get_description("X999"), "Unknown error");
        assert_eq!(get_category("X999"), "Unknown");
        assert_eq!(get_severity("X999"), Severity::Medium);
        assert!(get_error_metadata("X999").is_none());
    }
}
