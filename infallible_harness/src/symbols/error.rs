use crate::logging::codes;

/// Errors resolving a grammar's lexer or parser symbol
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    #[error("Can not find symbol '{name}'{}", render_suggestions(.suggestions))]
    NotFound {
        name: String,
        suggestions: Vec<String>,
    },

    #[error("Symbol '{name}' is not a {required}")]
    WrongCapability { name: String, required: &'static str },

    #[error("Can not get constructor for '{name}' (expected a {expected} constructor)")]
    MissingConstructor {
        name: String,
        expected: &'static str,
    },
}

fn render_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (registered: {})", suggestions.join(", "))
    }
}

impl ResolutionError {
    /// Qualified name the failed lookup was for
    pub fn symbol_name(&self) -> &str {
        match self {
            ResolutionError::NotFound { name, .. }
            | ResolutionError::WrongCapability { name, .. }
            | ResolutionError::MissingConstructor { name, .. } => name,
        }
    }

    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            ResolutionError::NotFound { .. } => codes::resolution::SYMBOL_NOT_FOUND,
            ResolutionError::WrongCapability { .. } => codes::resolution::WRONG_CAPABILITY,
            ResolutionError::MissingConstructor { .. } => codes::resolution::MISSING_CONSTRUCTOR,
        }
    }

    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
    }
}

/// Errors populating a symbol registry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Symbol '{name}' is already registered")]
    DuplicateSymbol { name: String },

    #[error("Symbol name must not be empty")]
    EmptyName,
}

impl RegistryError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            RegistryError::DuplicateSymbol { .. } => codes::resolution::DUPLICATE_SYMBOL,
            RegistryError::EmptyName => codes::config::INVALID_CONFIGURATION,
        }
    }
}
