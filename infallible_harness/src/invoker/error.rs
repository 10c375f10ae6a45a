use crate::logging::codes;

/// The start rule could not be called, or failed for a reason other than
/// rejecting its input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvocationError {
    #[error("Parser has no rule named '{rule}' ({detail})")]
    NoSuchRule { rule: String, detail: String },

    #[error("Can not access rule '{rule}' on parser (rule is not public)")]
    Inaccessible { rule: String },

    #[error("Can not invoke rule '{rule}' on parser ({message})")]
    UnexpectedFailure { rule: String, message: String },

    #[error("Rule '{rule}' panicked ({message})")]
    Panicked { rule: String, message: String },
}

impl InvocationError {
    pub fn rule(&self) -> &str {
        match self {
            InvocationError::NoSuchRule { rule, .. }
            | InvocationError::Inaccessible { rule }
            | InvocationError::UnexpectedFailure { rule, .. }
            | InvocationError::Panicked { rule, .. } => rule,
        }
    }

    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            InvocationError::NoSuchRule { .. } => codes::invocation::NO_SUCH_RULE,
            InvocationError::Inaccessible { .. } => codes::invocation::RULE_INACCESSIBLE,
            InvocationError::UnexpectedFailure { .. } => codes::invocation::UNEXPECTED_FAILURE,
            InvocationError::Panicked { .. } => codes::invocation::RULE_PANICKED,
        }
    }

    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
    }
}
