use crate::config::ConfigError;
use crate::discovery::DiscoveryError;
use crate::invoker::InvocationError;
use crate::pipeline::PipelineError;
use crate::symbols::ResolutionError;

/// Every error that aborts a conformance run
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("Configuration failed: {0}")]
    Config(#[from] ConfigError),

    #[error("Source discovery failed: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("Symbol resolution failed: {0}")]
    Resolution(#[from] ResolutionError),

    #[error("Pipeline failed: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("Rule invocation failed: {0}")]
    Invocation(#[from] InvocationError),
}

impl HarnessError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            HarnessError::Config(e) => e.error_code(),
            HarnessError::Discovery(e) => e.error_code(),
            HarnessError::Resolution(e) => e.error_code(),
            HarnessError::Pipeline(e) => e.error_code(),
            HarnessError::Invocation(e) => e.error_code(),
        }
    }

    pub fn requires_halt(&self) -> bool {
        crate::logging::codes::requires_halt(self.error_code().as_str())
    }
}
