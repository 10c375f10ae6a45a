//! Grammar conformance harness
//!
//! Resolves a grammar's lexer and parser by name from a symbol space, runs
//! every discovered source file through them with a fail-fast error strategy,
//! and reports which files the grammar rejected.

pub mod config;
pub mod discovery;
pub mod harness;
pub mod invoker;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod results;
pub mod runtime;
pub mod source;
pub mod symbols;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export key types for library consumers
pub use config::{load_config, read_config, ConfigError, GrammarIdentity, HarnessConfig};
pub use discovery::{DiscoveryError, FileSet};
pub use harness::{Harness, HarnessError, RunOutcome, Verdict};
pub use invoker::{InvocationError, RuleInvoker};
pub use pipeline::{ConstructionError, ParserHandle, PipelineBuilder, PipelineError};
pub use report::ReportFormat;
pub use results::{Collector, ParseResult};
pub use source::{SourceFile, SourceReadError};
pub use symbols::{ResolutionError, SymbolRegistry, SymbolResolver, SymbolSpace};
