//! Configuration module for the conformance harness
//!
//! `constants` holds compile-time limits; `runtime` holds the run
//! configuration loaded from TOML plus environment overrides.

pub mod constants;
pub mod error;
pub mod runtime;

pub use error::ConfigError;
pub use runtime::{load_config, read_config, GrammarIdentity, HarnessConfig, LoggingPreferences};
