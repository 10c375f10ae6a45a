//! Start rule invocation on a freshly built parser
//!
//! A cancellation raised by the fail-fast strategy is the only failure that
//! becomes a recorded result. Everything else ends the run.

mod error;

pub use error::InvocationError;

use crate::logging::{self, codes};
use crate::pipeline::ParserHandle;
use crate::results::ParseResult;
use crate::runtime::{RuleFailure, Visibility};
use crate::{log_error, log_success};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct RuleInvoker {
    rule: String,
}

impl RuleInvoker {
    pub fn new(rule: &str) -> Self {
        Self {
            rule: rule.to_string(),
        }
    }

    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// Call the start rule once; the handle is consumed
    pub fn invoke(&self, mut handle: ParserHandle) -> Result<ParseResult, InvocationError> {
        let tested_file = handle.source_name().to_string();

        logging::with_file_context(Path::new(&tested_file), || {
            if let Err(error) = self.check_entry_point(&handle) {
                log_error!(error.error_code(), &error.to_string(), "rule" => &self.rule);
                return Err(error);
            }

            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                handle.parser_mut().invoke_rule(&self.rule)
            }));

            match outcome {
                Ok(Ok(())) => {
                    log_success!(codes::success::SOURCE_ACCEPTED, "Source accepted",
                        "rule" => &self.rule
                    );
                    Ok(ParseResult::passed(tested_file.as_str()))
                }
                Ok(Err(RuleFailure::Cancelled(cancellation))) => {
                    log_error!(codes::conformance::SOURCE_REJECTED, cancellation.message(),
                        "rule" => &self.rule
                    );
                    Ok(ParseResult::failed(tested_file.as_str(), cancellation))
                }
                Ok(Err(failure)) => {
                    let error = InvocationError::UnexpectedFailure {
                        rule: self.rule.clone(),
                        message: failure.to_string(),
                    };
                    log_error!(error.error_code(), &error.to_string());
                    Err(error)
                }
                Err(payload) => {
                    let error = InvocationError::Panicked {
                        rule: self.rule.clone(),
                        message: panic_message(payload.as_ref()),
                    };
                    log_error!(error.error_code(), &error.to_string());
                    Err(error)
                }
            }
        })
    }

    fn check_entry_point(&self, handle: &ParserHandle) -> Result<(), InvocationError> {
        let candidates: Vec<_> = handle
            .parser()
            .rule_table()
            .iter()
            .filter(|entry| entry.name == self.rule)
            .collect();

        let entry = match candidates.iter().find(|entry| entry.is_entry_point()) {
            Some(entry) => entry,
            None if candidates.is_empty() => {
                return Err(InvocationError::NoSuchRule {
                    rule: self.rule.clone(),
                    detail: "no such rule".to_string(),
                })
            }
            None => {
                return Err(InvocationError::NoSuchRule {
                    rule: self.rule.clone(),
                    detail: format!(
                        "only declared with {} argument(s)",
                        candidates[0].arity
                    ),
                })
            }
        };

        if entry.visibility != Visibility::Public {
            return Err(InvocationError::Inaccessible {
                rule: self.rule.clone(),
            });
        }

        Ok(())
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
