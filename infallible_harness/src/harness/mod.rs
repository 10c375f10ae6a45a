//! The conformance run: resolve once, then build, invoke and collect per file
//!
//! Files are processed sequentially in discovery order. A rejected source is
//! recorded and the loop moves on; any other error aborts the run.

mod error;

pub use error::HarnessError;

use crate::config::HarnessConfig;
use crate::discovery;
use crate::invoker::RuleInvoker;
use crate::logging::codes;
use crate::pipeline::PipelineBuilder;
use crate::results::Collector;
use crate::source::SourceFile;
use crate::symbols::{SymbolResolver, SymbolSpace};
use crate::{log_info, log_success};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Skipped,
    Completed(Collector),
}

impl RunOutcome {
    pub fn verdict(&self) -> Verdict {
        match self {
            RunOutcome::Skipped => Verdict::Skipped,
            RunOutcome::Completed(collector) if collector.has_failed() => Verdict::Failed,
            RunOutcome::Completed(_) => Verdict::Passed,
        }
    }

    pub fn collector(&self) -> Option<&Collector> {
        match self {
            RunOutcome::Skipped => None,
            RunOutcome::Completed(collector) => Some(collector),
        }
    }
}

pub struct Harness<'a> {
    config: HarnessConfig,
    space: &'a dyn SymbolSpace,
}

impl<'a> Harness<'a> {
    pub fn new(config: HarnessConfig, space: &'a dyn SymbolSpace) -> Self {
        Self { config, space }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Discover sources from the configured file sets and test them
    pub fn run(&self) -> Result<RunOutcome, HarnessError> {
        if self.config.skip {
            log_info!("Execution skipped.");
            return Ok(RunOutcome::Skipped);
        }

        self.config.validate()?;
        let files = discovery::discover(&self.config.filesets)?;
        self.run_files(&files).map(RunOutcome::Completed)
    }

    /// Test an explicit list of sources, in the given order
    pub fn run_files(&self, files: &[PathBuf]) -> Result<Collector, HarnessError> {
        let identity = self.config.grammar_identity()?;
        let resolver = SymbolResolver::new(self.space);
        let builder = PipelineBuilder::new(
            resolver.resolve_lexer(&identity)?,
            resolver.resolve_parser(&identity)?,
        );
        let invoker = RuleInvoker::new(&self.config.start_rule);

        let mut collector = Collector::new();
        for file in files {
            log_info!(&format!("Parse file '{}'...", absolute(file).display()));

            let handle = builder.build(&SourceFile::new(file, &self.config.encoding))?;
            collector.add(invoker.invoke(handle)?);
        }

        log_success!(codes::success::RUN_COMPLETED, "Conformance run completed",
            "grammar" => identity.grammar_name(),
            "sources" => collector.count(),
            "failed" => collector.count_failed()
        );

        Ok(collector)
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
