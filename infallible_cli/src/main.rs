//! # Infallible CLI
//!
//! Runs every discovered source file through the linked grammar's start
//! rule and reports which files it rejected.
//!
//! Exit status: 0 when every source parsed (or the run was skipped), 1 when
//! at least one source was rejected, 2 on configuration or infrastructure
//! errors.

mod cli;

use clap::Parser;
use cli::{Cli, CliError};
use infallible_harness::symbols::RegistryError;
use infallible_harness::{log_error, log_info, logging, report};
use infallible_harness::{Harness, HarnessConfig, ReportFormat, RunOutcome, SymbolRegistry};
use std::io::{self, Write};
use std::process::ExitCode;

const EXIT_PASSED: u8 = 0;
const EXIT_REJECTED: u8 = 1;
const EXIT_FATAL: u8 = 2;

/// Every grammar linked into this binary
fn linked_symbols() -> Result<SymbolRegistry, RegistryError> {
    let mut registry = SymbolRegistry::new();
    snafu_grammar::register(&mut registry)?;
    Ok(registry)
}

fn init_logging(config: &HarnessConfig) -> Result<(), String> {
    logging::config::init_runtime_preferences(config.logging.clone())?;
    logging::init_global_logging()?;
    if logging::debug_enabled() {
        eprintln!("{}", logging::get_system_diagnostics());
    }
    Ok(())
}

/// Run the command, writing reports to `out`; returns the exit status
fn execute(cli: &Cli, out: &mut impl Write) -> Result<u8, CliError> {
    let registry = linked_symbols()?;

    if cli.list_symbols {
        for descriptor in registry.descriptors() {
            writeln!(out, "{:<8} {}", descriptor.capability.as_str(), descriptor.name)?;
        }
        return Ok(EXIT_PASSED);
    }

    let config = cli.to_config()?;

    // A skipped run does nothing else, logging setup included.
    if config.skip {
        writeln!(out, "Execution skipped.")?;
        return Ok(EXIT_PASSED);
    }

    init_logging(&config).map_err(CliError::Logging)?;
    log_info!("Infallible starting", "grammar" => &config.grammar_name);

    if cli.format == ReportFormat::Text {
        writeln!(out, "{}", report::header())?;
    }

    let grammar = config.grammar_name.clone();
    let start_rule = config.start_rule.clone();

    let collector = match Harness::new(config, &registry).run()? {
        RunOutcome::Skipped => return Ok(EXIT_PASSED),
        RunOutcome::Completed(collector) => collector,
    };

    match cli.format {
        ReportFormat::Text => writeln!(out, "{}", report::format_text(&collector))?,
        ReportFormat::Json => writeln!(
            out,
            "{}",
            report::format_json(&collector, &grammar, &start_rule)?
        )?,
    }

    Ok(if collector.has_failed() {
        EXIT_REJECTED
    } else {
        EXIT_PASSED
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let stdout = io::stdout();

    match execute(&cli, &mut stdout.lock()) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            log_error!(e.error_code(), &e.to_string());
            ExitCode::from(EXIT_FATAL)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use infallible_harness::symbols::SymbolSpace;

    fn run(args: &[&str]) -> (u8, String) {
        let mut argv = vec!["infallible"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();

        let mut out = Vec::new();
        let status = execute(&cli, &mut out).unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_linked_symbols_include_snafu() {
        let registry = linked_symbols().unwrap();
        let names = registry.names();

        assert!(names.contains(&"foo.bar.baz.SnafuLexer"));
        assert!(names.contains(&"foo.bar.baz.SnafuParser"));
    }

    #[test]
    fn test_skipped_run_prints_only_the_notice() {
        let (status, output) = run(&["--start-rule", "startRule", "--grammar", "Snafu", "--skip"]);

        assert_eq!(status, EXIT_PASSED);
        assert_eq!(output, "Execution skipped.\n");
        assert!(!logging::is_initialized());
    }

    #[test]
    fn test_list_symbols() {
        let (status, output) = run(&["--list-symbols"]);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(status, EXIT_PASSED);
        assert_eq!(lines.len(), 3);
        assert!(lines.contains(&"parser   foo.bar.baz.SnafuParser"));
    }

    #[test]
    fn test_usage_error_is_reported_before_any_output() {
        let cli = Cli::try_parse_from(["infallible", "--grammar", "Snafu"]).unwrap();
        let mut out = Vec::new();

        let error = execute(&cli, &mut out).unwrap_err();
        assert_matches!(error, CliError::MissingStartRule);
        assert!(out.is_empty());
    }
}
