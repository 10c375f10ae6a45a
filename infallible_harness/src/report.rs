//! Text and JSON rendering of a finished run

use crate::config::constants::compile_time::report::{SEPARATOR, TITLE};
use crate::results::{Collector, ParseResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format '{}'", other)),
        }
    }
}

/// The three-line banner printed before any file is parsed
pub fn header() -> String {
    format!("{}\n{}\n{}", SEPARATOR, TITLE, SEPARATOR)
}

/// Failed sources with their rejection messages, then the counts
pub fn format_text(collector: &Collector) -> String {
    let mut output = String::new();

    if collector.has_failed() {
        output.push_str("Failed sources:\n");
        for failure in collector.failures() {
            let _ = writeln!(
                output,
                "  {}: {}",
                failure.tested_file(),
                failure.message().unwrap_or_default()
            );
        }
        output.push('\n');
    }

    let _ = write!(
        output,
        "Sources parsed: {}, Failed: {}",
        collector.count(),
        collector.count_failed()
    );
    output
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    grammar: &'a str,
    start_rule: &'a str,
    generated_at: DateTime<Utc>,
    total: usize,
    failed: usize,
    results: &'a [ParseResult],
}

pub fn format_json(
    collector: &Collector,
    grammar: &str,
    start_rule: &str,
) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        grammar,
        start_rule,
        generated_at: Utc::now(),
        total: collector.count(),
        failed: collector.count_failed(),
        results: collector.results(),
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{ParseCancellation, RecognitionError, Token};

    fn collector() -> Collector {
        let mut collector = Collector::new();
        collector.add(ParseResult::passed("src/test/snafu/some.snf"));
        collector.add(ParseResult::failed(
            "src/test/snafu/with_errors.snf",
            ParseCancellation::new(RecognitionError::mismatched(
                Token::new(5, "print", 3, 0),
                vec![7],
                "';'",
            )),
        ));
        collector
    }

    #[test]
    fn test_header() {
        assert_eq!(
            header(),
            "-------------------------------------------------------\n\
             Grammar Conformance Test\n\
             -------------------------------------------------------"
        );
    }

    #[test]
    fn test_text_lists_failures_then_counts() {
        let text = format_text(&collector());

        assert_eq!(
            text,
            "Failed sources:\n  src/test/snafu/with_errors.snf: line 3:0 mismatched input 'print' expecting ';'\n\nSources parsed: 2, Failed: 1"
        );
    }

    #[test]
    fn test_text_without_failures() {
        let mut collector = Collector::new();
        collector.add(ParseResult::passed("a.snf"));

        assert_eq!(format_text(&collector), "Sources parsed: 1, Failed: 0");
        assert_eq!(format_text(&Collector::new()), "Sources parsed: 0, Failed: 0");
    }

    #[test]
    fn test_json_report() {
        let json = format_json(&collector(), "Snafu", "startRule").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["grammar"], "Snafu");
        assert_eq!(value["start_rule"], "startRule");
        assert_eq!(value["total"], 2);
        assert_eq!(value["failed"], 1);
        assert_eq!(value["results"][1]["failed"], true);
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert!("xml".parse::<ReportFormat>().is_err());
    }
}
