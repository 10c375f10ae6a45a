use super::result::ParseResult;
use serde::Serialize;

/// Append-only record of every result in a run, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Collector {
    results: Vec<ParseResult>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, result: ParseResult) {
        self.results.push(result);
    }

    pub fn count(&self) -> usize {
        self.results.len()
    }

    pub fn count_failed(&self) -> usize {
        self.failures().count()
    }

    pub fn passed_count(&self) -> usize {
        self.count() - self.count_failed()
    }

    pub fn has_failed(&self) -> bool {
        self.results.iter().any(ParseResult::has_failed)
    }

    pub fn results(&self) -> &[ParseResult] {
        &self.results
    }

    pub fn failures(&self) -> impl Iterator<Item = &ParseResult> {
        self.results.iter().filter(|result| result.has_failed())
    }
}
