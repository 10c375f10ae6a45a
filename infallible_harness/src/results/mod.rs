//! Per-file outcomes and their aggregation for one run

mod collector;
mod result;

pub use collector::Collector;
pub use result::ParseResult;
