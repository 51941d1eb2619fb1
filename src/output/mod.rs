mod csv;
mod json;
mod text;

use chrono::Utc;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

use crate::geometry::Solution;
use crate::rate::{KppsSummary, ScanRateEstimate, SweepRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// Kind of record a formatter is asked to emit, used to pick a header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Solution,
    Rate,
    Sweep,
}

/// A single scan rate lookup, as printed by `rate`
pub struct RateOutput<'a> {
    pub scanner_id: &'a str,
    pub scanner_name: &'a str,
    pub angle: f64,
    pub exceeds_limit: bool,
    pub estimate: &'a ScanRateEstimate,
}

pub trait Formatter: Send {
    fn format_solution(&self, solution: &Solution) -> String;

    fn format_rate(&self, output: &RateOutput) -> String;

    fn format_sweep_row(&self, scanner_id: &str, row: &SweepRow) -> String;

    fn format_summary(&self, _scanner_id: &str, _summary: &KppsSummary) -> Option<String> {
        None
    }

    fn header(&self, _kind: RecordKind) -> Option<&'static str> {
        None
    }
}

pub fn create_formatter(format: OutputFormat, verbose: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

pub fn iso8601_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
