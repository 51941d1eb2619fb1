use super::{Formatter, RateOutput, RecordKind, iso8601_timestamp};
use crate::geometry::Solution;
use crate::rate::SweepRow;

pub struct CsvFormatter;

/// Quote a field if it contains a separator, quote or newline
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

impl Formatter for CsvFormatter {
    fn format_solution(&self, solution: &Solution) -> String {
        format!(
            "{},{},{},{},{}",
            iso8601_timestamp(),
            solution.mode,
            solution.angle,
            solution.distance,
            solution.width
        )
    }

    fn format_rate(&self, output: &RateOutput) -> String {
        format!(
            "{},{},{},{},{},{},{}",
            iso8601_timestamp(),
            escape(output.scanner_id),
            output.angle,
            output.estimate.kpps,
            escape(&output.estimate.note.to_string()),
            output.estimate.note.kind(),
            output.exceeds_limit
        )
    }

    fn format_sweep_row(&self, scanner_id: &str, row: &SweepRow) -> String {
        format!(
            "{},{},{},{:.6},{},{},{}",
            iso8601_timestamp(),
            escape(scanner_id),
            row.angle,
            row.width_per_unit,
            row.estimate.kpps,
            escape(&row.estimate.note.to_string()),
            row.estimate.note.kind()
        )
    }

    fn header(&self, kind: RecordKind) -> Option<&'static str> {
        Some(match kind {
            RecordKind::Solution => "ts,mode,angle,distance,width",
            RecordKind::Rate => "ts,scanner,angle,kpps,note,source,exceeds_limit",
            RecordKind::Sweep => "ts,scanner,angle,width_per_unit,kpps,note,source",
        })
    }
}
