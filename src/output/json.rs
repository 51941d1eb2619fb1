use serde_json::json;

use super::{Formatter, RateOutput, iso8601_timestamp};
use crate::geometry::Solution;
use crate::rate::{KppsSummary, SweepRow};

/// One JSON object per line
///
/// Non-finite numbers (an unreachable distance) are emitted as `null`.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_solution(&self, solution: &Solution) -> String {
        json!({
            "ts": iso8601_timestamp(),
            "mode": solution.mode,
            "angle": solution.angle,
            "distance": solution.distance,
            "width": solution.width,
        })
        .to_string()
    }

    fn format_rate(&self, output: &RateOutput) -> String {
        json!({
            "ts": iso8601_timestamp(),
            "scanner": output.scanner_id,
            "angle": output.angle,
            "kpps": output.estimate.kpps,
            "note": output.estimate.note,
            "source": output.estimate.note.kind(),
            "exceeds_limit": output.exceeds_limit,
        })
        .to_string()
    }

    fn format_sweep_row(&self, scanner_id: &str, row: &SweepRow) -> String {
        json!({
            "ts": iso8601_timestamp(),
            "scanner": scanner_id,
            "angle": row.angle,
            "width_per_unit": row.width_per_unit,
            "kpps": row.estimate.kpps,
            "note": row.estimate.note,
            "source": row.estimate.note.kind(),
        })
        .to_string()
    }

    fn format_summary(&self, scanner_id: &str, summary: &KppsSummary) -> Option<String> {
        Some(
            json!({
                "ts": iso8601_timestamp(),
                "scanner": scanner_id,
                "summary": summary,
            })
            .to_string(),
        )
    }
}
