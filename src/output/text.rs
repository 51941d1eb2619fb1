use super::{Formatter, RateOutput};
use crate::config::CalculationMode;
use crate::geometry::Solution;
use crate::rate::{KppsSummary, SweepRow};

pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Formatter for TextFormatter {
    fn format_solution(&self, solution: &Solution) -> String {
        let solved = match solution.mode {
            CalculationMode::Width => format!("Width: {:.3}", solution.width),
            CalculationMode::Distance => format!("Distance: {:.3}", solution.distance),
            CalculationMode::Angle => format!("Angle: {:.2}°", solution.angle),
        };
        if self.verbose {
            format!(
                "{} [angle: {:.2}°, distance: {:.3}, width: {:.3}]",
                solved, solution.angle, solution.distance, solution.width
            )
        } else {
            solved
        }
    }

    fn format_rate(&self, output: &RateOutput) -> String {
        let line = format!(
            "{} @ {:.1}°: {:>5} KPPS ({})",
            output.scanner_name, output.angle, output.estimate.kpps, output.estimate.note
        );
        if self.verbose {
            format!(
                "{} [id: {}, source: {}, exceeds limit: {}]",
                line,
                output.scanner_id,
                output.estimate.note.kind(),
                output.exceeds_limit
            )
        } else {
            line
        }
    }

    fn format_sweep_row(&self, _scanner_id: &str, row: &SweepRow) -> String {
        if self.verbose {
            format!(
                "{:>6.1}°  {:>5} KPPS  width/unit {:>7.4}  {} ({})",
                row.angle,
                row.estimate.kpps,
                row.width_per_unit,
                row.estimate.note,
                row.estimate.note.kind()
            )
        } else {
            format!(
                "{:>6.1}°  {:>5} KPPS  {}",
                row.angle, row.estimate.kpps, row.estimate.note
            )
        }
    }

    fn format_summary(&self, scanner_id: &str, summary: &KppsSummary) -> Option<String> {
        Some(format!(
            "{}: {} estimate(s), mean {:.1} KPPS (σ {:.1}), range {}-{} KPPS",
            scanner_id, summary.count, summary.mean, summary.std_dev, summary.min, summary.max
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::solve;
    use crate::rate::{RateNote, ScanRateEstimate};

    #[test]
    fn test_solution_line() {
        let formatter = TextFormatter::new(false);
        let solution = solve(CalculationMode::Width, 90.0, 3.0);
        assert_eq!(formatter.format_solution(&solution), "Width: 6.000");
    }

    #[test]
    fn test_rate_line() {
        let estimate = ScanRateEstimate::new(30.0, RateNote::Exact("ILDA".into()));
        let output = RateOutput {
            scanner_id: "galvo-30k",
            scanner_name: "Galvo 30K",
            angle: 8.0,
            exceeds_limit: false,
            estimate: &estimate,
        };
        assert_eq!(
            TextFormatter::new(false).format_rate(&output),
            "Galvo 30K @ 8.0°:    30 KPPS (ILDA)"
        );
        assert!(
            TextFormatter::new(true)
                .format_rate(&output)
                .ends_with("[id: galvo-30k, source: exact, exceeds limit: false]")
        );
    }
}
