use serde::Serialize;

use super::convert::{convert_to_angle, convert_to_distance, convert_to_width};
use super::sanitize::{sanitize_angle, sanitize_length};
use crate::config::CalculationMode;

/// A fully populated scan geometry
///
/// Two of the three quantities are the sanitized inputs, the third is the
/// value solved for according to `mode`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Solution {
    pub mode: CalculationMode,
    /// Full scan angle in degrees
    pub angle: f64,
    pub distance: f64,
    pub width: f64,
}

impl Solution {
    /// The value that was solved for
    pub fn solved(&self) -> f64 {
        match self.mode {
            CalculationMode::Width => self.width,
            CalculationMode::Distance => self.distance,
            CalculationMode::Angle => self.angle,
        }
    }
}

/// Solve for the quantity named by `mode` from the two known ones
///
/// Inputs are taken in [`CalculationMode::input_names`] order:
/// - `Width`: `(angle, distance)`
/// - `Distance`: `(angle, width)`
/// - `Angle`: `(distance, width)`
pub fn solve(mode: CalculationMode, a: f64, b: f64) -> Solution {
    let solution = match mode {
        CalculationMode::Width => Solution {
            mode,
            angle: sanitize_angle(a),
            distance: sanitize_length(b),
            width: convert_to_width(a, b),
        },
        CalculationMode::Distance => Solution {
            mode,
            angle: sanitize_angle(a),
            distance: convert_to_distance(a, b),
            width: sanitize_length(b),
        },
        CalculationMode::Angle => Solution {
            mode,
            angle: convert_to_angle(a, b),
            distance: sanitize_length(a),
            width: sanitize_length(b),
        },
    };

    log::debug!(
        "Solved {} = {} (angle={}, distance={}, width={})",
        mode,
        solution.solved(),
        solution.angle,
        solution.distance,
        solution.width
    );

    solution
}
