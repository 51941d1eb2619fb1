//! Configuration types for the laserscan calculator.
//!
//! ## Calculation Mode
//!
//! Scan angle, projection distance and projection width are pairwise
//! derivable. The [`CalculationMode`] names the quantity being solved for;
//! the other two are the authoritative inputs:
//!
//! ```ignore
//! CalculationMode::Width     // inputs: angle, distance
//! CalculationMode::Distance  // inputs: angle, width
//! CalculationMode::Angle     // inputs: distance, width
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ScanError;
use crate::output::OutputFormat;

/// Upper bound on the number of angles a stepped range may expand to
const MAX_RANGE_POINTS: usize = 10_000;

/// Tolerance for accumulated floating point error at the end of a stepped range
const RANGE_END_TOLERANCE: f64 = 1e-9;

/// Which of the three geometric quantities to solve for
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMode {
    /// Projection width from scan angle and distance
    Width,
    /// Projection distance from scan angle and width
    Distance,
    /// Scan angle from distance and width
    Angle,
}

impl CalculationMode {
    /// Names of the two inputs, in argument order
    pub fn input_names(&self) -> (&'static str, &'static str) {
        match self {
            CalculationMode::Width => ("angle", "distance"),
            CalculationMode::Distance => ("angle", "width"),
            CalculationMode::Angle => ("distance", "width"),
        }
    }
}

impl fmt::Display for CalculationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CalculationMode::Width => "width",
            CalculationMode::Distance => "distance",
            CalculationMode::Angle => "angle",
        };
        f.write_str(name)
    }
}

/// A set of scan angles to evaluate
///
/// # Parsing formats
/// - `0-90:5` - inclusive range from 0 to 90 in steps of 5
/// - `8,12,20` - explicit comma-separated angles
///
/// # Example
/// ```
/// use laserscan::config::AngleRange;
///
/// let range: AngleRange = "0-20:5".parse().unwrap();
/// assert_eq!(range.angles(), vec![0.0, 5.0, 10.0, 15.0, 20.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AngleRange {
    Stepped { start: f64, end: f64, step: f64 },
    List(Vec<f64>),
}

impl AngleRange {
    /// Expand into the concrete list of angles
    pub fn angles(&self) -> Vec<f64> {
        match self {
            AngleRange::Stepped { start, end, step } => {
                let mut angles = Vec::new();
                let mut i = 0usize;
                loop {
                    // Multiply rather than accumulate so long ranges don't drift
                    let angle = start + step * i as f64;
                    if angle > end + RANGE_END_TOLERANCE || angles.len() >= MAX_RANGE_POINTS {
                        break;
                    }
                    angles.push(angle.min(*end));
                    i += 1;
                }
                angles
            }
            AngleRange::List(angles) => angles.clone(),
        }
    }
}

impl Default for AngleRange {
    fn default() -> Self {
        AngleRange::Stepped {
            start: 0.0,
            end: 90.0,
            step: 5.0,
        }
    }
}

impl fmt::Display for AngleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleRange::Stepped { start, end, step } => write!(f, "{}-{}:{}", start, end, step),
            AngleRange::List(angles) => {
                let parts: Vec<String> = angles.iter().map(|a| a.to_string()).collect();
                f.write_str(&parts.join(","))
            }
        }
    }
}

impl FromStr for AngleRange {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = |msg: &str| ScanError::InvalidRange(format!("{}: {}", msg, s));

        if let Some((bounds, step)) = s.split_once(':') {
            let (start, end) = bounds
                .split_once('-')
                .ok_or_else(|| invalid("expected 'start-end:step'"))?;
            let start: f64 = start.trim().parse().map_err(|_| invalid("invalid start"))?;
            let end: f64 = end.trim().parse().map_err(|_| invalid("invalid end"))?;
            let step: f64 = step.trim().parse().map_err(|_| invalid("invalid step"))?;

            if !start.is_finite() || !end.is_finite() {
                return Err(invalid("bounds must be finite"));
            }
            if !step.is_finite() || step <= 0.0 {
                return Err(invalid("step must be positive"));
            }
            if end < start {
                return Err(invalid("end must not be below start"));
            }
            if (end - start) / step >= MAX_RANGE_POINTS as f64 {
                return Err(invalid("too many points"));
            }
            return Ok(AngleRange::Stepped { start, end, step });
        }

        let angles = s
            .split(',')
            .map(|p| p.trim().parse::<f64>().map_err(|_| invalid("invalid angle")))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(AngleRange::List(angles))
    }
}

/// Defaults for the command-line front end
#[derive(Debug, Clone)]
pub struct CalcConfig {
    /// Output format for results
    pub format: OutputFormat,
    /// Include extra fields in text output
    pub verbose: bool,
    /// Angles evaluated by `sweep` when none are given
    pub sweep_range: AngleRange,
    /// Scanner catalog to load instead of the bundled one
    pub catalog_path: Option<PathBuf>,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            verbose: false,
            sweep_range: AngleRange::default(),
            catalog_path: None,
        }
    }
}
