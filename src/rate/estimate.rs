use std::fmt;

use serde::{Serialize, Serializer};

/// Where a scan rate estimate came from
///
/// Renders (via `Display`) to the human-readable provenance note.
#[derive(Debug, Clone, PartialEq)]
pub enum RateNote {
    /// No scanner, or a scanner without specification points
    Unknown,
    /// Target angle is above the scanner's hard angle limit
    ExceedsMaxAngle { max_angle: f64 },
    /// Specification point at exactly the target angle; carries its note verbatim
    Exact(String),
    /// Result clamped to the scanner's hard rate limit
    MaxKpps { max_kpps: f64 },
    /// Extrapolated below the smallest specified angle
    BelowRange { smallest_angle: f64 },
    /// Extrapolated above the largest specified angle
    AboveRange { largest_angle: f64 },
    /// Interpolated between two bracketing specification points
    Interpolated { lower_angle: f64, upper_angle: f64 },
}

impl RateNote {
    /// Short machine-readable label for the provenance
    pub fn kind(&self) -> &'static str {
        match self {
            RateNote::Unknown => "unknown",
            RateNote::ExceedsMaxAngle { .. } => "exceeds_max_angle",
            RateNote::Exact(_) => "exact",
            RateNote::MaxKpps { .. } => "capped",
            RateNote::BelowRange { .. } | RateNote::AboveRange { .. } => "extrapolated",
            RateNote::Interpolated { .. } => "interpolated",
        }
    }
}

impl fmt::Display for RateNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateNote::Unknown => f.write_str("Unknown"),
            RateNote::ExceedsMaxAngle { max_angle } => {
                write!(f, "Exceeds max angle ({}°)", max_angle)
            }
            RateNote::Exact(note) => f.write_str(note),
            RateNote::MaxKpps { max_kpps } => write!(f, "Max KPPS ({}K)", max_kpps),
            RateNote::BelowRange { smallest_angle } => {
                write!(f, "Estimated (< {}°)", smallest_angle)
            }
            RateNote::AboveRange { largest_angle } => {
                write!(f, "Estimated (> {}°)", largest_angle)
            }
            RateNote::Interpolated {
                lower_angle,
                upper_angle,
            } => write!(f, "Interpolated ({}° - {}°)", lower_angle, upper_angle),
        }
    }
}

impl Serialize for RateNote {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Estimated sustainable point rate at a scan angle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanRateEstimate {
    /// Thousand points per second; 0 for the sentinel notes
    pub kpps: f64,
    pub note: RateNote,
}

impl ScanRateEstimate {
    pub fn new(kpps: f64, note: RateNote) -> Self {
        Self { kpps, note }
    }

    pub fn unknown() -> Self {
        Self::new(0.0, RateNote::Unknown)
    }

    pub fn exceeds_max_angle(max_angle: f64) -> Self {
        Self::new(0.0, RateNote::ExceedsMaxAngle { max_angle })
    }

    /// False for the "Unknown" and "Exceeds max angle" sentinels
    pub fn is_estimate(&self) -> bool {
        !matches!(
            self.note,
            RateNote::Unknown | RateNote::ExceedsMaxAngle { .. }
        )
    }
}

impl fmt::Display for ScanRateEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K ({})", self.kpps, self.note)
    }
}
