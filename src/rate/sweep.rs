use rolling_stats::Stats;
use serde::Serialize;

use super::estimate::ScanRateEstimate;
use super::estimator::estimate_scan_rate;
use crate::config::AngleRange;
use crate::geometry::convert_to_width;
use crate::scanner::ScannerModel;

/// One evaluated angle in a sweep
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRow {
    /// Requested scan angle in degrees (unclamped)
    pub angle: f64,
    /// Projection width per unit of distance at this angle
    pub width_per_unit: f64,
    pub estimate: ScanRateEstimate,
}

/// Summary statistics over the real (non-sentinel) estimates of a sweep
#[derive(Debug, Clone, Serialize)]
pub struct KppsSummary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl KppsSummary {
    fn from_stats(stats: &Stats<f64>) -> Option<Self> {
        if stats.count == 0 {
            return None;
        }
        Some(Self {
            count: stats.count,
            mean: stats.mean,
            std_dev: stats.std_dev,
            min: stats.min,
            max: stats.max,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub scanner: String,
    pub rows: Vec<SweepRow>,
    pub summary: Option<KppsSummary>,
}

/// Evaluate the scan rate estimate at every angle of `range`
pub fn sweep(scanner: &ScannerModel, range: &AngleRange) -> SweepReport {
    let mut stats: Stats<f64> = Stats::new();

    let rows: Vec<SweepRow> = range
        .angles()
        .into_iter()
        .map(|angle| {
            let estimate = estimate_scan_rate(Some(scanner), angle);
            if estimate.is_estimate() {
                stats.update(estimate.kpps);
            }
            SweepRow {
                angle,
                width_per_unit: convert_to_width(angle, 1.0),
                estimate,
            }
        })
        .collect();

    log::debug!(
        "Swept {} angle(s) for {}: {} estimate(s)",
        rows.len(),
        scanner.name,
        stats.count
    );

    SweepReport {
        scanner: scanner.name.clone(),
        rows,
        summary: KppsSummary::from_stats(&stats),
    }
}
