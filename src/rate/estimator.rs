//! Scan rate (KPPS) estimation from sparse specification tables
//!
//! Scanner manufacturers publish the point rate a galvo pair sustains at a
//! handful of scan angles. Larger sweeps need longer mirror excursions, so the
//! sustainable rate falls as the angle grows. Estimation proceeds in order:
//!
//! 1. no usable data or angle above the device limit: sentinel result
//! 2. exact specification point: its rate, verbatim
//! 3. below the table: rate scaled up by `smallest / angle`, capped at 1.5x
//! 4. above the table: quadratic falloff `rate / (angle / largest)^2`
//! 5. between two points: inverse-square weighted blend

use super::estimate::{RateNote, ScanRateEstimate};
use crate::constants::{MAX_BELOW_RANGE_RATIO, MIN_ESTIMATED_KPPS};
use crate::geometry::sanitize_angle;
use crate::scanner::{ScanSpecPoint, ScannerModel};

/// Round to the nearest integer, halves toward positive infinity
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// True iff the scanner declares a hard angle limit and `angle` is above it
pub fn angle_exceeds_device_limit(scanner: Option<&ScannerModel>, angle: f64) -> bool {
    scanner
        .and_then(|s| s.max_angle)
        .is_some_and(|max_angle| angle > max_angle)
}

/// Estimate the point rate a scanner sustains at `angle` degrees
///
/// Never fails: absence of data is reported through [`RateNote::Unknown`]
/// and [`RateNote::ExceedsMaxAngle`] with a rate of 0.
pub fn estimate_scan_rate(scanner: Option<&ScannerModel>, angle: f64) -> ScanRateEstimate {
    let Some(scanner) = scanner.filter(|s| !s.specs.is_empty()) else {
        return ScanRateEstimate::unknown();
    };

    // Device limit is checked against the raw angle, before the domain clamp
    if let Some(max_angle) = scanner.max_angle
        && angle > max_angle
    {
        log::debug!(
            "{}: {}° exceeds device limit of {}°",
            scanner.name,
            angle,
            max_angle
        );
        return ScanRateEstimate::exceeds_max_angle(max_angle);
    }

    let angle = sanitize_angle(angle);

    let mut specs: Vec<&ScanSpecPoint> = scanner.specs.iter().collect();
    specs.sort_by(|a, b| a.angle.total_cmp(&b.angle));

    if let Some(point) = specs.iter().find(|p| p.angle == angle) {
        log::debug!("{}: exact spec at {}°", scanner.name, angle);
        return ScanRateEstimate::new(point.kpps, RateNote::Exact(point.note.clone()));
    }

    let smallest = specs[0];
    let largest = specs[specs.len() - 1];

    if angle < smallest.angle && smallest.angle > 0.0 {
        return extrapolate_below(scanner, smallest, angle);
    }

    if angle > largest.angle {
        return extrapolate_above(largest, angle);
    }

    let bracket = specs
        .windows(2)
        .find(|pair| pair[0].angle <= angle && angle <= pair[1].angle);

    match bracket {
        Some(pair) => interpolate(scanner, pair[0], pair[1], angle),
        None => {
            // Only reachable with non-finite spec angles
            log::warn!(
                "{}: no bracketing spec points for {}°",
                scanner.name,
                angle
            );
            ScanRateEstimate::unknown()
        }
    }
}

fn extrapolate_below(
    scanner: &ScannerModel,
    smallest: &ScanSpecPoint,
    angle: f64,
) -> ScanRateEstimate {
    // angle may be 0 here; the infinite ratio is capped like any other
    let ratio = smallest.angle / angle;
    let capped_ratio = ratio.min(MAX_BELOW_RANGE_RATIO);
    let kpps = round_half_up(smallest.kpps * capped_ratio);

    log::debug!(
        "{}: extrapolating below {}° (ratio {:.3}, capped {:.3})",
        scanner.name,
        smallest.angle,
        ratio,
        capped_ratio
    );

    if let Some(max_kpps) = scanner.max_kpps
        && kpps > max_kpps
    {
        return ScanRateEstimate::new(max_kpps, RateNote::MaxKpps { max_kpps });
    }

    ScanRateEstimate::new(
        kpps,
        RateNote::BelowRange {
            smallest_angle: smallest.angle,
        },
    )
}

fn extrapolate_above(largest: &ScanSpecPoint, angle: f64) -> ScanRateEstimate {
    let ratio = angle / largest.angle;
    let kpps = round_half_up(largest.kpps / (ratio * ratio)).max(MIN_ESTIMATED_KPPS);

    ScanRateEstimate::new(
        kpps,
        RateNote::AboveRange {
            largest_angle: largest.angle,
        },
    )
}

fn interpolate(
    scanner: &ScannerModel,
    lower: &ScanSpecPoint,
    upper: &ScanSpecPoint,
    angle: f64,
) -> ScanRateEstimate {
    let ratio = (angle - lower.angle) / (upper.angle - lower.angle);

    // Favour the lower (faster) endpoint, more so when the two angles are close
    let angle_ratio = lower.angle / upper.angle;
    let weight = (1.0 - ratio) * (1.0 + angle_ratio * angle_ratio);

    let (smaller, larger) = if lower.angle <= upper.angle {
        (lower, upper)
    } else {
        (upper, lower)
    };

    let mut interpolated = round_half_up(smaller.kpps * weight + larger.kpps * (1.0 - weight));

    let ceiling = smaller.kpps.max(larger.kpps);
    if interpolated > ceiling || interpolated < 0.0 {
        interpolated = ceiling;
    }

    let final_kpps = interpolated.max(MIN_ESTIMATED_KPPS);

    log::debug!(
        "{}: interpolating {}°..{}° at {}° (weight {:.3}) -> {}",
        scanner.name,
        lower.angle,
        upper.angle,
        angle,
        weight,
        final_kpps
    );

    if let Some(max_kpps) = scanner.max_kpps
        && final_kpps > max_kpps
    {
        return ScanRateEstimate::new(max_kpps, RateNote::MaxKpps { max_kpps });
    }

    ScanRateEstimate::new(
        final_kpps,
        RateNote::Interpolated {
            lower_angle: lower.angle,
            upper_angle: upper.angle,
        },
    )
}
