pub mod estimate;
pub mod estimator;
pub mod sweep;

pub use estimate::{RateNote, ScanRateEstimate};
pub use estimator::{angle_exceeds_device_limit, estimate_scan_rate};
pub use sweep::{KppsSummary, SweepReport, SweepRow, sweep};
