pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod output;
pub mod rate;
pub mod scanner;

pub use config::{AngleRange, CalculationMode};
pub use constants::MAX_ANGLE;
pub use error::{Result, ScanError};
pub use geometry::{convert_to_angle, convert_to_distance, convert_to_width, solve};
pub use rate::{RateNote, ScanRateEstimate, angle_exceeds_device_limit, estimate_scan_rate};
pub use scanner::{ScanSpecPoint, ScannerCatalog, ScannerModel};
