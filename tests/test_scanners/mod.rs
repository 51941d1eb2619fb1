#![allow(dead_code)]

use laserscan::{ScanSpecPoint, ScannerModel};

/// Two-point table: 4° -> 60K, 8° -> 40K
pub fn two_point_scanner() -> ScannerModel {
    ScannerModel::new(
        "Two point",
        vec![
            ScanSpecPoint::new(4.0, 60.0, "Manufacturer"),
            ScanSpecPoint::new(8.0, 40.0, "ILDA"),
        ],
    )
}

/// Single ILDA point: 8° -> 40K
pub fn single_spec_scanner() -> ScannerModel {
    ScannerModel::new("Single", vec![ScanSpecPoint::new(8.0, 40.0, "ILDA")])
}

/// Unsorted table with a duplicate angle and both hard limits
pub fn messy_scanner() -> ScannerModel {
    ScannerModel::new(
        "Messy",
        vec![
            ScanSpecPoint::new(30.0, 15.0, "Manufacturer"),
            ScanSpecPoint::new(8.0, 30.0, "ILDA"),
            ScanSpecPoint::new(20.0, 20.0, "Manufacturer"),
            ScanSpecPoint::new(8.0, 28.0, "Retest"),
        ],
    )
    .with_max_angle(45.0)
    .with_max_kpps(40.0)
}

/// Every integer angle from -20 to 120, plus a few fractional ones
pub fn angle_grid() -> Vec<f64> {
    let mut angles: Vec<f64> = (-20..=120).map(f64::from).collect();
    angles.extend([0.5, 3.25, 7.999, 8.001, 19.5, 44.9]);
    angles
}
