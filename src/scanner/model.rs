use serde::{Deserialize, Serialize};

/// One manufacturer calibration point: the rate a scanner sustains at a scan angle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanSpecPoint {
    /// Full scan angle in degrees
    pub angle: f64,
    /// Thousand points per second
    pub kpps: f64,
    /// Provenance label, e.g. "ILDA"
    #[serde(default)]
    pub note: String,
}

impl ScanSpecPoint {
    pub fn new(angle: f64, kpps: f64, note: impl Into<String>) -> Self {
        Self {
            angle,
            kpps,
            note: note.into(),
        }
    }
}

/// A scanner model with its sparse angle/rate specification table
///
/// `specs` may be unordered and may contain duplicate angles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannerModel {
    pub name: String,
    #[serde(default)]
    pub specs: Vec<ScanSpecPoint>,
    /// Hard device angle ceiling in degrees
    #[serde(default, alias = "maxAngle", skip_serializing_if = "Option::is_none")]
    pub max_angle: Option<f64>,
    /// Hard rate ceiling in KPPS
    #[serde(default, alias = "maxKpps", skip_serializing_if = "Option::is_none")]
    pub max_kpps: Option<f64>,
}

impl ScannerModel {
    pub fn new(name: impl Into<String>, specs: Vec<ScanSpecPoint>) -> Self {
        Self {
            name: name.into(),
            specs,
            max_angle: None,
            max_kpps: None,
        }
    }

    pub fn with_max_angle(mut self, max_angle: f64) -> Self {
        self.max_angle = Some(max_angle);
        self
    }

    pub fn with_max_kpps(mut self, max_kpps: f64) -> Self {
        self.max_kpps = Some(max_kpps);
        self
    }

    /// Smallest and largest specified angle, if any specs exist
    pub fn angle_span(&self) -> Option<(f64, f64)> {
        let mut angles = self.specs.iter().map(|p| p.angle);
        let first = angles.next()?;
        Some(angles.fold((first, first), |(lo, hi), a| (lo.min(a), hi.max(a))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_limits() {
        let json = r#"{
            "name": "Test 30K",
            "specs": [{"angle": 8, "kpps": 30, "note": "ILDA"}],
            "maxAngle": 40,
            "maxKpps": 45
        }"#;
        let model: ScannerModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.max_angle, Some(40.0));
        assert_eq!(model.max_kpps, Some(45.0));
        assert_eq!(model.specs[0].note, "ILDA");
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{"name": "Bare", "specs": [{"angle": 8, "kpps": 30}]}"#;
        let model: ScannerModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.max_angle, None);
        assert_eq!(model.max_kpps, None);
        assert_eq!(model.specs[0].note, "");
    }

    #[test]
    fn test_angle_span() {
        let model = ScannerModel::new(
            "Span",
            vec![
                ScanSpecPoint::new(20.0, 12.0, ""),
                ScanSpecPoint::new(4.0, 60.0, ""),
                ScanSpecPoint::new(8.0, 40.0, ""),
            ],
        );
        assert_eq!(model.angle_span(), Some((4.0, 20.0)));
        assert_eq!(ScannerModel::new("Empty", vec![]).angle_span(), None);
    }
}
