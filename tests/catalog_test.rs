use std::fs;
use std::path::PathBuf;

use laserscan::{ScanError, ScannerCatalog, estimate_scan_rate};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("laserscan_{}_{}", std::process::id(), name))
}

#[test]
fn test_load_toml_file() {
    let path = temp_path("catalog.toml");
    fs::write(
        &path,
        r#"
        [scanners.bench]
        name = "Bench Galvo"
        max_angle = 40
        specs = [
            { angle = 20, kpps = 20, note = "Manufacturer" },
            { angle = 8, kpps = 30, note = "ILDA" },
        ]
        "#,
    )
    .unwrap();

    let catalog = ScannerCatalog::load(&path);
    let _ = fs::remove_file(&path);
    let catalog = catalog.unwrap();

    let model = catalog.require("bench").unwrap();
    assert_eq!(model.name, "Bench Galvo");
    assert_eq!(estimate_scan_rate(Some(model), 8.0).note.to_string(), "ILDA");
}

#[test]
fn test_load_json_file() {
    let path = temp_path("catalog.JSON");
    fs::write(
        &path,
        r#"{"scanners": {"bench": {"name": "Bench", "maxKpps": 25, "specs": [{"angle": 8, "kpps": 30}]}}}"#,
    )
    .unwrap();

    let catalog = ScannerCatalog::load(&path);
    let _ = fs::remove_file(&path);
    let catalog = catalog.unwrap();

    // Below range: 8/4 = 2, capped to 1.5 -> 45K, limited to 25K
    let estimate = estimate_scan_rate(catalog.get("bench"), 4.0);
    assert_eq!(estimate.kpps, 25.0);
    assert_eq!(estimate.note.to_string(), "Max KPPS (25K)");
}

#[test]
fn test_unknown_identifier_estimates_unknown() {
    let catalog = ScannerCatalog::bundled().unwrap();
    assert_eq!(
        estimate_scan_rate(catalog.get("no-such-scanner"), 10.0)
            .note
            .to_string(),
        "Unknown"
    );
    assert!(matches!(
        catalog.require("no-such-scanner"),
        Err(ScanError::UnknownScanner(_))
    ));
}

#[test]
fn test_malformed_json_file() {
    let path = temp_path("broken.json");
    fs::write(&path, "{\"scanners\": ").unwrap();
    let result = ScannerCatalog::load(&path);
    let _ = fs::remove_file(&path);
    assert!(matches!(result, Err(ScanError::Json(_))));
}
