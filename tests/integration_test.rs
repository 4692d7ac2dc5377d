//! Integration test: config load, forecast encoding, detection tally, map layer, report.

use eco_sentinel::{
    config::{ForecastConfig, SentinelConfig, VisionConfig},
    forecast::{CaseForecaster, City, FixedForecast, ForecastInput},
    geo::{self, MapLayer, DEFAULT_CENTER},
    logging::{LogEvent, StructuredLogger},
    report::{build_report, DashboardReport, ReportInput},
    risk::{LabelStyle, RiskEngine, RiskLevel, StatusColor},
    vision::{Detection, DetectionTally},
    SentinelError,
};
use std::io::Write;
use std::path::Path;

const COORDS_CSV: &str = "City,Area_Name,Lat,Lon
Karachi,Clifton,24.8138,67.0300
Karachi,Korangi,24.8300,67.1200
Lahore,Gulberg,31.5204,74.3487
";

fn write_temp(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(body.as_bytes()).unwrap();
    path
}

fn detection(confidence: f32) -> Detection {
    Detection {
        label: "stagnant_water".into(),
        confidence,
        bbox: [0.0, 0.0, 10.0, 10.0],
    }
}

#[test]
fn config_load_default() {
    let c = SentinelConfig::load(Path::new("nonexistent.json"));
    assert_eq!(c.fusion.baseline_threshold, 30.0);
    assert_eq!(c.fusion.tightening_factor, 0.9);
    assert_eq!(c.fusion.detection_trigger, 5);
    assert_eq!(c.fusion.historical_weight, 0.4);
    assert_eq!(c.fusion.visual_weight, 0.6);
    assert_eq!(c.vision.min_confidence, 0.4);
    assert_eq!(c.log.level, "info");
}

#[test]
fn config_partial_json_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp(&dir, "config.json", r#"{"fusion": {"visual_weight": 0.7}, "log": {"json": true}}"#);
    let c = SentinelConfig::load(&path);
    assert_eq!(c.fusion.visual_weight, 0.7);
    assert_eq!(c.fusion.historical_weight, 0.4);
    assert_eq!(c.fusion.critical_cases, 50.0);
    assert!(c.log.json);
    assert_eq!(c.log.level, "info");
}

#[test]
fn config_invalid_json_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp(&dir, "config.json", "{ not json");
    let c = SentinelConfig::load(&path);
    assert_eq!(c.fusion.elevated_score, 30.0);
}

#[test]
fn city_parsing_and_encoding() {
    assert_eq!("karachi".parse::<City>().unwrap(), City::Karachi);
    assert_eq!(" LAHORE ".parse::<City>().unwrap(), City::Lahore);
    assert_eq!(City::Karachi.encoded(), 0);
    assert_eq!(City::Lahore.encoded(), 1);
    assert!(matches!("San Juan".parse::<City>(), Err(SentinelError::UnknownCity(_))));
}

#[test]
fn forecast_input_for_month() {
    let input = ForecastInput::for_month(City::Lahore, 7, &ForecastConfig::default()).unwrap();
    assert_eq!(input.as_row(), [1.0, 28.0, 75.0, 298.0, 75.0]);
    assert_eq!(ForecastInput::COLUMNS[1], "weekofyear");
    assert_eq!(FixedForecast(-4.5).predict(&input), -4.5);

    assert!(matches!(
        ForecastInput::for_month(City::Karachi, 0, &ForecastConfig::default()),
        Err(SentinelError::InvalidMonth(0))
    ));
    assert!(ForecastInput::for_month(City::Karachi, 13, &ForecastConfig::default()).is_err());
}

#[test]
fn detection_tally_filters_by_confidence() {
    let tally = DetectionTally::new(&VisionConfig::default());
    let boxes = vec![detection(0.9), detection(0.4), detection(0.39), detection(0.1)];
    assert_eq!(tally.count(&boxes), 2);
    assert_eq!(tally.count(&[]), 0);
}

#[test]
fn detection_tally_clamps_sensitivity() {
    let loose = DetectionTally::new(&VisionConfig { min_confidence: 0.0 });
    assert_eq!(loose.min_confidence(), 0.1);
    assert_eq!(loose.count(&[detection(0.05), detection(0.1)]), 1);

    let strict = DetectionTally::new(&VisionConfig { min_confidence: 3.0 });
    assert_eq!(strict.min_confidence(), 1.0);
}

#[test]
fn detections_load_from_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp(
        &dir,
        "detections.json",
        r#"[{"label": "tyre", "confidence": 0.8, "bbox": [1, 2, 3, 4]}, {"confidence": 0.2}]"#,
    );
    let boxes = DetectionTally::load(&path).unwrap();
    assert_eq!(boxes.len(), 2);
    assert_eq!(boxes[0].label, "tyre");
    assert_eq!(boxes[1].bbox, [0.0; 4]);
    assert!(DetectionTally::load(Path::new("missing.json")).is_err());
}

#[test]
fn districts_load_from_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp(&dir, "coords.csv", COORDS_CSV);
    let districts = geo::load_districts(&path).unwrap();
    assert_eq!(districts.len(), 3);
    assert_eq!(districts[2].area_name, "Gulberg");
    assert!(matches!(
        geo::load_districts(Path::new("missing.csv")),
        Err(SentinelError::Csv(_))
    ));
}

#[test]
fn map_layer_colours_city_districts() {
    let dir = tempfile::tempdir().unwrap();
    let districts = geo::load_districts(&write_temp(&dir, "coords.csv", COORDS_CSV)).unwrap();
    let assessment = RiskEngine::default().assess(20.0, 6);

    let layer = MapLayer::build(City::Karachi, &districts, &assessment, LabelStyle::Classic);
    assert_eq!(layer.markers.len(), 2);
    assert!(layer.markers.iter().all(|m| m.color == StatusColor::Orange));
    assert_eq!(layer.markers[0].status, "MEDIUM RISK (Cleanup Drive)");
    assert!((layer.center.0 - 24.8219).abs() < 1e-9);
    assert!((layer.center.1 - 67.075).abs() < 1e-9);
    assert_eq!(layer.heat.len(), 2);
    assert!((layer.heat[0][2] - 0.44).abs() < 1e-9);

    let empty = MapLayer::build(City::Lahore, &[], &assessment, LabelStyle::Tiered);
    assert_eq!(empty.center, DEFAULT_CENTER);
    assert!(empty.markers.is_empty());
}

#[test]
fn report_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let districts = geo::load_districts(&write_temp(&dir, "coords.csv", COORDS_CSV)).unwrap();
    let input = ReportInput {
        city: City::Lahore,
        month: 8,
        predicted_cases: 55.9,
        detection_count: 0,
        style: LabelStyle::Tiered,
    };
    let report = build_report(&RiskEngine::default(), &input, &districts);
    assert_eq!(report.predicted_cases, 55);
    assert_eq!(report.assessment.level, RiskLevel::Critical);
    assert_eq!(report.status_label, "CRITICAL");
    assert_eq!(report.map.markers.len(), 1);
    assert_eq!(report.gauge(), 22);

    let path = dir.path().join("report.json");
    report.write_json(&path).unwrap();
    let back = DashboardReport::read_json(&path).unwrap();
    assert_eq!(back, report);

    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["assessment"]["color"], "red");
    assert_eq!(raw["assessment"]["level"], "critical");
}

#[test]
fn labels_differ_by_style_only() {
    for level in [RiskLevel::Low, RiskLevel::Elevated, RiskLevel::Critical] {
        assert_ne!(level.label(LabelStyle::Classic), level.label(LabelStyle::Tiered));
    }
    assert_eq!(RiskLevel::Critical.label(LabelStyle::Classic), "HIGH RISK (Emergency Spraying)");
    assert_eq!(RiskLevel::Low.label(LabelStyle::Tiered), "LOW");
    assert_eq!(LabelStyle::default(), LabelStyle::Tiered);
}

#[test]
fn audit_line_is_single_json_object() {
    let assessment = RiskEngine::default().assess(20.0, 6);
    let mut buf = Vec::new();
    StructuredLogger::emit_json(&LogEvent::assessment(Some("Karachi"), &assessment, "ELEVATED"), &mut buf);
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.lines().count(), 1);
    let v: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
    assert_eq!(v["city"], "Karachi");
    assert_eq!(v["risk_score"], 44.0);
    assert!(v.get("error").is_none());
}
