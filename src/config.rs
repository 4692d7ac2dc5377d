//! Dashboard configuration. Every tunable of the fusion rule lives here so it can
//! be recalibrated without code changes; defaults reproduce the field-tested values.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SentinelConfig {
    /// CSV of district coordinates (City,Area_Name,Lat,Lon)
    pub coords_path: PathBuf,
    /// Risk fusion weights, saturation points and tier cut-offs
    pub fusion: FusionConfig,
    /// Fixed climate covariates fed to the case forecaster
    pub forecast: ForecastConfig,
    /// Detection filtering
    pub vision: VisionConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Case count per period above which an outbreak is flagged
    pub baseline_threshold: f64,
    /// Multiplier applied to the baseline when visual evidence is dense
    pub tightening_factor: f64,
    /// Detections strictly above this tighten the threshold
    pub detection_trigger: i64,
    /// Forecast cases mapped to a historical score of 100
    pub cases_saturation: f64,
    /// Detections mapped to a visual score of 100
    pub detections_saturation: f64,
    pub historical_weight: f64,
    pub visual_weight: f64,
    /// Score strictly above this is critical
    pub critical_score: f64,
    /// Raw forecast strictly above this is critical regardless of score
    pub critical_cases: f64,
    /// Score at or above this is elevated
    pub elevated_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    pub weeks_per_month: u32,
    pub relative_humidity_percent: f64,
    pub avg_temp_k: f64,
    pub relative_humidity_percent_lag4: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionConfig {
    /// Minimum detector confidence for a box to count as a hazard (0.1–1.0)
    pub min_confidence: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for SentinelConfig {
    fn default() -> Self {
        Self {
            coords_path: PathBuf::from("data/processed/city_coords.csv"),
            fusion: FusionConfig::default(),
            forecast: ForecastConfig::default(),
            vision: VisionConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            baseline_threshold: 30.0,
            tightening_factor: 0.9,
            detection_trigger: 5,
            cases_saturation: 100.0,
            detections_saturation: 10.0,
            historical_weight: 0.4,
            visual_weight: 0.6,
            critical_score: 70.0,
            critical_cases: 50.0,
            elevated_score: 30.0,
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            weeks_per_month: 4,
            relative_humidity_percent: 75.0,
            avg_temp_k: 298.0,
            relative_humidity_percent_lag4: 75.0,
        }
    }
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self { min_confidence: 0.4 }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl SentinelConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(data) => match serde_json::from_str::<SentinelConfig>(&data) {
                    Ok(c) => return c,
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "invalid config; using defaults")
                    }
                },
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "unreadable config; using defaults")
                }
            }
        }
        Self::default()
    }
}
