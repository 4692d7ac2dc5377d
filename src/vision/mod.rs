//! Hazard detections from the external vision model, reduced to a count.

use crate::config::VisionConfig;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sensitivity bounds exposed to operators
pub const MIN_CONFIDENCE_RANGE: (f32, f32) = (0.1, 1.0);

/// One detected breeding hazard (e.g. stagnant water)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    #[serde(default)]
    pub label: String,
    pub confidence: f32,
    /// [x1, y1, x2, y2] in image pixels
    #[serde(default)]
    pub bbox: [f32; 4],
}

pub struct DetectionTally {
    min_confidence: f32,
}

impl DetectionTally {
    pub fn new(config: &VisionConfig) -> Self {
        let (lo, hi) = MIN_CONFIDENCE_RANGE;
        let min_confidence = if config.min_confidence.is_nan() {
            VisionConfig::default().min_confidence
        } else {
            config.min_confidence.clamp(lo, hi)
        };
        Self { min_confidence }
    }

    pub fn min_confidence(&self) -> f32 {
        self.min_confidence
    }

    pub fn count(&self, detections: &[Detection]) -> i64 {
        detections
            .iter()
            .filter(|d| d.confidence >= self.min_confidence)
            .count() as i64
    }

    /// Read a JSON array of detections, as exported by the detector.
    pub fn load(path: &Path) -> Result<Vec<Detection>> {
        let data = std::fs::read_to_string(path)?;
        let detections: Vec<Detection> = serde_json::from_str(&data)?;
        tracing::debug!(path = %path.display(), count = detections.len(), "loaded detections");
        Ok(detections)
    }
}
