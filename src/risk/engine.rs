//! Fuses a case forecast with a hazard detection count into one assessment.
//! Pure and stateless beyond its configuration; safe to share across threads.

use super::{RiskLevel, StatusColor, TierRules};
use crate::config::FusionConfig;
use serde::{Deserialize, Serialize};

/// Outcome of one fusion call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Composite score in [0, 100], one decimal
    pub score: f64,
    pub level: RiskLevel,
    pub advice: String,
    pub color: StatusColor,
    /// Case count above which an outbreak is flagged
    pub active_threshold: f64,
    pub vans_needed: u32,
    pub workers_needed: u32,
}

/// Per-signal scores before weighting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub historical: f64,
    pub visual: f64,
}

pub struct RiskEngine {
    config: FusionConfig,
    rules: TierRules,
}

/// Linear map onto 0–100, saturating at `saturation`.
fn normalize(value: f64, saturation: f64) -> f64 {
    if !saturation.is_finite() || saturation <= 0.0 {
        return if value > 0.0 { 100.0 } else { 0.0 };
    }
    (value / saturation * 100.0).min(100.0)
}

fn round_one_decimal(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

impl RiskEngine {
    pub fn new(config: FusionConfig) -> Self {
        let rules = TierRules::from_config(&config);
        Self { config, rules }
    }

    /// Negative forecasts are regression artifacts and NaN is no signal; both count as zero.
    pub fn sanitize(predicted_cases: f64, detection_count: i64) -> (f64, i64) {
        (predicted_cases.max(0.0), detection_count.max(0))
    }

    pub fn active_threshold(&self, detection_count: i64) -> f64 {
        if detection_count.max(0) > self.config.detection_trigger {
            self.config.baseline_threshold * self.config.tightening_factor
        } else {
            self.config.baseline_threshold
        }
    }

    pub fn breakdown(&self, predicted_cases: f64, detection_count: i64) -> ScoreBreakdown {
        let (cases, detections) = Self::sanitize(predicted_cases, detection_count);
        ScoreBreakdown {
            historical: normalize(cases, self.config.cases_saturation),
            visual: normalize(detections as f64, self.config.detections_saturation),
        }
    }

    /// Weighted composite, rounded to one decimal and clamped to [0, 100].
    pub fn composite_score(&self, predicted_cases: f64, detection_count: i64) -> f64 {
        let b = self.breakdown(predicted_cases, detection_count);
        let raw = self.config.historical_weight * b.historical + self.config.visual_weight * b.visual;
        let score = round_one_decimal(raw);
        if score.is_finite() {
            score.clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    pub fn assess(&self, predicted_cases: f64, detection_count: i64) -> RiskAssessment {
        let (cases, detections) = Self::sanitize(predicted_cases, detection_count);
        let score = self.composite_score(cases, detections);
        let level = self.rules.classify(score, cases);
        let playbook = level.playbook();
        RiskAssessment {
            score,
            level,
            advice: playbook.advice.to_string(),
            color: playbook.color,
            active_threshold: self.active_threshold(detections),
            vans_needed: playbook.vans,
            workers_needed: playbook.workers,
        }
    }

    pub fn config(&self) -> &FusionConfig {
        &self.config
    }

    pub fn rules(&self) -> &TierRules {
        &self.rules
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new(FusionConfig::default())
    }
}
