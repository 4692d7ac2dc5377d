//! Risk fusion: forecast cases + hazard detections → score, tier, threshold, resources.

mod engine;
mod rules;

pub use engine::{RiskAssessment, RiskEngine, ScoreBreakdown};
pub use rules::{TierRule, TierRules, Trigger};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Elevated,
    Critical,
}

/// Status indicator colour. Presentation must not invent other values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Green,
    Orange,
    Red,
}

impl StatusColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusColor::Green => "green",
            StatusColor::Orange => "orange",
            StatusColor::Red => "red",
        }
    }
}

/// Which dashboard wording to use for status banners. Tier semantics are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// Action-oriented labels from the first field deployment
    Classic,
    #[default]
    Tiered,
}

/// Fixed response for a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playbook {
    pub color: StatusColor,
    pub advice: &'static str,
    pub vans: u32,
    pub workers: u32,
}

const CRITICAL_PLAYBOOK: Playbook = Playbook {
    color: StatusColor::Red,
    advice: "Deploy spray vans immediately and alert local hospitals.",
    vans: 3,
    workers: 20,
};

const ELEVATED_PLAYBOOK: Playbook = Playbook {
    color: StatusColor::Orange,
    advice: "Organize community cleanup and remove stagnant water.",
    vans: 1,
    workers: 10,
};

const LOW_PLAYBOOK: Playbook = Playbook {
    color: StatusColor::Green,
    advice: "Continue standard surveillance.",
    vans: 0,
    workers: 2,
};

impl RiskLevel {
    pub fn playbook(&self) -> &'static Playbook {
        match self {
            RiskLevel::Critical => &CRITICAL_PLAYBOOK,
            RiskLevel::Elevated => &ELEVATED_PLAYBOOK,
            RiskLevel::Low => &LOW_PLAYBOOK,
        }
    }

    pub fn color(&self) -> StatusColor {
        self.playbook().color
    }

    pub fn label(&self, style: LabelStyle) -> &'static str {
        match (style, self) {
            (LabelStyle::Classic, RiskLevel::Critical) => "HIGH RISK (Emergency Spraying)",
            (LabelStyle::Classic, RiskLevel::Elevated) => "MEDIUM RISK (Cleanup Drive)",
            (LabelStyle::Classic, RiskLevel::Low) => "LOW RISK (Routine Monitoring)",
            (LabelStyle::Tiered, RiskLevel::Critical) => "CRITICAL",
            (LabelStyle::Tiered, RiskLevel::Elevated) => "ELEVATED",
            (LabelStyle::Tiered, RiskLevel::Low) => "LOW",
        }
    }
}
