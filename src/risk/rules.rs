//! Ordered tier rules; first match wins, the fallback tier applies when none fire.

use super::RiskLevel;
use crate::config::FusionConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Composite score strictly above the bound
    ScoreAbove(f64),
    /// Composite score at or above the bound
    ScoreAtLeast(f64),
    /// Raw (un-normalized) forecast strictly above the bound
    CasesAbove(f64),
}

impl Trigger {
    pub fn fires(&self, score: f64, predicted_cases: f64) -> bool {
        match *self {
            Trigger::ScoreAbove(bound) => score > bound,
            Trigger::ScoreAtLeast(bound) => score >= bound,
            Trigger::CasesAbove(bound) => predicted_cases > bound,
        }
    }
}

/// A tier selected when any of its triggers fires.
#[derive(Debug, Clone, PartialEq)]
pub struct TierRule {
    pub level: RiskLevel,
    pub any_of: Vec<Trigger>,
}

impl TierRule {
    pub fn matches(&self, score: f64, predicted_cases: f64) -> bool {
        self.any_of.iter().any(|t| t.fires(score, predicted_cases))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TierRules {
    rules: Vec<TierRule>,
    fallback: RiskLevel,
}

impl TierRules {
    pub fn new(rules: Vec<TierRule>, fallback: RiskLevel) -> Self {
        Self { rules, fallback }
    }

    /// Critical on high score or an extreme raw forecast, then elevated, else low.
    pub fn from_config(config: &FusionConfig) -> Self {
        Self::new(
            vec![
                TierRule {
                    level: RiskLevel::Critical,
                    any_of: vec![
                        Trigger::ScoreAbove(config.critical_score),
                        Trigger::CasesAbove(config.critical_cases),
                    ],
                },
                TierRule {
                    level: RiskLevel::Elevated,
                    any_of: vec![Trigger::ScoreAtLeast(config.elevated_score)],
                },
            ],
            RiskLevel::Low,
        )
    }

    pub fn classify(&self, score: f64, predicted_cases: f64) -> RiskLevel {
        self.rules
            .iter()
            .find(|r| r.matches(score, predicted_cases))
            .map(|r| r.level)
            .unwrap_or(self.fallback)
    }

    pub fn rules(&self) -> &[TierRule] {
        &self.rules
    }
}
