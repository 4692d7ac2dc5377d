//! Dashboard report: everything the presentation layer renders for one city/month.

use crate::error::Result;
use crate::forecast::City;
use crate::geo::{DistrictRecord, MapLayer};
use crate::risk::{LabelStyle, RiskAssessment, RiskEngine, ScoreBreakdown};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub id: String,
    pub generated_at: DateTime<Utc>,
    pub city: City,
    pub month: u32,
    /// Forecast as displayed ("N Cases"): raw value truncated toward zero
    pub predicted_cases: i64,
    pub detection_count: i64,
    pub breakdown: ScoreBreakdown,
    pub assessment: RiskAssessment,
    pub status_label: String,
    pub map: MapLayer,
}

pub struct ReportInput {
    pub city: City,
    pub month: u32,
    pub predicted_cases: f64,
    pub detection_count: i64,
    pub style: LabelStyle,
}

/// Assess the inputs and lay out the city's districts in one pass.
pub fn build_report(
    engine: &RiskEngine,
    input: &ReportInput,
    districts: &[DistrictRecord],
) -> DashboardReport {
    let breakdown = engine.breakdown(input.predicted_cases, input.detection_count);
    let assessment = engine.assess(input.predicted_cases, input.detection_count);
    let map = MapLayer::build(input.city, districts, &assessment, input.style);
    DashboardReport::new(input, breakdown, assessment, map)
}

impl DashboardReport {
    pub fn new(
        input: &ReportInput,
        breakdown: ScoreBreakdown,
        assessment: RiskAssessment,
        map: MapLayer,
    ) -> Self {
        let predicted_cases = if input.predicted_cases.is_finite() {
            input.predicted_cases.trunc() as i64
        } else {
            0
        };
        Self {
            id: Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            city: input.city,
            month: input.month,
            predicted_cases,
            detection_count: input.detection_count,
            breakdown,
            status_label: assessment.level.label(input.style).to_string(),
            assessment,
            map,
        }
    }

    /// Integer gauge value shown next to the progress bar
    pub fn gauge(&self) -> u8 {
        self.assessment.score as u8
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }

    pub fn read_json(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}
