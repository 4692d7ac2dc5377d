//! District map layer data: markers and heat points coloured by the assessment.
//! Rendering is left to the presentation layer.

use crate::error::Result;
use crate::forecast::City;
use crate::risk::{LabelStyle, RiskAssessment, StatusColor};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// National view centre used when a city has no districts on file
pub const DEFAULT_CENTER: (f64, f64) = (30.3753, 69.3451);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictRecord {
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Area_Name")]
    pub area_name: String,
    #[serde(rename = "Lat")]
    pub lat: f64,
    #[serde(rename = "Lon")]
    pub lon: f64,
}

pub fn load_districts(path: &Path) -> Result<Vec<DistrictRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut out = Vec::new();
    for row in reader.deserialize::<DistrictRecord>() {
        out.push(row?);
    }
    Ok(out)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictMarker {
    pub area_name: String,
    pub lat: f64,
    pub lon: f64,
    pub color: StatusColor,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLayer {
    pub center: (f64, f64),
    pub markers: Vec<DistrictMarker>,
    /// [lat, lon, intensity in 0–1]
    pub heat: Vec<[f64; 3]>,
}

impl MapLayer {
    pub fn build(
        city: City,
        records: &[DistrictRecord],
        assessment: &RiskAssessment,
        style: LabelStyle,
    ) -> Self {
        let districts: Vec<&DistrictRecord> = records
            .iter()
            .filter(|r| r.city.eq_ignore_ascii_case(city.name()))
            .collect();

        let center = if districts.is_empty() {
            DEFAULT_CENTER
        } else {
            let n = districts.len() as f64;
            (
                districts.iter().map(|d| d.lat).sum::<f64>() / n,
                districts.iter().map(|d| d.lon).sum::<f64>() / n,
            )
        };

        let intensity = assessment.score / 100.0;
        let status = assessment.level.label(style);
        Self {
            center,
            markers: districts
                .iter()
                .map(|d| DistrictMarker {
                    area_name: d.area_name.clone(),
                    lat: d.lat,
                    lon: d.lon,
                    color: assessment.color,
                    status: status.to_string(),
                })
                .collect(),
            heat: districts.iter().map(|d| [d.lat, d.lon, intensity]).collect(),
        }
    }
}
