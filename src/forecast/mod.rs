//! Case forecaster input encoding. The forecasting model itself is external;
//! this module builds its input row and defines the seam it is called through.

use crate::config::ForecastConfig;
use crate::error::{Result, SentinelError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Karachi,
    Lahore,
}

impl City {
    pub const ALL: [City; 2] = [City::Karachi, City::Lahore];

    /// Label encoding the forecaster was trained with
    pub fn encoded(&self) -> u8 {
        match self {
            City::Karachi => 0,
            City::Lahore => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            City::Karachi => "Karachi",
            City::Lahore => "Lahore",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = SentinelError;

    fn from_str(s: &str) -> Result<Self> {
        City::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SentinelError::UnknownCity(s.to_string()))
    }
}

/// One forecaster input row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastInput {
    pub city_encoded: u8,
    pub week_of_year: u32,
    pub relative_humidity_percent: f64,
    pub avg_temp_k: f64,
    pub relative_humidity_percent_lag4: f64,
}

impl ForecastInput {
    /// Column names in model order
    pub const COLUMNS: [&'static str; 5] = [
        "city_encoded",
        "weekofyear",
        "reanalysis_relative_humidity_percent",
        "reanalysis_avg_temp_k",
        "reanalysis_relative_humidity_percent_lag4",
    ];

    /// Month drives seasonality via a coarse week-of-year; climate covariates are fixed.
    pub fn for_month(city: City, month: u32, config: &ForecastConfig) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(SentinelError::InvalidMonth(month));
        }
        Ok(Self {
            city_encoded: city.encoded(),
            week_of_year: month * config.weeks_per_month,
            relative_humidity_percent: config.relative_humidity_percent,
            avg_temp_k: config.avg_temp_k,
            relative_humidity_percent_lag4: config.relative_humidity_percent_lag4,
        })
    }

    pub fn as_row(&self) -> [f64; 5] {
        [
            self.city_encoded as f64,
            self.week_of_year as f64,
            self.relative_humidity_percent,
            self.avg_temp_k,
            self.relative_humidity_percent_lag4,
        ]
    }
}

/// Seam to the external time-series model. Output may be negative; callers sanitize.
pub trait CaseForecaster: Send + Sync {
    fn predict(&self, input: &ForecastInput) -> f64;
}

/// Forecast already computed upstream
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedForecast(pub f64);

impl CaseForecaster for FixedForecast {
    fn predict(&self, _input: &ForecastInput) -> f64 {
        self.0
    }
}
