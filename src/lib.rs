//! Eco-Sentinel — hybrid outbreak risk intelligence.
//!
//! Fuses a time-series case forecast with a count of visually detected
//! breeding hazards into one verdict for a city and month.
//!
//! Modular structure:
//! - [`risk`] — Risk fusion engine: score, tier, dynamic threshold, resources
//! - [`forecast`] — Case forecaster input encoding
//! - [`vision`] — Hazard detection tally
//! - [`geo`] — District map layer data
//! - [`report`] — Dashboard report record
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod error;
pub mod forecast;
pub mod geo;
pub mod logging;
pub mod report;
pub mod risk;
pub mod vision;

pub use config::SentinelConfig;
pub use error::SentinelError;
pub use forecast::{CaseForecaster, City, ForecastInput};
pub use geo::MapLayer;
pub use logging::StructuredLogger;
pub use report::DashboardReport;
pub use risk::{RiskAssessment, RiskEngine, RiskLevel, StatusColor};
pub use vision::{Detection, DetectionTally};
