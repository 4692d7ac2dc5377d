//! Eco-Sentinel entrypoint: assess a forecast/detection pair, or build the full
//! dashboard report for a city and month.

use anyhow::Context;
use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use eco_sentinel::{
    config::SentinelConfig,
    forecast::{CaseForecaster, City, FixedForecast, ForecastInput},
    geo,
    logging::{LogEvent, StructuredLogger},
    report::{self, ReportInput},
    risk::{LabelStyle, RiskEngine},
    vision::DetectionTally,
};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "eco-sentinel")]
#[command(about = "Hybrid outbreak risk intelligence", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum StyleArg {
    Classic,
    Tiered,
}

impl From<StyleArg> for LabelStyle {
    fn from(s: StyleArg) -> Self {
        match s {
            StyleArg::Classic => LabelStyle::Classic,
            StyleArg::Tiered => LabelStyle::Tiered,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Fuse one forecast and detection count into a verdict
    Assess {
        #[arg(long, allow_negative_numbers = true)]
        cases: f64,
        #[arg(long, allow_negative_numbers = true)]
        detections: i64,
    },
    /// Write the dashboard report for a city and month
    #[command(group(
        ArgGroup::new("vision")
            .args(["detections", "detections_file"])
            .required(true)
            .multiple(false)
    ))]
    Report {
        #[arg(long)]
        city: City,
        #[arg(long)]
        month: u32,
        #[arg(long, allow_negative_numbers = true)]
        cases: f64,
        #[arg(long, allow_negative_numbers = true)]
        detections: Option<i64>,
        /// JSON array of detector boxes
        #[arg(long)]
        detections_file: Option<PathBuf>,
        /// District coordinates CSV (defaults to the configured path)
        #[arg(long)]
        coords: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = StyleArg::Tiered)]
        style: StyleArg,
        #[arg(long, default_value = "report.json")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = std::env::var("ECO_SENTINEL_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.json"));
    let config = SentinelConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);

    let engine = RiskEngine::new(config.fusion.clone());

    match cli.command {
        Commands::Assess { cases, detections } => {
            let assessment = engine.assess(cases, detections);
            StructuredLogger::emit_json(
                &LogEvent::assessment(None, &assessment, assessment.level.label(LabelStyle::Tiered)),
                &mut std::io::stderr(),
            );
            println!("{}", serde_json::to_string_pretty(&assessment)?);
        }
        Commands::Report {
            city,
            month,
            cases,
            detections,
            detections_file,
            coords,
            style,
            out,
        } => {
            let forecast_input = ForecastInput::for_month(city, month, &config.forecast)?;
            let predicted_cases = FixedForecast(cases).predict(&forecast_input);
            info!(%city, month, row = ?forecast_input.as_row(), predicted_cases, "forecast input encoded");

            let detection_count = match (detections, detections_file) {
                (Some(n), _) => n,
                (None, Some(path)) => {
                    let boxes = DetectionTally::load(&path)
                        .with_context(|| format!("failed to read detections from {}", path.display()))?;
                    DetectionTally::new(&config.vision).count(&boxes)
                }
                (None, None) => anyhow::bail!("either --detections or --detections-file is required"),
            };

            let coords_path = coords.unwrap_or_else(|| config.coords_path.clone());
            let districts = match geo::load_districts(&coords_path) {
                Ok(d) => d,
                Err(e) => {
                    warn!(path = %coords_path.display(), error = %e, "district coordinates unavailable; map layer empty");
                    Vec::new()
                }
            };

            let input = ReportInput {
                city,
                month,
                predicted_cases,
                detection_count,
                style: style.into(),
            };
            let report = report::build_report(&engine, &input, &districts);
            StructuredLogger::emit_json(
                &LogEvent::assessment(Some(city.name()), &report.assessment, &report.status_label),
                &mut std::io::stderr(),
            );
            report
                .write_json(&out)
                .with_context(|| format!("failed to write report to {}", out.display()))?;
            info!(
                score = report.assessment.score,
                level = ?report.assessment.level,
                markers = report.map.markers.len(),
                "report written to {}",
                out.display()
            );
        }
    }

    Ok(())
}
