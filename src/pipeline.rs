use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument};

use crate::aggregator::{read_raw_data, AggregateStats};
use crate::config::Config;
use crate::error::Result;
use crate::geocoder::Geocoder;
use crate::writer::write_processed_data;

/// Result of a complete conversion run
#[derive(Debug, Serialize)]
pub struct PipelineResult {
    pub input_file: String,
    pub output_file: String,
    pub stats: AggregateStats,
    pub universities: usize,
    pub rows_written: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

pub struct Pipeline;

impl Pipeline {
    /// Read the roster, aggregate it, then geocode and write the summary.
    /// The first error aborts the run.
    #[instrument(skip_all)]
    pub fn run(config: &Config, geocoder: &dyn Geocoder) -> Result<PipelineResult> {
        let started_at = Utc::now();
        let input_file = config.input_path.display().to_string();
        let output_file = config.output_path.display().to_string();

        info!("📥 Reading raw data from {}", input_file);
        let aggregate = read_raw_data(&config.input_path)?;

        info!("🌍 Geocoding {} universities", aggregate.institutions.len());
        let rows_written = write_processed_data(&config.output_path, &aggregate, geocoder)?;

        Ok(PipelineResult {
            input_file,
            output_file,
            stats: aggregate.stats,
            universities: aggregate.institutions.len(),
            rows_written,
            started_at,
            finished_at: Utc::now(),
        })
    }
}
