use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, error, info};

use faculty_geo::logging;
use faculty_geo::{ArcGisGeocoder, Config, Pipeline};

#[derive(Parser)]
#[command(name = "faculty_geo")]
#[command(about = "Summarize a CS faculty roster per university, with coordinates")]
#[command(version = "0.1.0")]
struct Cli {
    /// TOML config file (defaults to ./config.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Raw roster CSV to read
    #[arg(long)]
    input: Option<PathBuf>,
    /// Summary CSV to write; its directory must already exist
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(input) = cli.input {
        config.input_path = input;
    }
    if let Some(output) = cli.output {
        config.output_path = output;
    }

    let geocoder = ArcGisGeocoder::new(&config.geocoder).context("building geocoding client")?;

    match Pipeline::run(&config, &geocoder) {
        Ok(result) => {
            let elapsed = result.finished_at - result.started_at;
            info!("Pipeline finished");
            if let Ok(json) = serde_json::to_string(&result) {
                debug!("Pipeline result: {}", json);
            }
            println!("\n📊 Summary for {}:", result.input_file);
            println!(
                "   Started: {} ({:.1}s)",
                result.started_at.format("%Y-%m-%d %H:%M:%S UTC"),
                elapsed.num_milliseconds() as f64 / 1000.0
            );
            println!("   Rows read: {}", result.stats.rows_read);
            println!("   Counted: {}", result.stats.rows_counted);
            println!("   Skipped (no title): {}", result.stats.skipped_empty_rank);
            println!("   Skipped (duplicate): {}", result.stats.skipped_duplicate);
            println!("   Universities: {}", result.universities);
            println!("   Output file: {}", result.output_file);
            Ok(())
        }
        Err(e) => {
            error!("Pipeline failed: {}", e);
            Err(e).context("converting faculty roster")
        }
    }
}
