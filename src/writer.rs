use metrics::counter;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, error, info, instrument};

use crate::aggregator::Aggregate;
use crate::constants::{LAT_COLUMN, LON_COLUMN, TOTAL_COLUMN, UNIVERSITY_COLUMN};
use crate::error::{FacultyGeoError, Result};
use crate::geocoder::Geocoder;
use crate::types::{OutputRow, Rank};

pub fn header() -> Vec<&'static str> {
    let mut columns = vec![UNIVERSITY_COLUMN];
    columns.extend(Rank::ALL.iter().map(|rank| rank.label()));
    columns.extend([TOTAL_COLUMN, LAT_COLUMN, LON_COLUMN]);
    columns
}

/// Geocode each university in first-seen order and write one row per
/// university. Rows are flushed as they are written, so a failed lookup
/// leaves the rows before it in place.
pub fn write_summary<W: Write>(
    aggregate: &Aggregate,
    geocoder: &dyn Geocoder,
    writer: W,
) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(header())?;
    csv_writer.flush()?;

    let mut written = 0;
    for (university, counters) in &aggregate.institutions {
        let coordinates = geocoder
            .geocode(university)?
            .ok_or_else(|| FacultyGeoError::GeocodeNoMatch {
                institution: university.clone(),
            })?;
        debug!(
            "{} -> ({}, {})",
            university, coordinates.latitude, coordinates.longitude
        );

        let row = OutputRow {
            university: university.clone(),
            counters: *counters,
            coordinates,
        };
        csv_writer.write_record(row.to_record())?;
        csv_writer.flush()?;
        written += 1;
    }

    counter!("faculty_geo_rows_written_total").increment(written as u64);
    Ok(written)
}

/// Create (or truncate) the output file and write the summary into it.
/// The parent directory must already exist.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn write_processed_data(
    path: &Path,
    aggregate: &Aggregate,
    geocoder: &dyn Geocoder,
) -> Result<usize> {
    let file = File::create(path)?;
    match write_summary(aggregate, geocoder, file) {
        Ok(written) => {
            info!("💾 Wrote {} rows to {}", written, path.display());
            Ok(written)
        }
        Err(e) => {
            error!("Summary aborted, {} is incomplete: {}", path.display(), e);
            Err(e)
        }
    }
}
