use indexmap::IndexMap;
use metrics::counter;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::classifier::{classify_rank, institution_name, person_name};
use crate::constants::RAW_FIELD_COUNT;
use crate::error::{FacultyGeoError, Result};
use crate::types::{Rank, RankCounters, RawRecord};

/// What happened to a single raw record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Counted(Rank),
    SkippedEmptyRank,
    SkippedDuplicate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    /// Data rows read, header excluded
    pub rows_read: u64,
    pub rows_counted: u64,
    pub skipped_empty_rank: u64,
    pub skipped_duplicate: u64,
}

/// Per-university rank counts in first-seen order
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    pub institutions: IndexMap<String, RankCounters>,
    pub stats: AggregateStats,
}

/// Accumulates rank counts per university, counting each person once.
#[derive(Debug, Default)]
pub struct Aggregator {
    institutions: IndexMap<String, RankCounters>,
    seen: HashMap<String, HashSet<String>>,
    stats: AggregateStats,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingest(&mut self, record: &RawRecord<'_>) -> Result<RecordOutcome> {
        self.stats.rows_read += 1;

        let professor = person_name(record.professor);
        // Parsed before the title check so a bad payload aborts even on skipped rows.
        let university = institution_name(record.affiliation, record.line)?;

        let Some(rank) = classify_rank(record.position) else {
            self.stats.skipped_empty_rank += 1;
            counter!("faculty_geo_rows_skipped_total", "reason" => "empty_rank").increment(1);
            return Ok(RecordOutcome::SkippedEmptyRank);
        };

        let seen = self.seen.entry(university.clone()).or_default();
        if !seen.insert(professor) {
            debug!(line = record.line, %university, "Skipping duplicate professor");
            self.stats.skipped_duplicate += 1;
            counter!("faculty_geo_rows_skipped_total", "reason" => "duplicate").increment(1);
            return Ok(RecordOutcome::SkippedDuplicate);
        }

        self.institutions.entry(university).or_default().increment(rank);
        self.stats.rows_counted += 1;
        Ok(RecordOutcome::Counted(rank))
    }

    pub fn finish(self) -> Aggregate {
        Aggregate {
            institutions: self.institutions,
            stats: self.stats,
        }
    }
}

/// Read the raw roster CSV. The first record is always treated as a header.
pub fn read_records<R: Read>(reader: R) -> Result<Aggregate> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut aggregator = Aggregator::new();
    let mut row = csv::StringRecord::new();
    let mut index: u64 = 0;
    loop {
        let start_line = csv_reader.position().line();
        if !csv_reader.read_record(&mut row)? {
            break;
        }

        // The csv reader drops blank lines; each one still counts as an empty row.
        let consumed = csv_reader.position().line() - start_line;
        let embedded: u64 = row.iter().map(|field| field.matches('\n').count() as u64).sum();
        let blank_lines = consumed.saturating_sub(embedded + 1);
        if blank_lines > 0 {
            // Only a single leading blank line is absorbed, in the header's place
            if index > 0 || blank_lines > 1 {
                let line = if index == 0 { start_line + 1 } else { start_line };
                return Err(FacultyGeoError::RowShape { line, found: 0 });
            }
            index = 1;
        }

        let line = start_line + blank_lines;
        index += 1;
        if index == 1 {
            continue;
        }

        if row.len() != RAW_FIELD_COUNT {
            return Err(FacultyGeoError::RowShape { line, found: row.len() });
        }

        let record = RawRecord {
            line,
            professor: &row[0],
            position: &row[1],
            affiliation: &row[2],
        };
        aggregator.ingest(&record)?;
    }

    let aggregate = aggregator.finish();
    counter!("faculty_geo_rows_read_total").increment(aggregate.stats.rows_read);
    Ok(aggregate)
}

#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_raw_data(path: &Path) -> Result<Aggregate> {
    let file = File::open(path)?;
    let aggregate = read_records(file)?;
    info!(
        "Aggregated {} universities from {} rows ({} duplicates, {} without title)",
        aggregate.institutions.len(),
        aggregate.stats.rows_read,
        aggregate.stats.skipped_duplicate,
        aggregate.stats.skipped_empty_rank
    );
    Ok(aggregate)
}
