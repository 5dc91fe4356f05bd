use std::fmt;

/// Normalized academic rank, in output column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Director,
    DistinguishedProfessor,
    Professor,
    AssociateProfessor,
    AssistantProfessor,
    Lecturer,
    Other,
}

impl Rank {
    pub const ALL: [Rank; 7] = [
        Rank::Director,
        Rank::DistinguishedProfessor,
        Rank::Professor,
        Rank::AssociateProfessor,
        Rank::AssistantProfessor,
        Rank::Lecturer,
        Rank::Other,
    ];

    /// Column header used in the summary CSV
    pub fn label(self) -> &'static str {
        match self {
            Rank::Director => "Director",
            Rank::DistinguishedProfessor => "Distinguished Professor",
            Rank::Professor => "Professor",
            Rank::AssociateProfessor => "Associate Professor",
            Rank::AssistantProfessor => "Assistant Professor",
            Rank::Lecturer => "Lecturer",
            Rank::Other => "Other",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-university tally with one counter for each of the seven ranks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankCounters {
    counts: [u64; 7],
}

impl RankCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, rank: Rank) {
        self.counts[rank.index()] += 1;
    }

    pub fn get(&self, rank: Rank) -> u64 {
        self.counts[rank.index()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Counts paired with their rank, in column order
    pub fn iter(&self) -> impl Iterator<Item = (Rank, u64)> + '_ {
        Rank::ALL.iter().map(move |rank| (*rank, self.get(*rank)))
    }
}

/// One data row of the raw roster, borrowed from the CSV reader
#[derive(Debug, Clone)]
pub struct RawRecord<'a> {
    /// 1-based line in the input file
    pub line: u64,
    pub professor: &'a str,
    pub position: &'a str,
    pub affiliation: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A fully enriched summary row ready to be serialized
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow {
    pub university: String,
    pub counters: RankCounters,
    pub coordinates: Coordinates,
}

impl OutputRow {
    pub fn to_record(&self) -> Vec<String> {
        let mut record = Vec::with_capacity(Rank::ALL.len() + 4);
        record.push(self.university.clone());
        record.extend(self.counters.iter().map(|(_, count)| count.to_string()));
        record.push(self.counters.total().to_string());
        record.push(format_coordinate(self.coordinates.latitude));
        record.push(format_coordinate(self.coordinates.longitude));
        record
    }
}

/// Shortest round-trip form, always with a fractional part (`40.0`, not `40`)
pub fn format_coordinate(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}
