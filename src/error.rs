use thiserror::Error;

#[derive(Error, Debug)]
pub enum FacultyGeoError {
    #[error("line {line}: affiliation is not valid JSON: {source}")]
    MalformedAffiliation {
        line: u64,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: affiliation has no string \"name\" field")]
    MissingInstitutionName { line: u64 },

    #[error("line {line}: expected 5 fields, found {found}")]
    RowShape { line: u64, found: usize },

    #[error("no geocoding match for university: {institution}")]
    GeocodeNoMatch { institution: String },

    #[error("geocoding request failed: {0}")]
    GeocodeTransport(#[from] reqwest::Error),

    #[error("geocoding service error: {message}")]
    GeocodeService { message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FacultyGeoError>;
