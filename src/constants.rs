/// Fixed locations and labels shared across the pipeline

// Relative paths used when no config file or CLI override is given
pub const RAW_DATA_PATH: &str = "us_cs_faculty_raw_data.csv";
pub const OUTPUT_CSV_PATH: &str = "csv_generated/us_cs_faculty.csv";
pub const CONFIG_PATH: &str = "config.toml";

/// Number of positional columns in every raw data row
pub const RAW_FIELD_COUNT: usize = 5;

// Geocoding defaults
pub const ARCGIS_GEOCODE_URL: &str =
    "https://geocode.arcgis.com/arcgis/rest/services/World/GeocodeServer/findAddressCandidates";
pub const GEOCODER_USER_AGENT: &str = "faculty_geo";
pub const GEOCODE_TIMEOUT_SECONDS: u64 = 10;

// Output column headers around the seven rank columns
pub const UNIVERSITY_COLUMN: &str = "University";
pub const TOTAL_COLUMN: &str = "Total";
pub const LAT_COLUMN: &str = "Lat";
pub const LON_COLUMN: &str = "Lon";

// Directory and file name for the rolling JSON log
pub const LOG_DIR: &str = "logs";
pub const LOG_FILE: &str = "faculty_geo.log";
