use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{
    ARCGIS_GEOCODE_URL, CONFIG_PATH, GEOCODER_USER_AGENT, GEOCODE_TIMEOUT_SECONDS,
    OUTPUT_CSV_PATH, RAW_DATA_PATH,
};
use crate::error::{FacultyGeoError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub geocoder: GeocoderConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeocoderConfig {
    pub endpoint: String,
    /// Client label sent as the User-Agent on every request
    pub user_agent: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(RAW_DATA_PATH),
            output_path: PathBuf::from(OUTPUT_CSV_PATH),
            geocoder: GeocoderConfig::default(),
        }
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: ARCGIS_GEOCODE_URL.to_string(),
            user_agent: GEOCODER_USER_AGENT.to_string(),
            timeout_seconds: GEOCODE_TIMEOUT_SECONDS,
        }
    }
}

impl Config {
    /// Load configuration. An explicit path must exist; otherwise `config.toml`
    /// is used when present and built-in defaults when it is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(CONFIG_PATH).exists() => Self::from_file(Path::new(CONFIG_PATH))?,
            None => {
                debug!("No {} found, using defaults", CONFIG_PATH);
                Self::default()
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(path).map_err(|e| {
            FacultyGeoError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&config_content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.geocoder.timeout_seconds == 0 {
            return Err(FacultyGeoError::Config(
                "geocoder.timeout_seconds must be greater than zero".to_string(),
            ));
        }
        if self.geocoder.endpoint.trim().is_empty() {
            return Err(FacultyGeoError::Config("geocoder.endpoint is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_fixed_paths() {
        let config = Config::default();
        assert_eq!(config.input_path, PathBuf::from("us_cs_faculty_raw_data.csv"));
        assert_eq!(config.output_path, PathBuf::from("csv_generated/us_cs_faculty.csv"));
        assert_eq!(config.geocoder.timeout_seconds, 10);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            output_path = "out/summary.csv"

            [geocoder]
            user_agent = "my_label"
            "#,
        )
        .unwrap();
        assert_eq!(config.input_path, PathBuf::from(RAW_DATA_PATH));
        assert_eq!(config.output_path, PathBuf::from("out/summary.csv"));
        assert_eq!(config.geocoder.user_agent, "my_label");
        assert_eq!(config.geocoder.endpoint, ARCGIS_GEOCODE_URL);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, FacultyGeoError::Config(_)));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[geocoder]\ntimeout_seconds = 0\n").unwrap();
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, FacultyGeoError::Config(_)));
    }
}
