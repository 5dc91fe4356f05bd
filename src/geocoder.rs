use metrics::counter;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::config::GeocoderConfig;
use crate::error::{FacultyGeoError, Result};
use crate::types::Coordinates;

/// Resolves a free-text place name to a single best-match location
pub trait Geocoder {
    fn geocode(&self, query: &str) -> Result<Option<Coordinates>>;
}

/// ArcGIS World GeocodeServer client using `findAddressCandidates`
pub struct ArcGisGeocoder {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct CandidatesResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<ServiceError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    location: Location,
}

#[derive(Debug, Deserialize)]
struct Location {
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize)]
struct ServiceError {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: String,
}

impl ArcGisGeocoder {
    pub fn new(config: &GeocoderConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

impl Geocoder for ArcGisGeocoder {
    #[instrument(skip(self))]
    fn geocode(&self, query: &str) -> Result<Option<Coordinates>> {
        counter!("faculty_geo_geocode_requests_total").increment(1);
        let body = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("singleLine", query),
                ("f", "json"),
                ("maxLocations", "1"),
            ])
            .send()?
            .error_for_status()?
            .text()?;
        debug!("Geocode response for {}: {} bytes", query, body.len());
        parse_candidates(&body)
    }
}

/// Pull the best candidate out of a `findAddressCandidates` JSON body.
/// ArcGIS reports `x` as longitude and `y` as latitude.
pub fn parse_candidates(body: &str) -> Result<Option<Coordinates>> {
    let response: CandidatesResponse = serde_json::from_str(body)?;
    if let Some(error) = response.error {
        let message = match error.code {
            Some(code) => format!("{} (code {})", error.message, code),
            None => error.message,
        };
        return Err(FacultyGeoError::GeocodeService { message });
    }

    Ok(response.candidates.first().map(|c| Coordinates {
        latitude: c.location.y,
        longitude: c.location.x,
    }))
}
