pub mod aggregator;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod error;
pub mod geocoder;
pub mod logging;
pub mod pipeline;
pub mod types;
pub mod writer;

pub use config::Config;
pub use error::{FacultyGeoError, Result};
pub use geocoder::{ArcGisGeocoder, Geocoder};
pub use pipeline::{Pipeline, PipelineResult};
