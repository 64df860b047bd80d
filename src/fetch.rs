//! Raw dataset acquisition.
//!
//! Two read-only datasets feed the game, fetched once at startup: the
//! restcountries records the registry is built from, and a GeoJSON
//! FeatureCollection of country boundaries for the visualization layer.
//! Both can also be loaded from local files for offline play and tests.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, instrument};

/// restcountries v3.1 endpoint, restricted to the fields the game needs.
pub const COUNTRIES_URL: &str =
    "https://restcountries.com/v3.1/all?fields=name,borders,cca3,latlng";

/// Country boundary polygons keyed by ISO code, for the globe renderer.
pub const BOUNDARIES_URL: &str =
    "https://raw.githubusercontent.com/datasets/geo-countries/main/data/countries.geojson";

/// Errors that can occur while acquiring a dataset.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum FetchError {
    /// Transport-level failure talking to the upstream service.
    #[display("request failed: {_0}")]
    Http(reqwest::Error),

    /// Local dataset file could not be read.
    #[display("could not read dataset file: {_0}")]
    Io(std::io::Error),

    /// Payload was not the expected JSON shape.
    #[display("could not decode dataset: {_0}")]
    Decode(serde_json::Error),
}

/// The name block of a restcountries record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawName {
    /// Common display name ("Germany").
    pub common: String,
}

/// One raw restcountries record, as fetched.
///
/// `borders` and `latlng` are optional in the upstream data; records
/// missing either are dropped during registry construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCountry {
    /// Name block.
    pub name: RawName,
    /// ISO 3166-1 alpha-3 code.
    pub cca3: String,
    /// Codes of land neighbors; absent for some territories.
    #[serde(default)]
    pub borders: Option<Vec<String>>,
    /// `[latitude, longitude]`; absent or malformed for some territories.
    #[serde(default)]
    pub latlng: Option<Vec<f64>>,
}

/// Fetches the country records from restcountries.
///
/// One shot, no retry; a setup failure here is fatal to the caller.
#[instrument]
pub async fn fetch_countries() -> Result<Vec<RawCountry>, FetchError> {
    info!(url = COUNTRIES_URL, "Fetching country records");
    let records: Vec<RawCountry> = reqwest::get(COUNTRIES_URL)
        .await?
        .error_for_status()?
        .json()
        .await?;
    info!(records = records.len(), "Country records fetched");
    Ok(records)
}

/// Fetches the boundary FeatureCollection as raw JSON.
#[instrument]
pub async fn fetch_boundaries() -> Result<serde_json::Value, FetchError> {
    info!(url = BOUNDARIES_URL, "Fetching boundary geometry");
    let value = reqwest::get(BOUNDARIES_URL)
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(value)
}

/// Loads country records from a local JSON file.
#[instrument]
pub fn load_countries(path: &Path) -> Result<Vec<RawCountry>, FetchError> {
    let raw = std::fs::read_to_string(path)?;
    let records = serde_json::from_str(&raw)?;
    Ok(records)
}

/// Loads a boundary FeatureCollection from a local JSON file.
#[instrument]
pub fn load_boundaries(path: &Path) -> Result<serde_json::Value, FetchError> {
    let raw = std::fs::read_to_string(path)?;
    let value = serde_json::from_str(&raw)?;
    Ok(value)
}
