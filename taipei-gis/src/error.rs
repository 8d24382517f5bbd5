//! Error types used by the crate.

use std::time::Duration;

use taipei_gis_types::error::GisTypesError;
use thiserror::Error;

/// Taipei GIS error type.
///
/// None of these errors is fatal: the page workflows convert them into status messages.
#[derive(Debug, Error)]
pub enum GisError {
    /// Document URL was empty.
    #[error("document url is empty")]
    EmptyUrl,
    /// The server did not answer within the configured timeout.
    #[error("request to {url} timed out after {timeout:?}")]
    Timeout {
        /// Requested url.
        url: String,
        /// Timeout the request was made with.
        timeout: Duration,
    },
    /// Transport level error (connection refused, DNS failure, TLS, etc.).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The server answered with a non-success status code.
    #[error("server responded with status {status} for {url}")]
    Status {
        /// Requested url.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// Response body is not valid JSON.
    #[error("failed to decode document: {0}")]
    Decoding(#[from] serde_json::Error),
    /// Response body is JSON, but not a document object.
    #[error("invalid document: {0}")]
    InvalidDocument(String),
    /// Document cannot be read as GeoJSON.
    #[error("invalid GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),
    /// Geometry conversion error.
    #[error(transparent)]
    Geometry(#[from] GisTypesError),
    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),
}
