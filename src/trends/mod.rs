//! Trend reports returned by the local scraper.
//!
//! The scraper answers `GET /scrape-trends` with
//! `{"message": "...", "data": {timestamp, trending_topics, ip_address, _id, ...}}`
//! on success and `{"error": "..."}` with a 500 status on failure.
//! [`decode_response`] turns a status + body into a typed [`TrendReport`]
//! or a [`TrendError`]; the four report fields are required.

pub mod fetcher;

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;
use tracing::{info, warn};

/// Message shown for any non-success HTTP status.
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to fetch data from the server";

#[derive(Error, Debug)]
pub enum TrendError {
    #[error("{}", FETCH_FAILURE_MESSAGE)]
    Fetch { status: StatusCode },
    #[error("invalid JSON in response: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("unexpected trend report shape: {0}")]
    Shape(#[source] serde_json::Error),
    #[error("request to trend scraper failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Opaque record identifier (`_id`). The scraper sends the stringified
/// Mongo object id, but any JSON value is carried through untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Value);

impl RecordId {
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// A single scrape result.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendReport {
    pub timestamp: String,
    pub trending_topics: Vec<String>,
    pub ip_address: String,
    #[serde(rename = "_id")]
    pub record_id: RecordId,
    /// The `data` object exactly as received, extra keys included.
    #[serde(skip)]
    data: Value,
}

impl TrendReport {
    /// Build a report from the envelope's `data` object.
    pub fn from_data(data: Value) -> Result<Self, TrendError> {
        let mut report = TrendReport::deserialize(&data).map_err(TrendError::Shape)?;
        report.data = data;
        Ok(report)
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    /// The raw `data` object, pretty-printed with 2-space indentation.
    pub fn data_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.data).unwrap_or_else(|_| self.data.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    message: Option<String>,
    data: Value,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Interpret a scraper response.
pub fn decode_response(status: StatusCode, body: &str) -> Result<TrendReport, TrendError> {
    if !status.is_success() {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(server) => warn!(status = %status, error = %server.error, "scraper reported an error"),
            Err(_) => warn!(status = %status, "scraper returned non-success status"),
        }
        return Err(TrendError::Fetch { status });
    }

    let payload: Value = serde_json::from_str(body).map_err(TrendError::Decode)?;
    info!(payload = %payload, "trend payload received");

    let envelope = Envelope::deserialize(payload).map_err(TrendError::Shape)?;
    if let Some(message) = &envelope.message {
        info!(message = %message, "scraper message");
    }

    TrendReport::from_data(envelope.data)
}
