//! Trend scraper client.
//!
//! One plain `GET` per run cycle: no body, default headers, no timeout.
//! The browser's fetch has no cancellation hook here either, so a cycle
//! always runs to settlement.

use super::{decode_response, TrendError, TrendReport};
use std::cell::Cell;
use tracing::debug;

pub struct TrendFetcher {
    endpoint: String,
    client: reqwest::Client,
    /// Total requests made by this fetcher instance.
    requests_made: Cell<u32>,
}

impl TrendFetcher {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
            requests_made: Cell::new(0),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn requests_made(&self) -> u32 {
        self.requests_made.get()
    }

    /// Fetch and decode one trend report.
    pub async fn fetch(&self) -> Result<TrendReport, TrendError> {
        let resp = self.client.get(&self.endpoint).send().await?;
        self.requests_made.set(self.requests_made.get() + 1);

        let status = resp.status();
        let body = resp.text().await?;

        debug!(
            endpoint = %self.endpoint,
            status = %status,
            bytes = body.len(),
            requests = self.requests_made.get(),
            "scraper responded"
        );

        decode_response(status, &body)
    }
}
