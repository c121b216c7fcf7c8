//! View descriptions for the display surface.
//!
//! Rendering decisions live here as plain data so they can be tested
//! without a DOM; `app` only maps a [`View`] onto markup.

use crate::trends::{TrendError, TrendReport};

pub const LOADING_TEXT: &str = "Please wait...";
pub const ERROR_PREFIX: &str = "An error occurred: ";

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Nothing has run yet.
    Idle,
    Loading,
    Report(ReportView),
    /// Failure message, without the user-facing prefix.
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub timestamp: String,
    pub topics: Vec<String>,
    pub ip_address: String,
    pub record_id: String,
    /// Pretty-printed `data` object (2-space indent).
    pub data_json: String,
}

impl From<&TrendReport> for ReportView {
    fn from(report: &TrendReport) -> Self {
        Self {
            timestamp: report.timestamp.clone(),
            topics: report.trending_topics.clone(),
            ip_address: report.ip_address.clone(),
            record_id: report.record_id.to_string(),
            data_json: report.data_pretty(),
        }
    }
}

impl View {
    /// The settled view for a finished cycle.
    pub fn settled(outcome: &Result<TrendReport, TrendError>) -> Self {
        match outcome {
            Ok(report) => View::Report(ReportView::from(report)),
            Err(e) => View::Error(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, View::Loading)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, View::Report(_) | View::Error(_))
    }

    /// Full text of the error paragraph, if this is an error view.
    pub fn error_text(&self) -> Option<String> {
        match self {
            View::Error(message) => Some(format!("{ERROR_PREFIX}{message}")),
            _ => None,
        }
    }
}
