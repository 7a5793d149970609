pub mod config;
pub mod core;
pub mod provider;
pub mod report;
pub mod run_cmd;
pub mod session;
pub mod sizes_cmd;

use thiserror::Error;

pub use crate::core::schema::{
    BaseRecord, ChartDataset, CompetitorSeries, FetchOutcome, MeasuredResult, ProblemSize,
};
pub use crate::provider::{MockProvider, ResultProvider, SimulatedProvider};
pub use crate::session::{DemoSession, RequestTicket, Resolution, SessionState, ViewMode};

/// Shown when a failure carries no message of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("graph size {0} is not supported in this demo (expected one of 5, 20, 50)")]
    InvalidSize(i64),
    #[error("{0}")]
    RequestFailure(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl DemoError {
    /// Text to show in place of results when a request fails.
    pub fn display_message(&self) -> String {
        let msg = self.to_string();
        if msg.trim().is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            msg
        }
    }
}

pub type DemoResult<T> = Result<T, DemoError>;

/// Round to four decimal places, the precision used for measured seconds.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// RFC 3339 timestamp for report headers.
pub fn now_rfc3339() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_default()
}
