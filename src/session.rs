//! Transient UI session: selected size, view mode and request lifecycle.
//!
//! Every request gets a ticket with a monotonically increasing token. Only
//! the most recently issued ticket may resolve the session; anything older
//! resolves into the void, so a slow superseded call can never overwrite the
//! state of a newer one.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::DemoResult;
use crate::core::schema::{ChartDataset, FetchOutcome, MeasuredResult, ProblemSize};
use crate::provider::ResultProvider;

/// Which rendering of the results is shown.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Charts,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Nothing requested yet
    Idle,
    /// A request for `size` is in flight
    Loading { size: ProblemSize },
    /// Latest request resolved
    Ready {
        result: MeasuredResult,
        chart_data: Arc<ChartDataset>,
    },
    /// Latest request failed; `message` is ready for display
    Failed { message: String },
}

/// Handle for one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub token: u64,
    pub size: ProblemSize,
}

/// What happened to a resolution handed to [`DemoSession::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// Superseded or already resolved; the session was left untouched
    Discarded,
}

#[derive(Debug, Clone)]
pub struct DemoSession {
    selected_size: ProblemSize,
    view: ViewMode,
    state: SessionState,
    issued: u64,
    pending: Option<u64>,
}

impl DemoSession {
    pub fn new(selected_size: ProblemSize, view: ViewMode) -> Self {
        DemoSession {
            selected_size,
            view,
            state: SessionState::Idle,
            issued: 0,
            pending: None,
        }
    }

    pub fn selected_size(&self) -> ProblemSize {
        self.selected_size
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading { .. })
    }

    /// Switch to `size` and start a request for it, dropping any previous
    /// results or error.
    pub fn select_size(&mut self, size: ProblemSize) -> RequestTicket {
        self.selected_size = size;
        self.begin()
    }

    /// Start a request for the selected size.
    ///
    /// The session enters `Loading` immediately; any earlier ticket becomes
    /// stale.
    pub fn begin(&mut self) -> RequestTicket {
        self.issued += 1;
        if let Some(previous) = self.pending.replace(self.issued) {
            debug!(previous, token = self.issued, "superseding in-flight request");
        }
        self.state = SessionState::Loading {
            size: self.selected_size,
        };
        RequestTicket {
            token: self.issued,
            size: self.selected_size,
        }
    }

    /// Apply the outcome of `ticket`'s request.
    ///
    /// Only the latest pending ticket is applied, and only once; loading is
    /// cleared on success and on failure alike.
    pub fn resolve(
        &mut self,
        ticket: RequestTicket,
        outcome: DemoResult<FetchOutcome>,
    ) -> Resolution {
        if self.pending != Some(ticket.token) {
            debug!(token = ticket.token, latest = self.issued, "discarding stale response");
            return Resolution::Discarded;
        }
        self.pending = None;

        self.state = match outcome {
            Ok(FetchOutcome { result, chart_data }) => {
                info!(
                    size = %ticket.size,
                    execution_time_s = result.execution_time_s,
                    "results ready"
                );
                SessionState::Ready {
                    result,
                    chart_data: Arc::new(chart_data),
                }
            }
            Err(e) => {
                let message = e.display_message();
                warn!(size = %ticket.size, error = %message, "request failed");
                SessionState::Failed { message }
            }
        };
        Resolution::Applied
    }

    /// Issue a request for the selected size and wait for it.
    #[instrument(skip_all, fields(size = %self.selected_size))]
    pub async fn run<P>(&mut self, provider: &P) -> Resolution
    where
        P: ResultProvider + ?Sized,
    {
        let ticket = self.begin();
        let outcome = provider.fetch_result(ticket.size).await;
        self.resolve(ticket, outcome)
    }
}

impl Default for DemoSession {
    fn default() -> Self {
        DemoSession::new(ProblemSize::default(), ViewMode::default())
    }
}
