//! Mock provider for testing.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::core::catalog::{base_record, chart_dataset};
use crate::core::schema::{FetchOutcome, MeasuredResult, ProblemSize};
use crate::{DemoError, DemoResult};

use super::traits::ResultProvider;

/// Configuration for mock provider responses.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Name to report
    pub name: String,
    /// Outcome to return; `None` answers from the static catalog
    pub outcome: Option<FetchOutcome>,
    /// Delay applied to every call unless overridden per size
    pub delay: Duration,
    /// Per-size delay overrides
    pub delays: HashMap<ProblemSize, Duration>,
    /// Whether fetch should fail
    pub fails: bool,
    /// Message carried by the failure
    pub failure_message: String,
}

impl MockConfig {
    /// Create a new mock config with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        MockConfig {
            name: name.into(),
            outcome: None,
            delay: Duration::ZERO,
            delays: HashMap::new(),
            fails: false,
            failure_message: "mock fetch failed".to_string(),
        }
    }

    /// Set the outcome returned for every size.
    pub fn with_outcome(mut self, outcome: FetchOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    /// Set the default delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the delay for one size.
    pub fn with_delay_for(mut self, size: ProblemSize, delay: Duration) -> Self {
        self.delays.insert(size, delay);
        self
    }

    /// Make fetch fail with the given message.
    pub fn fails_with(mut self, message: impl Into<String>) -> Self {
        self.fails = true;
        self.failure_message = message.into();
        self
    }
}

/// Mock provider for unit testing.
///
/// Returns configurable results after a configurable delay. Without an
/// explicit outcome, the measured time equals the size's target time.
pub struct MockProvider {
    config: MockConfig,
}

impl MockProvider {
    /// Create a new mock provider with the given configuration.
    pub fn new(config: MockConfig) -> Self {
        MockProvider { config }
    }

    /// Create a mock provider with default configuration.
    pub fn default_mock() -> Self {
        Self::new(MockConfig::new("mock"))
    }

    /// Create a mock provider that always fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(MockConfig::new("mock").fails_with(message))
    }

    fn delay_for(&self, size: ProblemSize) -> Duration {
        self.config.delays.get(&size).copied().unwrap_or(self.config.delay)
    }
}

#[async_trait]
impl ResultProvider for MockProvider {
    fn name(&self) -> &str {
        &self.config.name
    }

    async fn fetch_result(&self, size: ProblemSize) -> DemoResult<FetchOutcome> {
        let delay = self.delay_for(size);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if self.config.fails {
            return Err(DemoError::RequestFailure(self.config.failure_message.clone()));
        }
        if let Some(outcome) = &self.config.outcome {
            return Ok(outcome.clone());
        }
        let base = base_record(size);
        Ok(FetchOutcome {
            result: MeasuredResult::from_base(size, base, base.target_time_s),
            chart_data: chart_dataset(),
        })
    }
}
