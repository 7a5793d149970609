//! Simulated solver: static figures plus an artificial, measured delay.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::Instant;
use tracing::{debug, info, instrument};

use crate::core::catalog::{base_record, chart_dataset};
use crate::core::schema::{FetchOutcome, MeasuredResult, ProblemSize};
use crate::{DemoError, DemoResult, round4};

use super::traits::ResultProvider;

/// Delay for a run whose nominal duration is `target_time_s`.
///
/// `unit` is a uniform sample in `[0, 1)`; the result spans 90% to 110% of
/// the target.
pub fn simulated_delay(target_time_s: f64, unit: f64) -> DemoResult<Duration> {
    let target_ms = target_time_s * 1000.0;
    let delay_ms = target_ms * 0.9 + unit * (target_ms * 0.2);
    Duration::try_from_secs_f64(delay_ms / 1000.0)
        .map_err(|e| DemoError::RequestFailure(format!("invalid simulated delay {delay_ms}ms: {e}")))
}

/// The demo's result provider.
///
/// No solver runs here. Each call sleeps for a jittered fraction of the
/// size's target time and reports how long the sleep actually took.
pub struct SimulatedProvider {
    rng: Mutex<StdRng>,
}

impl SimulatedProvider {
    /// Provider with an OS-seeded jitter source.
    pub fn new() -> Self {
        SimulatedProvider {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Provider whose jitter sequence is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        SimulatedProvider {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn next_unit(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.random::<f64>()
    }
}

impl Default for SimulatedProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResultProvider for SimulatedProvider {
    fn name(&self) -> &str {
        "simulated"
    }

    #[instrument(skip_all, fields(size = %size))]
    async fn fetch_result(&self, size: ProblemSize) -> DemoResult<FetchOutcome> {
        let base = base_record(size);
        let delay = simulated_delay(base.target_time_s, self.next_unit())?;
        debug!(delay_ms = delay.as_secs_f64() * 1000.0, "simulating solver run");

        let start = Instant::now();
        tokio::time::sleep(delay).await;
        let execution_time_s = round4(start.elapsed().as_secs_f64());
        info!(execution_time_s, target_time_s = base.target_time_s, "simulated run finished");

        Ok(FetchOutcome {
            result: MeasuredResult::from_base(size, base, execution_time_s),
            chart_data: chart_dataset(),
        })
    }
}
