//! Provider trait: the single asynchronous boundary between the demo's data
//! and whatever renders it.

use async_trait::async_trait;

use crate::DemoResult;
use crate::core::schema::{FetchOutcome, ProblemSize};

/// Source of demo results.
///
/// Implementations either resolve fully or fail fully; there is no partial
/// result and no retry.
#[async_trait]
pub trait ResultProvider: Send + Sync {
    /// Returns the provider name (e.g., "simulated", "mock").
    fn name(&self) -> &str;

    /// Resolve the result for `size` together with the comparison dataset
    /// covering every supported size.
    async fn fetch_result(&self, size: ProblemSize) -> DemoResult<FetchOutcome>;

    /// Same as [`ResultProvider::fetch_result`] for an unchecked integer.
    ///
    /// Anything outside the supported set fails with `DemoError::InvalidSize`
    /// before any work is done.
    async fn fetch_result_raw(&self, size: i64) -> DemoResult<FetchOutcome> {
        let size = ProblemSize::try_from(size)?;
        self.fetch_result(size).await
    }
}
