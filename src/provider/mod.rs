//! Result providers.
//!
//! `ResultProvider` is the asynchronous boundary the session calls through;
//! `SimulatedProvider` is the demo itself and `MockProvider` serves tests.

pub mod mock;
pub mod simulated;
pub mod traits;

// Re-export key types
pub use mock::{MockConfig, MockProvider};
pub use simulated::{SimulatedProvider, simulated_delay};
pub use traits::ResultProvider;
