//! Core types and static data for maxcut-demo.
//!
//! `schema` holds the result/chart types, `catalog` the fixed benchmark tables.

pub mod catalog;
pub mod env;
pub mod schema;

// Re-export key types for convenience
pub use catalog::{base_record, chart_dataset};
pub use env::EnvironmentInfo;
pub use schema::{
    BaseRecord, ChartDataset, CompetitorSeries, FetchOutcome, MeasuredResult, ProblemSize,
    SeriesValues,
};
