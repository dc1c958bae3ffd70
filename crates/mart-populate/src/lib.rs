//! File sinks for generated record sets.
//!
//! Two formats are supported:
//!
//! - **JSONL** chunk files: one record set per line, keyed by table name.
//!   This is the job-folder storage format.
//! - **CSV** exports: one file per table with a header row, for loading the
//!   dataset into spreadsheets or warehouses.
//!
//! Both sinks report [`PopulateMetrics`] so callers can surface the
//! generation/write timing split.

pub mod csv;
pub mod error;
pub mod jsonl;
pub mod metrics;

// Re-exports for convenience
pub use self::csv::CsvExporter;
pub use error::PopulateError;
pub use metrics::PopulateMetrics;
