//! File-backed job-folder storage for bulk generation runs.
//!
//! Every bulk run is a *parent job* ("folder"): an opaque id grouping all
//! rows generated by that run. On disk a folder is a directory of JSONL
//! chunk files:
//!
//! ```text
//! <root>/
//!   <parent_job_id>/
//!     <job_id>.jsonl      one chunk, batch_size record sets
//!     <job_id>.jsonl
//!   notifications.json    completion inbox
//! ```
//!
//! This crate also carries the chunk planning (how a row count splits into
//! batches) and the small/large batch routing decision used by the cleanup
//! pipeline.

pub mod chunk;
pub mod error;
pub mod notify;
pub mod routing;
pub mod store;

// Re-exports for convenience
pub use chunk::{ChunkSpec, JobPlan, DEFAULT_BATCH_SIZE};
pub use error::JobStoreError;
pub use notify::NotificationStore;
pub use routing::{route_for_count, BatchPath, SMALL_BATCH_THRESHOLD};
pub use store::{JobStore, FETCH_ROW_CAP};
