//! fakemart library surface.
//!
//! The CLI is a thin shell over four crates:
//!
//! - `mart-generator` - seeded fake-entity generation
//! - `mart-populate` - CSV/JSONL sinks
//! - `mart-jobstore` - job folders, routing and notifications
//! - `mart-types` - entity records and wire payload shapes
//!
//! # CLI Usage
//!
//! ```bash
//! # One record set of every table, printed as JSON
//! fakemart print
//!
//! # Bulk run into a job folder (chunked JSONL)
//! fakemart generate --count 2500 --seed 7 --out-dir ./data
//!
//! # Synchronous CSV export with timing report
//! fakemart export --count 500 --to ./export
//!
//! # Browse job folders
//! fakemart jobs list
//! fakemart jobs show <parent_job_id> products_sku
//! fakemart jobs delete <parent_job_id>
//!
//! # Cleanup routing decision
//! fakemart route --count 25000
//!
//! # Notification inbox
//! fakemart notifications list
//! fakemart notifications ack <id>
//! ```

pub mod args;
pub mod run;

pub use args::{GenArgs, GenSettings, StoreArgs};
