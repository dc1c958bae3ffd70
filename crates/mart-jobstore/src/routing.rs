//! Batch-size routing for the cleanup pipeline.
//!
//! Small requests take the fast path (frequent, lightweight processing);
//! large ones take the heavy path (infrequent, bulk processing). The
//! decision is made on the total requested count and applied to every chunk
//! of the run.

use crate::chunk::JobPlan;
use mart_types::wire::{ChunkRoute, CleanDataResponse};

/// Requests at or under this count take the small-batch path.
pub const SMALL_BATCH_THRESHOLD: u64 = 10_000;

/// Processing path for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPath {
    Small,
    Large,
}

impl BatchPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            BatchPath::Small => "small_batch",
            BatchPath::Large => "large_batch",
        }
    }

    /// Queue the path's chunk messages land on.
    pub fn queue_name(&self) -> &'static str {
        match self {
            BatchPath::Small => "small-batch-queue",
            BatchPath::Large => "large-batch-queue",
        }
    }
}

/// Decide the path for a total record count.
pub fn route_for_count(count: u64) -> BatchPath {
    if count <= SMALL_BATCH_THRESHOLD {
        BatchPath::Small
    } else {
        BatchPath::Large
    }
}

/// Route every chunk of a plan, producing the cleanup response payload.
pub fn clean_response(plan: &JobPlan) -> CleanDataResponse {
    let path = route_for_count(plan.total_count);

    let routes = plan
        .chunks
        .iter()
        .map(|chunk| ChunkRoute {
            job_id: chunk.job_id.clone(),
            chunk_index: chunk.index,
            count: chunk.count,
            path: path.as_str().to_string(),
            queue: path.queue_name().to_string(),
        })
        .collect();

    CleanDataResponse {
        success: true,
        parent_job_id: plan.parent_job_id.clone(),
        total_chunks: plan.total_chunks(),
        routes,
    }
}
