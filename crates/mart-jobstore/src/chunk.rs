//! Chunk planning for bulk runs.

use mart_types::wire::JobReceipt;
use uuid::Uuid;

/// Record sets per chunk file unless overridden.
pub const DEFAULT_BATCH_SIZE: u64 = 1000;

/// One chunk of a bulk run.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkSpec {
    /// Chunk job id (also the chunk's file stem).
    pub job_id: String,
    /// 0-based position in the run.
    pub index: u64,
    /// Record sets in this chunk.
    pub count: u64,
}

/// A bulk run split into chunks under a fresh parent job id.
#[derive(Debug, Clone, PartialEq)]
pub struct JobPlan {
    pub parent_job_id: String,
    pub total_count: u64,
    pub batch_size: u64,
    pub chunks: Vec<ChunkSpec>,
}

impl JobPlan {
    /// Plan a run of `total_count` record sets in chunks of `batch_size`.
    pub fn new(total_count: u64, batch_size: u64) -> Self {
        assert!(batch_size >= 1, "batch_size must be at least 1");

        let mut chunks = Vec::new();
        let mut start = 0u64;
        while start < total_count {
            let count = batch_size.min(total_count - start);
            chunks.push(ChunkSpec {
                job_id: Uuid::new_v4().to_string(),
                index: chunks.len() as u64,
                count,
            });
            start += batch_size;
        }

        Self {
            parent_job_id: Uuid::new_v4().to_string(),
            total_count,
            batch_size,
            chunks,
        }
    }

    pub fn total_chunks(&self) -> u64 {
        self.chunks.len() as u64
    }

    /// The receipt handed back to the caller for this plan.
    pub fn receipt(&self, status: &str) -> JobReceipt {
        JobReceipt {
            parent_job_id: self.parent_job_id.clone(),
            job_ids: self.chunks.iter().map(|c| c.job_id.clone()).collect(),
            status: status.to_string(),
            total_count: self.total_count,
            batch_size: self.batch_size,
            total_chunks: self.total_chunks(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_splits_with_remainder() {
        let plan = JobPlan::new(2500, 1000);

        assert_eq!(plan.total_chunks(), 3);
        assert_eq!(plan.chunks[0].count, 1000);
        assert_eq!(plan.chunks[1].count, 1000);
        assert_eq!(plan.chunks[2].count, 500);
        assert_eq!(plan.chunks[2].index, 2);
    }

    #[test]
    fn test_exact_multiple_has_no_ragged_chunk() {
        let plan = JobPlan::new(2000, 1000);
        assert_eq!(plan.total_chunks(), 2);
        assert!(plan.chunks.iter().all(|c| c.count == 1000));
    }

    #[test]
    fn test_small_run_is_single_chunk() {
        let plan = JobPlan::new(1, DEFAULT_BATCH_SIZE);
        assert_eq!(plan.total_chunks(), 1);
        assert_eq!(plan.chunks[0].count, 1);
    }

    #[test]
    fn test_receipt_mirrors_plan() {
        let plan = JobPlan::new(1500, 1000);
        let receipt = plan.receipt("queued");

        assert_eq!(receipt.parent_job_id, plan.parent_job_id);
        assert_eq!(receipt.job_ids.len(), 2);
        assert_eq!(receipt.status, "queued");
        assert_eq!(receipt.total_count, 1500);
        assert_eq!(receipt.total_chunks, 2);
    }

    #[test]
    fn test_plans_mint_fresh_ids() {
        let a = JobPlan::new(10, 5);
        let b = JobPlan::new(10, 5);
        assert_ne!(a.parent_job_id, b.parent_job_id);
        assert_ne!(a.chunks[0].job_id, b.chunks[0].job_id);
    }
}
