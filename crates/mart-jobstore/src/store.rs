//! Directory-per-job storage of generated chunks.

use crate::error::JobStoreError;
use mart_types::Table;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Row cap applied when fetching one table out of a folder.
pub const FETCH_ROW_CAP: usize = 100;

/// File-backed store of parent-job folders.
pub struct JobStore {
    root: PathBuf,
}

impl JobStore {
    /// Create a store rooted at `root` (created lazily on first write).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the directory for a parent job and return it.
    pub fn prepare_folder(&self, parent_job_id: &str) -> Result<PathBuf, JobStoreError> {
        let dir = self.root.join(parent_job_id);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Path of one chunk file inside a folder.
    pub fn chunk_path(&self, parent_job_id: &str, job_id: &str) -> PathBuf {
        self.root.join(parent_job_id).join(format!("{job_id}.jsonl"))
    }

    /// All known parent job ids, sorted.
    pub fn list_parent_jobs(&self) -> Result<Vec<String>, JobStoreError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                ids.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }

    /// Rows of one table across a folder's chunks, capped at
    /// [`FETCH_ROW_CAP`].
    ///
    /// A folder with no chunk files reads as not-ready, same as a missing
    /// one.
    pub fn fetch_table(
        &self,
        parent_job_id: &str,
        table: Table,
    ) -> Result<Vec<Value>, JobStoreError> {
        let chunks = self.chunk_files(parent_job_id)?;
        if chunks.is_empty() {
            return Err(JobStoreError::FolderNotFound(parent_job_id.to_string()));
        }

        let mut rows = Vec::new();
        for chunk in chunks {
            let items = mart_populate::jsonl::read_chunk(&chunk)?;
            for mut item in items {
                if let Some(row) = item.get_mut(table.as_str()) {
                    rows.push(row.take());
                }
                if rows.len() >= FETCH_ROW_CAP {
                    rows.truncate(FETCH_ROW_CAP);
                    return Ok(rows);
                }
            }
        }
        Ok(rows)
    }

    /// Remove a folder and all of its chunks.
    pub fn delete_folder(&self, parent_job_id: &str) -> Result<(), JobStoreError> {
        let dir = self.root.join(parent_job_id);
        if !dir.is_dir() {
            return Err(JobStoreError::FolderNotFound(parent_job_id.to_string()));
        }
        fs::remove_dir_all(&dir)?;
        info!(parent_job_id, "deleted job folder");
        Ok(())
    }

    /// Chunk files of a folder, sorted by name for a stable read order.
    fn chunk_files(&self, parent_job_id: &str) -> Result<Vec<PathBuf>, JobStoreError> {
        let dir = self.root.join(parent_job_id);
        if !dir.is_dir() {
            return Err(JobStoreError::FolderNotFound(parent_job_id.to_string()));
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "jsonl") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::JobPlan;
    use mart_generator::Generator;

    fn seeded_store(sets_per_chunk: u64, chunks: u64) -> (tempfile::TempDir, JobStore, String) {
        let dir = tempfile::tempdir().unwrap();
        let store = JobStore::new(dir.path());

        let plan = JobPlan::new(sets_per_chunk * chunks, sets_per_chunk);
        let mut generator = Generator::new(42);
        store.prepare_folder(&plan.parent_job_id).unwrap();
        for chunk in &plan.chunks {
            let sets = generator.record_sets(chunk.count).unwrap();
            let path = store.chunk_path(&plan.parent_job_id, &chunk.job_id);
            mart_populate::jsonl::write_chunk(&path, &sets).unwrap();
        }

        let parent = plan.parent_job_id.clone();
        (dir, store, parent)
    }

    #[test]
    fn test_list_contains_written_folder() {
        let (_dir, store, parent) = seeded_store(2, 2);

        let ids = store.list_parent_jobs().unwrap();
        assert_eq!(ids, vec![parent]);
    }

    #[test]
    fn test_list_on_missing_root_is_empty() {
        let store = JobStore::new("/nonexistent/fakemart-test-root");
        assert!(store.list_parent_jobs().unwrap().is_empty());
    }

    #[test]
    fn test_fetch_extracts_single_table() {
        let (_dir, store, parent) = seeded_store(3, 1);

        let rows = store.fetch_table(&parent, Table::ProductsSku).unwrap();
        assert_eq!(rows.len(), 3);
        for row in &rows {
            assert!(row["id"].as_str().unwrap().contains('-'));
            assert!(row.get("price").is_some());
        }
    }

    #[test]
    fn test_fetch_caps_at_one_hundred_rows() {
        let (_dir, store, parent) = seeded_store(60, 2);

        let rows = store.fetch_table(&parent, Table::User).unwrap();
        assert_eq!(rows.len(), FETCH_ROW_CAP);
    }

    #[test]
    fn test_fetch_missing_folder_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = JobStore::new(dir.path());

        let err = store.fetch_table("nope", Table::User).unwrap_err();
        assert!(matches!(err, JobStoreError::FolderNotFound(_)));
    }

    #[test]
    fn test_delete_folder_removes_it() {
        let (_dir, store, parent) = seeded_store(1, 1);

        store.delete_folder(&parent).unwrap();
        assert!(store.list_parent_jobs().unwrap().is_empty());

        let err = store.delete_folder(&parent).unwrap_err();
        assert!(matches!(err, JobStoreError::FolderNotFound(_)));
    }
}
