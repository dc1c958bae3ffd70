//! Completion-notification inbox.
//!
//! A single JSON file holds the unread notifications. Saving is idempotent
//! per (message, status, parent job): re-announcing a finished job does not
//! duplicate the entry.

use crate::error::JobStoreError;
use chrono::Utc;
use mart_types::wire::Notification;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Conventional inbox file name inside a job-store root.
pub const NOTIFICATIONS_FILE: &str = "notifications.json";

/// File-backed notification inbox.
pub struct NotificationStore {
    path: PathBuf,
}

impl NotificationStore {
    /// Create an inbox stored at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append a notification unless an identical one exists.
    ///
    /// Returns the new notification id, or `None` when deduplicated.
    pub fn save(
        &self,
        message: &str,
        status: &str,
        parent_job_id: Option<&str>,
    ) -> Result<Option<String>, JobStoreError> {
        let mut items = self.load()?;

        let exists = items.iter().any(|n| {
            n.message == message
                && n.status == status
                && n.parent_job_id.as_deref() == parent_job_id
        });
        if exists {
            info!(message, "notification already exists, skipping");
            return Ok(None);
        }

        let id = format!("n-{}-{}", Utc::now().timestamp_millis(), items.len());
        items.push(Notification {
            id: id.clone(),
            message: message.to_string(),
            status: status.to_string(),
            timestamp: Utc::now(),
            parent_job_id: parent_job_id.map(str::to_string),
        });
        self.persist(&items)?;
        Ok(Some(id))
    }

    /// All unread notifications, newest first.
    pub fn unread(&self) -> Result<Vec<Notification>, JobStoreError> {
        let mut items = self.load()?;
        items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(items)
    }

    /// Delete one notification by id. Returns whether it existed.
    pub fn ack(&self, id: &str) -> Result<bool, JobStoreError> {
        let mut items = self.load()?;
        let before = items.len();
        items.retain(|n| n.id != id);
        if items.len() == before {
            return Ok(false);
        }
        self.persist(&items)?;
        Ok(true)
    }

    fn load(&self) -> Result<Vec<Notification>, JobStoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn persist(&self, items: &[Notification]) -> Result<(), JobStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(items)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inbox() -> (tempfile::TempDir, NotificationStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = NotificationStore::new(dir.path().join("notifications.json"));
        (dir, store)
    }

    #[test]
    fn test_save_and_list() {
        let (_dir, store) = inbox();

        let id = store
            .save("job finished", "completed", Some("p-1"))
            .unwrap()
            .unwrap();

        let items = store.unread().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, id);
        assert_eq!(items[0].status, "completed");
        assert_eq!(items[0].parent_job_id.as_deref(), Some("p-1"));
    }

    #[test]
    fn test_duplicate_save_is_skipped() {
        let (_dir, store) = inbox();

        store.save("done", "completed", Some("p-1")).unwrap();
        let second = store.save("done", "completed", Some("p-1")).unwrap();
        assert!(second.is_none());
        assert_eq!(store.unread().unwrap().len(), 1);

        // A different parent job is a different notification
        store.save("done", "completed", Some("p-2")).unwrap();
        assert_eq!(store.unread().unwrap().len(), 2);
    }

    #[test]
    fn test_ack_removes_only_target() {
        let (_dir, store) = inbox();

        let id1 = store.save("a", "completed", None).unwrap().unwrap();
        let id2 = store.save("b", "failed", None).unwrap().unwrap();

        assert!(store.ack(&id1).unwrap());
        assert!(!store.ack(&id1).unwrap());

        let items = store.unread().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, id2);
    }
}
