//! JSON payload shapes of the backend HTTP contract.
//!
//! The generator has no network surface of its own; these types exist so the
//! generated data and job bookkeeping serialize exactly the way the browsing
//! frontend expects them. Field spellings (including the mixed
//! `parentJobId` / `total_count` casing) are the shipped contract and must
//! not be "fixed".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /generate_raw` and `POST /write_to_db`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(rename = "dataCount")]
    pub data_count: u64,
}

/// Response of `POST /generate_raw`: the receipt for a queued bulk job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobReceipt {
    #[serde(rename = "parentJobId")]
    pub parent_job_id: String,
    #[serde(rename = "jobIds")]
    pub job_ids: Vec<String>,
    pub status: String,
    pub total_count: u64,
    pub batch_size: u64,
    pub total_chunks: u64,
}

/// Response of `POST /write_to_db`: the synchronous generate-and-commit
/// variant, with its generation/commit timing split in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteReport {
    pub success: bool,
    pub message: String,
    pub user_id: Option<String>,
    pub all_messages: Vec<String>,
    pub all_user_ids: Vec<String>,
    pub generation_time: f64,
    pub commit_time: f64,
}

/// Response of `GET /get_<table>` and `GET /get_raw_data/{parentJobId}/{table}`:
/// `{"success": true, "<table>": [rows...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRows {
    pub success: bool,
    #[serde(flatten)]
    pub rows: serde_json::Map<String, Value>,
}

impl TableRows {
    /// Build the `{"success": true, "<table>": rows}` shape for one table.
    pub fn new(table: &str, rows: Vec<Value>) -> Self {
        let mut map = serde_json::Map::new();
        map.insert(table.to_string(), Value::Array(rows));
        Self { success: true, rows: map }
    }
}

/// Response of `GET /list_parent_jobs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentJobList {
    pub success: bool,
    #[serde(rename = "parentJobIds")]
    pub parent_job_ids: Vec<String>,
}

/// Generic failure body: `{"success": false, "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}

/// Body of `POST /clean_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanDataRequest {
    #[serde(rename = "dataCount")]
    pub data_count: u64,
    #[serde(rename = "parentJobId")]
    pub parent_job_id: String,
}

/// Routing of one chunk to a processing path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkRoute {
    pub job_id: String,
    pub chunk_index: u64,
    pub count: u64,
    /// `small_batch` or `large_batch`.
    pub path: String,
    /// Queue the chunk message lands on.
    pub queue: String,
}

/// Response of `POST /clean_data`: per-chunk routing info.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanDataResponse {
    pub success: bool,
    pub parent_job_id: String,
    pub total_chunks: u64,
    pub routes: Vec<ChunkRoute>,
}

/// One entry in the notification inbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub status: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_job_id: Option<String>,
}

/// Response of `GET /notifications/unread`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationList {
    pub success: bool,
    pub notifications: Vec<Notification>,
}

/// Body of `POST /login` and `POST /register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Response of `POST /login`: bearer plus refresh token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: String,
}

/// Response of `POST /refresh`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshedToken {
    pub access_token: String,
}

/// Response of `GET /api/negotiate`: streaming handshake for live
/// job-status push.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiateResponse {
    pub url: String,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_receipt_field_spellings() {
        let receipt = JobReceipt {
            parent_job_id: "p-1".to_string(),
            job_ids: vec!["j-1".to_string()],
            status: "queued".to_string(),
            total_count: 2500,
            batch_size: 1000,
            total_chunks: 3,
        };

        let value = serde_json::to_value(&receipt).unwrap();
        assert_eq!(value["parentJobId"], "p-1");
        assert_eq!(value["jobIds"][0], "j-1");
        assert_eq!(value["total_count"], 2500);
        assert_eq!(value["total_chunks"], 3);
    }

    #[test]
    fn test_table_rows_shape() {
        let rows = TableRows::new("products_sku", vec![json!({"id": "a-b-c-12345"})]);
        let value = serde_json::to_value(&rows).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["products_sku"][0]["id"], "a-b-c-12345");
    }

    #[test]
    fn test_generate_request_uses_data_count_key() {
        let req: GenerateRequest = serde_json::from_value(json!({"dataCount": 7})).unwrap();
        assert_eq!(req.data_count, 7);
    }

    #[test]
    fn test_notification_omits_absent_parent_job() {
        let n = Notification {
            id: "u_123".to_string(),
            message: "done".to_string(),
            status: "completed".to_string(),
            timestamp: Utc::now(),
            parent_job_id: None,
        };
        let value = serde_json::to_value(&n).unwrap();
        assert!(value.get("parent_job_id").is_none());
    }
}
