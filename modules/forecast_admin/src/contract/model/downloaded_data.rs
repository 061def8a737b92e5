use chrono::{DateTime, Utc};
use serde_json::Value;

/// Raw payload fetched for a hindcast point.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadedData {
    pub id: i32,
    pub point_id: i32,
    pub downloaded_at: DateTime<Utc>,
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDownloadedData {
    pub point_id: i32,
    /// Defaults to the insertion time when absent.
    pub downloaded_at: Option<DateTime<Utc>>,
    pub data: Value,
}
