use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::mail::Disposition;

/// An attachment of a message captured by a sandbox inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageAttachment {
    pub id: u64,
    pub message_id: u64,
    pub filename: String,
    pub attachment_type: Disposition,
    pub content_type: String,
    pub content_id: Option<String>,
    pub transfer_encoding: Option<String>,
    pub attachment_size: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub attachment_human_size: String,
    pub download_path: String,
}
