use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuppressionType {
    #[serde(rename = "hard bounce")]
    HardBounce,
    #[serde(rename = "spam complaint")]
    SpamComplaint,
    #[serde(rename = "unsubscription")]
    Unsubscription,
    #[serde(rename = "manual import")]
    ManualImport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SendingStream {
    Transactional,
    Bulk,
}

/// An address Mailtrap refuses to send to.
///
/// The `message_*` fields describe the message that caused the suppression and are absent for
/// manual imports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suppression {
    pub id: String,
    #[serde(rename = "type")]
    pub suppression_type: SuppressionType,
    pub created_at: DateTime<Utc>,
    pub email: String,
    pub sending_stream: SendingStream,
    #[serde(default)]
    pub domain_name: Option<String>,
    #[serde(default)]
    pub message_bounce_category: Option<String>,
    #[serde(default)]
    pub message_category: Option<String>,
    #[serde(default)]
    pub message_client_ip: Option<String>,
    #[serde(default)]
    pub message_created_at: Option<String>,
    #[serde(default)]
    pub message_esp_response: Option<String>,
    #[serde(default)]
    pub message_esp_server_type: Option<String>,
    #[serde(default)]
    pub message_outgoing_ip: Option<String>,
    #[serde(default)]
    pub message_recipient_mx_name: Option<String>,
    #[serde(default)]
    pub message_sender_email: Option<String>,
    #[serde(default)]
    pub message_subject: Option<String>,
}
