use serde::{Deserialize, Serialize};

use crate::{
    params::{ensure_any_field, RequestParams},
    Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    pub can_read: bool,
    pub can_update: bool,
    pub can_destroy: bool,
    pub can_leave: bool,
}

/// A sandbox inbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inbox {
    pub id: u64,
    pub name: String,
    pub username: String,
    /// Only present with admin permissions on the inbox.
    pub password: Option<String>,
    pub max_size: u64,
    pub status: String,
    pub email_username: String,
    pub email_username_enabled: bool,
    pub sent_messages_count: u64,
    pub forwarded_messages_count: u64,
    pub used: bool,
    pub forward_from_email_address: String,
    pub project_id: u64,
    pub domain: String,
    pub pop3_domain: String,
    pub email_domain: String,
    pub api_domain: Option<String>,
    pub emails_count: u64,
    pub emails_unread_count: u64,
    pub last_message_sent_at: Option<String>,
    pub smtp_ports: Vec<u16>,
    pub pop3_ports: Vec<u16>,
    pub max_message_size: u64,
    pub permissions: Permissions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateInboxParams {
    name: String,
}

impl CreateInboxParams {
    pub fn new(name: impl Into<String>) -> Self {
        CreateInboxParams { name: name.into() }
    }
}

impl RequestParams for CreateInboxParams {}

/// Partial update of an inbox. Build with [`UpdateInboxParams::builder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateInboxParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email_username: Option<String>,
}

impl UpdateInboxParams {
    pub fn builder() -> UpdateInboxParamsBuilder {
        UpdateInboxParamsBuilder::default()
    }
}

impl RequestParams for UpdateInboxParams {}

#[derive(Debug, Clone, Default)]
pub struct UpdateInboxParamsBuilder {
    name: Option<String>,
    email_username: Option<String>,
}

impl UpdateInboxParamsBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email_username(mut self, email_username: impl Into<String>) -> Self {
        self.email_username = Some(email_username.into());
        self
    }

    /// Fails with [`crate::Error::Validation`] when no field is set.
    pub fn build(self) -> Result<UpdateInboxParams> {
        ensure_any_field(&[self.name.is_some(), self.email_username.is_some()])?;
        Ok(UpdateInboxParams {
            name: self.name,
            email_username: self.email_username,
        })
    }
}
