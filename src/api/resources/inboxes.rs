use super::account_path;
use crate::{
    http::HttpClient,
    models::{
        inboxes::{CreateInboxParams, Inbox, UpdateInboxParams},
        DeletedObject,
    },
    params::wrap,
    Result,
};

/// Sandbox inboxes and their maintenance actions.
#[derive(Debug, Clone)]
pub struct InboxesApi {
    client: HttpClient,
    account_id: u64,
}

impl InboxesApi {
    pub fn new(client: HttpClient, account_id: u64) -> Self {
        InboxesApi { client, account_id }
    }

    pub fn get_list(&self) -> Result<Vec<Inbox>> {
        self.client.get(&self.api_path(None))?.into_model()
    }

    pub fn get_by_id(&self, inbox_id: u64) -> Result<Inbox> {
        self.client.get(&self.api_path(Some(inbox_id)))?.into_model()
    }

    /// Create an inbox inside the given project.
    pub fn create(&self, project_id: u64, params: &CreateInboxParams) -> Result<Inbox> {
        let path = format!(
            "{}/{project_id}/inboxes",
            account_path(self.account_id, "projects")
        );
        self.client.post(&path, &wrap("inbox", params)?)?.into_model()
    }

    pub fn update(&self, inbox_id: u64, params: &UpdateInboxParams) -> Result<Inbox> {
        self.client
            .patch(&self.api_path(Some(inbox_id)), &wrap("inbox", params)?)?
            .into_model()
    }

    pub fn delete(&self, inbox_id: u64) -> Result<DeletedObject> {
        let body = self.client.delete(&self.api_path(Some(inbox_id)))?;
        Ok(DeletedObject::from_response(&body, inbox_id))
    }

    /// Delete every message in the inbox.
    pub fn clean(&self, inbox_id: u64) -> Result<Inbox> {
        self.action(inbox_id, "clean")
    }

    pub fn mark_as_read(&self, inbox_id: u64) -> Result<Inbox> {
        self.action(inbox_id, "all_read")
    }

    /// Reset SMTP credentials of the inbox.
    pub fn reset_credentials(&self, inbox_id: u64) -> Result<Inbox> {
        self.action(inbox_id, "reset_credentials")
    }

    /// Toggle the inbox email address on or off.
    pub fn enable_email_address(&self, inbox_id: u64) -> Result<Inbox> {
        self.action(inbox_id, "toggle_email_username")
    }

    pub fn reset_email_username(&self, inbox_id: u64) -> Result<Inbox> {
        self.action(inbox_id, "reset_email_username")
    }

    fn action(&self, inbox_id: u64, action: &str) -> Result<Inbox> {
        let path = format!("{}/{action}", self.api_path(Some(inbox_id)));
        self.client.patch_empty(&path)?.into_model()
    }

    fn api_path(&self, inbox_id: Option<u64>) -> String {
        let path = account_path(self.account_id, "inboxes");
        match inbox_id {
            Some(inbox_id) => format!("{path}/{inbox_id}"),
            None => path,
        }
    }
}
