use super::account_path;
use crate::{http::HttpClient, models::attachments::MessageAttachment, Result};

#[derive(Debug, Clone)]
pub struct AttachmentsApi {
    client: HttpClient,
    account_id: u64,
}

impl AttachmentsApi {
    pub fn new(client: HttpClient, account_id: u64) -> Self {
        AttachmentsApi { client, account_id }
    }

    pub fn get_list(&self, inbox_id: u64, message_id: u64) -> Result<Vec<MessageAttachment>> {
        self.client
            .get(&self.api_path(inbox_id, message_id, None))?
            .into_model()
    }

    pub fn get(
        &self,
        inbox_id: u64,
        message_id: u64,
        attachment_id: u64,
    ) -> Result<MessageAttachment> {
        self.client
            .get(&self.api_path(inbox_id, message_id, Some(attachment_id)))?
            .into_model()
    }

    fn api_path(&self, inbox_id: u64, message_id: u64, attachment_id: Option<u64>) -> String {
        let path = account_path(
            self.account_id,
            &format!("inboxes/{inbox_id}/messages/{message_id}/attachments"),
        );
        match attachment_id {
            Some(attachment_id) => format!("{path}/{attachment_id}"),
            None => path,
        }
    }
}
