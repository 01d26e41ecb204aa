use serde::Deserialize;
use serde_json::{json, Map, Value};

use super::account_path;
use crate::{
    http::HttpClient,
    models::{
        messages::{
            AnalysisReport, EmailMessage, ForwardedMessage, ListMessagesParams, ReportEnvelope,
            SpamReport, UpdateEmailMessageParams,
        },
        DeletedObject,
    },
    params::wrap,
    Result,
};

#[derive(Deserialize)]
struct HeadersEnvelope {
    headers: Map<String, Value>,
}

/// Messages caught by a sandbox inbox.
#[derive(Debug, Clone)]
pub struct MessagesApi {
    client: HttpClient,
    account_id: u64,
}

impl MessagesApi {
    pub fn new(client: HttpClient, account_id: u64) -> Self {
        MessagesApi { client, account_id }
    }

    pub fn show_message(&self, inbox_id: u64, message_id: u64) -> Result<EmailMessage> {
        self.client
            .get(&self.api_path(inbox_id, Some(message_id)))?
            .into_model()
    }

    /// Update message attributes. Only the read state can be changed.
    pub fn update(
        &self,
        inbox_id: u64,
        message_id: u64,
        params: &UpdateEmailMessageParams,
    ) -> Result<EmailMessage> {
        self.client
            .patch(
                &self.api_path(inbox_id, Some(message_id)),
                &wrap("message", params)?,
            )?
            .into_model()
    }

    pub fn delete(&self, inbox_id: u64, message_id: u64) -> Result<DeletedObject> {
        let body = self.client.delete(&self.api_path(inbox_id, Some(message_id)))?;
        Ok(DeletedObject::from_response(&body, message_id))
    }

    /// One page of messages, at most [`ListMessagesParams::PAGE_SIZE`] long.
    ///
    /// When both `last_id` and `page` are set the service pages by `last_id`. Fetching further
    /// pages is up to the caller.
    pub fn get_list(
        &self,
        inbox_id: u64,
        params: &ListMessagesParams,
    ) -> Result<Vec<EmailMessage>> {
        self.client
            .get_with_query(&self.api_path(inbox_id, None), &params.to_query())?
            .into_model()
    }

    /// Forward a message to an address confirmed by its owner in advance.
    pub fn forward(&self, inbox_id: u64, message_id: u64, email: &str) -> Result<ForwardedMessage> {
        self.client
            .post(
                &self.sub_path(inbox_id, message_id, "forward"),
                &json!({ "email": email }),
            )?
            .into_model()
    }

    pub fn get_spam_report(&self, inbox_id: u64, message_id: u64) -> Result<SpamReport> {
        let envelope: ReportEnvelope<SpamReport> = self
            .client
            .get(&self.sub_path(inbox_id, message_id, "spam_report"))?
            .into_model()?;
        Ok(envelope.report)
    }

    pub fn get_html_analysis(&self, inbox_id: u64, message_id: u64) -> Result<AnalysisReport> {
        let envelope: ReportEnvelope<AnalysisReport> = self
            .client
            .get(&self.sub_path(inbox_id, message_id, "analyze"))?
            .into_model()?;
        Ok(envelope.report)
    }

    pub fn get_text_message(&self, inbox_id: u64, message_id: u64) -> Result<String> {
        self.body(inbox_id, message_id, "txt")
    }

    pub fn get_raw_message(&self, inbox_id: u64, message_id: u64) -> Result<String> {
        self.body(inbox_id, message_id, "raw")
    }

    pub fn get_html_source(&self, inbox_id: u64, message_id: u64) -> Result<String> {
        self.body(inbox_id, message_id, "htmlsource")
    }

    /// Formatted HTML body. Not available for plain text messages.
    pub fn get_html_message(&self, inbox_id: u64, message_id: u64) -> Result<String> {
        self.body(inbox_id, message_id, "html")
    }

    pub fn get_message_as_eml(&self, inbox_id: u64, message_id: u64) -> Result<String> {
        self.body(inbox_id, message_id, "eml")
    }

    pub fn get_mail_headers(&self, inbox_id: u64, message_id: u64) -> Result<Map<String, Value>> {
        let envelope: HeadersEnvelope = self
            .client
            .get(&self.sub_path(inbox_id, message_id, "mail_headers"))?
            .into_model()?;
        Ok(envelope.headers)
    }

    fn body(&self, inbox_id: u64, message_id: u64, format: &str) -> Result<String> {
        let path = self.sub_path(inbox_id, message_id, &format!("body.{format}"));
        Ok(self.client.get(&path)?.into_text())
    }

    fn sub_path(&self, inbox_id: u64, message_id: u64, tail: &str) -> String {
        format!("{}/{tail}", self.api_path(inbox_id, Some(message_id)))
    }

    fn api_path(&self, inbox_id: u64, message_id: Option<u64>) -> String {
        let path = account_path(self.account_id, &format!("inboxes/{inbox_id}/messages"));
        match message_id {
            Some(message_id) => format!("{path}/{message_id}"),
            None => path,
        }
    }
}
