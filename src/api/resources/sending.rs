use crate::{
    http::HttpClient,
    models::mail::{Sendable, SendingMailResponse},
    Result,
};

/// Sends transactional, bulk or sandbox email, depending on the host the client was built for.
#[derive(Debug, Clone)]
pub struct SendingApi {
    client: HttpClient,
    inbox_id: Option<u64>,
}

impl SendingApi {
    /// `inbox_id` is only set in sandbox mode, where mail lands in that testing inbox.
    pub fn new(client: HttpClient, inbox_id: Option<u64>) -> Self {
        SendingApi { client, inbox_id }
    }

    /// Send a [`Mail`](crate::models::mail::Mail) or a
    /// [`MailFromTemplate`](crate::models::mail::MailFromTemplate).
    pub fn send<M: Sendable>(&self, mail: &M) -> Result<SendingMailResponse> {
        let body = mail.api_data()?;
        self.client.post(&self.api_path(), &body)?.into_model()
    }

    pub(crate) fn api_path(&self) -> String {
        match self.inbox_id {
            Some(inbox_id) => format!("/api/send/{inbox_id}"),
            None => "/api/send".to_owned(),
        }
    }
}
