use reqwest::Url;

use crate::{
    api::{ContactsBaseApi, EmailTemplatesApi, SendingApi, SuppressionsBaseApi, TestingApi},
    http::HttpClient,
    models::mail::{Sendable, SendingMailResponse},
    ClientConfig, Error, Result,
};

/// A client for the Mailtrap API.
///
/// In order to create a client instance, first create [`ClientConfig`].
///
/// The client holds two transports: one bound to the sending host picked by the configuration
/// and one bound to the management host. Cloning is cheap and clones share connections.
///
/// # Examples
/// ```
/// # use mailtrap::{Client, ClientConfig};
/// let client = Client::new(ClientConfig::from_token("api-token")).unwrap();
/// assert_eq!(client.api_send_url().as_str(), "https://send.api.mailtrap.io/api/send");
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    sending: HttpClient,
    general: HttpClient,
    account_id: Option<u64>,
    inbox_id: Option<u64>,
    api_send_url: Url,
}

impl Client {
    /// Create a new `Client` using the specified configuration.
    ///
    /// Fails with [`Error::ClientConfiguration`] when the sandbox, bulk and inbox settings do not
    /// fit together.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let sending_host = config.sending_host();
        let sending = HttpClient::new(sending_host, &config.token, config.timeout)?;
        let general = HttpClient::new(&config.general_host, &config.token, config.timeout)?;

        let inbox_id = if config.sandbox {
            config.inbox_id
        } else {
            None
        };
        let api_send_url = sending.url(&SendingApi::new(sending.clone(), inbox_id).api_path())?;

        log::debug!(target: "mailtrap",
                    sending_host,
                    general_host = config.general_host.as_str(),
                    bulk = config.bulk,
                    sandbox = config.sandbox;
                    "created client");

        Ok(Client {
            sending,
            general,
            account_id: config.account_id,
            inbox_id,
            api_send_url,
        })
    }

    /// Full URL mail is posted to.
    pub fn api_send_url(&self) -> &Url {
        &self.api_send_url
    }

    /// Email sending. Available without an account id.
    pub fn sending_api(&self) -> SendingApi {
        SendingApi::new(self.sending.clone(), self.inbox_id)
    }

    /// Shortcut for `sending_api().send(mail)`.
    pub fn send<M: Sendable>(&self, mail: &M) -> Result<SendingMailResponse> {
        self.sending_api().send(mail)
    }

    pub fn testing_api(&self) -> Result<TestingApi> {
        let account_id = self.require_account_id("Testing API")?;
        Ok(TestingApi::new(self.general.clone(), account_id))
    }

    pub fn email_templates_api(&self) -> Result<EmailTemplatesApi> {
        let account_id = self.require_account_id("Email Templates API")?;
        Ok(EmailTemplatesApi::new(self.general.clone(), account_id))
    }

    pub fn contacts_api(&self) -> Result<ContactsBaseApi> {
        let account_id = self.require_account_id("Contacts API")?;
        Ok(ContactsBaseApi::new(self.general.clone(), account_id))
    }

    pub fn suppressions_api(&self) -> Result<SuppressionsBaseApi> {
        let account_id = self.require_account_id("Suppressions API")?;
        Ok(SuppressionsBaseApi::new(self.general.clone(), account_id))
    }

    fn require_account_id(&self, api: &str) -> Result<u64> {
        self.account_id
            .ok_or_else(|| Error::configuration(format!("`account_id` is required for {api}")))
    }
}
