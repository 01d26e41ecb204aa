use std::{env, time::Duration};

use crate::{http::HttpClient, Client, Error, Result};

/// Configuration for [`Client`].
///
/// Settings are checked when the client is built, not when they are set, so the order of the
/// builder calls does not matter.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub(crate) token: String,
    pub(crate) api_host: Option<String>,
    pub(crate) general_host: String,
    pub(crate) account_id: Option<u64>,
    pub(crate) inbox_id: Option<u64>,
    pub(crate) bulk: bool,
    pub(crate) sandbox: bool,
    pub(crate) timeout: Duration,
}

impl ClientConfig {
    /// Host for transactional sending.
    pub const SENDING_HOST: &'static str = "send.api.mailtrap.io";
    /// Host for bulk sending.
    pub const BULK_HOST: &'static str = "bulk.api.mailtrap.io";
    /// Host for sending into a sandbox inbox.
    pub const SANDBOX_HOST: &'static str = "sandbox.api.mailtrap.io";
    /// Host of the account management API (testing, contacts, templates, suppressions).
    pub const GENERAL_HOST: &'static str = "mailtrap.io";
    /// Default timeout of a single request.
    pub const DEFAULT_TIMEOUT: Duration = HttpClient::DEFAULT_TIMEOUT;

    /// Create a default configuration using the specified API token.
    ///
    /// ```
    /// # use mailtrap::ClientConfig;
    /// ClientConfig::from_token("api-token");
    /// ```
    pub fn from_token(token: impl Into<String>) -> Self {
        ClientConfig {
            token: token.into(),
            api_host: None,
            general_host: ClientConfig::GENERAL_HOST.to_owned(),
            account_id: None,
            inbox_id: None,
            bulk: false,
            sandbox: false,
            timeout: ClientConfig::DEFAULT_TIMEOUT,
        }
    }

    /// Read the configuration from `MAILTRAP_API_TOKEN`, `MAILTRAP_ACCOUNT_ID` and
    /// `MAILTRAP_INBOX_ID`. Only the token is required.
    ///
    /// Setting `MAILTRAP_INBOX_ID` turns on sandbox mode.
    pub fn from_env() -> Result<Self> {
        let token = env::var("MAILTRAP_API_TOKEN")
            .map_err(|_| Error::configuration("`MAILTRAP_API_TOKEN` is not set"))?;
        let mut config = ClientConfig::from_token(token);

        if let Some(account_id) = env_id("MAILTRAP_ACCOUNT_ID")? {
            config = config.account_id(account_id);
        }
        if let Some(inbox_id) = env_id("MAILTRAP_INBOX_ID")? {
            config = config.sandbox(true).inbox_id(inbox_id);
        }

        Ok(config)
    }

    /// Override the sending host. Takes precedence over sandbox and bulk mode.
    ///
    /// A value with a scheme (`http://localhost:8080`) is used as the base URL verbatim.
    pub fn api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = Some(host.into());
        self
    }

    /// Override the host of the management API. Clients should use the default setting in most
    /// cases.
    pub fn general_host(mut self, host: impl Into<String>) -> Self {
        self.general_host = host.into();
        self
    }

    /// Account id, required by every API group except sending.
    pub fn account_id(mut self, account_id: u64) -> Self {
        self.account_id = Some(account_id);
        self
    }

    /// Sandbox inbox that receives sent mail. Only allowed in sandbox mode.
    pub fn inbox_id(mut self, inbox_id: u64) -> Self {
        self.inbox_id = Some(inbox_id);
        self
    }

    pub fn bulk(mut self, bulk: bool) -> Self {
        self.bulk = bulk;
        self
    }

    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a new [`Client`] using the specified configuration.
    ///
    /// ```
    /// # use mailtrap::{ClientConfig, Client};
    /// let client: Client = ClientConfig::from_token("api-token").to_client().unwrap();
    /// ```
    pub fn to_client(self) -> Result<Client> {
        Client::new(self)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.sandbox && self.inbox_id.is_none() {
            return Err(Error::configuration(
                "`inbox_id` is required for sandbox mode",
            ));
        }
        if !self.sandbox && self.inbox_id.is_some() {
            return Err(Error::configuration(
                "`inbox_id` is not allowed in non-sandbox mode",
            ));
        }
        if self.bulk && self.sandbox {
            return Err(Error::configuration(
                "bulk mode is not allowed in sandbox mode",
            ));
        }
        Ok(())
    }

    /// Explicit host > sandbox > bulk > transactional.
    pub(crate) fn sending_host(&self) -> &str {
        if let Some(host) = &self.api_host {
            host
        } else if self.sandbox {
            ClientConfig::SANDBOX_HOST
        } else if self.bulk {
            ClientConfig::BULK_HOST
        } else {
            ClientConfig::SENDING_HOST
        }
    }
}

fn env_id(name: &str) -> Result<Option<u64>> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::configuration(format!("`{name}` must be a number, got {value:?}"))),
        _ => Ok(None),
    }
}
