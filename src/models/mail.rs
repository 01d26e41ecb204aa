//! Bodies of the sending endpoint.
use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{params::RequestParams, Error, Result};

/// An email address with an optional display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Address {
    pub fn new(email: impl Into<String>) -> Self {
        Address {
            email: email.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    Inline,
    Attachment,
}

/// A file attached to an outgoing mail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    /// Base64-encoded file content.
    content: String,
    filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    disposition: Option<Disposition>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    mimetype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_id: Option<String>,
}

impl Attachment {
    /// Attach content that is already base64-encoded.
    pub fn new(content: impl Into<String>, filename: impl Into<String>) -> Self {
        Attachment {
            content: content.into(),
            filename: filename.into(),
            disposition: None,
            mimetype: None,
            content_id: None,
        }
    }

    /// Attach raw bytes, encoding them as base64.
    pub fn from_bytes(content: impl AsRef<[u8]>, filename: impl Into<String>) -> Self {
        Attachment::new(STANDARD.encode(content), filename)
    }

    pub fn disposition(mut self, disposition: Disposition) -> Self {
        self.disposition = Some(disposition);
        self
    }

    /// MIME type, sent as `type`.
    pub fn mimetype(mut self, mimetype: impl Into<String>) -> Self {
        self.mimetype = Some(mimetype.into());
        self
    }

    /// Content id for inline images referenced as `cid:<content_id>`.
    pub fn content_id(mut self, content_id: impl Into<String>) -> Self {
        self.content_id = Some(content_id.into());
        self
    }
}

/// Fields shared by every kind of outgoing mail.
#[derive(Debug, Clone, PartialEq, Serialize)]
struct Envelope {
    #[serde(rename = "from")]
    sender: Address,
    to: Vec<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cc: Option<Vec<Address>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bcc: Option<Vec<Address>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attachments: Option<Vec<Attachment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    headers: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_variables: Option<HashMap<String, Value>>,
}

impl Envelope {
    fn new(sender: Address, to: Vec<Address>) -> Self {
        Envelope {
            sender,
            to,
            cc: None,
            bcc: None,
            attachments: None,
            headers: None,
            custom_variables: None,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.to.is_empty() {
            return Err(Error::validation("at least one recipient is required"));
        }
        Ok(())
    }
}

/// Setters shared by [`MailBuilder`] and [`MailFromTemplateBuilder`].
macro_rules! envelope_setters {
    () => {
        pub fn cc(mut self, cc: Vec<Address>) -> Self {
            self.envelope.cc = Some(cc);
            self
        }

        pub fn bcc(mut self, bcc: Vec<Address>) -> Self {
            self.envelope.bcc = Some(bcc);
            self
        }

        pub fn attachments(mut self, attachments: Vec<Attachment>) -> Self {
            self.envelope.attachments = Some(attachments);
            self
        }

        pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
            self.envelope.headers = Some(headers);
            self
        }

        pub fn custom_variables(mut self, custom_variables: HashMap<String, Value>) -> Self {
            self.envelope.custom_variables = Some(custom_variables);
            self
        }
    };
}

/// Marker for bodies accepted by [`crate::api::SendingApi::send`].
pub trait Sendable: RequestParams {}

/// A mail with an explicit subject and body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mail {
    #[serde(flatten)]
    envelope: Envelope,
    subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

impl Mail {
    pub fn builder(sender: Address, to: Vec<Address>, subject: impl Into<String>) -> MailBuilder {
        MailBuilder {
            envelope: Envelope::new(sender, to),
            subject: subject.into(),
            text: None,
            html: None,
            category: None,
        }
    }
}

impl RequestParams for Mail {}
impl Sendable for Mail {}

#[derive(Debug, Clone)]
pub struct MailBuilder {
    envelope: Envelope,
    subject: String,
    text: Option<String>,
    html: Option<String>,
    category: Option<String>,
}

impl MailBuilder {
    envelope_setters!();

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Fails when there are no recipients or neither `text` nor `html` is set.
    pub fn build(self) -> Result<Mail> {
        self.envelope.validate()?;
        if self.text.is_none() && self.html.is_none() {
            return Err(Error::validation("either `text` or `html` must be provided"));
        }

        Ok(Mail {
            envelope: self.envelope,
            subject: self.subject,
            text: self.text,
            html: self.html,
            category: self.category,
        })
    }
}

/// A mail rendered by the service from a stored template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MailFromTemplate {
    #[serde(flatten)]
    envelope: Envelope,
    template_uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    template_variables: Option<HashMap<String, Value>>,
}

impl MailFromTemplate {
    pub fn builder(
        sender: Address,
        to: Vec<Address>,
        template_uuid: impl Into<String>,
    ) -> MailFromTemplateBuilder {
        MailFromTemplateBuilder {
            envelope: Envelope::new(sender, to),
            template_uuid: template_uuid.into(),
            template_variables: None,
        }
    }
}

impl RequestParams for MailFromTemplate {}
impl Sendable for MailFromTemplate {}

#[derive(Debug, Clone)]
pub struct MailFromTemplateBuilder {
    envelope: Envelope,
    template_uuid: String,
    template_variables: Option<HashMap<String, Value>>,
}

impl MailFromTemplateBuilder {
    envelope_setters!();

    pub fn template_variables(mut self, template_variables: HashMap<String, Value>) -> Self {
        self.template_variables = Some(template_variables);
        self
    }

    /// Fails when there are no recipients or the template uuid is blank.
    pub fn build(self) -> Result<MailFromTemplate> {
        self.envelope.validate()?;
        if self.template_uuid.trim().is_empty() {
            return Err(Error::validation("`template_uuid` must not be empty"));
        }

        Ok(MailFromTemplate {
            envelope: self.envelope,
            template_uuid: self.template_uuid,
            template_variables: self.template_variables,
        })
    }
}

/// Result of a send call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendingMailResponse {
    pub success: bool,
    pub message_ids: Vec<String>,
}
