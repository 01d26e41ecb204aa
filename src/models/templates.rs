use serde::{Deserialize, Serialize};

use crate::{
    params::{ensure_any_field, RequestParams},
    Result,
};

/// A stored email template, referenced from [`MailFromTemplate`](super::mail::MailFromTemplate)
/// by its `uuid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailTemplate {
    pub id: u64,
    pub uuid: String,
    pub name: String,
    pub category: String,
    pub subject: String,
    pub body_text: Option<String>,
    pub body_html: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateEmailTemplateParams {
    name: String,
    subject: String,
    category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    body_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body_html: Option<String>,
}

impl CreateEmailTemplateParams {
    pub fn new(
        name: impl Into<String>,
        subject: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        CreateEmailTemplateParams {
            name: name.into(),
            subject: subject.into(),
            category: category.into(),
            body_text: None,
            body_html: None,
        }
    }

    pub fn with_body_text(mut self, body_text: impl Into<String>) -> Self {
        self.body_text = Some(body_text.into());
        self
    }

    pub fn with_body_html(mut self, body_html: impl Into<String>) -> Self {
        self.body_html = Some(body_html.into());
        self
    }
}

impl RequestParams for CreateEmailTemplateParams {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateEmailTemplateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body_html: Option<String>,
}

impl UpdateEmailTemplateParams {
    pub fn builder() -> UpdateEmailTemplateParamsBuilder {
        UpdateEmailTemplateParamsBuilder::default()
    }
}

impl RequestParams for UpdateEmailTemplateParams {}

#[derive(Debug, Clone, Default)]
pub struct UpdateEmailTemplateParamsBuilder {
    name: Option<String>,
    subject: Option<String>,
    category: Option<String>,
    body_text: Option<String>,
    body_html: Option<String>,
}

impl UpdateEmailTemplateParamsBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn body_text(mut self, body_text: impl Into<String>) -> Self {
        self.body_text = Some(body_text.into());
        self
    }

    pub fn body_html(mut self, body_html: impl Into<String>) -> Self {
        self.body_html = Some(body_html.into());
        self
    }

    pub fn build(self) -> Result<UpdateEmailTemplateParams> {
        ensure_any_field(&[
            self.name.is_some(),
            self.subject.is_some(),
            self.category.is_some(),
            self.body_text.is_some(),
            self.body_html.is_some(),
        ])?;
        Ok(UpdateEmailTemplateParams {
            name: self.name,
            subject: self.subject,
            category: self.category,
            body_text: self.body_text,
            body_html: self.body_html,
        })
    }
}
