use std::collections::HashMap;

use derive_more::From;
use serde::{Deserialize, Serialize};

use crate::{
    params::{ensure_any_field, RequestParams},
    Result,
};

/// Value of a custom contact field, keyed by the field's merge tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, From)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

pub type ContactFields = HashMap<String, FieldValue>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactFieldDataType {
    Text,
    Integer,
    Float,
    Boolean,
    Date,
}

/// A custom field definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactField {
    pub id: u64,
    pub name: String,
    pub data_type: ContactFieldDataType,
    pub merge_tag: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateContactFieldParams {
    name: String,
    data_type: ContactFieldDataType,
    merge_tag: String,
}

impl CreateContactFieldParams {
    pub fn new(
        name: impl Into<String>,
        data_type: ContactFieldDataType,
        merge_tag: impl Into<String>,
    ) -> Self {
        CreateContactFieldParams {
            name: name.into(),
            data_type,
            merge_tag: merge_tag.into(),
        }
    }
}

impl RequestParams for CreateContactFieldParams {}

/// Partial update of a field definition. The data type cannot be changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateContactFieldParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    merge_tag: Option<String>,
}

impl UpdateContactFieldParams {
    pub fn builder() -> UpdateContactFieldParamsBuilder {
        UpdateContactFieldParamsBuilder::default()
    }
}

impl RequestParams for UpdateContactFieldParams {}

#[derive(Debug, Clone, Default)]
pub struct UpdateContactFieldParamsBuilder {
    name: Option<String>,
    merge_tag: Option<String>,
}

impl UpdateContactFieldParamsBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn merge_tag(mut self, merge_tag: impl Into<String>) -> Self {
        self.merge_tag = Some(merge_tag.into());
        self
    }

    pub fn build(self) -> Result<UpdateContactFieldParams> {
        ensure_any_field(&[self.name.is_some(), self.merge_tag.is_some()])?;
        Ok(UpdateContactFieldParams {
            name: self.name,
            merge_tag: self.merge_tag,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactList {
    pub id: u64,
    pub name: String,
}

/// Body of contact list create and update calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactListParams {
    name: String,
}

impl ContactListParams {
    pub fn new(name: impl Into<String>) -> Self {
        ContactListParams { name: name.into() }
    }
}

impl RequestParams for ContactListParams {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Subscribed,
    Unsubscribed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub fields: ContactFields,
    #[serde(default)]
    pub list_ids: Vec<u64>,
    pub status: ContactStatus,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
    /// Milliseconds since the Unix epoch.
    pub updated_at: i64,
}

/// Contact endpoints wrap the contact in `data`.
#[derive(Deserialize)]
pub(crate) struct ContactEnvelope {
    pub data: Contact,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateContactParams {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<ContactFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    list_ids: Option<Vec<u64>>,
}

impl CreateContactParams {
    pub fn new(email: impl Into<String>) -> Self {
        CreateContactParams {
            email: email.into(),
            fields: None,
            list_ids: None,
        }
    }

    pub fn with_fields(mut self, fields: ContactFields) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_list_ids(mut self, list_ids: Vec<u64>) -> Self {
        self.list_ids = Some(list_ids);
        self
    }
}

impl RequestParams for CreateContactParams {}

/// Partial update of a contact. Build with [`UpdateContactParams::builder`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateContactParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<ContactFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    list_ids_included: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    list_ids_excluded: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unsubscribed: Option<bool>,
}

impl UpdateContactParams {
    pub fn builder() -> UpdateContactParamsBuilder {
        UpdateContactParamsBuilder::default()
    }
}

impl RequestParams for UpdateContactParams {}

#[derive(Debug, Clone, Default)]
pub struct UpdateContactParamsBuilder {
    email: Option<String>,
    fields: Option<ContactFields>,
    list_ids_included: Option<Vec<u64>>,
    list_ids_excluded: Option<Vec<u64>>,
    unsubscribed: Option<bool>,
}

impl UpdateContactParamsBuilder {
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn fields(mut self, fields: ContactFields) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn list_ids_included(mut self, list_ids: Vec<u64>) -> Self {
        self.list_ids_included = Some(list_ids);
        self
    }

    pub fn list_ids_excluded(mut self, list_ids: Vec<u64>) -> Self {
        self.list_ids_excluded = Some(list_ids);
        self
    }

    pub fn unsubscribed(mut self, unsubscribed: bool) -> Self {
        self.unsubscribed = Some(unsubscribed);
        self
    }

    pub fn build(self) -> Result<UpdateContactParams> {
        ensure_any_field(&[
            self.email.is_some(),
            self.fields.is_some(),
            self.list_ids_included.is_some(),
            self.list_ids_excluded.is_some(),
            self.unsubscribed.is_some(),
        ])?;
        Ok(UpdateContactParams {
            email: self.email,
            fields: self.fields,
            list_ids_included: self.list_ids_included,
            list_ids_excluded: self.list_ids_excluded,
            unsubscribed: self.unsubscribed,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactImportStatus {
    Created,
    Started,
    Finished,
    Failed,
}

/// Progress of an asynchronous contact import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactImport {
    pub id: u64,
    pub status: ContactImportStatus,
    pub created_contacts_count: Option<u64>,
    pub updated_contacts_count: Option<u64>,
    pub contacts_over_limit_count: Option<u64>,
}

/// One contact of a bulk import. Existing contacts with the same email are updated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportContactParams {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<ContactFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    list_ids_included: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    list_ids_excluded: Option<Vec<u64>>,
}

impl ImportContactParams {
    pub fn new(email: impl Into<String>) -> Self {
        ImportContactParams {
            email: email.into(),
            fields: None,
            list_ids_included: None,
            list_ids_excluded: None,
        }
    }

    pub fn with_fields(mut self, fields: ContactFields) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_list_ids_included(mut self, list_ids: Vec<u64>) -> Self {
        self.list_ids_included = Some(list_ids);
        self
    }

    pub fn with_list_ids_excluded(mut self, list_ids: Vec<u64>) -> Self {
        self.list_ids_excluded = Some(list_ids);
        self
    }
}

impl RequestParams for ImportContactParams {}
