//! API groups exposed by [`Client`](crate::Client).
//!
//! Each group bundles the resource clients of one product area and shares one transport between
//! them.
pub mod resources;

pub use resources::{
    AttachmentsApi, ContactFieldsApi, ContactImportsApi, ContactListsApi, ContactsApi,
    InboxesApi, MessagesApi, ProjectsApi, SendingApi, SuppressionsApi, TemplatesApi,
};

use crate::http::HttpClient;

/// Email Testing: sandbox projects, inboxes and the messages they catch.
#[derive(Debug, Clone)]
pub struct TestingApi {
    client: HttpClient,
    account_id: u64,
}

impl TestingApi {
    pub(crate) fn new(client: HttpClient, account_id: u64) -> Self {
        TestingApi { client, account_id }
    }

    pub fn projects(&self) -> ProjectsApi {
        ProjectsApi::new(self.client.clone(), self.account_id)
    }

    pub fn inboxes(&self) -> InboxesApi {
        InboxesApi::new(self.client.clone(), self.account_id)
    }

    pub fn messages(&self) -> MessagesApi {
        MessagesApi::new(self.client.clone(), self.account_id)
    }

    pub fn attachments(&self) -> AttachmentsApi {
        AttachmentsApi::new(self.client.clone(), self.account_id)
    }
}

/// Contacts, their custom fields, lists and bulk imports.
#[derive(Debug, Clone)]
pub struct ContactsBaseApi {
    client: HttpClient,
    account_id: u64,
}

impl ContactsBaseApi {
    pub(crate) fn new(client: HttpClient, account_id: u64) -> Self {
        ContactsBaseApi { client, account_id }
    }

    pub fn contacts(&self) -> ContactsApi {
        ContactsApi::new(self.client.clone(), self.account_id)
    }

    pub fn contact_fields(&self) -> ContactFieldsApi {
        ContactFieldsApi::new(self.client.clone(), self.account_id)
    }

    pub fn contact_lists(&self) -> ContactListsApi {
        ContactListsApi::new(self.client.clone(), self.account_id)
    }

    pub fn contact_imports(&self) -> ContactImportsApi {
        ContactImportsApi::new(self.client.clone(), self.account_id)
    }
}

#[derive(Debug, Clone)]
pub struct EmailTemplatesApi {
    client: HttpClient,
    account_id: u64,
}

impl EmailTemplatesApi {
    pub(crate) fn new(client: HttpClient, account_id: u64) -> Self {
        EmailTemplatesApi { client, account_id }
    }

    pub fn templates(&self) -> TemplatesApi {
        TemplatesApi::new(self.client.clone(), self.account_id)
    }
}

#[derive(Debug, Clone)]
pub struct SuppressionsBaseApi {
    client: HttpClient,
    account_id: u64,
}

impl SuppressionsBaseApi {
    pub(crate) fn new(client: HttpClient, account_id: u64) -> Self {
        SuppressionsBaseApi { client, account_id }
    }

    pub fn suppressions(&self) -> SuppressionsApi {
        SuppressionsApi::new(self.client.clone(), self.account_id)
    }
}
