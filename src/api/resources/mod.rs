//! One client per remote resource family.
//!
//! Resource clients are thin: they build the path, hand the call to [`HttpClient`] and map the
//! decoded body onto a model. They hold a clone of the transport and are cheap to create.
//!
//! [`HttpClient`]: crate::HttpClient
mod attachments;
mod contact_fields;
mod contact_imports;
mod contact_lists;
mod contacts;
mod inboxes;
mod messages;
mod projects;
mod sending;
mod suppressions;
mod templates;

pub use attachments::AttachmentsApi;
pub use contact_fields::ContactFieldsApi;
pub use contact_imports::ContactImportsApi;
pub use contact_lists::ContactListsApi;
pub use contacts::ContactsApi;
pub use inboxes::InboxesApi;
pub use messages::MessagesApi;
pub use projects::ProjectsApi;
pub use sending::SendingApi;
pub use suppressions::SuppressionsApi;
pub use templates::TemplatesApi;

/// `/api/accounts/{account_id}/{resource}`
fn account_path(account_id: u64, resource: &str) -> String {
    format!("/api/accounts/{account_id}/{resource}")
}
