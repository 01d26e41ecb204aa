use serde_json::{Map, Value};

use super::account_path;
use crate::{
    http::HttpClient,
    models::contacts::{ContactImport, ImportContactParams},
    params::RequestParams,
    Error, Result,
};

#[derive(Debug, Clone)]
pub struct ContactImportsApi {
    client: HttpClient,
    account_id: u64,
}

impl ContactImportsApi {
    /// Largest batch the service accepts in one import.
    pub const MAX_CONTACTS: usize = 50_000;

    pub fn new(client: HttpClient, account_id: u64) -> Self {
        ContactImportsApi { client, account_id }
    }

    /// Start an asynchronous import. Contacts whose email already exists are updated.
    ///
    /// Poll [`get_by_id`](Self::get_by_id) with the returned id to follow progress.
    pub fn import_contacts(&self, contacts: &[ImportContactParams]) -> Result<ContactImport> {
        if contacts.len() > Self::MAX_CONTACTS {
            return Err(Error::validation(format!(
                "at most {} contacts can be imported per request, got {}",
                Self::MAX_CONTACTS,
                contacts.len()
            )));
        }

        let contacts = contacts
            .iter()
            .map(|contact| contact.api_data().map(Value::Object))
            .collect::<Result<Vec<_>>>()?;
        let mut body = Map::new();
        body.insert("contacts".to_owned(), Value::Array(contacts));

        self.client.post(&self.api_path(None), &body)?.into_model()
    }

    pub fn get_by_id(&self, import_id: u64) -> Result<ContactImport> {
        self.client.get(&self.api_path(Some(import_id)))?.into_model()
    }

    fn api_path(&self, import_id: Option<u64>) -> String {
        let path = account_path(self.account_id, "contacts/imports");
        match import_id {
            Some(import_id) => format!("{path}/{import_id}"),
            None => path,
        }
    }
}
