use super::account_path;
use crate::{
    http::HttpClient,
    models::{
        contacts::{ContactList, ContactListParams},
        DeletedObject,
    },
    params::RequestParams,
    Result,
};

#[derive(Debug, Clone)]
pub struct ContactListsApi {
    client: HttpClient,
    account_id: u64,
}

impl ContactListsApi {
    pub fn new(client: HttpClient, account_id: u64) -> Self {
        ContactListsApi { client, account_id }
    }

    pub fn get_list(&self) -> Result<Vec<ContactList>> {
        self.client.get(&self.api_path(None))?.into_model()
    }

    pub fn get_by_id(&self, list_id: u64) -> Result<ContactList> {
        self.client.get(&self.api_path(Some(list_id)))?.into_model()
    }

    pub fn create(&self, params: &ContactListParams) -> Result<ContactList> {
        self.client
            .post(&self.api_path(None), &params.api_data()?)?
            .into_model()
    }

    /// Rename a list.
    pub fn update(&self, list_id: u64, params: &ContactListParams) -> Result<ContactList> {
        self.client
            .patch(&self.api_path(Some(list_id)), &params.api_data()?)?
            .into_model()
    }

    pub fn delete(&self, list_id: u64) -> Result<DeletedObject> {
        let body = self.client.delete(&self.api_path(Some(list_id)))?;
        Ok(DeletedObject::from_response(&body, list_id))
    }

    fn api_path(&self, list_id: Option<u64>) -> String {
        let path = account_path(self.account_id, "contacts/lists");
        match list_id {
            Some(list_id) => format!("{path}/{list_id}"),
            None => path,
        }
    }
}
