use super::account_path;
use crate::{
    http::HttpClient,
    models::{
        contacts::{ContactField, CreateContactFieldParams, UpdateContactFieldParams},
        DeletedObject,
    },
    params::RequestParams,
    Result,
};

/// Custom field definitions shared by every contact of the account.
#[derive(Debug, Clone)]
pub struct ContactFieldsApi {
    client: HttpClient,
    account_id: u64,
}

impl ContactFieldsApi {
    pub fn new(client: HttpClient, account_id: u64) -> Self {
        ContactFieldsApi { client, account_id }
    }

    pub fn get_list(&self) -> Result<Vec<ContactField>> {
        self.client.get(&self.api_path(None))?.into_model()
    }

    pub fn get_by_id(&self, field_id: u64) -> Result<ContactField> {
        self.client.get(&self.api_path(Some(field_id)))?.into_model()
    }

    pub fn create(&self, params: &CreateContactFieldParams) -> Result<ContactField> {
        self.client
            .post(&self.api_path(None), &params.api_data()?)?
            .into_model()
    }

    pub fn update(&self, field_id: u64, params: &UpdateContactFieldParams) -> Result<ContactField> {
        self.client
            .patch(&self.api_path(Some(field_id)), &params.api_data()?)?
            .into_model()
    }

    pub fn delete(&self, field_id: u64) -> Result<DeletedObject> {
        let body = self.client.delete(&self.api_path(Some(field_id)))?;
        Ok(DeletedObject::from_response(&body, field_id))
    }

    fn api_path(&self, field_id: Option<u64>) -> String {
        let path = account_path(self.account_id, "contacts/fields");
        match field_id {
            Some(field_id) => format!("{path}/{field_id}"),
            None => path,
        }
    }
}
