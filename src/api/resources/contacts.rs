use super::account_path;
use crate::{
    http::HttpClient,
    models::{
        contacts::{Contact, ContactEnvelope, CreateContactParams, UpdateContactParams},
        DeletedObject,
    },
    params::wrap,
    Result,
};

/// Marketing contacts, addressed by id or by email.
#[derive(Debug, Clone)]
pub struct ContactsApi {
    client: HttpClient,
    account_id: u64,
}

impl ContactsApi {
    pub fn new(client: HttpClient, account_id: u64) -> Self {
        ContactsApi { client, account_id }
    }

    pub fn get_by_id(&self, id_or_email: &str) -> Result<Contact> {
        let envelope: ContactEnvelope = self
            .client
            .get(&self.api_path(Some(id_or_email)))?
            .into_model()?;
        Ok(envelope.data)
    }

    pub fn create(&self, params: &CreateContactParams) -> Result<Contact> {
        let envelope: ContactEnvelope = self
            .client
            .post(&self.api_path(None), &wrap("contact", params)?)?
            .into_model()?;
        Ok(envelope.data)
    }

    pub fn update(&self, id_or_email: &str, params: &UpdateContactParams) -> Result<Contact> {
        let envelope: ContactEnvelope = self
            .client
            .patch(&self.api_path(Some(id_or_email)), &wrap("contact", params)?)?
            .into_model()?;
        Ok(envelope.data)
    }

    pub fn delete(&self, id_or_email: &str) -> Result<DeletedObject> {
        let body = self.client.delete(&self.api_path(Some(id_or_email)))?;
        Ok(DeletedObject::from_response(&body, id_or_email))
    }

    fn api_path(&self, id_or_email: Option<&str>) -> String {
        let path = account_path(self.account_id, "contacts");
        match id_or_email {
            Some(id_or_email) => format!("{path}/{}", urlencoding::encode(id_or_email)),
            None => path,
        }
    }
}
