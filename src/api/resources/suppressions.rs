use super::account_path;
use crate::{
    http::HttpClient,
    models::{suppressions::Suppression, DeletedObject},
    Result,
};

#[derive(Debug, Clone)]
pub struct SuppressionsApi {
    client: HttpClient,
    account_id: u64,
}

impl SuppressionsApi {
    pub fn new(client: HttpClient, account_id: u64) -> Self {
        SuppressionsApi { client, account_id }
    }

    /// List suppressions, optionally only those for `email`. The service returns at most 1000.
    pub fn get_list(&self, email: Option<&str>) -> Result<Vec<Suppression>> {
        let query: Vec<(&str, String)> = email
            .map(|email| vec![("email", email.to_owned())])
            .unwrap_or_default();
        self.client
            .get_with_query(&self.api_path(None), &query)?
            .into_model()
    }

    /// Lift a suppression. Mailtrap sends to the address again until it is suppressed anew.
    pub fn delete(&self, suppression_id: &str) -> Result<DeletedObject> {
        let body = self.client.delete(&self.api_path(Some(suppression_id)))?;
        Ok(DeletedObject::from_response(&body, suppression_id))
    }

    fn api_path(&self, suppression_id: Option<&str>) -> String {
        let path = account_path(self.account_id, "suppressions");
        match suppression_id {
            Some(suppression_id) => format!("{path}/{}", urlencoding::encode(suppression_id)),
            None => path,
        }
    }
}
