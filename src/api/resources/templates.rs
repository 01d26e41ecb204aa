use super::account_path;
use crate::{
    http::HttpClient,
    models::{
        templates::{CreateEmailTemplateParams, EmailTemplate, UpdateEmailTemplateParams},
        DeletedObject,
    },
    params::wrap,
    Result,
};

#[derive(Debug, Clone)]
pub struct TemplatesApi {
    client: HttpClient,
    account_id: u64,
}

impl TemplatesApi {
    pub fn new(client: HttpClient, account_id: u64) -> Self {
        TemplatesApi { client, account_id }
    }

    pub fn get_list(&self) -> Result<Vec<EmailTemplate>> {
        self.client.get(&self.api_path(None))?.into_model()
    }

    pub fn get_by_id(&self, template_id: u64) -> Result<EmailTemplate> {
        self.client.get(&self.api_path(Some(template_id)))?.into_model()
    }

    pub fn create(&self, params: &CreateEmailTemplateParams) -> Result<EmailTemplate> {
        self.client
            .post(&self.api_path(None), &wrap("email_template", params)?)?
            .into_model()
    }

    pub fn update(
        &self,
        template_id: u64,
        params: &UpdateEmailTemplateParams,
    ) -> Result<EmailTemplate> {
        self.client
            .patch(
                &self.api_path(Some(template_id)),
                &wrap("email_template", params)?,
            )?
            .into_model()
    }

    pub fn delete(&self, template_id: u64) -> Result<DeletedObject> {
        let body = self.client.delete(&self.api_path(Some(template_id)))?;
        Ok(DeletedObject::from_response(&body, template_id))
    }

    fn api_path(&self, template_id: Option<u64>) -> String {
        let path = account_path(self.account_id, "email_templates");
        match template_id {
            Some(template_id) => format!("{path}/{template_id}"),
            None => path,
        }
    }
}
