use super::account_path;
use crate::{
    http::HttpClient,
    models::{
        projects::{Project, ProjectParams},
        DeletedObject,
    },
    params::wrap,
    Result,
};

#[derive(Debug, Clone)]
pub struct ProjectsApi {
    client: HttpClient,
    account_id: u64,
}

impl ProjectsApi {
    pub fn new(client: HttpClient, account_id: u64) -> Self {
        ProjectsApi { client, account_id }
    }

    /// All projects of the account, with their inboxes.
    pub fn get_list(&self) -> Result<Vec<Project>> {
        self.client.get(&self.api_path(None))?.into_model()
    }

    pub fn get_by_id(&self, project_id: u64) -> Result<Project> {
        self.client.get(&self.api_path(Some(project_id)))?.into_model()
    }

    pub fn create(&self, params: &ProjectParams) -> Result<Project> {
        self.client
            .post(&self.api_path(None), &wrap("project", params)?)?
            .into_model()
    }

    pub fn update(&self, project_id: u64, params: &ProjectParams) -> Result<Project> {
        self.client
            .patch(&self.api_path(Some(project_id)), &wrap("project", params)?)?
            .into_model()
    }

    /// Delete a project together with all of its inboxes.
    pub fn delete(&self, project_id: u64) -> Result<DeletedObject> {
        let body = self.client.delete(&self.api_path(Some(project_id)))?;
        Ok(DeletedObject::from_response(&body, project_id))
    }

    fn api_path(&self, project_id: Option<u64>) -> String {
        let path = account_path(self.account_id, "projects");
        match project_id {
            Some(project_id) => format!("{path}/{project_id}"),
            None => path,
        }
    }
}
