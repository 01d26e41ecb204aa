use serde::{Deserialize, Serialize};

use super::inboxes::{Inbox, Permissions};
use crate::params::RequestParams;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareLinks {
    pub admin: String,
    pub viewer: String,
}

/// A sandbox project grouping inboxes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub share_links: ShareLinks,
    #[serde(default)]
    pub inboxes: Vec<Inbox>,
    pub permissions: Permissions,
}

/// Body of project create and update calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectParams {
    name: String,
}

impl ProjectParams {
    pub fn new(name: impl Into<String>) -> Self {
        ProjectParams { name: name.into() }
    }
}

impl RequestParams for ProjectParams {}
