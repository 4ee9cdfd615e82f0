use serde::Serialize;

use crate::{project::Project, task::Task, user::User};

#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResponse {
    pub tasks: Vec<Task>,
    pub projects: Vec<Project>,
    pub users: Vec<User>,
}
