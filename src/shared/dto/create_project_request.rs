use serde::Deserialize;

use crate::{
    api_error::ApiError,
    project::NewProject,
    validation::{non_blank, parse_timestamp, required_text},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl CreateProjectRequest {
    pub fn into_new_project(self) -> Result<NewProject, ApiError> {
        let name = required_text(self.name)
            .ok_or_else(|| ApiError::Validation("name is required".to_string()))?;

        Ok(NewProject {
            name,
            description: non_blank(self.description),
            start_date: parse_timestamp("startDate", self.start_date)?,
            end_date: parse_timestamp("endDate", self.end_date)?,
        })
    }
}
