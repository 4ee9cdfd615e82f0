use serde::Deserialize;
use serde_json::Value;

use crate::{
    api_error::ApiError,
    team::NewTeam,
    validation::{optional_id, required_text},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    pub team_name: Option<String>,
    pub product_owner_user_id: Option<Value>,
    pub project_manager_user_id: Option<Value>,
}

impl CreateTeamRequest {
    pub fn into_new_team(self) -> Result<NewTeam, ApiError> {
        let team_name = required_text(self.team_name)
            .ok_or_else(|| ApiError::Validation("teamName is required".to_string()))?;

        Ok(NewTeam {
            team_name,
            product_owner_user_id: optional_id("productOwnerUserId", self.product_owner_user_id)?,
            project_manager_user_id: optional_id("projectManagerUserId", self.project_manager_user_id)?,
        })
    }
}
