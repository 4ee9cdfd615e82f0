use serde::Serialize;

use crate::team::Team;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    #[serde(flatten)]
    pub team: Team,
    pub product_owner_username: Option<String>,
    pub project_manager_username: Option<String>,
}
