use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: u64,
    pub team_name: String,
    pub product_owner_user_id: Option<u64>,
    pub project_manager_user_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTeam {
    pub team_name: String,
    pub product_owner_user_id: Option<u64>,
    pub project_manager_user_id: Option<u64>,
}

impl NewTeam {
    pub fn with_id(self, id: u64) -> Team {
        Team {
            id,
            team_name: self.team_name,
            product_owner_user_id: self.product_owner_user_id,
            project_manager_user_id: self.project_manager_user_id,
        }
    }
}
