use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: u64,
    pub username: String,
    pub email: String,
    pub profile_picture_url: Option<String>,
    pub team_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub profile_picture_url: Option<String>,
    pub team_id: Option<u64>,
}

impl NewUser {
    pub fn with_id(self, user_id: u64) -> User {
        User {
            user_id,
            username: self.username,
            email: self.email,
            profile_picture_url: self.profile_picture_url,
            team_id: self.team_id,
        }
    }
}
