use serde::Deserialize;
use serde_json::Value;

use crate::{
    api_error::ApiError,
    user::NewUser,
    validation::{non_blank, optional_id, required_text},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub profile_picture_url: Option<String>,
    pub team_id: Option<Value>,
}

impl CreateUserRequest {
    pub fn into_new_user(self) -> Result<NewUser, ApiError> {
        let (Some(username), Some(email)) = (required_text(self.username), required_text(self.email)) else {
            return Err(ApiError::Validation("username and email are required".to_string()));
        };

        Ok(NewUser {
            username,
            email,
            profile_picture_url: non_blank(self.profile_picture_url),
            team_id: optional_id("teamId", self.team_id)?,
        })
    }
}
