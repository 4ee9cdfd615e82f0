use serde::Deserialize;
use serde_json::Value;

use crate::{
    api_error::ApiError,
    comment::NewComment,
    validation::{id_from_json, required_text},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub text: Option<String>,
    pub user_id: Option<Value>,
}

impl CreateCommentRequest {
    pub fn into_new_comment(self, task_id: u64) -> Result<NewComment, ApiError> {
        let (Some(text), Some(user_id)) = (required_text(self.text), id_from_json(self.user_id.as_ref())) else {
            return Err(ApiError::Validation("text and a valid userId are required".to_string()));
        };

        Ok(NewComment { text, task_id, user_id })
    }
}
