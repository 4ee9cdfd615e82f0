use serde::Deserialize;
use serde_json::Value;

use crate::{
    api_error::ApiError,
    attachment::NewAttachment,
    validation::{id_from_json, non_blank, required_text},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttachmentRequest {
    #[serde(rename = "fileURL")]
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub uploaded_by_id: Option<Value>,
}

impl CreateAttachmentRequest {
    pub fn into_new_attachment(self, task_id: u64) -> Result<NewAttachment, ApiError> {
        let (Some(file_url), Some(uploaded_by_id)) =
            (required_text(self.file_url), id_from_json(self.uploaded_by_id.as_ref()))
        else {
            return Err(ApiError::Validation("fileURL and a valid uploadedById are required".to_string()));
        };

        Ok(NewAttachment {
            file_url,
            file_name: non_blank(self.file_name),
            task_id,
            uploaded_by_id,
        })
    }
}
