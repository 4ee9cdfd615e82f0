use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: u64,
    #[serde(rename = "fileURL")]
    pub file_url: String,
    pub file_name: Option<String>,
    pub task_id: u64,
    pub uploaded_by_id: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAttachment {
    pub file_url: String,
    pub file_name: Option<String>,
    pub task_id: u64,
    pub uploaded_by_id: u64,
}

impl NewAttachment {
    pub fn with_id(self, id: u64) -> Attachment {
        Attachment {
            id,
            file_url: self.file_url,
            file_name: self.file_name,
            task_id: self.task_id,
            uploaded_by_id: self.uploaded_by_id,
        }
    }
}
