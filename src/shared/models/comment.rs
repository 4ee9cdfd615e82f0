use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub text: String,
    pub task_id: u64,
    pub user_id: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub text: String,
    pub task_id: u64,
    pub user_id: u64,
}

impl NewComment {
    pub fn with_id(self, id: u64) -> Comment {
        Comment {
            id,
            text: self.text,
            task_id: self.task_id,
            user_id: self.user_id,
        }
    }
}
