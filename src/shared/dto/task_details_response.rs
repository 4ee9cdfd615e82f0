use serde::Serialize;

use crate::{attachment::Attachment, comment::Comment, task::Task, user::User};

/// A task with its relations attached.
///
/// Project listings carry comments and attachments; user listings only the
/// people, so those two fields are left out of the JSON entirely.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetailsResponse {
    #[serde(flatten)]
    pub task: Task,
    pub author: Option<User>,
    pub assignee: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
}
