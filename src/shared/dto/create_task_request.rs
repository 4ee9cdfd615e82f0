use serde::Deserialize;
use serde_json::Value;

use crate::{
    api_error::ApiError,
    task::NewTask,
    task_status::TaskStatus,
    validation::{id_from_json, non_blank, optional_id, parse_timestamp, required_text},
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub tags: Option<String>,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
    pub points: Option<i32>,
    pub project_id: Option<Value>,
    pub author_user_id: Option<Value>,
    pub assigned_user_id: Option<Value>,
}

impl CreateTaskRequest {
    /// Checks required fields and coerces identifiers. Whether the referenced
    /// project and users exist is left to the data context.
    pub fn into_new_task(self) -> Result<NewTask, ApiError> {
        let project_id = id_from_json(self.project_id.as_ref());
        let author_user_id = id_from_json(self.author_user_id.as_ref());
        let (Some(project_id), Some(author_user_id)) = (project_id, author_user_id) else {
            return Err(ApiError::Validation(
                "projectId and authorUserId must be valid numbers".to_string(),
            ));
        };

        let title = required_text(self.title)
            .ok_or_else(|| ApiError::Validation("title is required".to_string()))?;

        Ok(NewTask {
            title,
            description: non_blank(self.description),
            status: non_blank(self.status).unwrap_or_else(|| TaskStatus::default().to_string()),
            priority: non_blank(self.priority),
            tags: non_blank(self.tags),
            start_date: parse_timestamp("startDate", self.start_date)?,
            due_date: parse_timestamp("dueDate", self.due_date)?,
            points: self.points,
            project_id,
            author_user_id,
            assigned_user_id: optional_id("assignedUserId", self.assigned_user_id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> CreateTaskRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn accepts_numeric_strings_and_defaults_status() {
        let task = request(json!({
            "title": "Draft roadmap",
            "projectId": "3",
            "authorUserId": 1,
        }))
        .into_new_task()
        .unwrap();

        assert_eq!(task.project_id, 3);
        assert_eq!(task.author_user_id, 1);
        assert_eq!(task.status, "To Do");
        assert_eq!(task.assigned_user_id, None);
    }

    #[test]
    fn missing_author_is_rejected() {
        let err = request(json!({ "title": "Orphan", "projectId": 1 }))
            .into_new_task()
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn zero_or_negative_ids_are_rejected() {
        for bad in [json!(0), json!(-4), json!("abc"), json!(1.5)] {
            let err = request(json!({ "title": "x", "projectId": bad, "authorUserId": 1 }))
                .into_new_task()
                .unwrap_err();
            assert!(matches!(err, ApiError::Validation(_)));
        }
    }

    #[test]
    fn blank_title_is_rejected() {
        let err = request(json!({ "title": "   ", "projectId": 1, "authorUserId": 1 }))
            .into_new_task()
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn due_date_before_start_date_is_accepted() {
        let task = request(json!({
            "title": "Backwards",
            "projectId": 1,
            "authorUserId": 1,
            "startDate": "2024-05-10T00:00:00Z",
            "dueDate": "2024-05-01",
        }))
        .into_new_task()
        .unwrap();
        assert!(task.due_date < task.start_date);
    }

    #[test]
    fn malformed_date_is_rejected() {
        let err = request(json!({
            "title": "Bad date",
            "projectId": 1,
            "authorUserId": 1,
            "dueDate": "next tuesday",
        }))
        .into_new_task()
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
