use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task_status::TaskStatus;

/// A unit of work on a project board.
///
/// `status` is stored verbatim. Writes are not checked against the four
/// board columns, so a task may carry a status the board cannot place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: Option<String>,
    /// Comma-joined, as the client sends it.
    pub tags: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
    pub points: Option<i32>,
    pub project_id: u64,
    pub author_user_id: u64,
    pub assigned_user_id: Option<u64>,
}

/// A validated task that has not been given an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: Option<String>,
    pub tags: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
    pub points: Option<i32>,
    pub project_id: u64,
    pub author_user_id: u64,
    pub assigned_user_id: Option<u64>,
}

impl NewTask {
    pub fn with_id(self, id: u64) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            status: self.status,
            priority: self.priority,
            tags: self.tags,
            start_date: self.start_date,
            due_date: self.due_date,
            points: self.points,
            project_id: self.project_id,
            author_user_id: self.author_user_id,
            assigned_user_id: self.assigned_user_id,
        }
    }
}

impl Task {
    /// The board column this task belongs in, if any.
    pub fn board_status(&self) -> Option<TaskStatus> {
        self.status.parse().ok()
    }

    /// Tags split on commas, trimmed, empties skipped.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// True when the user wrote the task or is assigned to it.
    pub fn involves_user(&self, user_id: u64) -> bool {
        self.author_user_id == user_id || self.assigned_user_id == Some(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(status: &str, tags: Option<&str>) -> Task {
        NewTask {
            title: "Write release notes".into(),
            description: None,
            status: status.into(),
            priority: None,
            tags: tags.map(String::from),
            start_date: None,
            due_date: None,
            points: None,
            project_id: 1,
            author_user_id: 1,
            assigned_user_id: Some(2),
        }
        .with_id(7)
    }

    #[test]
    fn board_status_matches_known_columns_only() {
        assert_eq!(task("Under Review", None).board_status(), Some(TaskStatus::UnderReview));
        assert_eq!(task("Blocked", None).board_status(), None);
    }

    #[test]
    fn tag_list_splits_and_trims() {
        let t = task("To Do", Some("backend, api,,  docs "));
        assert_eq!(t.tag_list(), vec!["backend", "api", "docs"]);
        assert!(task("To Do", None).tag_list().is_empty());
    }

    #[test]
    fn involves_author_or_assignee() {
        let t = task("To Do", None);
        assert!(t.involves_user(1));
        assert!(t.involves_user(2));
        assert!(!t.involves_user(3));
    }

    #[test]
    fn serializes_camel_case_with_nulls() {
        let json = serde_json::to_value(task("To Do", None)).unwrap();
        assert_eq!(json["projectId"], 1);
        assert_eq!(json["assignedUserId"], 2);
        assert!(json["dueDate"].is_null());
    }
}
