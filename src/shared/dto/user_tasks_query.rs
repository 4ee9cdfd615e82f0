use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct UserTasksQuery {
    /// Exact match against the task's priority, e.g. `Urgent`.
    pub priority: Option<String>,
}
