use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateTaskStatusRequest {
    pub status: Option<String>,
}
