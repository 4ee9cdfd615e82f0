use serde::Serialize;

use crate::{board::Board, task::Task, task_status::TaskStatus};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardColumnResponse {
    pub status: TaskStatus,
    pub count: usize,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    pub project_id: u64,
    pub columns: Vec<BoardColumnResponse>,
    /// Tasks whose status matches no column.
    pub unplaced: usize,
}

impl BoardResponse {
    pub fn new(project_id: u64, board: &Board) -> Self {
        BoardResponse {
            project_id,
            columns: board
                .columns()
                .iter()
                .map(|column| BoardColumnResponse {
                    status: column.status,
                    count: column.tasks.len(),
                    tasks: column.tasks.clone(),
                })
                .collect(),
            unplaced: board.unplaced(),
        }
    }
}
