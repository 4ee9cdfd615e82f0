//! Kanban board reconciliation.
//!
//! A board is a projection of a flat task list onto the four status columns.
//! It holds no state of its own beyond that list: every change goes to the
//! store first and the columns are rebuilt from what the store returns.

use crate::{data_context::DataContext, store_error::StoreError, task::Task, task_status::TaskStatus};

/// The one mutation a drop gesture is allowed to make.
pub trait StatusUpdater {
    fn update_status(&self, task_id: u64, status: TaskStatus) -> Result<Task, StoreError>;
}

impl StatusUpdater for DataContext {
    fn update_status(&self, task_id: u64, status: TaskStatus) -> Result<Task, StoreError> {
        self.update_task_status(task_id, status.as_str())
    }
}

/// Tasks whose status is exactly `status`, in input order.
pub fn column(tasks: &[Task], status: TaskStatus) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.board_status() == Some(status))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardColumn {
    pub status: TaskStatus,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    tasks: Vec<Task>,
    columns: Vec<BoardColumn>,
}

impl Board {
    pub fn group(tasks: Vec<Task>) -> Board {
        let columns = TaskStatus::ALL
            .into_iter()
            .map(|status| BoardColumn { status, tasks: column(&tasks, status) })
            .collect();
        Board { tasks, columns }
    }

    /// Always four, in `TaskStatus::ALL` order.
    pub fn columns(&self) -> &[BoardColumn] {
        &self.columns
    }

    pub fn column(&self, status: TaskStatus) -> &[Task] {
        self.columns
            .iter()
            .find(|column| column.status == status)
            .map(|column| column.tasks.as_slice())
            .unwrap_or_default()
    }

    /// Number of tasks with a status no column accepts.
    pub fn unplaced(&self) -> usize {
        self.tasks.len() - self.columns.iter().map(|column| column.tasks.len()).sum::<usize>()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Move a task to `target` with exactly one status update.
    ///
    /// The board changes only after the store answers, by swapping in the
    /// returned task at its existing position and regrouping. On error the
    /// board is left as it was.
    pub fn drop_task<U: StatusUpdater>(
        &mut self,
        updater: &U,
        task_id: u64,
        target: TaskStatus,
    ) -> Result<Task, StoreError> {
        let updated = updater.update_status(task_id, target)?;

        let mut tasks = std::mem::take(&mut self.tasks);
        match tasks.iter_mut().find(|task| task.id == updated.id) {
            Some(slot) => *slot = updated.clone(),
            None => tasks.push(updated.clone()),
        }
        *self = Board::group(tasks);
        Ok(updated)
    }
}
