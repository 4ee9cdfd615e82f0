pub mod app_state;
pub mod settings;

pub mod task_status;
pub mod task_priority;
pub mod task;
pub mod project;
pub mod user;
pub mod team;
pub mod comment;
pub mod attachment;
