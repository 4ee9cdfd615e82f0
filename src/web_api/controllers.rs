pub mod health_controller;
pub mod task_controller;
pub mod project_controller;
pub mod user_controller;
pub mod team_controller;
pub mod search_controller;
