use axum::{Router, routing::{get, patch, post}};
use crate::{app_state::SharedState, task_controller::TaskController};

pub const ROUTER_PATH: &str = "/tasks";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(ROUTER_PATH, get(TaskController::get_tasks).post(TaskController::create))
        .route(format!("{}/user/:userId", ROUTER_PATH).as_str(), get(TaskController::get_user_tasks))
        .route(format!("{}/:taskId/status", ROUTER_PATH).as_str(), patch(TaskController::update_status))
        .route(format!("{}/:taskId/comments", ROUTER_PATH).as_str(), post(TaskController::add_comment))
        .route(format!("{}/:taskId/attachments", ROUTER_PATH).as_str(), post(TaskController::add_attachment))
        .with_state(app_state)
}
