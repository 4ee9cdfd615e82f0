use axum::{Router, routing::get};
use crate::{app_state::SharedState, project_controller::ProjectController};

pub const ROUTER_PATH: &str = "/projects";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(ROUTER_PATH, get(ProjectController::get_all).post(ProjectController::create))
        .route(format!("{}/:projectId/board", ROUTER_PATH).as_str(), get(ProjectController::get_board))
        .with_state(app_state)
}
