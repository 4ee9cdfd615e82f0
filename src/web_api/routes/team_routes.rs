use axum::{Router, routing::get};
use crate::{app_state::SharedState, team_controller::TeamController};

pub const ROUTER_PATH: &str = "/teams";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(ROUTER_PATH, get(TeamController::get_all).post(TeamController::create))
        .with_state(app_state)
}
