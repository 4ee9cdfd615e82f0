use axum::{Router, routing::get};
use crate::{app_state::SharedState, search_controller::SearchController};

pub const ROUTER_PATH: &str = "/search";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(ROUTER_PATH, get(SearchController::search))
        .with_state(app_state)
}
