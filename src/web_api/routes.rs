pub mod health_routes;
pub mod task_routes;
pub mod project_routes;
pub mod user_routes;
pub mod team_routes;
pub mod search_routes;

use axum::Router;
use crate::app_state::SharedState;

pub fn map_routes(app_state: SharedState) -> Router {
    Router::new()
        .merge(health_routes::get_router())
        .merge(task_routes::get_router(app_state.clone()))
        .merge(project_routes::get_router(app_state.clone()))
        .merge(user_routes::get_router(app_state.clone()))
        .merge(team_routes::get_router(app_state.clone()))
        .merge(search_routes::get_router(app_state))
}
