use axum::{extract::State, http::StatusCode};

use crate::{
    api_error::ApiError,
    app_state::SharedState,
    extractors::Json,
    create_team_request::CreateTeamRequest,
    team::Team,
    team_response::TeamResponse,
};

pub struct TeamController {}

impl TeamController {
    pub async fn get_all(State(state): State<SharedState>) -> Result<Json<Vec<TeamResponse>>, ApiError> {
        state
            .data_context
            .list_teams()
            .map(Json)
            .map_err(ApiError::store("Error retrieving teams"))
    }

    pub async fn create(
        State(state): State<SharedState>,
        Json(body): Json<CreateTeamRequest>,
    ) -> Result<(StatusCode, Json<Team>), ApiError> {
        state
            .data_context
            .create_team(body.into_new_team()?)
            .map(|team| (StatusCode::CREATED, Json(team)))
            .map_err(ApiError::store("Error creating team"))
    }
}
