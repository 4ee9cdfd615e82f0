use axum::{extract::State, http::StatusCode};

use crate::{
    api_error::ApiError,
    app_state::SharedState,
    extractors::{Json, Path},
    board::Board,
    board_response::BoardResponse,
    create_project_request::CreateProjectRequest,
    project::Project,
    validation::parse_id,
};

pub struct ProjectController {}

impl ProjectController {
    pub async fn get_all(State(state): State<SharedState>) -> Result<Json<Vec<Project>>, ApiError> {
        state
            .data_context
            .list_projects()
            .map(Json)
            .map_err(ApiError::store("Error retrieving projects"))
    }

    pub async fn create(
        State(state): State<SharedState>,
        Json(body): Json<CreateProjectRequest>,
    ) -> Result<(StatusCode, Json<Project>), ApiError> {
        let project = state
            .data_context
            .create_project(body.into_new_project()?)
            .map_err(ApiError::store("Error creating project"))?;

        tracing::info!(project_id = project.id, name = %project.name, "project created");
        Ok((StatusCode::CREATED, Json(project)))
    }

    /// The project's tasks grouped into board columns.
    pub async fn get_board(
        State(state): State<SharedState>,
        Path(project_id): Path<String>,
    ) -> Result<Json<BoardResponse>, ApiError> {
        let project_id = parse_id(Some(&project_id))
            .ok_or_else(|| ApiError::Validation("Valid projectId is required".to_string()))?;

        let tasks = state
            .data_context
            .list_project_tasks(project_id)
            .map_err(ApiError::store("Error retrieving tasks"))?;

        Ok(Json(BoardResponse::new(project_id, &Board::group(tasks))))
    }
}
