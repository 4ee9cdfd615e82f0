use axum::{extract::State, http::StatusCode};

use crate::{
    api_error::ApiError,
    app_state::SharedState,
    extractors::{Json, Path},
    create_user_request::CreateUserRequest,
    user::User,
    validation::parse_id,
};

pub struct UserController {}

impl UserController {
    pub async fn get(
        State(state): State<SharedState>,
        Path(user_id): Path<String>,
    ) -> Result<Json<User>, ApiError> {
        let user_id = parse_id(Some(&user_id))
            .ok_or_else(|| ApiError::Validation("Valid userId is required".to_string()))?;

        match state.data_context.get_user(user_id) {
            Ok(Some(user)) => Ok(Json(user)),
            Ok(None) => Err(ApiError::NotFound("User not found".to_string())),
            Err(e) => Err(ApiError::store("Error retrieving user")(e)),
        }
    }

    pub async fn get_all(State(state): State<SharedState>) -> Result<Json<Vec<User>>, ApiError> {
        state
            .data_context
            .list_users()
            .map(Json)
            .map_err(ApiError::store("Error retrieving users"))
    }

    pub async fn add(
        State(state): State<SharedState>,
        Json(body): Json<CreateUserRequest>,
    ) -> Result<(StatusCode, Json<User>), ApiError> {
        let user = state
            .data_context
            .create_user(body.into_new_user()?)
            .map_err(ApiError::store("Error creating user"))?;

        tracing::info!(user_id = user.user_id, username = %user.username, "user created");
        Ok((StatusCode::CREATED, Json(user)))
    }
}
