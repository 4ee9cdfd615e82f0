use axum::{extract::State, http::StatusCode};

use crate::{
    api_error::ApiError,
    app_state::SharedState,
    extractors::{Json, Path, Query},
    attachment::Attachment,
    comment::Comment,
    create_attachment_request::CreateAttachmentRequest,
    create_comment_request::CreateCommentRequest,
    create_task_request::CreateTaskRequest,
    task::Task,
    task_details_response::TaskDetailsResponse,
    task_list_query::TaskListQuery,
    update_task_status_request::UpdateTaskStatusRequest,
    user_tasks_query::UserTasksQuery,
    validation::{non_blank, parse_id},
};

pub struct TaskController {}

impl TaskController {
    pub async fn get_tasks(
        State(state): State<SharedState>,
        Query(query): Query<TaskListQuery>,
    ) -> Result<Json<Vec<TaskDetailsResponse>>, ApiError> {
        let project_id = parse_id(query.project_id.as_deref())
            .ok_or_else(|| ApiError::Validation("Valid projectId query param is required".to_string()))?;

        state
            .data_context
            .project_task_details(project_id)
            .map(Json)
            .map_err(ApiError::store("Error retrieving tasks"))
    }

    pub async fn create(
        State(state): State<SharedState>,
        Json(body): Json<CreateTaskRequest>,
    ) -> Result<(StatusCode, Json<Task>), ApiError> {
        let new_task = body.into_new_task()?;
        let task = state
            .data_context
            .create_task(new_task)
            .map_err(ApiError::store("Error creating task"))?;

        tracing::info!(task_id = task.id, project_id = task.project_id, "task created");
        Ok((StatusCode::CREATED, Json(task)))
    }

    pub async fn update_status(
        State(state): State<SharedState>,
        Path(task_id): Path<String>,
        Json(body): Json<UpdateTaskStatusRequest>,
    ) -> Result<Json<Task>, ApiError> {
        let (Some(task_id), Some(status)) = (parse_id(Some(&task_id)), non_blank(body.status)) else {
            return Err(ApiError::Validation("Valid taskId and status are required".to_string()));
        };

        let task = state
            .data_context
            .update_task_status(task_id, &status)
            .map_err(ApiError::store("Error updating task"))?;

        tracing::info!(task_id, status = %task.status, "task status updated");
        Ok(Json(task))
    }

    pub async fn get_user_tasks(
        State(state): State<SharedState>,
        Path(user_id): Path<String>,
        Query(query): Query<UserTasksQuery>,
    ) -> Result<Json<Vec<TaskDetailsResponse>>, ApiError> {
        let user_id = parse_id(Some(&user_id))
            .ok_or_else(|| ApiError::Validation("Valid userId is required".to_string()))?;
        let priority = non_blank(query.priority);

        state
            .data_context
            .user_task_details(user_id, priority.as_deref())
            .map(Json)
            .map_err(ApiError::store("Error retrieving user's tasks"))
    }

    pub async fn add_comment(
        State(state): State<SharedState>,
        Path(task_id): Path<String>,
        Json(body): Json<CreateCommentRequest>,
    ) -> Result<(StatusCode, Json<Comment>), ApiError> {
        let task_id = parse_id(Some(&task_id))
            .ok_or_else(|| ApiError::Validation("Valid taskId is required".to_string()))?;
        let comment = body.into_new_comment(task_id)?;

        state
            .data_context
            .create_comment(comment)
            .map(|comment| (StatusCode::CREATED, Json(comment)))
            .map_err(ApiError::store("Error creating comment"))
    }

    pub async fn add_attachment(
        State(state): State<SharedState>,
        Path(task_id): Path<String>,
        Json(body): Json<CreateAttachmentRequest>,
    ) -> Result<(StatusCode, Json<Attachment>), ApiError> {
        let task_id = parse_id(Some(&task_id))
            .ok_or_else(|| ApiError::Validation("Valid taskId is required".to_string()))?;
        let attachment = body.into_new_attachment(task_id)?;

        state
            .data_context
            .create_attachment(attachment)
            .map(|attachment| (StatusCode::CREATED, Json(attachment)))
            .map_err(ApiError::store("Error creating attachment"))
    }
}
