// Requests
pub mod create_task_request;
pub mod update_task_status_request;
pub mod task_list_query;
pub mod user_tasks_query;
pub mod create_project_request;
pub mod create_user_request;
pub mod create_team_request;
pub mod create_comment_request;
pub mod create_attachment_request;
pub mod search_query;

// Responses
pub mod task_details_response;
pub mod team_response;
pub mod search_response;
pub mod board_response;
