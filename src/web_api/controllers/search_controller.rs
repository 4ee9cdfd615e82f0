use axum::extract::State;

use crate::{
    api_error::ApiError,
    app_state::SharedState,
    extractors::{Json, Query},
    search_query::SearchQuery,
    search_response::SearchResponse,
    validation::required_text,
};

pub struct SearchController {}

impl SearchController {
    pub async fn search(
        State(state): State<SharedState>,
        Query(query): Query<SearchQuery>,
    ) -> Result<Json<SearchResponse>, ApiError> {
        let query = required_text(query.query)
            .ok_or_else(|| ApiError::Validation("query is required".to_string()))?;

        state
            .data_context
            .search(&query)
            .map(Json)
            .map_err(ApiError::store("Error performing search"))
    }
}
