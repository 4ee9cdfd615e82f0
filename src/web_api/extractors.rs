//! Extractors whose rejections go through [`ApiError`], so a malformed body,
//! query string or path segment gets the same `{"message"}` 400 as every
//! other validation failure.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts,
    },
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::api_error::ApiError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

impl<T> IntoResponse for Json<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct Query<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct Path<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct StatusBody {
        #[allow(dead_code)]
        status: Option<String>,
    }

    async fn extract(request: Request<Body>) -> Result<Json<StatusBody>, ApiError> {
        Json::<StatusBody>::from_request(request, &()).await
    }

    #[tokio::test]
    async fn missing_content_type_is_a_validation_error() {
        let request = Request::builder().method("PATCH").uri("/").body(Body::empty()).unwrap();
        let err = extract(request).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn wrong_field_type_is_a_validation_error() {
        let request = Request::builder()
            .method("PATCH")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"status": 5}"#))
            .unwrap();
        let err = extract(request).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
