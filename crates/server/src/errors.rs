use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::debug;

/// JSON error body: `{"status": 404, "error": "Not Found", "message": "..."}`
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "status": self.status.as_u16(),
            "error": self.error,
            "message": self.message,
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        debug!(err = %e, "post request rejected");
        let message = Some(e.detail().to_string());
        match e {
            ServiceError::NotFound(_) => JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", message),
            ServiceError::Conflict(_) => JsonApiError::new(StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable Entity", message),
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status() {
        let e: JsonApiError = ServiceError::not_found("Post").into();
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        assert_eq!(e.message.as_deref(), Some("Post not found."));

        let e: JsonApiError = ServiceError::conflict("Post title").into();
        assert_eq!(e.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(e.message.as_deref(), Some("Post title already exists."));
    }

    #[test]
    fn message_carries_detail_without_kind_prefix() {
        let err = ServiceError::NotFound("Post 9 is gone.".into());
        let e: JsonApiError = err.clone().into();
        assert_eq!(e.message.as_deref(), Some(err.detail()));
        assert!(!e.message.unwrap_or_default().starts_with("not found:"));
    }
}
