use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for FolioError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<&str> = field_errors.keys().map(|k| k.as_ref()).collect();
        fields.sort_unstable();
        FolioError::Validation(format!("Invalid fields: {}", fields.join(", ")))
    }
}

impl IntoResponse for FolioError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            FolioError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            FolioError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            FolioError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            FolioError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
