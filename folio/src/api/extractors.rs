use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;

use crate::error::FolioError;

/// JSON body extractor whose rejections become [`FolioError::Validation`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(FolioError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for FolioError {
    fn from(rejection: JsonRejection) -> Self {
        map_json_rejection(rejection)
    }
}

fn map_json_rejection(rejection: JsonRejection) -> FolioError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let message = err.body_text();
            if let Some(field) = extract_missing_field(&message) {
                FolioError::Validation(format!("Missing required field: {field}"))
            } else {
                FolioError::Validation(format!("Invalid JSON: {message}"))
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            FolioError::Validation(format!("JSON syntax error: {}", err.body_text()))
        }
        JsonRejection::MissingJsonContentType(_) => {
            FolioError::Validation("Missing `Content-Type: application/json` header".to_string())
        }
        JsonRejection::BytesRejection(_) => {
            FolioError::Validation("Failed to read request body".to_string())
        }
        _ => FolioError::Validation(rejection.body_text()),
    }
}

fn extract_missing_field(message: &str) -> Option<&str> {
    let prefix = "missing field `";
    let start = message.find(prefix)? + prefix.len();
    let remaining = message.get(start..)?;
    let end = remaining.find('`')?;
    remaining.get(..end)
}
