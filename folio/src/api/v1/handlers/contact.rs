use axum::extract::State;

use crate::api::extractors::AppJson;
use crate::api::v1::dto::{ContactRequest, ContactResponse};
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::AppState;
use crate::models::ContactSubmission;

/// `POST /api/v1/contact`
#[utoipa::path(
    post,
    path = "/api/v1/contact",
    tag = "contact",
    operation_id = "contact.submit",
    request_body = ContactRequest,
    responses(
        (status = 202, description = "Message accepted", body = ContactResponse),
        (status = 400, description = "Invalid fields", body = ApiError),
    )
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    AppJson(req): AppJson<ContactRequest>,
) -> ApiResponse<ContactResponse> {
    let submission = ContactSubmission::from(req);
    match state.contact.submit(&submission).await {
        Ok(receipt) => ApiResponse::accepted(ContactResponse::from(receipt)),
        Err(e) => e.into(),
    }
}
