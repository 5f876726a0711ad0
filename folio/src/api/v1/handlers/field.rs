//! v1 particle field handlers.

use axum::extract::State;

use crate::api::extractors::AppJson;
use crate::api::v1::dto::{FieldResponse, GenerateFieldRequest, RotationResponse};
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::AppState;
use crate::error::FolioError;
use crate::field::ParticleField;

/// `GET /api/v1/field`
///
/// The field generated at startup. Identical on every call.
#[utoipa::path(
    get,
    path = "/api/v1/field",
    tag = "field",
    operation_id = "field.get",
    responses(
        (status = 200, description = "Startup particle field", body = FieldResponse),
    )
)]
pub async fn get_field(State(state): State<AppState>) -> ApiResponse<FieldResponse> {
    ApiResponse::success(FieldResponse::from(state.field.as_ref()))
}

/// `POST /api/v1/field:generate`
#[utoipa::path(
    post,
    path = "/api/v1/field:generate",
    tag = "field",
    operation_id = "field.generate",
    request_body = GenerateFieldRequest,
    responses(
        (status = 200, description = "Freshly generated field", body = FieldResponse),
        (status = 400, description = "Invalid parameters", body = ApiError),
    )
)]
pub async fn generate_field(
    AppJson(req): AppJson<GenerateFieldRequest>,
) -> ApiResponse<FieldResponse> {
    let params = req.params();
    if let Err(e) = params.validate() {
        return e.into();
    }

    let seed = req.seed;
    let generated = tokio::task::spawn_blocking(move || match seed {
        Some(seed) => ParticleField::seeded(params, seed),
        None => ParticleField::from_entropy(params),
    })
    .await;

    match generated {
        Ok(field) => {
            tracing::debug!(
                points = field.points().len(),
                edges = field.edges().len(),
                seeded = seed.is_some(),
                "Generated particle field on request"
            );
            ApiResponse::success(FieldResponse::from(&field))
        }
        Err(e) => FolioError::Internal(format!("Field generation failed: {e}")).into(),
    }
}

/// `GET /api/v1/field/rotation`
#[utoipa::path(
    get,
    path = "/api/v1/field/rotation",
    tag = "field",
    operation_id = "field.rotation",
    responses(
        (status = 200, description = "Current rotation angles in radians", body = RotationResponse),
    )
)]
pub async fn get_rotation(State(state): State<AppState>) -> ApiResponse<RotationResponse> {
    let rotation = *state.rotation.borrow();
    ApiResponse::success(RotationResponse::from(rotation))
}
