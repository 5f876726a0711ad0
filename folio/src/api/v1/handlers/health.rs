use axum::extract::State;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::v1::response::ApiResponse;

/// Health data returned inside the v1 envelope.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub field: FieldStatus,
    pub chat: ChatStatus,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct FieldStatus {
    pub points: usize,
    pub edges: usize,
    /// Whether the field was generated from a fixed seed.
    pub seeded: bool,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatStatus {
    pub open_sessions: usize,
    pub composing_delay_ms: u64,
}

/// `GET /api/v1/health`
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health status", body = HealthData),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> ApiResponse<HealthData> {
    ApiResponse::success(HealthData {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        field: FieldStatus {
            points: state.field.points().len(),
            edges: state.field.edges().len(),
            seeded: state.config.field.seed.is_some(),
        },
        chat: ChatStatus {
            open_sessions: state.chat.len(),
            composing_delay_ms: state.config.chat.composing_delay_ms,
        },
    })
}
