use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Folio API",
        version = "1.0.0",
        description = "Backend for an interactive developer portfolio: scripted chat assistant, \
                       particle field scene and static portfolio content.",
    ),
    paths(
        handlers::health::health_check,
        handlers::chat::open_session,
        handlers::chat::get_session,
        handlers::chat::update_session,
        handlers::chat::close_session,
        handlers::chat::submit_message,
        handlers::chat::submit_preset,
        handlers::chat::list_presets,
        handlers::field::get_field,
        handlers::field::generate_field,
        handlers::field::get_rotation,
        handlers::portfolio::list_projects,
        handlers::portfolio::list_skills,
        handlers::portfolio::list_timeline,
        handlers::portfolio::list_posts,
        handlers::portfolio::list_links,
        handlers::contact::submit_contact,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        response::ResponseMeta,
        // Chat
        dto::chat::V1Sender,
        dto::chat::MessageResponse,
        dto::chat::SessionResponse,
        dto::chat::SubmitMessageRequest,
        dto::chat::SubmitMessageResponse,
        dto::chat::UpdateSessionRequest,
        dto::chat::PresetResponse,
        dto::chat::CloseSessionResponse,
        // Field
        dto::field::FieldParamsResponse,
        dto::field::FieldResponse,
        dto::field::GenerateFieldRequest,
        dto::field::AnglesResponse,
        dto::field::RotationResponse,
        // Portfolio
        dto::portfolio::CategoryQuery,
        dto::portfolio::V1ProjectCategory,
        dto::portfolio::V1SkillCategory,
        dto::portfolio::ProjectResponse,
        dto::portfolio::SkillResponse,
        dto::portfolio::TimelineEntryResponse,
        dto::portfolio::PostResponse,
        dto::portfolio::LinkResponse,
        dto::portfolio::ContactRequest,
        dto::portfolio::ContactResponse,
        // Health (handler-local types)
        handlers::health::HealthData,
        handlers::health::FieldStatus,
        handlers::health::ChatStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "chat", description = "Scripted chat assistant sessions"),
        (name = "field", description = "Particle field geometry and rotation"),
        (name = "portfolio", description = "Projects, skills, timeline, posts and links"),
        (name = "contact", description = "Contact form"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
