//! v1 chat widget handlers.

use axum::extract::{Path, State};
use uuid::Uuid;

use crate::api::extractors::AppJson;
use crate::api::v1::dto::{
    CloseSessionResponse, PresetResponse, SessionResponse, SubmitMessageRequest,
    SubmitMessageResponse, UpdateSessionRequest,
};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode, ResponseMeta};
use crate::api::AppState;
use crate::chat::PendingReply;
use crate::error::{FolioError, Result};

fn parse_session_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| FolioError::Validation(format!("Invalid session id: {raw}")))
}

fn parse_preset_index(raw: &str) -> Result<usize> {
    raw.parse()
        .map_err(|_| FolioError::Validation(format!("Invalid preset index: {raw}")))
}

async fn answered(pending: PendingReply) -> ApiResponse<SubmitMessageResponse> {
    match pending.wait().await {
        Ok(exchange) => ApiResponse::success(SubmitMessageResponse::from(exchange)),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/chat/sessions`
#[utoipa::path(
    post,
    path = "/api/v1/chat/sessions",
    tag = "chat",
    operation_id = "chat.open",
    responses(
        (status = 201, description = "Session opened with the greeting", body = SessionResponse),
    )
)]
pub async fn open_session(State(state): State<AppState>) -> ApiResponse<SessionResponse> {
    let session = state.chat.open();
    ApiResponse::created(SessionResponse::from(session.snapshot()))
}

/// `GET /api/v1/chat/sessions/{sessionId}`
#[utoipa::path(
    get,
    path = "/api/v1/chat/sessions/{sessionId}",
    tag = "chat",
    operation_id = "chat.get",
    params(("sessionId" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Session state", body = SessionResponse),
        (status = 400, description = "Malformed session id", body = ApiError),
        (status = 404, description = "Session not found", body = ApiError),
    )
)]
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResponse<SessionResponse> {
    let id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(e) => return e.into(),
    };

    match state.chat.get(id) {
        Ok(session) => ApiResponse::success(SessionResponse::from(session.snapshot())),
        Err(e) => e.into(),
    }
}

/// `PATCH /api/v1/chat/sessions/{sessionId}`
///
/// Shows, hides or toggles the widget. The transcript is untouched.
#[utoipa::path(
    patch,
    path = "/api/v1/chat/sessions/{sessionId}",
    tag = "chat",
    operation_id = "chat.update",
    params(("sessionId" = String, Path, description = "Session ID")),
    request_body = UpdateSessionRequest,
    responses(
        (status = 200, description = "Session updated", body = SessionResponse),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "Session not found", body = ApiError),
    )
)]
pub async fn update_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    AppJson(req): AppJson<UpdateSessionRequest>,
) -> ApiResponse<SessionResponse> {
    let id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(e) => return e.into(),
    };

    let session = match state.chat.get(id) {
        Ok(session) => session,
        Err(e) => return e.into(),
    };

    if req.toggle {
        session.toggle();
    } else if let Some(visible) = req.visible {
        session.set_visible(visible);
    }

    ApiResponse::success(SessionResponse::from(session.snapshot()))
}

/// `DELETE /api/v1/chat/sessions/{sessionId}`
#[utoipa::path(
    delete,
    path = "/api/v1/chat/sessions/{sessionId}",
    tag = "chat",
    operation_id = "chat.close",
    params(("sessionId" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Session closed", body = CloseSessionResponse),
        (status = 404, description = "Session not found", body = ApiError),
    )
)]
pub async fn close_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResponse<CloseSessionResponse> {
    let id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(e) => return e.into(),
    };

    match state.chat.close(id) {
        Ok(()) => ApiResponse::success(CloseSessionResponse {
            session_id: id,
            closed: true,
        }),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/chat/sessions/{sessionId}/messages`
///
/// Records the question, waits out the composing delay and returns the
/// question together with its answer. Blank text is accepted but ignored.
#[utoipa::path(
    post,
    path = "/api/v1/chat/sessions/{sessionId}/messages",
    tag = "chat",
    operation_id = "chat.submit",
    params(("sessionId" = String, Path, description = "Session ID")),
    request_body = SubmitMessageRequest,
    responses(
        (status = 200, description = "Question answered, or ignored when blank", body = SubmitMessageResponse),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "Session not found", body = ApiError),
        (status = 409, description = "Too many unanswered questions, or transcript full", body = ApiError),
    )
)]
pub async fn submit_message(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    AppJson(req): AppJson<SubmitMessageRequest>,
) -> ApiResponse<SubmitMessageResponse> {
    let id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(e) => return e.into(),
    };

    let max_chars = state.config.chat.max_message_chars;
    if req.text.chars().count() > max_chars {
        return ApiResponse::error(
            ErrorCode::InvalidRequest,
            format!("Message must be at most {max_chars} characters"),
        );
    }

    let session = match state.chat.get(id) {
        Ok(session) => session,
        Err(e) => return e.into(),
    };

    match session.submit(&req.text) {
        Ok(Some(pending)) => answered(pending).await,
        Ok(None) => ApiResponse::success(SubmitMessageResponse::ignored()),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/chat/sessions/{sessionId}/presets/{index}`
#[utoipa::path(
    post,
    path = "/api/v1/chat/sessions/{sessionId}/presets/{index}",
    tag = "chat",
    operation_id = "chat.submitPreset",
    params(
        ("sessionId" = String, Path, description = "Session ID"),
        ("index" = usize, Path, description = "Zero-based preset index"),
    ),
    responses(
        (status = 200, description = "Preset question answered", body = SubmitMessageResponse),
        (status = 400, description = "Malformed session id or index", body = ApiError),
        (status = 404, description = "Session or preset not found", body = ApiError),
        (status = 409, description = "Too many unanswered questions, or transcript full", body = ApiError),
    )
)]
pub async fn submit_preset(
    State(state): State<AppState>,
    Path((session_id, index)): Path<(String, String)>,
) -> ApiResponse<SubmitMessageResponse> {
    let id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(e) => return e.into(),
    };
    let index = match parse_preset_index(&index) {
        Ok(index) => index,
        Err(e) => return e.into(),
    };

    let session = match state.chat.get(id) {
        Ok(session) => session,
        Err(e) => return e.into(),
    };

    match session.submit_preset(index) {
        Ok(pending) => answered(pending).await,
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/chat/presets`
#[utoipa::path(
    get,
    path = "/api/v1/chat/presets",
    tag = "chat",
    operation_id = "chat.presets",
    responses(
        (status = 200, description = "Suggested questions", body = Vec<PresetResponse>),
    )
)]
pub async fn list_presets(State(state): State<AppState>) -> ApiResponse<Vec<PresetResponse>> {
    let presets: Vec<PresetResponse> = state
        .chat
        .script()
        .presets
        .iter()
        .enumerate()
        .map(|(index, text)| PresetResponse {
            index,
            text: text.clone(),
        })
        .collect();
    let total = presets.len() as u64;
    ApiResponse::success_with_meta(presets, ResponseMeta { total })
}
