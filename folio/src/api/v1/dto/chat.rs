//! Chat widget request/response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::SessionSnapshot;
use crate::models::{ChatMessage, Exchange, Sender};

/// Author of a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum V1Sender {
    User,
    System,
}

impl From<Sender> for V1Sender {
    fn from(sender: Sender) -> Self {
        match sender {
            Sender::User => V1Sender::User,
            Sender::System => V1Sender::System,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: String,
    pub text: String,
    pub sender: V1Sender,
    #[schema(value_type = String)]
    pub timestamp: DateTime<Utc>,
}

impl From<ChatMessage> for MessageResponse {
    fn from(msg: ChatMessage) -> Self {
        Self {
            id: msg.id,
            text: msg.text,
            sender: msg.sender.into(),
            timestamp: msg.timestamp,
        }
    }
}

/// Full state of one chat widget.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    #[schema(value_type = String)]
    pub session_id: Uuid,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
    /// Transcript in chronological order, starting with the greeting.
    pub messages: Vec<MessageResponse>,
    /// True while an answer is being composed (typing indicator).
    pub composing: bool,
    pub visible: bool,
    /// Whether the preset questions should be offered.
    pub suggestions_visible: bool,
}

impl From<SessionSnapshot> for SessionResponse {
    fn from(snapshot: SessionSnapshot) -> Self {
        Self {
            session_id: snapshot.id,
            created_at: snapshot.created_at,
            messages: snapshot.messages.into_iter().map(Into::into).collect(),
            composing: snapshot.composing,
            visible: snapshot.visible,
            suggestions_visible: snapshot.suggestions_visible,
        }
    }
}

/// Request body for `POST /api/v1/chat/sessions/{sessionId}/messages`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitMessageRequest {
    /// Free-form question. Blank text is ignored.
    pub text: String,
}

/// Result of a submission.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitMessageResponse {
    /// False when the text was blank and nothing was recorded.
    pub accepted: bool,
    /// The question and its answer, empty when not accepted.
    pub messages: Vec<MessageResponse>,
}

impl SubmitMessageResponse {
    pub fn ignored() -> Self {
        Self {
            accepted: false,
            messages: Vec::new(),
        }
    }
}

impl From<Exchange> for SubmitMessageResponse {
    fn from(exchange: Exchange) -> Self {
        Self {
            accepted: true,
            messages: vec![exchange.question.into(), exchange.answer.into()],
        }
    }
}

/// Request body for `PATCH /api/v1/chat/sessions/{sessionId}`.
///
/// `toggle` wins over `visible` when both are given.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSessionRequest {
    pub visible: Option<bool>,
    #[serde(default)]
    pub toggle: bool,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresetResponse {
    pub index: usize,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CloseSessionResponse {
    #[schema(value_type = String)]
    pub session_id: Uuid,
    pub closed: bool,
}
