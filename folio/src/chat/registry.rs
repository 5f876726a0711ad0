use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::info;
use uuid::Uuid;

use super::script::ChatScript;
use super::session::ChatSession;
use crate::config::ChatConfig;
use crate::error::{FolioError, Result};

/// Live chat sessions keyed by id.
///
/// When full, opening a new session evicts the oldest one. Closing a session
/// only drops the registry's handle; an answer already being composed still
/// completes against the detached session.
#[derive(Clone)]
pub struct ChatSessions {
    sessions: Arc<RwLock<HashMap<Uuid, Arc<ChatSession>>>>,
    script: Arc<ChatScript>,
    config: ChatConfig,
    max_sessions: usize,
}

impl ChatSessions {
    pub fn new(script: ChatScript, config: &ChatConfig) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            script: Arc::new(script),
            config: config.clone(),
            max_sessions: config.max_sessions.max(1),
        }
    }

    pub fn script(&self) -> &ChatScript {
        &self.script
    }

    pub fn open(&self) -> Arc<ChatSession> {
        let session = Arc::new(ChatSession::open(self.script.clone(), &self.config));

        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .values()
                .min_by_key(|s| s.created_at())
                .map(|s| s.id());
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                    info!(session_id = %id, "Evicted oldest chat session");
                }
                None => break,
            }
        }

        sessions.insert(session.id(), session.clone());
        info!(session_id = %session.id(), open_sessions = sessions.len(), "Opened chat session");
        session
    }

    pub fn get(&self, id: Uuid) -> Result<Arc<ChatSession>> {
        self.sessions
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&id)
            .cloned()
            .ok_or_else(|| FolioError::NotFound(format!("Chat session {id} not found")))
    }

    pub fn close(&self, id: Uuid) -> Result<()> {
        let removed = self
            .sessions
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&id);

        match removed {
            Some(_) => {
                info!(session_id = %id, "Closed chat session");
                Ok(())
            }
            None => Err(FolioError::NotFound(format!("Chat session {id} not found"))),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn registry(max_sessions: usize) -> ChatSessions {
        let config = ChatConfig {
            composing_delay_ms: 10,
            max_sessions,
            ..ChatConfig::default()
        };
        ChatSessions::new(ChatScript::default(), &config)
    }

    #[tokio::test]
    async fn test_open_get_close() {
        let sessions = registry(10);
        let session = sessions.open();
        assert_eq!(sessions.len(), 1);

        let fetched = sessions.get(session.id()).unwrap();
        assert_eq!(fetched.id(), session.id());

        sessions.close(session.id()).unwrap();
        assert!(sessions.is_empty());
        assert!(matches!(
            sessions.get(session.id()),
            Err(FolioError::NotFound(_))
        ));
        assert!(sessions.close(session.id()).is_err());
    }

    #[tokio::test]
    async fn test_sessions_have_independent_transcripts() {
        let sessions = registry(10);
        let a = sessions.open();
        let b = sessions.open();

        a.submit("skills").unwrap().unwrap().wait().await.unwrap();

        assert_eq!(a.snapshot().messages.len(), 3);
        assert_eq!(b.snapshot().messages.len(), 1);
    }

    #[tokio::test]
    async fn test_full_registry_evicts_oldest() {
        let sessions = registry(2);
        let first = sessions.open();
        tokio::time::sleep(Duration::from_millis(2)).await;
        let second = sessions.open();
        tokio::time::sleep(Duration::from_millis(2)).await;
        let third = sessions.open();

        assert_eq!(sessions.len(), 2);
        assert!(sessions.get(first.id()).is_err());
        assert!(sessions.get(second.id()).is_ok());
        assert!(sessions.get(third.id()).is_ok());
    }

    #[tokio::test]
    async fn test_closed_session_still_finishes_inflight_answer() {
        let sessions = registry(10);
        let session = sessions.open();
        let pending = session.submit("education").unwrap().unwrap();
        sessions.close(session.id()).unwrap();

        let exchange = pending.wait().await.unwrap();
        assert!(exchange.answer.text.contains("Stevens"));
        assert_eq!(session.snapshot().messages.len(), 3);
    }
}
