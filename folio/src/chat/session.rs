use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};
use uuid::Uuid;

use super::script::ChatScript;
use super::transcript::Transcript;
use crate::config::ChatConfig;
use crate::error::{FolioError, Result};
use crate::models::{ChatMessage, Exchange};

/// Presets stay on offer until the visitor has asked their first question.
const SUGGESTIONS_MAX_MESSAGES: usize = 2;

struct SessionState {
    transcript: Transcript,
    visible: bool,
    /// Questions whose answer has not been appended yet
    pending: usize,
}

struct ReplyJob {
    text: String,
    reply_to: oneshot::Sender<ChatMessage>,
}

/// Point-in-time copy of a session, safe to hand out to callers.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub messages: Vec<ChatMessage>,
    pub composing: bool,
    pub visible: bool,
    pub suggestions_visible: bool,
}

/// One visitor's chat widget.
///
/// Questions are appended as soon as they are submitted. Answers are produced
/// by a per-session reply worker that handles one question at a time in
/// submission order, waiting the composing delay before each answer. Hiding
/// the widget never clears the transcript, and answers still land while it is
/// hidden.
pub struct ChatSession {
    id: Uuid,
    created_at: DateTime<Utc>,
    script: Arc<ChatScript>,
    state: Arc<Mutex<SessionState>>,
    jobs: mpsc::UnboundedSender<ReplyJob>,
    max_pending: usize,
    max_messages: usize,
}

/// A question that has been recorded and is waiting for its answer.
#[derive(Debug)]
pub struct PendingReply {
    pub question: ChatMessage,
    answer: oneshot::Receiver<ChatMessage>,
}

impl PendingReply {
    /// Wait for the canned answer to be appended to the transcript.
    pub async fn wait(self) -> Result<Exchange> {
        let answer = self
            .answer
            .await
            .map_err(|_| FolioError::Internal("chat reply worker stopped".to_string()))?;
        Ok(Exchange {
            question: self.question,
            answer,
        })
    }
}

impl ChatSession {
    /// Open a session and start its reply worker. Must be called from within
    /// a Tokio runtime.
    pub fn open(script: Arc<ChatScript>, config: &ChatConfig) -> Self {
        let state = Arc::new(Mutex::new(SessionState {
            transcript: Transcript::with_greeting(script.greeting.clone()),
            visible: false,
            pending: 0,
        }));
        let (jobs, queue) = mpsc::unbounded_channel();

        tokio::spawn(run_reply_worker(
            script.clone(),
            state.clone(),
            config.composing_delay(),
            queue,
        ));

        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            script,
            state,
            jobs,
            max_pending: config.max_pending_replies.max(1),
            max_messages: config.max_transcript_messages,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Record a question and queue its answer.
    ///
    /// Blank input is ignored: nothing is appended and `Ok(None)` is
    /// returned. A session with too many unanswered questions, or whose
    /// transcript has no room left for a question and its answer, rejects the
    /// submission with [`FolioError::Conflict`].
    pub fn submit(&self, raw: &str) -> Result<Option<PendingReply>> {
        if raw.trim().is_empty() {
            debug!(session_id = %self.id, "Ignoring blank chat submission");
            return Ok(None);
        }

        let mut state = lock(&self.state);
        if state.pending >= self.max_pending {
            return Err(FolioError::Conflict(format!(
                "{} questions are already waiting for an answer",
                state.pending
            )));
        }
        // Every pending question still has its answer to come
        if state.transcript.len() + state.pending + 2 > self.max_messages {
            return Err(FolioError::Conflict(
                "Conversation is full; open a new session".to_string(),
            ));
        }

        let question = ChatMessage::user(raw);
        let (reply_to, answer) = oneshot::channel();
        let job = ReplyJob {
            text: raw.to_string(),
            reply_to,
        };

        // Queue while holding the lock so the worker sees jobs in transcript order.
        if self.jobs.send(job).is_err() {
            warn!(session_id = %self.id, "Reply worker is gone; question will not be answered");
            return Err(FolioError::Internal("chat reply worker stopped".to_string()));
        }
        state.transcript.append(question.clone());
        state.pending += 1;

        Ok(Some(PendingReply { question, answer }))
    }

    /// Submit one of the suggested questions, exactly as if it had been typed.
    pub fn submit_preset(&self, index: usize) -> Result<PendingReply> {
        let question = self
            .script
            .preset(index)
            .ok_or_else(|| FolioError::NotFound(format!("Preset question {index} not found")))?;
        self.submit(question)?
            .ok_or_else(|| FolioError::Internal(format!("Preset question {index} is blank")))
    }

    /// Whether an answer is still being composed.
    pub fn is_composing(&self) -> bool {
        lock(&self.state).pending > 0
    }

    pub fn is_visible(&self) -> bool {
        lock(&self.state).visible
    }

    pub fn set_visible(&self, visible: bool) -> bool {
        lock(&self.state).visible = visible;
        visible
    }

    /// Flip widget visibility, returning the new value.
    pub fn toggle(&self) -> bool {
        let mut state = lock(&self.state);
        state.visible = !state.visible;
        state.visible
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = lock(&self.state);
        SessionSnapshot {
            id: self.id,
            created_at: self.created_at,
            messages: state.transcript.messages().to_vec(),
            composing: state.pending > 0,
            visible: state.visible,
            suggestions_visible: state.transcript.len() <= SUGGESTIONS_MAX_MESSAGES,
        }
    }
}

async fn run_reply_worker(
    script: Arc<ChatScript>,
    state: Arc<Mutex<SessionState>>,
    composing_delay: Duration,
    mut queue: mpsc::UnboundedReceiver<ReplyJob>,
) {
    while let Some(job) = queue.recv().await {
        tokio::time::sleep(composing_delay).await;

        let answer = ChatMessage::system(script.rules.respond(&job.text));
        {
            let mut state = lock(&state);
            state.transcript.append(answer.clone());
            state.pending = state.pending.saturating_sub(1);
        }

        // The caller may have stopped waiting; the transcript already has it.
        let _ = job.reply_to.send(answer);
    }
}

fn lock(state: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sender;

    const DELAY: Duration = Duration::from_millis(800);

    fn config() -> ChatConfig {
        ChatConfig {
            composing_delay_ms: 800,
            ..ChatConfig::default()
        }
    }

    fn open() -> ChatSession {
        ChatSession::open(Arc::new(ChatScript::default()), &config())
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_session_has_only_greeting() {
        let session = open();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.messages.len(), 1);
        assert_eq!(snapshot.messages[0].sender, Sender::System);
        assert!(!snapshot.composing);
        assert!(!snapshot.visible);
        assert!(snapshot.suggestions_visible);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_submit_is_a_no_op() {
        let session = open();
        assert!(session.submit("").unwrap().is_none());
        assert!(session.submit("   \t\n").unwrap().is_none());
        let snapshot = session.snapshot();
        assert_eq!(snapshot.messages.len(), 1);
        assert!(!snapshot.composing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_appends_question_then_answer_after_delay() {
        let session = open();
        let started = tokio::time::Instant::now();

        let pending = session
            .submit("Tell me about Synechron experience")
            .unwrap()
            .unwrap();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.messages.len(), 2);
        assert_eq!(snapshot.messages[1].sender, Sender::User);
        assert!(snapshot.composing);

        let exchange = pending.wait().await.unwrap();
        assert!(started.elapsed() >= DELAY);
        assert!(exchange.answer.text.contains("AI/ML Engineer"));
        assert_eq!(exchange.question.text, "Tell me about Synechron experience");

        let snapshot = session.snapshot();
        assert_eq!(snapshot.messages.len(), 3);
        assert_eq!(snapshot.messages[2].id, exchange.answer.id);
        assert!(!snapshot.composing);
        assert!(!snapshot.suggestions_visible);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_submits_are_answered_in_order() {
        let session = open();

        let first = session.submit("what have you built").unwrap().unwrap();
        let second = session.submit("education?").unwrap().unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.messages.len(), 3, "both questions recorded immediately");

        let second = second.wait().await.unwrap();
        let first = first.wait().await.unwrap();
        assert!(first.answer.text.starts_with("Key projects"));
        assert!(second.answer.text.starts_with("MS in Computer Science"));

        let senders: Vec<Sender> = session
            .snapshot()
            .messages
            .iter()
            .map(|m| m.sender)
            .collect();
        assert_eq!(
            senders,
            vec![
                Sender::System,
                Sender::User,
                Sender::User,
                Sender::System,
                Sender::System
            ]
        );
        let texts: Vec<String> = session
            .snapshot()
            .messages
            .into_iter()
            .map(|m| m.text)
            .collect();
        assert_eq!(texts[3], first.answer.text);
        assert_eq!(texts[4], second.answer.text);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_answer_waits_for_first() {
        let session = open();
        let started = tokio::time::Instant::now();

        let _first = session.submit("skills").unwrap().unwrap();
        let second = session.submit("contact").unwrap().unwrap();
        second.wait().await.unwrap();

        assert!(started.elapsed() >= DELAY * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_visibility_toggle_keeps_transcript() {
        let session = open();
        assert!(session.toggle());
        session.submit("skills").unwrap().unwrap().wait().await.unwrap();
        assert!(!session.toggle());
        assert!(!session.is_visible());
        assert_eq!(session.snapshot().messages.len(), 3);
        assert!(session.set_visible(true));
        assert_eq!(session.snapshot().messages.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_answer_lands_while_hidden_even_if_nobody_waits() {
        let session = open();
        session.set_visible(true);
        let pending = session.submit("hire").unwrap().unwrap();
        session.set_visible(false);
        drop(pending);

        tokio::time::sleep(DELAY * 2).await;
        let snapshot = session.snapshot();
        assert_eq!(snapshot.messages.len(), 3);
        assert!(snapshot.messages[2].text.contains("kaarthiks24@gmail.com"));
        assert!(!snapshot.composing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_preset_equals_typed_question() {
        let session = open();
        let exchange = session.submit_preset(2).unwrap().wait().await.unwrap();
        assert_eq!(exchange.question.text, "What are your key skills?");
        assert!(exchange.answer.text.starts_with("Skills:"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_preset_is_not_found() {
        let session = open();
        let err = session.submit_preset(99).unwrap_err();
        assert!(matches!(err, FolioError::NotFound(_)));
        assert_eq!(session.snapshot().messages.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_too_many_pending_questions_is_conflict() {
        let config = ChatConfig {
            max_pending_replies: 2,
            ..config()
        };
        let session = ChatSession::open(Arc::new(ChatScript::default()), &config);

        let first = session.submit("skills").unwrap().unwrap();
        let _second = session.submit("contact").unwrap().unwrap();
        let err = session.submit("education").unwrap_err();
        assert!(matches!(err, FolioError::Conflict(_)));
        assert_eq!(session.snapshot().messages.len(), 3);

        first.wait().await.unwrap();
        assert!(session.submit("education").unwrap().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_transcript_rejects_questions() {
        let config = ChatConfig {
            max_transcript_messages: 5,
            ..config()
        };
        let session = ChatSession::open(Arc::new(ChatScript::default()), &config);

        session.submit("skills").unwrap().unwrap().wait().await.unwrap();
        session.submit("contact").unwrap().unwrap().wait().await.unwrap();
        assert_eq!(session.snapshot().messages.len(), 5);

        let err = session.submit("education").unwrap_err();
        assert!(matches!(err, FolioError::Conflict(_)));
        assert_eq!(session.snapshot().messages.len(), 5);
        assert!(!session.is_composing());
    }
}
