use std::sync::Arc;
use std::time::Duration;

use folio::chat::{ChatScript, ChatSession, ChatSessions, Rule, RuleTable};
use folio::config::ChatConfig;
use folio::models::Sender;
use pretty_assertions::assert_eq;

const DELAY: Duration = Duration::from_millis(800);

fn config() -> ChatConfig {
    ChatConfig {
        composing_delay_ms: DELAY.as_millis() as u64,
        ..ChatConfig::default()
    }
}

fn session() -> ChatSession {
    ChatSession::open(Arc::new(ChatScript::default()), &config())
}

fn texts(session: &ChatSession) -> Vec<(Sender, String)> {
    session
        .snapshot()
        .messages
        .into_iter()
        .map(|m| (m.sender, m.text))
        .collect()
}

#[test]
fn test_earlier_rule_wins() {
    let table = RuleTable::new(
        vec![
            Rule::new(["alpha"], "first"),
            Rule::new(["alpha", "beta"], "second"),
        ],
        "fallback",
    );

    assert_eq!(table.respond("ALPHA and beta"), "first");
    assert_eq!(table.respond("just beta"), "second");
    assert_eq!(table.respond("gamma"), "fallback");
}

#[test]
fn test_default_script_answers() {
    let script = ChatScript::default();

    assert!(script
        .rules
        .respond("Tell me about Synechron experience")
        .contains("AI/ML Engineer at Synechron"));
    assert!(script
        .rules
        .respond("Tell me about your education")
        .contains("Stevens Institute of Technology"));
    assert_eq!(script.rules.respond("asdkjasd"), script.rules.fallback());
}

#[tokio::test(start_paused = true)]
async fn test_overlapping_questions_are_answered_in_order() {
    let session = session();
    let script = ChatScript::default();

    let first = session
        .submit("How do I contact you?")
        .expect("submitted")
        .expect("accepted");
    let second = session
        .submit("What GenAI projects have you built?")
        .expect("submitted")
        .expect("accepted");
    assert!(session.is_composing());

    let (a, b) = tokio::join!(first.wait(), second.wait());
    let a = a.expect("first answer");
    let b = b.expect("second answer");

    assert_eq!(a.answer.text, script.rules.respond("How do I contact you?"));
    assert_eq!(
        b.answer.text,
        script.rules.respond("What GenAI projects have you built?")
    );
    assert!(a.answer.timestamp <= b.answer.timestamp);
    assert!(!session.is_composing());

    let senders: Vec<Sender> = texts(&session).into_iter().map(|(s, _)| s).collect();
    assert_eq!(
        senders,
        vec![
            Sender::System,
            Sender::User,
            Sender::User,
            Sender::System,
            Sender::System,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_answer_waits_for_composing_delay() {
    let session = session();
    let pending = session.submit("skills?").expect("submitted").expect("accepted");

    tokio::time::sleep(DELAY / 2).await;
    assert!(session.is_composing());
    assert_eq!(session.snapshot().messages.len(), 2);

    pending.wait().await.expect("answer");
    assert!(!session.is_composing());
    assert_eq!(session.snapshot().messages.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_hiding_widget_keeps_transcript_and_pending_answer() {
    let session = session();
    let pending = session
        .submit("Where did you study? education")
        .expect("submitted")
        .expect("accepted");

    assert!(session.toggle());
    assert!(!session.toggle());

    pending.wait().await.expect("answer");
    let snapshot = session.snapshot();
    assert!(!snapshot.visible);
    assert_eq!(snapshot.messages.len(), 3);
    assert!(!snapshot.suggestions_visible);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_waiter_still_gets_answer_recorded() {
    let session = session();
    drop(session.submit("hire").expect("submitted").expect("accepted"));

    tokio::time::sleep(DELAY * 2).await;

    let messages = texts(&session);
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2].0, Sender::System);
    assert!(messages[2].1.contains("kaarthiks24@gmail.com"));
}

#[tokio::test(start_paused = true)]
async fn test_blank_submission_changes_nothing() {
    let session = session();
    let before = texts(&session);

    assert!(session.submit("").expect("submitted").is_none());
    assert!(session.submit(" \t\n").expect("submitted").is_none());

    assert_eq!(texts(&session), before);
    assert!(!session.is_composing());
}

#[tokio::test]
async fn test_registry_evicts_oldest_session() {
    let sessions = ChatSessions::new(
        ChatScript::default(),
        &ChatConfig {
            composing_delay_ms: 0,
            max_sessions: 2,
            ..ChatConfig::default()
        },
    );

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

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_submits_keep_answers_in_question_order() {
    let questions = [
        "Tell me about Synechron experience",
        "What GenAI projects have you built?",
        "What are your key skills?",
        "Tell me about your education",
        "How can I contact you?",
        "Do you know RAG?",
        "asdkjasd",
    ];
    let config = ChatConfig {
        composing_delay_ms: 1,
        max_pending_replies: questions.len(),
        ..ChatConfig::default()
    };
    let script = ChatScript::default();

    for _ in 0..20 {
        let session = Arc::new(ChatSession::open(Arc::new(script.clone()), &config));

        let handles: Vec<_> = questions
            .iter()
            .map(|q| {
                let session = session.clone();
                let q = q.to_string();
                tokio::spawn(async move {
                    let pending = session.submit(&q).expect("submitted").expect("accepted");
                    pending.wait().await.expect("answer")
                })
            })
            .collect();
        for handle in handles {
            handle.await.expect("task");
        }

        let messages = session.snapshot().messages;
        let asked: Vec<&str> = messages
            .iter()
            .filter(|m| m.sender == Sender::User)
            .map(|m| m.text.as_str())
            .collect();
        let expected: Vec<&str> = asked.iter().map(|q| script.rules.respond(q)).collect();
        let answered: Vec<&str> = messages
            .iter()
            .skip(1)
            .filter(|m| m.sender == Sender::System)
            .map(|m| m.text.as_str())
            .collect();

        assert_eq!(asked.len(), questions.len());
        assert_eq!(answered, expected);
    }
}
