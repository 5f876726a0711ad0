//! Scripted FAQ chat widget.
//!
//! Answers come from an ordered keyword table ([`RuleTable`]); there is no
//! language model behind it. Each visitor gets a [`ChatSession`] holding an
//! append-only transcript, and replies are delivered after a fixed simulated
//! "composing" delay, strictly in submission order.

mod registry;
mod rules;
mod script;
mod session;
mod transcript;

pub use registry::ChatSessions;
pub use rules::{Rule, RuleTable};
pub use script::ChatScript;
pub use session::{ChatSession, PendingReply, SessionSnapshot};
pub use transcript::Transcript;
