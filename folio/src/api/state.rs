use std::sync::Arc;

use tokio::sync::watch;

use crate::chat::{ChatScript, ChatSessions};
use crate::config::Config;
use crate::field::ParticleField;
use crate::models::Rotation;
use crate::portfolio::{Catalog, ContactDesk};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub chat: ChatSessions,
    /// Generated once at startup and shared by every request.
    pub field: Arc<ParticleField>,
    /// Latest rotation published by the field animator.
    pub rotation: watch::Receiver<Rotation>,
    pub catalog: Catalog,
    pub contact: ContactDesk,
}

impl AppState {
    pub fn new(config: Config, field: ParticleField, rotation: watch::Receiver<Rotation>) -> Self {
        let chat = ChatSessions::new(ChatScript::default(), &config.chat);
        let contact = ContactDesk::new(&config.contact);

        Self {
            config: Arc::new(config),
            chat,
            field: Arc::new(field),
            rotation,
            catalog: Catalog,
            contact,
        }
    }
}
