pub mod chat;
pub mod contact;
pub mod field;
pub(crate) mod health;
pub mod portfolio;

pub use health::health_check;
