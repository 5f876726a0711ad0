mod chat;
mod field;
mod portfolio;

pub use chat::*;
pub use field::*;
pub use portfolio::*;
