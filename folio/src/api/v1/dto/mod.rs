//! v1 API Data Transfer Objects.
//!
//! Wire format for the v1 REST API, kept separate from the domain types in
//! `src/models/`. Field names are camelCase on the wire.

pub mod chat;
pub mod field;
pub mod portfolio;

pub use chat::*;
pub use field::*;
pub use portfolio::*;
