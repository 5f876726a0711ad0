//! Static portfolio content and the contact form.

mod catalog;
mod contact;

pub use catalog::Catalog;
pub use contact::ContactDesk;
