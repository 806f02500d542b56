//! Process-wide authentication session.

mod store;

pub use store::SessionStore;
