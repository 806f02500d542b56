//! Rekey Application - Session and recovery-flow logic
//!
//! This crate owns the two stateful components of the recovery client: the
//! process-wide [`SessionStore`] and the [`ResetFlowController`] driving the
//! forgot-password and reset-password flows. External collaborators (the
//! credential service, durable token storage, the toast presenter and the
//! router) are reached through the port traits in [`ports`].

pub mod ports;
pub mod reset;
pub mod session;

pub use reset::ResetFlowController;
pub use session::SessionStore;
