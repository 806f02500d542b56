//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure layer or by the hosting UI.

mod credential_service;
mod navigator;
mod notifier;
mod token_storage;

pub use credential_service::{CredentialError, CredentialService};
pub use navigator::Navigator;
pub use notifier::Notifier;
pub use token_storage::{TokenStorage, TokenStorageError};
