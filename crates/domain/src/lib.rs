//! Rekey Domain - Core account-recovery types
//!
//! This crate defines the domain model for the Rekey recovery client.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod notification;
pub mod reset;
pub mod route;
pub mod session;

pub use error::{DomainError, DomainResult};
pub use notification::Severity;
pub use reset::{MIN_OTP_LEN, ResetFlow, ResetPhase};
pub use route::Route;
pub use session::{Session, SessionToken};
