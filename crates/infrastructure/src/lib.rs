//! Rekey Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in the
//! application layer: file-backed token storage and the HTTP credential
//! service client.

pub mod persistence;
pub mod remote;

pub use persistence::FileTokenStorage;
pub use remote::HttpCredentialService;
