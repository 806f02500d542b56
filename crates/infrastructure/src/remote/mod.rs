//! HTTP adapters for the remote credential service.

mod credential_api;

pub use credential_api::HttpCredentialService;
