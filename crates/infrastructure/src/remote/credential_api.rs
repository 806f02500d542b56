//! Credential service client using reqwest.
//!
//! This adapter implements the `CredentialService` port against the recovery
//! endpoints of the account backend. Failures are normalized into
//! [`CredentialError`] before they leave this module: the flow controller
//! and the notifier only ever see a descriptive message, never a raw
//! `reqwest` error.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;

use async_trait::async_trait;
use rekey_application::ports::{CredentialError, CredentialService};

/// Request settles (success or failure) within this bound, so callers
/// awaiting settlement are never stuck and the in-flight flag always clears.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct ForgotPasswordRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct ResetPasswordRequest<'a> {
    email: &'a str,
    otp: &'a str,
    new_password: &'a str,
}

/// HTTP implementation of the credential service port.
#[derive(Debug, Clone)]
pub struct HttpCredentialService {
    client: Client,
    base_url: String,
}

impl HttpCredentialService {
    /// Creates a client for the service rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Transport`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, CredentialError> {
        let client = Client::builder()
            .user_agent(concat!("rekey/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| CredentialError::Transport(e.to_string()))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Creates a service adapter over a custom reqwest client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn post<T: Serialize + Sync>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<(), CredentialError> {
        let response = self
            .client
            .post(self.endpoint(path))
            .json(payload)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(CredentialError::Rejected(failure_message(status, &body)))
    }
}

#[async_trait]
impl CredentialService for HttpCredentialService {
    async fn forgot_password(&self, email: &str) -> Result<(), CredentialError> {
        self.post("/auth/forgot-password", &ForgotPasswordRequest { email })
            .await
    }

    async fn reset_password(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> Result<(), CredentialError> {
        self.post(
            "/auth/reset-password",
            &ResetPasswordRequest {
                email,
                otp,
                new_password,
            },
        )
        .await
    }
}

fn map_transport_error(error: reqwest::Error) -> CredentialError {
    if error.is_timeout() {
        return CredentialError::Transport("request timed out".to_string());
    }
    CredentialError::Transport(error.to_string())
}

/// Extracts a human-readable description from an error response.
///
/// The backend answers recovery failures with a JSON `message` (some
/// deployments use `error`); plain-text bodies are passed through, and an
/// empty body falls back to the status line.
fn failure_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(message) = value.get(key).and_then(serde_json::Value::as_str) {
                return message.to_string();
            }
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    format!(
        "request failed with status {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("")
    )
    .trim_end()
    .to_string()
}
