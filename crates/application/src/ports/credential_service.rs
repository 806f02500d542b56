//! Remote credential service port.

use async_trait::async_trait;

/// Failure from the credential service boundary, normalized into a
/// descriptive kind before it reaches the notifier.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// The service answered and refused; the message is its own wording
    /// ("Email not found", "Invalid OTP or email", ...).
    #[error("{0}")]
    Rejected(String),

    /// The call itself failed: connection, TLS, timeout.
    #[error("network error: {0}")]
    Transport(String),
}

/// Port for the remote credential service.
///
/// Both calls settle eventually - the adapter's transport must enforce a
/// timeout so a caller awaiting settlement is never stuck.
#[async_trait]
pub trait CredentialService: Send + Sync {
    /// Asks the service to mail a one-time code to `email`.
    ///
    /// # Errors
    ///
    /// Returns a [`CredentialError`] with a human-readable description if
    /// the service refuses or cannot be reached.
    async fn forgot_password(&self, email: &str) -> Result<(), CredentialError>;

    /// Submits the mailed OTP together with the replacement password.
    ///
    /// # Errors
    ///
    /// Returns a [`CredentialError`] with a human-readable description if
    /// the service refuses or cannot be reached.
    async fn reset_password(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> Result<(), CredentialError>;
}
