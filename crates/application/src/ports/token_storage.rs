//! Durable token storage port.

use async_trait::async_trait;

/// Errors that can occur while reading or writing the persisted token.
#[derive(Debug, thiserror::Error)]
pub enum TokenStorageError {
    /// I/O error from the backing medium.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored value could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The backing medium is not available on this system.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Port for the single durable session-token slot.
///
/// Mutations for the slot must not interleave; the session store serializes
/// its own calls, so adapters only need plain read/write/remove semantics.
#[async_trait]
pub trait TokenStorage: Send + Sync {
    /// Reads the persisted token, `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be read.
    async fn get(&self) -> Result<Option<String>, TokenStorageError>;

    /// Persists the token, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be written.
    async fn set(&self, token: &str) -> Result<(), TokenStorageError>;

    /// Evicts the persisted token. Removing an absent token is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be mutated.
    async fn remove(&self) -> Result<(), TokenStorageError>;
}
