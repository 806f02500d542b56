//! Authentication session model.
//!
//! A [`Session`] is authenticated exactly when it carries a token, so the
//! "authenticated iff token present" invariant holds by construction and
//! cannot drift the way a separate boolean flag could.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A validated, non-empty authentication token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Creates a token from a raw string.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyToken`] if the input is empty or contains
    /// only whitespace.
    pub fn new(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DomainError::EmptyToken);
        }
        Ok(Self(raw))
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the token, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of the process-wide authentication state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    token: Option<SessionToken>,
}

impl Session {
    /// An unauthenticated session, the safe default before hydration.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { token: None }
    }

    /// A session authenticated with the given token.
    #[must_use]
    pub const fn authenticated(token: SessionToken) -> Self {
        Self { token: Some(token) }
    }

    /// Returns the current token, if any.
    #[must_use]
    pub const fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    /// True exactly when a token is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_token_rejects_empty_input() {
        assert_eq!(SessionToken::new(""), Err(DomainError::EmptyToken));
        assert_eq!(SessionToken::new("   "), Err(DomainError::EmptyToken));
    }

    #[test]
    fn test_token_keeps_raw_value() {
        let token = SessionToken::new("jwt-abc.def").unwrap();
        assert_eq!(token.as_str(), "jwt-abc.def");
    }

    #[test]
    fn test_anonymous_session_is_unauthenticated() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_authenticated_iff_token_present() {
        let token = SessionToken::new("t1").unwrap();
        let session = Session::authenticated(token.clone());
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some(&token));
    }

    #[test]
    fn test_default_is_anonymous() {
        assert_eq!(Session::default(), Session::anonymous());
    }
}
