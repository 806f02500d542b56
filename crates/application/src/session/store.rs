//! Single source of truth for authentication state.
//!
//! The store holds the in-memory [`Session`] and mirrors its token into
//! durable storage. Storage trouble never blocks the in-memory session: a
//! login that cannot be persisted still authenticates the process and the
//! degradation is surfaced as a warning.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use rekey_domain::{Session, SessionToken};

use crate::ports::TokenStorage;

/// Shared authentication session store.
///
/// Constructed once by the composition root and handed by reference to every
/// screen that needs to know whether a user is signed in.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: RwLock<Session>,
    hydrated: AtomicBool,
}

impl<S: TokenStorage> SessionStore<S> {
    /// Creates an unauthenticated store backed by the given storage.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            session: RwLock::new(Session::anonymous()),
            hydrated: AtomicBool::new(false),
        }
    }

    /// Loads the persisted token, once per process lifetime.
    ///
    /// The first call reads durable storage and, if a usable token is
    /// present, authenticates the in-memory session. Later calls are no-ops
    /// so a stale persisted token can never clobber a newer in-memory one.
    /// Storage failures leave the session unauthenticated and are logged as
    /// degraded-mode warnings.
    pub async fn hydrate(&self) {
        if self.hydrated.swap(true, Ordering::SeqCst) {
            tracing::debug!("session already hydrated; ignoring repeat call");
            return;
        }

        match self.storage.get().await {
            Ok(Some(raw)) => match SessionToken::new(raw) {
                Ok(token) => {
                    let mut session = self.session.write().await;
                    *session = Session::authenticated(token);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring unusable persisted token");
                }
            },
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "could not read persisted session; starting signed out");
            }
        }
    }

    /// Authenticates the session and persists the token.
    ///
    /// The in-memory update always takes effect; a persistence failure only
    /// costs the session its durability across restarts and is logged as a
    /// warning.
    pub async fn login(&self, token: SessionToken) {
        {
            let mut session = self.session.write().await;
            *session = Session::authenticated(token.clone());
        }

        if let Err(e) = self.storage.set(token.as_str()).await {
            tracing::warn!(error = %e, "session not persisted; sign-in will not survive restart");
        }
    }

    /// Signs out: clears the in-memory session and evicts the durable copy.
    ///
    /// Idempotent - signing out while already signed out leaves the same
    /// state behind.
    pub async fn logout(&self) {
        {
            let mut session = self.session.write().await;
            *session = Session::anonymous();
        }

        if let Err(e) = self.storage.remove().await {
            tracing::warn!(error = %e, "could not evict persisted session");
        }
    }

    /// Snapshot of the session after the latest completed mutation.
    ///
    /// Before [`SessionStore::hydrate`] has run this is the anonymous
    /// default.
    pub async fn current_session(&self) -> Session {
        self.session.read().await.clone()
    }
}
