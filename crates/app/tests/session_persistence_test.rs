//! Integration tests for session persistence.
//!
//! These verify that a signed-in session survives a process restart
//! (a fresh store over the same file) and that signing out evicts the
//! durable copy for the next start.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use tempfile::tempdir;

use rekey_application::SessionStore;
use rekey_domain::SessionToken;
use rekey_infrastructure::FileTokenStorage;

fn token(raw: &str) -> SessionToken {
    SessionToken::new(raw).unwrap()
}

#[tokio::test]
async fn test_session_survives_restart() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("session.json");

    // First process lifetime: sign in.
    {
        let store = SessionStore::new(FileTokenStorage::with_path(&path));
        store.hydrate().await;
        assert!(!store.current_session().await.is_authenticated());

        store.login(token("jwt-persisted")).await;
    }

    // Second process lifetime: hydrate picks the token back up.
    let store = SessionStore::new(FileTokenStorage::with_path(&path));
    store.hydrate().await;

    let session = store.current_session().await;
    assert!(session.is_authenticated());
    assert_eq!(
        session.token().map(SessionToken::as_str),
        Some("jwt-persisted")
    );
}

#[tokio::test]
async fn test_logout_does_not_survive_restart() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("session.json");

    {
        let store = SessionStore::new(FileTokenStorage::with_path(&path));
        store.hydrate().await;
        store.login(token("jwt-short-lived")).await;
        store.logout().await;
    }

    assert!(!path.exists());

    let store = SessionStore::new(FileTokenStorage::with_path(&path));
    store.hydrate().await;
    assert!(!store.current_session().await.is_authenticated());
}
