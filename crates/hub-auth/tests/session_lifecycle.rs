//! `AuthSession` driven by the file-backed provider.

use std::sync::Arc;

use chrono::Utc;
use hub_auth::{AuthSession, AuthSnapshot, Credentials, CredentialsProvider, User};
use pretty_assertions::assert_eq;

fn agent() -> User {
    User {
        id: "agent-42".into(),
        email: None,
        display_name: Some("Choi".into()),
    }
}

#[tokio::test]
async fn stored_credentials_settle_to_signed_in() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(CredentialsProvider::new(dir.path().join("creds.json"), None));
    provider
        .save(&Credentials {
            token: "tok".into(),
            user: agent(),
            saved_at: Utc::now(),
        })
        .await
        .unwrap();

    let mut session = AuthSession::init(provider);
    assert!(session.snapshot().is_loading);

    let settled = session.settled().await.unwrap();
    assert_eq!(settled, AuthSnapshot::signed_in(agent()));
}

#[tokio::test]
async fn logout_publishes_signed_out() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(CredentialsProvider::new(dir.path().join("creds.json"), None));

    let mut session = AuthSession::init(provider.clone());
    assert_eq!(session.settled().await.unwrap(), AuthSnapshot::signed_out());

    provider
        .save(&Credentials {
            token: "tok".into(),
            user: agent(),
            saved_at: Utc::now(),
        })
        .await
        .unwrap();
    assert_eq!(
        session.changed().await,
        Some(AuthSnapshot::signed_in(agent()))
    );

    session.logout().await.unwrap();
    assert_eq!(session.changed().await, Some(AuthSnapshot::signed_out()));
}

#[tokio::test]
async fn torn_down_session_ignores_later_logins() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(CredentialsProvider::new(dir.path().join("creds.json"), None));

    let mut session = AuthSession::init(provider.clone());
    session.settled().await.unwrap();
    session.teardown();

    provider
        .save(&Credentials {
            token: "tok".into(),
            user: agent(),
            saved_at: Utc::now(),
        })
        .await
        .unwrap();
    assert_eq!(session.snapshot(), AuthSnapshot::signed_out());
}
