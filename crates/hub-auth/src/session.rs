//! Process-wide view of who is signed in.
//!
//! [`AuthSession::init`] subscribes to the provider exactly once and mirrors
//! every transition into a `tokio::sync::watch` channel. Consumers only ever
//! see [`AuthSnapshot`] values; the provider handle and listener stay
//! private. [`AuthSession::teardown`] removes the subscription, after which
//! the snapshot stops changing.

use std::sync::Arc;

use tokio::sync::watch;

use crate::error::AuthError;
use crate::provider::{AuthProvider, Subscription};
use crate::user::{AuthSnapshot, User};

pub struct AuthSession {
    provider: Arc<dyn AuthProvider>,
    rx: watch::Receiver<AuthSnapshot>,
    subscription: Option<Subscription>,
}

impl AuthSession {
    /// Subscribe to `provider`. The session starts in the loading state.
    pub fn init(provider: Arc<dyn AuthProvider>) -> Self {
        let (tx, rx) = watch::channel(AuthSnapshot::loading());
        let subscription = provider.subscribe(Arc::new(move |snapshot: AuthSnapshot| {
            tx.send_replace(snapshot);
        }));
        tracing::debug!("auth session initialized");

        Self {
            provider,
            rx,
            subscription: Some(subscription),
        }
    }

    /// The latest known state.
    #[must_use]
    pub fn snapshot(&self) -> AuthSnapshot {
        self.rx.borrow().clone()
    }

    /// Wait for the next transition. Returns `None` once the session is torn
    /// down and no further states will arrive.
    pub async fn changed(&mut self) -> Option<AuthSnapshot> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    /// Wait until the provider has reported a settled state.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Other` if the session was torn down while still
    /// loading.
    pub async fn settled(&mut self) -> Result<AuthSnapshot, AuthError> {
        let snapshot = self
            .rx
            .wait_for(|snapshot| !snapshot.is_loading)
            .await
            .map_err(|_| AuthError::Other("auth session closed while loading".into()))?;
        Ok(snapshot.clone())
    }

    /// Ask the provider to sign in.
    ///
    /// # Errors
    ///
    /// Propagates the provider's `AuthError`.
    pub async fn login(&self) -> Result<User, AuthError> {
        self.provider.login().await
    }

    /// Ask the provider to sign out.
    ///
    /// # Errors
    ///
    /// Propagates the provider's `AuthError`.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.provider.logout().await
    }

    /// Unsubscribe from the provider. Idempotent.
    pub fn teardown(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            tracing::debug!("auth session torn down");
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.subscription.is_some()
    }
}

impl Drop for AuthSession {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("snapshot", &*self.rx.borrow())
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}
