//! The identity-provider seam and its listener bookkeeping.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::error::AuthError;
use crate::user::{AuthSnapshot, User};

/// Callback invoked on every auth transition.
pub type AuthListener = Arc<dyn Fn(AuthSnapshot) + Send + Sync>;

/// An identity provider that pushes state changes to subscribers.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Register `listener`. The provider reports the current state
    /// asynchronously after subscription, then every later transition.
    fn subscribe(&self, listener: AuthListener) -> Subscription;

    /// Start a sign-in.
    async fn login(&self) -> Result<User, AuthError>;

    /// Sign out and report `{user: None, is_loading: false}`.
    async fn logout(&self) -> Result<(), AuthError>;
}

/// Handle returned by [`AuthProvider::subscribe`]. Unsubscribes when
/// [`Subscription::unsubscribe`] is called or the handle is dropped.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Listener table shared between a provider and the subscriptions it hands out.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<RegistryInner>,
}

#[derive(Default)]
struct RegistryInner {
    next_id: AtomicU64,
    listeners: Mutex<HashMap<u64, AuthListener>>,
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener and return the handle that removes it.
    pub fn register(&self, listener: AuthListener) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, listener);

        let inner = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner
                    .listeners
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .remove(&id);
                tracing::debug!(listener = id, "auth listener removed");
            }
        })
    }

    /// Deliver `snapshot` to every registered listener.
    ///
    /// Listeners are called outside the lock, so a listener may unsubscribe
    /// itself.
    pub fn publish(&self, snapshot: &AuthSnapshot) {
        let listeners: Vec<AuthListener> = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();

        tracing::debug!(
            listeners = listeners.len(),
            signed_in = snapshot.is_signed_in(),
            "publishing auth state"
        );
        for listener in listeners {
            listener(snapshot.clone());
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.len())
            .finish()
    }
}
