//! File-backed identity provider.
//!
//! Credentials live in a single JSON file (`<config dir>/cardhub/credentials.json`
//! unless overridden). Subscribers receive the stored state once it has been
//! read, and every later login, save, or logout.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use hub_config::AuthConfig;

use crate::error::AuthError;
use crate::provider::{AuthListener, AuthProvider, ListenerRegistry, Subscription};
use crate::user::{AuthSnapshot, Credentials, User};

#[derive(Debug, Clone)]
pub struct CredentialsProvider {
    path: PathBuf,
    login_url: Option<String>,
    registry: ListenerRegistry,
}

impl CredentialsProvider {
    pub fn new(path: impl Into<PathBuf>, login_url: Option<String>) -> Self {
        Self {
            path: path.into(),
            login_url: login_url.filter(|url| !url.is_empty()),
            registry: ListenerRegistry::new(),
        }
    }

    /// Build from the `[auth]` config section.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NoCredentialsPath` if no override is set and the
    /// platform has no config directory.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AuthError> {
        let path = config.credentials_file().ok_or_else(|| {
            AuthError::NoCredentialsPath("set auth.credentials_path or CARDHUB_AUTH__CREDENTIALS_PATH".into())
        })?;
        Ok(Self::new(path, Some(config.login_url.clone())))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read stored credentials. A missing file is `Ok(None)`; an unreadable
    /// or corrupt one is logged and also treated as signed out.
    pub async fn load(&self) -> Option<Credentials> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return None,
            Err(error) => {
                tracing::warn!(%error, path = %self.path.display(), "cannot read credentials");
                return None;
            }
        };

        match serde_json::from_str::<Credentials>(&text) {
            Ok(credentials) if !credentials.token.is_empty() => Some(credentials),
            Ok(_) => None,
            Err(error) => {
                tracing::warn!(%error, path = %self.path.display(), "ignoring corrupt credentials file");
                None
            }
        }
    }

    /// Persist credentials and announce the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::CredentialStore` if the file cannot be written.
    pub async fn save(&self, credentials: &Credentials) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AuthError::CredentialStore(format!("mkdir {}: {e}", parent.display()))
            })?;
        }

        let json = serde_json::to_string_pretty(credentials)
            .map_err(|e| AuthError::CredentialStore(e.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| AuthError::CredentialStore(format!("write {}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .await
                .map_err(|e| {
                    AuthError::CredentialStore(format!("chmod {}: {e}", self.path.display()))
                })?;
        }

        tracing::info!(user = %credentials.user.id, "credentials saved");
        self.registry
            .publish(&AuthSnapshot::signed_in(credentials.user.clone()));
        Ok(())
    }

    fn open_login_page(&self) {
        let Some(url) = &self.login_url else {
            return;
        };
        eprintln!("Opening browser to: {url}");
        if let Err(error) = open::that(url) {
            tracing::warn!(%error, "failed to open browser");
            eprintln!("Open the URL above manually, then run `cardhub auth login --token ...`.");
        }
    }
}

#[async_trait]
impl AuthProvider for CredentialsProvider {
    /// Must be called from within a Tokio runtime: the stored state is read
    /// on a spawned task and published when ready.
    fn subscribe(&self, listener: AuthListener) -> Subscription {
        let subscription = self.registry.register(listener);

        let provider = self.clone();
        tokio::spawn(async move {
            let snapshot = match provider.load().await {
                Some(credentials) => AuthSnapshot::signed_in(credentials.user),
                None => AuthSnapshot::signed_out(),
            };
            provider.registry.publish(&snapshot);
        });

        subscription
    }

    async fn login(&self) -> Result<User, AuthError> {
        if let Some(credentials) = self.load().await {
            self.registry
                .publish(&AuthSnapshot::signed_in(credentials.user.clone()));
            return Ok(credentials.user);
        }

        self.open_login_page();
        Err(AuthError::NotAuthenticated)
    }

    async fn logout(&self) -> Result<(), AuthError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => tracing::info!(path = %self.path.display(), "credentials removed"),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
            Err(error) => {
                return Err(AuthError::CredentialStore(format!(
                    "failed to delete {}: {error}",
                    self.path.display()
                )));
            }
        }

        self.registry.publish(&AuthSnapshot::signed_out());
        Ok(())
    }
}
