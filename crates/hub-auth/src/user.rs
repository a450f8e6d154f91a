use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl User {
    /// Display name, then email, then id.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

/// What the credentials file holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub token: String,
    pub user: User,
    pub saved_at: DateTime<Utc>,
}

/// Identity as seen by consumers: who is signed in, and whether that is
/// still being determined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSnapshot {
    pub user: Option<User>,
    pub is_loading: bool,
}

impl AuthSnapshot {
    /// Initial state before the provider has reported anything.
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    #[must_use]
    pub const fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            is_loading: false,
        }
    }

    #[must_use]
    pub const fn signed_out() -> Self {
        Self {
            user: None,
            is_loading: false,
        }
    }

    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for AuthSnapshot {
    fn default() -> Self {
        Self::loading()
    }
}
