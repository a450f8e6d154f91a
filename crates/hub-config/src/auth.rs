//! Session/identity configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Page opened in the browser when a login is requested without stored
    /// credentials.
    #[serde(default)]
    pub login_url: String,

    /// Override for the credentials file location. Empty means
    /// `<config dir>/cardhub/credentials.json`.
    #[serde(default)]
    pub credentials_path: String,
}

impl AuthConfig {
    pub fn has_login_url(&self) -> bool {
        !self.login_url.is_empty()
    }

    /// Resolve the credentials file path.
    pub fn credentials_file(&self) -> Option<PathBuf> {
        if self.credentials_path.is_empty() {
            dirs::config_dir().map(|p| p.join("cardhub").join("credentials.json"))
        } else {
            Some(PathBuf::from(&self.credentials_path))
        }
    }
}
