//! # hub-config
//!
//! Layered configuration loading for CardHub using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CARDHUB_*` prefix, `__` as separator)
//! 2. Project-level `.cardhub/config.toml`
//! 3. User-level `~/.config/cardhub/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CARDHUB_STORE__URL` -> `store.url`,
//! `CARDHUB_DASHBOARD__STALE_AFTER_DAYS` -> `dashboard.stale_after_days`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use hub_config::HubConfig;
//!
//! let config = HubConfig::load_with_dotenv().expect("config");
//! if config.store.is_configured() {
//!     println!("Store URL: {}", config.store.url);
//! }
//! ```

mod auth;
mod content;
mod dashboard;
mod error;
mod store;

pub use auth::AuthConfig;
pub use content::ContentConfig;
pub use dashboard::DashboardConfig;
pub use error::ConfigError;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HubConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl HubConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`HubConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".cardhub/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("CARDHUB_").split("__"))
    }

    /// Reject values that would make the screens misbehave.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content.feed_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "content.feed_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.content.recommendation_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "content.recommendation_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.store.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "store.timeout_secs".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.dashboard.recent_within_days >= self.dashboard.stale_after_days {
            return Err(ConfigError::InvalidValue {
                field: "dashboard.recent_within_days".into(),
                reason: format!(
                    "must be below dashboard.stale_after_days ({})",
                    self.dashboard.stale_after_days
                ),
            });
        }
        Ok(())
    }

    /// Return the store section, or an error if it has no URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when `store.url` is empty.
    pub fn require_store(&self) -> Result<&StoreConfig, ConfigError> {
        if self.store.is_configured() {
            Ok(&self.store)
        } else {
            Err(ConfigError::NotConfigured {
                section: "store".into(),
            })
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cardhub").join("config.toml"))
    }
}
