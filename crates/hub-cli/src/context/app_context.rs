use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Utc};
use hub_auth::{AuthSession, CredentialsProvider, User};
use hub_config::HubConfig;
use hub_store::{HttpStore, HubService, MemoryStore, RecordStore};
use hub_views::Notifier;

use crate::cli::GlobalFlags;
use crate::notify::ConsoleNotifier;

/// Everything a data command needs: the configured service, where
/// notifications go, and the clock reading for this run.
pub struct AppContext {
    pub config: HubConfig,
    pub service: HubService,
    pub notifier: Arc<dyn Notifier>,
    pub now: DateTime<Utc>,
    /// Signed-in agent when talking to the hosted store.
    pub user: Option<User>,
    session: Option<AuthSession>,
}

impl AppContext {
    /// Open the record store and build the service.
    ///
    /// With `--fixture` the records come from a local JSON file and no sign-in
    /// is needed. Otherwise the hosted store is used and a signed-in user is
    /// required; their token authorizes every request.
    pub async fn init(config: HubConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let (store, session, user) = match &flags.fixture {
            Some(path) => (open_fixture(path).await?, None, None),
            None => {
                let (store, session, user) = open_hosted(&config).await?;
                (store, Some(session), Some(user))
            }
        };

        let service = HubService::new(store).with_content_config(&config.content);

        Ok(Self {
            config,
            service,
            notifier: Arc::new(ConsoleNotifier::new(flags.quiet)),
            now: Utc::now(),
            user,
            session,
        })
    }

    /// Release the auth subscription.
    pub fn shutdown(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.teardown();
        }
    }
}

async fn open_fixture(path: &Path) -> anyhow::Result<Arc<dyn RecordStore>> {
    let store = MemoryStore::from_fixture_file(path)
        .await
        .with_context(|| format!("failed to load fixture {}", path.display()))?;
    tracing::debug!(path = %path.display(), "using fixture store");
    Ok(Arc::new(store))
}

async fn open_hosted(
    config: &HubConfig,
) -> anyhow::Result<(Arc<dyn RecordStore>, AuthSession, User)> {
    let store_config = config
        .require_store()
        .context("no record store configured; set CARDHUB_STORE__URL or pass --fixture")?;

    let provider = CredentialsProvider::from_config(&config.auth)?;
    let mut session = AuthSession::init(Arc::new(provider.clone()));
    let snapshot = session.settled().await?;
    let Some(user) = snapshot.user else {
        anyhow::bail!("not signed in - run `cardhub auth login` first");
    };

    let token = provider.load().await.map(|credentials| credentials.token);
    let store = HttpStore::from_config(store_config, token)
        .context("failed to build record store client")?;
    tracing::debug!(user = %user.id, "using hosted store");

    Ok((Arc::new(store), session, user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(fixture: Option<std::path::PathBuf>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            quiet: true,
            fixture,
        }
    }

    #[tokio::test]
    async fn fixture_needs_no_sign_in() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.json");
        std::fs::write(&path, r#"{"card_news": [{"id": "n1", "title": "Tax tips"}]}"#).unwrap();

        let mut ctx = AppContext::init(HubConfig::default(), &flags(Some(path)))
            .await
            .unwrap();
        assert!(ctx.user.is_none());
        let items = ctx.service.list_content(ctx.now).await.unwrap();
        assert_eq!(items.len(), 1);
        ctx.shutdown();
    }

    #[tokio::test]
    async fn missing_fixture_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result =
            AppContext::init(HubConfig::default(), &flags(Some(dir.path().join("nope.json")))).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn hosted_store_requires_configuration() {
        let result = AppContext::init(HubConfig::default(), &flags(None)).await;
        let message = format!("{:#}", result.err().unwrap());
        assert!(message.contains("no record store configured"));
    }

    #[tokio::test]
    async fn hosted_store_requires_sign_in() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = HubConfig::default();
        config.store.url = "https://store.example".into();
        config.auth.credentials_path = dir
            .path()
            .join("credentials.json")
            .to_string_lossy()
            .into_owned();

        let result = AppContext::init(config, &flags(None)).await;
        let message = format!("{:#}", result.err().unwrap());
        assert!(message.contains("not signed in"));
    }
}
