mod login;
mod logout;
mod status;

use std::sync::Arc;

use hub_auth::{AuthSession, CredentialsProvider};
use hub_config::HubConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

/// Handle `cardhub auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    flags: &GlobalFlags,
    config: &HubConfig,
) -> anyhow::Result<()> {
    let provider = CredentialsProvider::from_config(&config.auth)?;
    let mut session = AuthSession::init(Arc::new(provider.clone()));

    let result = match action {
        AuthCommands::Login(args) => login::handle(args, &provider, &session, flags).await,
        AuthCommands::Logout => logout::handle(&provider, &session, flags).await,
        AuthCommands::Status => status::handle(&provider, &mut session, flags).await,
    };
    session.teardown();
    result
}

/// Identity fields shared by the login and status responses.
#[derive(Debug, Serialize)]
struct Identity {
    authenticated: bool,
    user_id: Option<String>,
    email: Option<String>,
    name: Option<String>,
    credentials_path: String,
}

impl Identity {
    fn new(user: Option<&hub_auth::User>, provider: &CredentialsProvider) -> Self {
        Self {
            authenticated: user.is_some(),
            user_id: user.map(|u| u.id.clone()),
            email: user.and_then(|u| u.email.clone()),
            name: user.and_then(|u| u.display_name.clone()),
            credentials_path: provider.path().display().to_string(),
        }
    }
}
