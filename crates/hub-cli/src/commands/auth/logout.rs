use hub_auth::{AuthSession, CredentialsProvider};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
    credentials_path: String,
}

pub async fn handle(
    provider: &CredentialsProvider,
    session: &AuthSession,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    session.logout().await?;
    output(
        &AuthLogoutResponse {
            cleared: true,
            credentials_path: provider.path().display().to_string(),
        },
        flags.format,
    )
}
