use hub_auth::{AuthSession, CredentialsProvider};
use serde::Serialize;

use super::Identity;
use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuthStatusResponse {
    #[serde(flatten)]
    identity: Identity,
    saved_at: Option<String>,
}

/// Report the settled session state; never fails for a signed-out user.
pub async fn handle(
    provider: &CredentialsProvider,
    session: &mut AuthSession,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let snapshot = session.settled().await?;
    let saved_at = match &snapshot.user {
        Some(_) => provider.load().await.map(|c| c.saved_at.to_rfc3339()),
        None => None,
    };

    output(
        &AuthStatusResponse {
            identity: Identity::new(snapshot.user.as_ref(), provider),
            saved_at,
        },
        flags.format,
    )
}
