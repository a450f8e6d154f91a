use anyhow::Context;
use chrono::Utc;
use hub_auth::{AuthSession, Credentials, CredentialsProvider, User};

use super::Identity;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthLoginArgs;
use crate::output::output;

/// With `--token`, store the given credentials first. Either way the session
/// then signs in from what is stored; with nothing stored the login page is
/// opened and the command fails.
pub async fn handle(
    args: &AuthLoginArgs,
    provider: &CredentialsProvider,
    session: &AuthSession,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let (Some(token), Some(user_id)) = (&args.token, &args.user_id) {
        let credentials = Credentials {
            token: token.clone(),
            user: User {
                id: user_id.clone(),
                email: args.email.clone(),
                display_name: args.name.clone(),
            },
            saved_at: Utc::now(),
        };
        provider.save(&credentials).await?;
    }

    let user = session.login().await.context(
        "no stored credentials; sign in on the login page, then run `cardhub auth login --token <TOKEN> --user-id <ID>`",
    )?;

    if !flags.quiet {
        eprintln!("Signed in as {}", user.label());
    }
    output(&Identity::new(Some(&user), provider), flags.format)
}
