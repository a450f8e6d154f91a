use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in. With `--token`, store the given credentials; otherwise reuse
    /// stored credentials or open the login page.
    Login(AuthLoginArgs),
    /// Clear stored credentials
    Logout,
    /// Show who is signed in
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Access token issued by the hosted store
    #[arg(long, requires = "user_id")]
    pub token: Option<String>,

    /// Agent user id the token belongs to
    #[arg(long, requires = "token")]
    pub user_id: Option<String>,

    /// Agent email
    #[arg(long, requires = "token")]
    pub email: Option<String>,

    /// Display name
    #[arg(long, requires = "token")]
    pub name: Option<String>,
}
