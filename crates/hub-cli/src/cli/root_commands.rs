use clap::Subcommand;

use super::subcommands::{AuthCommands, ContentCommands, DashboardArgs};

/// All top-level commands.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Browse, open, and share card-news content
    Content {
        #[command(subcommand)]
        action: ContentCommands,
    },
    /// Coverage analysis dashboard
    Dashboard(DashboardArgs),
    /// Sign in, sign out, and check who is signed in
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
}
