mod list;
mod share;
mod show;

use hub_core::enums::ContentCategory;
use hub_views::ContentHubController;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ContentCommands;
use crate::context::AppContext;

/// Handle `cardhub content <subcommand>`.
pub async fn handle(
    action: &ContentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ContentCommands::List(args) => list::handle(args, ctx, flags).await,
        ContentCommands::Show(args) => show::handle(args, ctx, flags).await,
        ContentCommands::Share(args) => share::handle(args, ctx, flags).await,
    }
}

/// A content hub with its feed and recommendations loaded.
async fn loaded_hub(ctx: &AppContext, tab: Option<ContentCategory>) -> ContentHubController {
    let tab = tab.unwrap_or(ctx.config.content.default_tab);
    let mut hub =
        ContentHubController::new(ctx.service.clone(), ctx.notifier.clone()).with_tab(tab);
    hub.load(ctx.now).await;
    hub
}
