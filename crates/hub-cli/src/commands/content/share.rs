use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ContentIdArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ShareResponse {
    content_id: String,
    title: String,
    shared: bool,
    shared_by: Option<String>,
}

pub async fn handle(
    args: &ContentIdArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let hub = super::loaded_hub(ctx, None).await;
    hub.share(&args.id)?;

    let title = hub
        .item(&args.id)
        .map(|item| item.title.clone())
        .unwrap_or_default();
    output(
        &ShareResponse {
            content_id: args.id.clone(),
            title,
            shared: true,
            shared_by: ctx.user.as_ref().map(|user| user.label().to_string()),
        },
        flags.format,
    )
}
