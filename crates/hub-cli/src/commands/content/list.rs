use hub_core::entities::ContentItem;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ContentListArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ContentRow {
    id: String,
    title: String,
    category: &'static str,
    view_count: u64,
    like_count: u64,
    tags: Vec<String>,
    recommended_customers: usize,
}

impl ContentRow {
    fn new(item: &ContentItem, recommended_customers: usize) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            category: item.category.as_str(),
            view_count: item.view_count,
            like_count: item.like_count,
            tags: item.tags.clone(),
            recommended_customers,
        }
    }
}

pub async fn handle(
    args: &ContentListArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let hub = super::loaded_hub(ctx, args.tab.map(Into::into)).await;

    let rows = hub
        .visible_items()
        .into_iter()
        .take(flags.row_limit())
        .map(|item| ContentRow::new(item, hub.recommendations_for(&item.id).len()))
        .collect::<Vec<_>>();

    tracing::debug!(tab = hub.tab().as_str(), rows = rows.len(), "content list");
    output(&rows, flags.format)
}
