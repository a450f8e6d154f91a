use hub_core::views::RecommendationView;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ContentIdArgs;
use crate::context::AppContext;
use crate::output::output_sections;

#[derive(Debug, Serialize)]
struct ContentSummary {
    id: String,
    title: String,
    description: String,
    category: &'static str,
    thumbnail_url: String,
    view_count: u64,
    view_recorded: bool,
    like_count: u64,
    tags: Vec<String>,
    created_at: String,
}

#[derive(Debug, Serialize)]
struct RecommendedCustomer {
    customer_id: String,
    name: String,
    insurance_type: String,
    #[serde(rename = "match")]
    match_percent: String,
    reason: String,
}

impl From<&RecommendationView> for RecommendedCustomer {
    fn from(view: &RecommendationView) -> Self {
        Self {
            customer_id: view.customer.id.clone(),
            name: view.customer.name.clone(),
            insurance_type: view.customer.insurance_type.clone(),
            match_percent: format!("{}%", view.match_percent),
            reason: view.reason.clone(),
        }
    }
}

/// Open one item. Opening always counts as a view, even when the item was
/// opened before.
pub async fn handle(
    args: &ContentIdArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut hub = super::loaded_hub(ctx, None).await;

    let outcome = hub.view_details(&args.id).await?;
    let detail = hub.detail(&args.id)?;
    let item = detail.item;

    let summary = ContentSummary {
        id: item.id,
        title: item.title,
        description: item.description,
        category: item.category.as_str(),
        thumbnail_url: item.thumbnail_url,
        view_count: outcome.view_count,
        view_recorded: outcome.persisted,
        like_count: item.like_count,
        tags: item.tags,
        created_at: item.created_at.format("%Y-%m-%d").to_string(),
    };
    let customers = detail
        .recommendations
        .iter()
        .take(flags.row_limit())
        .map(RecommendedCustomer::from)
        .collect::<Vec<_>>();

    output_sections(
        vec![
            ("content", serde_json::to_value(&summary)?),
            ("recommended_customers", serde_json::to_value(&customers)?),
        ],
        flags.format,
    )
}
