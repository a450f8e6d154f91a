use clap::{Args, Subcommand, ValueEnum};
use hub_core::enums::ContentCategory;

/// Content hub commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ContentCommands {
    /// List the feed for one category tab, most viewed first
    List(ContentListArgs),
    /// Open an item: records a view and lists recommended customers
    Show(ContentIdArgs),
    /// Share an item with a customer
    Share(ContentIdArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ContentListArgs {
    /// Category tab (defaults to `content.default_tab`)
    #[arg(long, value_enum)]
    pub tab: Option<TabArg>,
}

#[derive(Clone, Debug, Args)]
pub struct ContentIdArgs {
    /// Content item id
    pub id: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum TabArg {
    Best,
    #[value(alias = "designer_pick")]
    DesignerPick,
    #[value(alias = "customer_pick")]
    CustomerPick,
}

impl From<TabArg> for ContentCategory {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::Best => Self::Best,
            TabArg::DesignerPick => Self::DesignerPick,
            TabArg::CustomerPick => Self::CustomerPick,
        }
    }
}
