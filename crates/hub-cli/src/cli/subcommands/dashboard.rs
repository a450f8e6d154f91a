use clap::{Args, ValueEnum};

#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// Which part of the dashboard to print
    #[arg(long, value_enum, default_value = "all")]
    pub section: DashboardSection,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum DashboardSection {
    #[default]
    All,
    /// Headline statistics
    Stats,
    /// Customers per insurance type
    Insurance,
    /// Customers per age band
    Ages,
    /// Premiums per month
    Trend,
    /// Customer list with contact staleness
    Customers,
}
