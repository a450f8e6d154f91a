pub mod auth;
pub mod content;
pub mod dashboard;

pub use auth::{AuthCommands, AuthLoginArgs};
pub use content::{ContentCommands, ContentIdArgs, ContentListArgs, TabArg};
pub use dashboard::{DashboardArgs, DashboardSection};
