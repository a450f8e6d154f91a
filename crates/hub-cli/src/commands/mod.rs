pub mod auth;
pub mod content;
pub mod dashboard;
pub mod dispatch;
