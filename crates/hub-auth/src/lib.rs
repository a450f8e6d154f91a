//! # hub-auth
//!
//! Sign-in state for CardHub.
//!
//! An [`AuthProvider`] pushes identity transitions to listeners. The
//! [`AuthSession`] subscribes once at startup, keeps the latest
//! [`AuthSnapshot`] in a watch channel, and unsubscribes on teardown.
//! [`CredentialsProvider`] is the file-backed provider used by the CLI.

pub mod credentials;
pub mod error;
pub mod provider;
pub mod session;
pub mod user;

pub use credentials::CredentialsProvider;
pub use error::AuthError;
pub use provider::{AuthListener, AuthProvider, ListenerRegistry, Subscription};
pub use session::AuthSession;
pub use user::{AuthSnapshot, Credentials, User};
