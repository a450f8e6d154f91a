use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated - run `cardhub auth login`")]
    NotAuthenticated,

    #[error("credential store error: {0}")]
    CredentialStore(String),

    #[error("no credentials location available: {0}")]
    NoCredentialsPath(String),

    #[error("{0}")]
    Other(String),
}
