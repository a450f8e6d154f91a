use hub_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("content item not found: {0}")]
    ContentNotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
