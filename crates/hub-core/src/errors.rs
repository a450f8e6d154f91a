//! Error type for hub-core.
//!
//! Normalization, joins, and aggregation never fail. The only fallible
//! operations here are strict parses of user-supplied keys, such as a
//! category name typed on the command line.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (unknown category, bad argument).
    #[error("Validation error: {0}")]
    Validation(String),
}
