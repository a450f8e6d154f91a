//! Entity structs for all CardHub domain objects.
//!
//! Each entity is the typed form of one record-store collection (see
//! [`crate::enums::Collection`]). Entities are produced only by
//! [`crate::normalize`] and are never mutated after a load.

mod content;
mod coverage;
mod customer;
mod recommendation;

pub use content::ContentItem;
pub use coverage::CoverageAnalysis;
pub use customer::Customer;
pub use recommendation::Recommendation;
