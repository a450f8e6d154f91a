//! # hub-core
//!
//! Core types and view-model derivation for CardHub.
//!
//! This crate owns everything between a raw store record and a UI-ready
//! structure:
//! - Entity structs for content items, customers, recommendations, and
//!   coverage analyses
//! - The untyped [`raw::RawRecord`] shape returned by the record store
//! - Record normalization (the only place loosely typed fields are coerced)
//! - Customer-reference joins with observable drop counts
//! - Summary statistics and chart distributions
//! - Contact staleness classification
//! - View-model types consumed by the presentation layer

pub mod aggregate;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod join;
pub mod normalize;
pub mod raw;
pub mod staleness;
pub mod views;
