//! License name canonicalization and approval classification.
//!
//! - [`alias`] - maps raw manifest license names to canonical names.
//! - [`catalog`] - canonical names with approval status and reference URL.
//! - [`classifier`] - splits records into approved and not-approved groups.

pub mod alias;
pub mod catalog;
pub mod classifier;
