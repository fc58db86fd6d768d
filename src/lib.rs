pub mod analyzer;
pub mod config;
pub mod detector;
pub mod license;
pub mod models;
pub mod report;

// Re-export main types for easy access
pub use license::alias::{AliasConfig, AliasResolver, UNKNOWN};
pub use license::catalog::{Catalog, CatalogEntry, LookupError};
pub use license::classifier::{classify, find_approved, find_not_approved, partition, Membership};
pub use models::{Classification, LicenseRecord};
