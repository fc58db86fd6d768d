use std::path::Path;

use anyhow::Result;

use crate::models::LicenseRecord;

pub mod manifest;

pub trait Analyzer {
    fn analyze(&self, path: &Path) -> Result<Vec<LicenseRecord>>;
}
