use indexmap::IndexSet;
use serde::Serialize;

/// One dependency from a manifest, reduced to the fields the classifier needs.
///
/// `license` holds the canonical name produced by the alias resolver. A
/// package declaring several licenses carries the resolved names joined with
/// `", "`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseRecord {
    pub package_name: String,
    pub version: String,
    pub license: String,
}

impl LicenseRecord {
    pub fn new(
        package_name: impl Into<String>,
        version: impl Into<String>,
        license: impl Into<String>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            version: version.into(),
            license: license.into(),
        }
    }
}

impl std::fmt::Display for LicenseRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "name: {} , version: {} , licenses: {}",
            self.package_name, self.version, self.license
        )
    }
}

/// Records split into the two disjoint groups.
///
/// Both groups are insertion-ordered sets: identical records collapse into a
/// single entry at the position of their first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub approved: IndexSet<LicenseRecord>,
    pub not_approved: IndexSet<LicenseRecord>,
}

impl Classification {
    pub fn total(&self) -> usize {
        self.approved.len() + self.not_approved.len()
    }
}
