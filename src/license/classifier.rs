use std::collections::HashSet;

use indexmap::IndexSet;

use crate::license::catalog::Catalog;
use crate::models::{Classification, LicenseRecord};

/// Which side of a name set [`partition`] keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    /// Keep records whose license is one of the names.
    Member,
    /// Keep records whose license is none of the names.
    NonMember,
}

/// Select the records whose license does or does not equal one of `names`.
///
/// Matching is exact string equality on the record's license; aliasing must
/// already have happened. Identical records collapse into one entry.
pub fn partition(
    records: &[LicenseRecord],
    names: &HashSet<&str>,
    membership: Membership,
) -> IndexSet<LicenseRecord> {
    let wanted = membership == Membership::Member;
    records
        .iter()
        .filter(|record| names.contains(record.license.as_str()) == wanted)
        .cloned()
        .collect()
}

/// Records whose license is one of the approved names.
pub fn find_approved(
    approved_names: &HashSet<&str>,
    records: &[LicenseRecord],
) -> IndexSet<LicenseRecord> {
    partition(records, approved_names, Membership::Member)
}

/// Records whose license is not one of the approved names.
///
/// This includes licenses the catalog marks as not approved, licenses the
/// catalog does not know, and [`UNKNOWN`](crate::license::alias::UNKNOWN).
pub fn find_not_approved(
    approved_names: &HashSet<&str>,
    records: &[LicenseRecord],
) -> IndexSet<LicenseRecord> {
    partition(records, approved_names, Membership::NonMember)
}

/// Split `records` into approved and not-approved groups using `catalog`.
pub fn classify(catalog: &Catalog, records: &[LicenseRecord]) -> Classification {
    let approved_names = catalog.approved_names();
    Classification {
        approved: find_approved(&approved_names, records),
        not_approved: find_not_approved(&approved_names, records),
    }
}
