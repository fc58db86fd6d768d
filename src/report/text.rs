use std::io::{self, Write};

use indexmap::IndexSet;

use crate::models::{Classification, LicenseRecord};

pub const APPROVED_BANNER: &str = "========= APPROVED LICENSES        ==========";
pub const NOT_APPROVED_BANNER: &str = "========= NOT APPROVED LICENSES    ==========";

/// Write the approved group, then the not-approved group.
pub fn render<W: Write>(out: &mut W, classification: &Classification) -> io::Result<()> {
    write_approved(out, &classification.approved)?;
    write_not_approved(out, &classification.not_approved)
}

pub fn write_approved<W: Write>(out: &mut W, records: &IndexSet<LicenseRecord>) -> io::Result<()> {
    write_group(out, APPROVED_BANNER, records)
}

pub fn write_not_approved<W: Write>(
    out: &mut W,
    records: &IndexSet<LicenseRecord>,
) -> io::Result<()> {
    write_group(out, NOT_APPROVED_BANNER, records)
}

fn write_group<W: Write>(
    out: &mut W,
    banner: &str,
    records: &IndexSet<LicenseRecord>,
) -> io::Result<()> {
    writeln!(out, "{}", banner)?;
    for record in records {
        writeln!(out, "{}", record)?;
    }
    writeln!(out, "{}", banner)
}
