use std::path::Path;

use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use indexmap::IndexSet;

use crate::license::catalog::{Catalog, LookupError};
use crate::models::{Classification, LicenseRecord};

/// Render a colored terminal report.
pub fn render(
    classification: &Classification,
    catalog: &Catalog,
    path: &Path,
    verbose: bool,
) -> Result<()> {
    let approved_count = classification.approved.len();
    let not_approved_count = classification.not_approved.len();

    println!(
        "\n {} v{}",
        "unified-license".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Manifest: {}\n", path.display());

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(
        " │  {:<48} │",
        format!("Total dependencies : {}", classification.total())
    );
    println!(
        " │  {:<48} │",
        format!("{}  Approved        : {:>4}", "✓".green(), approved_count)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Not approved    : {:>4}", "✗".red(), not_approved_count)
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    if not_approved_count > 0 {
        println!(
            " {} Dependencies requiring attention:\n",
            "[NOT APPROVED]".red().bold()
        );
        render_table(&classification.not_approved, catalog, Color::Red);
        println!();
    }

    if verbose && approved_count > 0 {
        println!(" {} Approved dependencies:\n", "[APPROVED]".green().bold());
        render_table(&classification.approved, catalog, Color::Green);
        println!();
    }

    Ok(())
}

/// Print the one-line summary used by `--quiet`.
pub fn render_summary(classification: &Classification) {
    println!(
        "Total: {}  Approved: {}  Not approved: {}",
        classification.total(),
        classification.approved.len().to_string().green(),
        classification.not_approved.len().to_string().red(),
    );
}

fn render_table(records: &IndexSet<LicenseRecord>, catalog: &Catalog, license_color: Color) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Version").add_attribute(Attribute::Bold),
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("URL").add_attribute(Attribute::Bold),
        ]);

    for record in records {
        let (urls, missing) = license_urls(catalog, &record.license);
        for err in &missing {
            eprintln!("{} {}", "warning:".yellow().bold(), err);
        }

        let url_cell = if missing.is_empty() && urls.iter().all(|u| u == "-") {
            Cell::new(urls.join("\n")).fg(Color::DarkGrey)
        } else {
            Cell::new(urls.join("\n"))
        };

        table.add_row(vec![
            Cell::new(&record.package_name),
            Cell::new(&record.version),
            Cell::new(&record.license).fg(license_color),
            url_cell,
        ]);
    }

    println!("{}", table);
}

/// Reference URLs for a record's license, one per declared license.
///
/// Joined multi-license strings are looked up component by component. An
/// empty URL or an empty license shows as `-`; a component the catalog does
/// not know shows as `unregistered` and is returned as an error.
fn license_urls(catalog: &Catalog, license: &str) -> (Vec<String>, Vec<LookupError>) {
    if license.is_empty() {
        return (vec!["-".to_string()], Vec::new());
    }

    let parts: Vec<&str> = if catalog.url_for(license).is_ok() {
        vec![license]
    } else {
        license.split(", ").collect()
    };

    let mut urls = Vec::new();
    let mut missing = Vec::new();
    for part in parts {
        match catalog.url_for(part) {
            Ok("") => urls.push("-".to_string()),
            Ok(url) => urls.push(url.to_string()),
            Err(err) => {
                urls.push("unregistered".to_string());
                missing.push(err);
            }
        }
    }
    (urls, missing)
}
