//! `unified-license` - classify a license manifest against a unified license list.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config (`config::load_config`) and apply CLI overrides.
//! 3. Load the catalog and alias table, warning about canonical names the
//!    catalog does not register.
//! 4. Either answer `--url-for`, or read the manifest (`analyzer::manifest`).
//! 5. Classify records (`license::classifier::classify`).
//! 6. Render the requested report (`report`).
//! 7. Exit `0`, or `1` under `--strict` when anything is not approved.

mod cli;

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::{Cli, ReportFormat};
use unified_license::analyzer::manifest::ManifestAnalyzer;
use unified_license::analyzer::Analyzer;
use unified_license::config::{load_catalog, load_config, load_resolver};
use unified_license::detector::detect_format;
use unified_license::{classify, report};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config is looked up next to the manifest
    let project_dir = cli
        .manifest
        .as_deref()
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut config = load_config(project_dir, cli.config.as_deref())?;
    if let Some(catalog) = &cli.catalog {
        config.catalog.file = Some(catalog.clone());
    }
    if let Some(aliases) = &cli.aliases {
        config.aliases.file = Some(aliases.clone());
        config.aliases.identity = false;
    }
    if cli.no_aliases {
        config.aliases.identity = true;
    }
    if cli.strict {
        config.policy.fail_on_not_approved = true;
    }

    let catalog = load_catalog(&config)?;
    let resolver = load_resolver(&config)?;

    if !cli.quiet {
        for name in catalog.unregistered(&resolver) {
            eprintln!(
                "{} alias table maps to [{}] which has no catalog entry",
                "warning:".yellow().bold(),
                name
            );
        }
    }

    if let Some(name) = &cli.url_for {
        println!("{}", catalog.url_for(name)?);
        return Ok(());
    }

    let Some(manifest) = cli.manifest.as_deref() else {
        anyhow::bail!("no manifest given");
    };

    let records = ManifestAnalyzer::new(&resolver).analyze(manifest)?;

    if !cli.quiet {
        eprintln!(
            "  {} {} manifest: {} dependencies",
            "→".cyan(),
            detect_format(manifest),
            records.len()
        );
    }

    let classification = classify(&catalog, &records);

    match cli.report {
        ReportFormat::Text => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            report::text::render(&mut out, &classification)?;
            out.flush()?;
        }
        ReportFormat::Table if cli.quiet => {
            report::terminal::render_summary(&classification);
        }
        ReportFormat::Table => {
            report::terminal::render(&classification, &catalog, manifest, cli.verbose)?;
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&classification)?);
        }
    }

    if config.policy.fail_on_not_approved && !classification.not_approved.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
