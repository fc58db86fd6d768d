use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "unified-license",
    about = "Classify dependency licenses into approved and not approved sets",
    version
)]
pub struct Cli {
    /// License manifest to check (.xml or .json)
    #[arg(required_unless_present = "url_for")]
    pub manifest: Option<PathBuf>,

    /// Config file [default: <manifest dir>/.unified-license/config.toml, fallback ~/.config/unified-license/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Catalog JSON replacing the configured or bundled one
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Alias table JSON replacing the configured or bundled one
    #[arg(long, value_name = "FILE", conflicts_with = "no_aliases")]
    pub aliases: Option<PathBuf>,

    /// Use license names exactly as written in the manifest
    #[arg(long)]
    pub no_aliases: bool,

    /// Report format
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Print the reference URL for a canonical license name and exit
    #[arg(long, value_name = "NAME")]
    pub url_for: Option<String>,

    /// Exit with code 1 when any dependency is not approved
    #[arg(long)]
    pub strict: bool,

    /// Table report: also list approved dependencies
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress progress and warnings; the table report prints only a summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Text,
    Table,
    Json,
}
