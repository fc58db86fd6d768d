use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::license::alias::{parse_alias_config, AliasResolver};
use crate::license::catalog::Catalog;

/// Root configuration structure, deserialized from `.unified-license/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub aliases: AliasesConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
}

/// Where the reference catalog comes from.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog replacing the bundled one.
    pub file: Option<PathBuf>,
}

/// Where the alias table comes from.
#[derive(Debug, Default, Deserialize)]
pub struct AliasesConfig {
    /// JSON alias table replacing the bundled one.
    pub file: Option<PathBuf>,
    /// Skip alias resolution entirely; license names are used as written.
    #[serde(default)]
    pub identity: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct PolicyConfig {
    /// Exit with code 1 when any dependency is not approved.
    #[serde(default)]
    pub fail_on_not_approved: bool,
}

impl Config {
    /// Make relative data-file paths relative to `base` instead of the
    /// working directory.
    fn rebase(mut self, base: &Path) -> Self {
        for file in [&mut self.catalog.file, &mut self.aliases.file] {
            if let Some(path) = file.as_mut() {
                if path.is_relative() {
                    *path = base.join(&*path);
                }
            }
        }
        self
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` - path passed via `--config`
/// 2. `<project_path>/.unified-license/config.toml`
/// 3. `~/.config/unified-license/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".unified-license").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("unified-license")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(config.rebase(base))
}

/// The configured catalog, or the bundled one.
pub fn load_catalog(config: &Config) -> Result<Catalog> {
    match &config.catalog.file {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read catalog {}", path.display()))?;
            Catalog::from_json(&content)
                .with_context(|| format!("failed to parse catalog {}", path.display()))
        }
        None => Catalog::bundled().context("bundled catalog is malformed"),
    }
}

/// The configured alias resolver: identity, from a file, or the bundled table.
pub fn load_resolver(config: &Config) -> Result<AliasResolver> {
    if config.aliases.identity {
        return Ok(AliasResolver::new(None));
    }

    match &config.aliases.file {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read alias table {}", path.display()))?;
            let aliases = parse_alias_config(&content)
                .with_context(|| format!("failed to parse alias table {}", path.display()))?;
            Ok(AliasResolver::new(Some(&aliases)))
        }
        None => AliasResolver::bundled().context("bundled alias table is malformed"),
    }
}
