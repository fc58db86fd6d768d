use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::detector::{detect_format, ManifestFormat};
use crate::license::alias::AliasResolver;
use crate::models::LicenseRecord;

/// Parsed license manifest.
///
/// XML layout (the root element name is not significant):
///
/// ```xml
/// <licenseSummary>
///   <dependencies>
///     <dependency>
///       <packageName>testProject</packageName>
///       <version>1.0.0</version>
///       <licenses>
///         <license><name>MIT</name><url>...</url></license>
///       </licenses>
///     </dependency>
///   </dependencies>
/// </licenseSummary>
/// ```
///
/// The JSON form mirrors it: `{"dependencies": {"dependency": [...]}}`.
#[derive(Debug, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub dependencies: Dependencies,
}

#[derive(Debug, Default, Deserialize)]
pub struct Dependencies {
    #[serde(default)]
    pub dependency: Vec<ManifestDependency>,
}

#[derive(Debug, Deserialize)]
pub struct ManifestDependency {
    #[serde(rename = "packageName")]
    pub package_name: String,
    pub version: String,
    #[serde(default)]
    pub licenses: Licenses,
}

#[derive(Debug, Default, Deserialize)]
pub struct Licenses {
    #[serde(default)]
    pub license: Vec<LicenseDescriptor>,
}

#[derive(Debug, Deserialize)]
pub struct LicenseDescriptor {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Reads a manifest file and flattens it into license records.
pub struct ManifestAnalyzer<'a> {
    resolver: &'a AliasResolver,
}

impl<'a> ManifestAnalyzer<'a> {
    pub fn new(resolver: &'a AliasResolver) -> Self {
        Self { resolver }
    }
}

impl super::Analyzer for ManifestAnalyzer<'_> {
    fn analyze(&self, path: &Path) -> Result<Vec<LicenseRecord>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest {}", path.display()))?;

        let manifest = match detect_format(path) {
            ManifestFormat::Xml => parse_xml(&content),
            ManifestFormat::Json => parse_json(&content),
        }
        .with_context(|| format!("failed to parse manifest {}", path.display()))?;

        Ok(extract(&manifest, self.resolver))
    }
}

/// Parse an XML manifest using quick-xml's serde support.
pub fn parse_xml(content: &str) -> Result<Manifest> {
    Ok(quick_xml::de::from_str(content)?)
}

/// Parse a JSON manifest with the same shape as the XML one.
pub fn parse_json(content: &str) -> Result<Manifest> {
    Ok(serde_json::from_str(content)?)
}

/// One record per dependency, in manifest order.
///
/// Each declared license name is resolved on its own; several names are then
/// joined with `", "` into a single license string.
pub fn extract(manifest: &Manifest, resolver: &AliasResolver) -> Vec<LicenseRecord> {
    manifest
        .dependencies
        .dependency
        .iter()
        .map(|dep| {
            let license = dep
                .licenses
                .license
                .iter()
                .map(|l| resolver.resolve(&l.name))
                .collect::<Vec<_>>()
                .join(", ");
            LicenseRecord::new(&dep.package_name, &dep.version, license)
        })
        .collect()
}
