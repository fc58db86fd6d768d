use std::path::Path;

/// Serialization of a license manifest on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Xml,
    Json,
}

impl std::fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestFormat::Xml => write!(f, "XML"),
            ManifestFormat::Json => write!(f, "JSON"),
        }
    }
}

/// Pick the manifest format from the file extension; anything that is not
/// `.json` is read as XML.
pub fn detect_format(path: &Path) -> ManifestFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => ManifestFormat::Json,
        _ => ManifestFormat::Xml,
    }
}
