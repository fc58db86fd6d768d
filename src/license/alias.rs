use std::collections::{BTreeSet, HashMap};

use indexmap::IndexMap;

/// Placeholder emitted wherever a license name could not be resolved.
pub const UNKNOWN: &str = "UNKNOWN";

/// Canonical name → aliases, in configuration order.
pub type AliasConfig = IndexMap<String, Vec<String>>;

const BUNDLED_ALIASES: &str = include_str!("../../resources/canonical-names.json");

/// Maps raw license names, as written in manifests, to canonical names.
///
/// Without an alias table the resolver is the identity. Matching is exact and
/// case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct AliasResolver {
    table: Option<HashMap<String, String>>,
}

impl AliasResolver {
    /// Build a resolver from an alias configuration, or an identity resolver
    /// when `config` is `None`.
    pub fn new(config: Option<&AliasConfig>) -> Self {
        let mut resolver = Self::default();
        resolver.initialize(config);
        resolver
    }

    /// Resolver seeded with the alias table shipped inside the binary.
    pub fn bundled() -> serde_json::Result<Self> {
        let config = parse_alias_config(BUNDLED_ALIASES)?;
        Ok(Self::new(Some(&config)))
    }

    /// Replace the alias table with the inversion of `config`.
    ///
    /// The previous table is discarded, never merged. When one alias is listed
    /// under two canonical names, the later one wins.
    pub fn initialize(&mut self, config: Option<&AliasConfig>) {
        self.table = config.map(|config| {
            let mut table = HashMap::new();
            for (canonical, aliases) in config {
                for alias in aliases {
                    table.insert(alias.clone(), canonical.clone());
                }
            }
            table
        });
    }

    /// Canonical name for `raw`, or `None` when the alias table has no entry.
    pub fn lookup<'a>(&'a self, raw: &'a str) -> Option<&'a str> {
        match &self.table {
            Some(table) => table.get(raw).map(String::as_str),
            None => Some(raw),
        }
    }

    /// Canonical name for `raw`, falling back to [`UNKNOWN`].
    pub fn resolve(&self, raw: &str) -> String {
        self.lookup(raw).unwrap_or(UNKNOWN).to_string()
    }

    pub fn is_identity(&self) -> bool {
        self.table.is_none()
    }

    /// Every canonical name this resolver can produce. Empty for the identity
    /// resolver, which produces whatever it is given.
    pub fn canonical_names(&self) -> BTreeSet<&str> {
        self.table
            .iter()
            .flat_map(|table| table.values().map(String::as_str))
            .collect()
    }
}

/// Parse an alias table from its JSON form.
pub fn parse_alias_config(json: &str) -> serde_json::Result<AliasConfig> {
    serde_json::from_str(json)
}
