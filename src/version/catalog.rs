//! Source of available versions per tool

use std::collections::HashMap;

#[cfg(test)]
use mockall::automock;
use tracing::warn;

use crate::version::error::VersionError;
use crate::version::identifier::VersionIdentifier;
use crate::version::range::GenericVersionRange;
use crate::version::resolver::{resolve_version_pattern, sort_descending};

/// Trait for looking up the versions available for a tool
#[cfg_attr(test, automock)]
pub trait VersionCatalog: Send + Sync {
    /// All versions of the tool, newest first
    fn sorted_versions(&self, tool: &str) -> Result<Vec<VersionIdentifier>, VersionError>;
}

/// In-memory catalog, mostly for the CLI and tests
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    tools: HashMap<String, Vec<VersionIdentifier>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the versions of a tool; they are sorted newest first.
    pub fn with_versions<I, S>(mut self, tool: &str, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut versions = parse_versions(versions);
        sort_descending(&mut versions);
        self.tools.insert(tool.to_string(), versions);
        self
    }
}

impl VersionCatalog for StaticCatalog {
    fn sorted_versions(&self, tool: &str) -> Result<Vec<VersionIdentifier>, VersionError> {
        self.tools
            .get(tool)
            .cloned()
            .ok_or_else(|| VersionError::UnknownTool(tool.to_string()))
    }
}

/// Parse version strings, skipping those that cannot be parsed
pub fn parse_versions<I, S>(versions: I) -> Vec<VersionIdentifier>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    versions
        .into_iter()
        .filter_map(|v| {
            let v = v.as_ref();
            let parsed = VersionIdentifier::of(v);
            if parsed.is_none() {
                warn!("Skipping malformed version: '{}'", v);
            }
            parsed
        })
        .collect()
}

/// Resolve a version specification of a tool against the catalog
pub fn resolve_from_catalog<C: VersionCatalog + ?Sized>(
    catalog: &C,
    tool: &str,
    version: Option<&dyn GenericVersionRange>,
) -> Result<VersionIdentifier, VersionError> {
    let versions = catalog.sorted_versions(tool)?;
    resolve_version_pattern(version, &versions).cloned()
}
