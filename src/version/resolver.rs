//! Resolution of version patterns against available versions

use tracing::debug;

use crate::version::error::VersionError;
use crate::version::identifier::{LATEST, VersionIdentifier};
use crate::version::range::GenericVersionRange;

/// Resolve a version specification against the available versions.
///
/// # Arguments
/// * `version` - The version or pattern to resolve, `None` means [`LATEST`]
/// * `versions` - Available versions, sorted newest first (see [`sort_descending`])
///
/// # Returns
/// * The specification itself if it is a concrete version
/// * Otherwise the first (newest) available version contained in it
/// * `Err(VersionError::NoMatch)` if no available version matches
pub fn resolve_version_pattern<'a>(
    version: Option<&'a dyn GenericVersionRange>,
    versions: &'a [VersionIdentifier],
) -> Result<&'a VersionIdentifier, VersionError> {
    let version: &dyn GenericVersionRange = version.unwrap_or(&*LATEST);
    if !version.is_pattern()
        && let Some(concrete) = version.as_version()
    {
        return Ok(concrete);
    }
    for candidate in versions {
        if version.contains(candidate) {
            debug!(pattern = %version, version = %candidate, "Resolved version pattern");
            return Ok(candidate);
        }
    }
    Err(VersionError::NoMatch {
        pattern: version.to_string(),
        available: versions.len(),
    })
}

/// Sort versions newest first, keeping the input order of equal versions.
pub fn sort_descending(versions: &mut [VersionIdentifier]) {
    versions.sort_by(|a, b| b.compare_version(a).ordering());
}
