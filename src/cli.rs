//! Command implementations behind the `version-ident` binary
//!
//! Each command returns the text to print so it can be tested without a
//! terminal.

use crate::config::ResolveConfig;
use crate::version::catalog::parse_versions;
use crate::version::{
    GenericVersionRange, VersionError, VersionIdentifier, VersionLetters, VersionSpecifier,
    resolve_version_pattern, sort_descending,
};

/// Compare two versions: `less`, `equal` or `greater`, with ` (unsafe)` if uncertain
pub fn compare(left: &str, right: &str) -> Result<String, VersionError> {
    let left: VersionIdentifier = left.parse()?;
    let right: VersionIdentifier = right.parse()?;
    Ok(left.compare_version(&right).to_string())
}

/// Describe validity, pattern flag and development phase of a version
pub fn check(version: &str) -> Result<String, VersionError> {
    let version: VersionIdentifier = version.parse()?;
    let validity = if version.is_valid() { "valid" } else { "invalid" };
    let phase = match version.development_phase() {
        VersionLetters::Empty => "none".to_string(),
        VersionLetters::Undefined => "undefined".to_string(),
        letters => match letters.phase() {
            Some(phase) => format!("{} ({})", letters, phase),
            None => letters.to_string(),
        },
    };
    Ok(format!(
        "{}\npattern: {}\nphase: {}",
        validity,
        version.is_pattern(),
        phase
    ))
}

/// Resolve a version, pattern or range against candidate versions
pub fn resolve<S: AsRef<str>>(
    spec: &str,
    candidates: &[S],
    config: &ResolveConfig,
) -> Result<String, VersionError> {
    let spec = VersionSpecifier::parse(spec)?;
    let mut versions = parse_versions(candidates);
    if config.sort_candidates {
        sort_descending(&mut versions);
    }
    let spec: &dyn GenericVersionRange = &spec;
    resolve_version_pattern(Some(spec), &versions).map(ToString::to_string)
}

/// Sort versions newest first
pub fn sort<S: AsRef<str>>(versions: &[S]) -> Vec<String> {
    let mut versions = parse_versions(versions);
    sort_descending(&mut versions);
    versions.iter().map(ToString::to_string).collect()
}
