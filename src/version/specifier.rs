//! User-facing version specification: a version, a pattern or a range

use std::fmt;
use std::str::FromStr;

use crate::version::error::VersionError;
use crate::version::identifier::VersionIdentifier;
use crate::version::range::{GenericVersionRange, VersionRange};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionSpecifier {
    /// A concrete version or a wildcard pattern like `17*`
    Version(VersionIdentifier),
    /// An interval like `[1.0,2.0)`
    Range(VersionRange),
}

impl VersionSpecifier {
    /// Text starting with `[` or `(` is parsed as a range, anything else as a version.
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        if text.starts_with('[') || text.starts_with('(') {
            VersionRange::of(text).map(VersionSpecifier::Range)
        } else {
            text.parse().map(VersionSpecifier::Version)
        }
    }

    fn inner(&self) -> &dyn GenericVersionRange {
        match self {
            VersionSpecifier::Version(version) => version,
            VersionSpecifier::Range(range) => range,
        }
    }
}

impl GenericVersionRange for VersionSpecifier {
    fn is_pattern(&self) -> bool {
        self.inner().is_pattern()
    }

    fn is_valid(&self) -> bool {
        self.inner().is_valid()
    }

    fn contains(&self, version: &VersionIdentifier) -> bool {
        self.inner().contains(version)
    }

    fn min(&self) -> Option<&VersionIdentifier> {
        self.inner().min()
    }

    fn max(&self) -> Option<&VersionIdentifier> {
        self.inner().max()
    }

    fn as_version(&self) -> Option<&VersionIdentifier> {
        self.inner().as_version()
    }
}

impl FromStr for VersionSpecifier {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}
