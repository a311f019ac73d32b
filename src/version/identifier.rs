//! Structured representation of a single version string

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::version::error::VersionError;
use crate::version::letters::{VersionLetters, Wildcard};
use crate::version::range::GenericVersionRange;
use crate::version::result::{VersionComparisonResult, VersionMatchResult};
use crate::version::segment::{Segments, VersionSegment};

/// Alias accepted by [`VersionIdentifier::of`] for [`LATEST`]
pub const LATEST_ALIAS: &str = "latest";

/// `*`, resolves to the newest available version
pub static LATEST: LazyLock<VersionIdentifier> =
    LazyLock::new(|| VersionIdentifier::new(VersionSegment::wildcard(Wildcard::Any)));

/// `*!`, resolves to the newest available unstable version
pub static LATEST_UNSTABLE: LazyLock<VersionIdentifier> =
    LazyLock::new(|| VersionIdentifier::new(VersionSegment::wildcard(Wildcard::AnyUnstable)));

/// A parsed version string such as `17.0.2`, `1.0-SNAPSHOT` or the pattern `17*`.
///
/// Parsing never fails for well-formed text; whether the result is a usable
/// concrete version is answered by [`VersionIdentifier::is_valid`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionIdentifier {
    start: VersionSegment,
    development_phase: VersionLetters,
    valid: bool,
}

impl VersionIdentifier {
    fn new(start: VersionSegment) -> Self {
        let mut valid = start.separator().is_empty() && start.letters().is_empty();
        let mut has_positive_number = false;
        let mut development_phase = VersionLetters::Empty;
        for segment in start.iter() {
            if !segment.is_valid() {
                valid = false;
            } else if segment.has_positive_number() {
                has_positive_number = true;
            }
            let letters = segment.letters();
            if letters.is_development_phase() {
                if development_phase.is_empty() {
                    development_phase = letters.clone();
                } else {
                    development_phase = VersionLetters::Undefined;
                    valid = false;
                }
            }
        }
        let valid = valid && has_positive_number && !start.iter().any(VersionSegment::is_pattern);
        Self {
            start,
            development_phase,
            valid,
        }
    }

    /// Parse a version string.
    ///
    /// `"latest"` is an alias for [`LATEST`]. Returns `None` only if the text
    /// cannot be split into segments at all (whitespace or control characters).
    pub fn of(version: &str) -> Option<Self> {
        if version == LATEST_ALIAS {
            return Some(LATEST.clone());
        }
        VersionSegment::parse(version).map(Self::new)
    }

    /// The first segment; use [`VersionSegment::next_or_empty`] or
    /// [`VersionIdentifier::segments`] to reach the others.
    pub fn start(&self) -> &VersionSegment {
        &self.start
    }

    pub fn segments(&self) -> Segments<'_> {
        self.start.iter()
    }

    /// A valid version has to meet all of the following:
    /// - every segment is valid (known separators, no dangling separator)
    /// - the first segment has neither separator nor letters (`.1.0`, `RC1` are invalid)
    /// - at least one segment has a positive number (`0.0.0` is invalid)
    /// - at most one segment carries a development phase (`1.alpha1.beta2` is invalid)
    /// - it is not a pattern
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_pattern(&self) -> bool {
        self.segments().any(VersionSegment::is_pattern)
    }

    /// The development phase of this version.
    ///
    /// [`VersionLetters::Empty`] if no segment carries one,
    /// [`VersionLetters::Undefined`] if more than one does (e.g. `1.0-alpha1.rc2`).
    pub fn development_phase(&self) -> &VersionLetters {
        &self.development_phase
    }

    /// Whether this version carries a development phase
    pub fn is_unstable(&self) -> bool {
        !self.development_phase.is_empty()
    }

    /// Compare with another version, segment by segment.
    ///
    /// The shorter chain is padded with empty segments, so `1.0` and `1` are
    /// equal. An unsafe tie on the way marks the final result unsafe.
    pub fn compare_version(&self, other: &VersionIdentifier) -> VersionComparisonResult {
        let mut segment = &self.start;
        let mut other_segment = &other.start;
        let mut unsafe_ = false;
        loop {
            let result = segment.compare_version(other_segment);
            let exhausted = segment.is_empty() && other_segment.is_empty();
            if !result.is_equal() || exhausted {
                return if unsafe_ { result.with_unsafe() } else { result };
            }
            if result.is_unsafe() {
                unsafe_ = true;
            }
            segment = segment.next_or_empty();
            other_segment = other_segment.next_or_empty();
        }
    }

    /// Like [`VersionIdentifier::compare_version`], treating a missing version as
    /// older without being certain about it.
    pub fn compare_version_opt(&self, other: Option<&VersionIdentifier>) -> VersionComparisonResult {
        match other {
            Some(other) => self.compare_version(other),
            None => VersionComparisonResult::GreaterUnsafe,
        }
    }

    /// Whether `other` equals this version, or matches it if this is a pattern
    /// (e.g. `17*` matches `17.0.2`, `*!` matches `1.0-SNAPSHOT`).
    pub fn matches(&self, other: &VersionIdentifier) -> bool {
        let mut segment = &self.start;
        let mut other_segment = &other.start;
        loop {
            match segment.matches(other_segment, &other.development_phase) {
                VersionMatchResult::Match => return true,
                VersionMatchResult::Mismatch => return false,
                VersionMatchResult::Continue => {}
            }
            segment = segment.next_or_empty();
            other_segment = other_segment.next_or_empty();
        }
    }

    pub fn matches_opt(&self, other: Option<&VersionIdentifier>) -> bool {
        other.is_some_and(|other| self.matches(other))
    }
}

impl GenericVersionRange for VersionIdentifier {
    fn is_pattern(&self) -> bool {
        VersionIdentifier::is_pattern(self)
    }

    fn is_valid(&self) -> bool {
        VersionIdentifier::is_valid(self)
    }

    fn contains(&self, version: &VersionIdentifier) -> bool {
        self.matches(version)
    }

    fn min(&self) -> Option<&VersionIdentifier> {
        Some(self)
    }

    fn max(&self) -> Option<&VersionIdentifier> {
        Some(self)
    }

    fn as_version(&self) -> Option<&VersionIdentifier> {
        Some(self)
    }
}

impl FromStr for VersionIdentifier {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s).ok_or_else(|| VersionError::Malformed(s.to_string()))
    }
}

impl fmt::Display for VersionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in self.segments() {
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
