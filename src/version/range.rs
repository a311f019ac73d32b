//! Version ranges in interval notation and the abstraction shared with patterns

use std::fmt;

use crate::version::error::VersionError;
use crate::version::identifier::VersionIdentifier;

/// Anything that selects versions: a concrete version, a pattern or a range.
pub trait GenericVersionRange: fmt::Display + Send + Sync {
    /// Whether this selects among versions rather than naming a single one
    fn is_pattern(&self) -> bool;

    fn is_valid(&self) -> bool;

    /// Whether `version` is selected by this range
    fn contains(&self, version: &VersionIdentifier) -> bool;

    /// Lower bound, `None` if unbounded
    fn min(&self) -> Option<&VersionIdentifier>;

    /// Upper bound, `None` if unbounded
    fn max(&self) -> Option<&VersionIdentifier>;

    /// The concrete version, if this is one
    fn as_version(&self) -> Option<&VersionIdentifier> {
        None
    }
}

/// Which ends of a [`VersionRange`] are exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryType {
    /// `[min,max]`
    Closed,
    /// `(min,max)`
    Open,
    /// `(min,max]`
    LeftOpen,
    /// `[min,max)`
    RightOpen,
}

impl BoundaryType {
    pub fn of(left_exclusive: bool, right_exclusive: bool) -> Self {
        match (left_exclusive, right_exclusive) {
            (false, false) => BoundaryType::Closed,
            (true, true) => BoundaryType::Open,
            (true, false) => BoundaryType::LeftOpen,
            (false, true) => BoundaryType::RightOpen,
        }
    }

    pub fn is_left_exclusive(self) -> bool {
        matches!(self, BoundaryType::Open | BoundaryType::LeftOpen)
    }

    pub fn is_right_exclusive(self) -> bool {
        matches!(self, BoundaryType::Open | BoundaryType::RightOpen)
    }

    fn start_char(self) -> char {
        if self.is_left_exclusive() { '(' } else { '[' }
    }

    fn end_char(self) -> char {
        if self.is_right_exclusive() { ')' } else { ']' }
    }
}

/// A range of versions such as `[1.0,2.0)` or `(,17]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionRange {
    min: Option<VersionIdentifier>,
    max: Option<VersionIdentifier>,
    bound: BoundaryType,
}

impl VersionRange {
    pub fn new(
        min: Option<VersionIdentifier>,
        max: Option<VersionIdentifier>,
        bound: BoundaryType,
    ) -> Self {
        Self { min, max, bound }
    }

    /// Parse a range in interval notation.
    ///
    /// An absent bound is unbounded and has to use an exclusive bracket.
    pub fn of(text: &str) -> Result<Self, VersionError> {
        let invalid = || VersionError::InvalidRange(text.to_string());

        let inner = text
            .get(1..text.len().saturating_sub(1))
            .filter(|_| text.len() >= 2)
            .ok_or_else(invalid)?;
        let left_exclusive = match text.chars().next() {
            Some('[') => false,
            Some('(') => true,
            _ => return Err(invalid()),
        };
        let right_exclusive = match text.chars().last() {
            Some(']') => false,
            Some(')') => true,
            _ => return Err(invalid()),
        };
        let (min, max) = inner.split_once(',').ok_or_else(invalid)?;
        let min = parse_bound(min).ok_or_else(invalid)?;
        let max = parse_bound(max).ok_or_else(invalid)?;

        if (min.is_none() && !left_exclusive) || (max.is_none() && !right_exclusive) {
            return Err(invalid());
        }
        Ok(Self::new(
            min,
            max,
            BoundaryType::of(left_exclusive, right_exclusive),
        ))
    }

    pub fn bound(&self) -> BoundaryType {
        self.bound
    }
}

/// `Some(None)` for an absent bound, `None` if the bound does not parse
fn parse_bound(text: &str) -> Option<Option<VersionIdentifier>> {
    if text.is_empty() {
        return Some(None);
    }
    VersionIdentifier::of(text).map(Some)
}

impl GenericVersionRange for VersionRange {
    fn is_pattern(&self) -> bool {
        true
    }

    /// Valid if every bound is a valid version, at least one is given and
    /// the range is not empty.
    fn is_valid(&self) -> bool {
        let bounds_valid = self.min.iter().chain(self.max.iter()).all(VersionIdentifier::is_valid);
        if !bounds_valid {
            return false;
        }
        match (&self.min, &self.max) {
            (None, None) => false,
            (Some(min), Some(max)) => {
                let result = min.compare_version(max);
                result.is_less() || (result.is_equal() && self.bound == BoundaryType::Closed)
            }
            _ => true,
        }
    }

    fn contains(&self, version: &VersionIdentifier) -> bool {
        if let Some(min) = &self.min {
            let result = version.compare_version(min);
            if result.is_less() || (result.is_equal() && self.bound.is_left_exclusive()) {
                return false;
            }
        }
        if let Some(max) = &self.max {
            let result = version.compare_version(max);
            if result.is_greater() || (result.is_equal() && self.bound.is_right_exclusive()) {
                return false;
            }
        }
        true
    }

    fn min(&self) -> Option<&VersionIdentifier> {
        self.min.as_ref()
    }

    fn max(&self) -> Option<&VersionIdentifier> {
        self.max.as_ref()
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bound.start_char())?;
        if let Some(min) = &self.min {
            write!(f, "{}", min)?;
        }
        f.write_str(",")?;
        if let Some(max) = &self.max {
            write!(f, "{}", max)?;
        }
        write!(f, "{}", self.bound.end_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn v(text: &str) -> VersionIdentifier {
        VersionIdentifier::of(text).unwrap()
    }

    #[rstest]
    #[case("[1.0,2.0]", BoundaryType::Closed)]
    #[case("(1.0,2.0)", BoundaryType::Open)]
    #[case("(1.0,2.0]", BoundaryType::LeftOpen)]
    #[case("[1.0,2.0)", BoundaryType::RightOpen)]
    #[case("[11,)", BoundaryType::RightOpen)]
    #[case("(,17]", BoundaryType::LeftOpen)]
    fn of_parses_interval_notation(#[case] text: &str, #[case] bound: BoundaryType) {
        let range = VersionRange::of(text).unwrap();
        assert_eq!(range.bound(), bound);
        assert_eq!(range.to_string(), text);
    }

    #[rstest]
    #[case("")]
    #[case("[")]
    #[case("1.0,2.0")]
    #[case("[1.0;2.0]")]
    #[case("{1.0,2.0}")]
    #[case("[,2.0]")]
    #[case("[1.0,]")]
    #[case("[1 0,2.0]")]
    fn of_rejects_malformed_ranges(#[case] text: &str) {
        assert!(matches!(
            VersionRange::of(text),
            Err(VersionError::InvalidRange(t)) if t == text
        ));
    }

    #[rstest]
    #[case("[1.0,2.0)", "1.0", true)]
    #[case("[1.0,2.0)", "1.5.3", true)]
    #[case("[1.0,2.0)", "2.0", false)]
    #[case("[1.0,2.0)", "2.0-rc1", true)]
    #[case("(1.0,2.0]", "1.0", false)]
    #[case("(1.0,2.0]", "2.0", true)]
    #[case("(1.0,2.0]", "0.9", false)]
    #[case("[11,)", "21.0.1", true)]
    #[case("[11,)", "8u292", false)]
    #[case("(,17]", "17.0", true)]
    #[case("(,17]", "17.0.1", false)]
    fn contains_respects_bounds(#[case] range: &str, #[case] version: &str, #[case] expected: bool) {
        assert_eq!(VersionRange::of(range).unwrap().contains(&v(version)), expected);
    }

    #[rstest]
    #[case("[1.0,2.0)", true)]
    #[case("[1.0,1.0]", true)]
    #[case("[1.0,1.0)", false)]
    #[case("[2.0,1.0]", false)]
    #[case("(,17]", true)]
    #[case("(,)", false)]
    #[case("[0.0,1.0]", false)]
    fn is_valid_returns_expected(#[case] range: &str, #[case] expected: bool) {
        assert_eq!(VersionRange::of(range).unwrap().is_valid(), expected);
    }

    #[test]
    fn range_is_a_pattern_with_optional_bounds() {
        let range = VersionRange::of("[11,)").unwrap();
        assert!(range.is_pattern());
        assert_eq!(range.min(), Some(&v("11")));
        assert_eq!(range.max(), None);
        assert_eq!(range.as_version(), None);
    }
}
