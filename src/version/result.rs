//! Result vocabularies for version comparison and pattern matching

use std::cmp::Ordering;
use std::fmt;

/// Outcome of comparing two versions.
///
/// The `*Unsafe` variants carry the same direction as their safe counterpart
/// but were derived from a heuristic comparison of unrecognized letters, so the
/// direction may not reflect the real precedence of the two versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionComparisonResult {
    Less,
    LessUnsafe,
    Equal,
    EqualUnsafe,
    Greater,
    GreaterUnsafe,
}

impl VersionComparisonResult {
    /// Build a result from a plain ordering and an unsafe flag
    pub fn from_ordering(ordering: Ordering, unsafe_: bool) -> Self {
        match (ordering, unsafe_) {
            (Ordering::Less, false) => Self::Less,
            (Ordering::Less, true) => Self::LessUnsafe,
            (Ordering::Equal, false) => Self::Equal,
            (Ordering::Equal, true) => Self::EqualUnsafe,
            (Ordering::Greater, false) => Self::Greater,
            (Ordering::Greater, true) => Self::GreaterUnsafe,
        }
    }

    /// The direction of this result with the unsafe flag dropped
    pub fn ordering(self) -> Ordering {
        match self {
            Self::Less | Self::LessUnsafe => Ordering::Less,
            Self::Equal | Self::EqualUnsafe => Ordering::Equal,
            Self::Greater | Self::GreaterUnsafe => Ordering::Greater,
        }
    }

    pub fn is_less(self) -> bool {
        self.ordering() == Ordering::Less
    }

    pub fn is_equal(self) -> bool {
        self.ordering() == Ordering::Equal
    }

    pub fn is_greater(self) -> bool {
        self.ordering() == Ordering::Greater
    }

    pub fn is_less_or_equal(self) -> bool {
        !self.is_greater()
    }

    pub fn is_greater_or_equal(self) -> bool {
        !self.is_less()
    }

    pub fn is_unsafe(self) -> bool {
        matches!(
            self,
            Self::LessUnsafe | Self::EqualUnsafe | Self::GreaterUnsafe
        )
    }

    /// The same direction, marked unsafe
    pub fn with_unsafe(self) -> Self {
        Self::from_ordering(self.ordering(), true)
    }

    /// The opposite direction, keeping the unsafe flag
    pub fn reverse(self) -> Self {
        Self::from_ordering(self.ordering().reverse(), self.is_unsafe())
    }
}

impl fmt::Display for VersionComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.ordering() {
            Ordering::Less => "less",
            Ordering::Equal => "equal",
            Ordering::Greater => "greater",
        };
        if self.is_unsafe() {
            write!(f, "{} (unsafe)", direction)
        } else {
            f.write_str(direction)
        }
    }
}

/// Outcome of matching one segment of a pattern against a segment of a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionMatchResult {
    /// The segments are equal, matching goes on with the next segments
    Continue,
    /// The pattern matches, remaining segments are unconstrained
    Match,
    /// The pattern does not match
    Mismatch,
}
