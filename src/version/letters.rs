//! Letter suffix of a version segment

use std::cmp::Ordering;
use std::fmt;

use crate::version::phase::VersionPhase;
use crate::version::result::VersionComparisonResult;

/// Text for [`Wildcard::Any`]
pub const PATTERN_MATCH_ANY_VERSION: &str = "*";

/// Text for [`Wildcard::AnyUnstable`]
pub const PATTERN_MATCH_ANY_UNSTABLE_VERSION: &str = "*!";

/// Wildcard marker occupying the letters of a pattern segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wildcard {
    /// `*` matches any version
    Any,
    /// `*!` matches only versions carrying a development phase
    AnyUnstable,
}

impl Wildcard {
    pub fn as_str(self) -> &'static str {
        match self {
            Wildcard::Any => PATTERN_MATCH_ANY_VERSION,
            Wildcard::AnyUnstable => PATTERN_MATCH_ANY_UNSTABLE_VERSION,
        }
    }
}

/// The letters following the number of a version segment.
///
/// `Empty` and `Undefined` are sentinels. `Undefined` is never produced by
/// parsing a segment; it marks an identifier with conflicting development
/// phases (e.g. `1.0-alpha1.rc2`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionLetters {
    Empty,
    Undefined,
    /// Letters that are a known phase keyword, original spelling kept
    Phase { text: String, phase: VersionPhase },
    Wildcard(Wildcard),
    /// Any other letter sequence
    Other(String),
}

impl VersionLetters {
    pub fn of(text: &str) -> Self {
        if text.is_empty() {
            return VersionLetters::Empty;
        }
        match text {
            PATTERN_MATCH_ANY_VERSION => return VersionLetters::Wildcard(Wildcard::Any),
            PATTERN_MATCH_ANY_UNSTABLE_VERSION => {
                return VersionLetters::Wildcard(Wildcard::AnyUnstable);
            }
            _ => {}
        }
        match VersionPhase::of(text) {
            Some(phase) => VersionLetters::Phase {
                text: text.to_string(),
                phase,
            },
            None => VersionLetters::Other(text.to_string()),
        }
    }

    /// The letters as written in the version string
    pub fn as_str(&self) -> &str {
        match self {
            VersionLetters::Empty | VersionLetters::Undefined => "",
            VersionLetters::Phase { text, .. } | VersionLetters::Other(text) => text,
            VersionLetters::Wildcard(wildcard) => wildcard.as_str(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, VersionLetters::Empty)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, VersionLetters::Undefined)
    }

    pub fn phase(&self) -> Option<VersionPhase> {
        match self {
            VersionLetters::Phase { phase, .. } => Some(*phase),
            _ => None,
        }
    }

    pub fn is_development_phase(&self) -> bool {
        self.phase().is_some_and(VersionPhase::is_development_phase)
    }

    pub fn wildcard(&self) -> Option<Wildcard> {
        match self {
            VersionLetters::Wildcard(wildcard) => Some(*wildcard),
            _ => None,
        }
    }

    pub fn is_pattern(&self) -> bool {
        self.wildcard().is_some()
    }

    /// Rank used for ordering: the phase, and whether the letters are
    /// unrecognized. No letters rank like an explicit release; unrecognized
    /// letters rank as one block right above the release class and below
    /// service packs.
    fn rank(&self) -> (VersionPhase, bool) {
        match self {
            VersionLetters::Empty => (VersionPhase::Release, false),
            VersionLetters::Phase { phase, .. } => (*phase, false),
            _ => (VersionPhase::Release, true),
        }
    }

    /// Compare two letter sequences.
    ///
    /// Recognized phases (and empty letters) compare by phase rank. As soon as
    /// one side is not a recognized phase the result is unsafe. Two
    /// unrecognized sequences compare case-insensitively by text.
    pub fn compare_version(&self, other: &VersionLetters) -> VersionComparisonResult {
        if self == other {
            return VersionComparisonResult::Equal;
        }
        let (rank, unrecognized) = self.rank();
        let (other_rank, other_unrecognized) = other.rank();
        let ordering = (rank, unrecognized)
            .cmp(&(other_rank, other_unrecognized))
            .then_with(|| {
                if unrecognized && other_unrecognized {
                    self.compare_lexical(other)
                } else {
                    Ordering::Equal
                }
            });
        VersionComparisonResult::from_ordering(ordering, unrecognized || other_unrecognized)
    }

    fn compare_lexical(&self, other: &VersionLetters) -> Ordering {
        self.as_str()
            .to_lowercase()
            .cmp(&other.as_str().to_lowercase())
    }
}

impl fmt::Display for VersionLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn of_classifies_letters() {
        assert_eq!(VersionLetters::of(""), VersionLetters::Empty);
        assert_eq!(
            VersionLetters::of("RC"),
            VersionLetters::Phase {
                text: "RC".to_string(),
                phase: VersionPhase::ReleaseCandidate
            }
        );
        assert_eq!(
            VersionLetters::of("*"),
            VersionLetters::Wildcard(Wildcard::Any)
        );
        assert_eq!(
            VersionLetters::of("*!"),
            VersionLetters::Wildcard(Wildcard::AnyUnstable)
        );
        assert_eq!(
            VersionLetters::of("foo"),
            VersionLetters::Other("foo".to_string())
        );
    }

    #[rstest]
    #[case("alpha", true)]
    #[case("SNAPSHOT", true)]
    #[case("rc", true)]
    #[case("final", false)]
    #[case("sp", false)]
    #[case("foo", false)]
    #[case("*!", false)]
    #[case("", false)]
    fn is_development_phase_returns_expected(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(VersionLetters::of(text).is_development_phase(), expected);
    }

    #[test]
    fn undefined_is_neither_empty_nor_a_phase() {
        let undefined = VersionLetters::Undefined;
        assert!(!undefined.is_empty());
        assert!(undefined.is_undefined());
        assert_eq!(undefined.phase(), None);
        assert_eq!(undefined.as_str(), "");
    }

    #[rstest]
    #[case("", "", VersionComparisonResult::Equal)]
    #[case("alpha", "", VersionComparisonResult::Less)]
    #[case("", "beta", VersionComparisonResult::Greater)]
    #[case("alpha", "beta", VersionComparisonResult::Less)]
    #[case("rc", "M", VersionComparisonResult::Greater)]
    #[case("a", "alpha", VersionComparisonResult::Equal)]
    #[case("final", "", VersionComparisonResult::Equal)]
    #[case("sp", "", VersionComparisonResult::Greater)]
    #[case("foo", "", VersionComparisonResult::GreaterUnsafe)]
    #[case("", "foo", VersionComparisonResult::LessUnsafe)]
    #[case("foo", "bar", VersionComparisonResult::GreaterUnsafe)]
    #[case("Foo", "foo", VersionComparisonResult::EqualUnsafe)]
    #[case("alpha", "foo", VersionComparisonResult::LessUnsafe)]
    #[case("sp", "foo", VersionComparisonResult::GreaterUnsafe)]
    #[case("ga", "foo", VersionComparisonResult::LessUnsafe)]
    #[case("final", "bar", VersionComparisonResult::LessUnsafe)]
    #[case("release", "zzz", VersionComparisonResult::LessUnsafe)]
    fn compare_version_returns_expected(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: VersionComparisonResult,
    ) {
        let left = VersionLetters::of(left);
        let right = VersionLetters::of(right);
        assert_eq!(left.compare_version(&right), expected);
        assert_eq!(right.compare_version(&left), expected.reverse());
    }

    #[test]
    fn compare_version_is_transitive() {
        let letters: Vec<VersionLetters> = [
            "", "ga", "final", "release", "GA", "foo", "bar", "Foo", "zzz", "alpha", "a", "rc",
            "snapshot", "sp", "*", "*!",
        ]
        .into_iter()
        .map(VersionLetters::of)
        .collect();

        for a in &letters {
            for b in &letters {
                let ab = a.compare_version(b).ordering();
                assert_eq!(ab, b.compare_version(a).ordering().reverse(), "{a:?} vs {b:?}");
                for c in &letters {
                    let bc = b.compare_version(c).ordering();
                    let ac = a.compare_version(c).ordering();
                    if ab != Ordering::Greater && bc != Ordering::Greater {
                        assert_ne!(ac, Ordering::Greater, "{a:?} <= {b:?} <= {c:?}");
                    }
                    if ab == Ordering::Equal && bc == Ordering::Equal {
                        assert_eq!(ac, Ordering::Equal, "{a:?} == {b:?} == {c:?}");
                    }
                }
            }
        }
    }
}
