//! Segment chain of a parsed version string
//!
//! A version like `1.0-alpha1` is split into the segments `1`, `.0`, `-alpha`
//! and `1`. Each segment is an optional separator, a run of digits and a run
//! of letters (or a wildcard marker), and owns the rest of the chain.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::version::letters::{PATTERN_MATCH_ANY_UNSTABLE_VERSION, VersionLetters, Wildcard};
use crate::version::result::{VersionComparisonResult, VersionMatchResult};

/// Separators accepted in a valid version
pub const SEPARATORS: [char; 4] = ['.', '-', '_', '+'];

/// Padding used when one chain is shorter than the other
static EMPTY: VersionSegment = VersionSegment {
    separator: String::new(),
    digits: String::new(),
    letters: VersionLetters::Empty,
    valid: true,
    next: None,
};

#[derive(Debug)]
pub struct VersionSegment {
    separator: String,
    digits: String,
    letters: VersionLetters,
    valid: bool,
    next: Option<Box<VersionSegment>>,
}

impl VersionSegment {
    /// The segment used to pad the shorter chain during lockstep walks
    pub fn empty() -> &'static VersionSegment {
        &EMPTY
    }

    /// Parse a version string into its segment chain.
    ///
    /// Returns `None` if the text contains whitespace or control characters.
    /// The empty string yields a single empty segment.
    pub(crate) fn parse(text: &str) -> Option<VersionSegment> {
        if text.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return None;
        }
        let mut segments = Vec::new();
        let mut rest = text;
        loop {
            let (segment, remaining) = Self::parse_segment(rest);
            segments.push(segment);
            if remaining.is_empty() {
                break;
            }
            rest = remaining;
        }
        let mut segments = segments.into_iter();
        let mut start = segments.next()?;
        start.next = Self::link(segments.collect());
        Some(start)
    }

    /// Consume separator, digits and letters from the front of `text`
    fn parse_segment(text: &str) -> (VersionSegment, &str) {
        let (separator, rest) = match text.chars().next() {
            Some(c) if is_separator_char(c) => text.split_at(c.len_utf8()),
            _ => ("", text),
        };

        let digits_len = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (digits, rest) = rest.split_at(digits_len);

        let letters_len = if rest.starts_with(PATTERN_MATCH_ANY_UNSTABLE_VERSION) {
            PATTERN_MATCH_ANY_UNSTABLE_VERSION.len()
        } else if rest.starts_with('*') {
            1
        } else {
            rest.find(|c: char| !c.is_alphabetic())
                .unwrap_or(rest.len())
        };
        let (letters, rest) = rest.split_at(letters_len);

        let valid = separator.is_empty()
            || (separator.chars().all(|c| SEPARATORS.contains(&c))
                && !(digits.is_empty() && letters.is_empty()));

        let segment = VersionSegment {
            separator: separator.to_string(),
            digits: digits.to_string(),
            letters: VersionLetters::of(letters),
            valid,
            next: None,
        };
        (segment, rest)
    }

    /// A lone wildcard segment (`*` or `*!`)
    pub(crate) fn wildcard(wildcard: Wildcard) -> VersionSegment {
        VersionSegment {
            separator: String::new(),
            digits: String::new(),
            letters: VersionLetters::Wildcard(wildcard),
            valid: true,
            next: None,
        }
    }

    /// Chain segments in order, returning the head
    fn link(mut segments: Vec<VersionSegment>) -> Option<Box<VersionSegment>> {
        let mut next = None;
        while let Some(mut segment) = segments.pop() {
            segment.next = next;
            next = Some(Box::new(segment));
        }
        next
    }

    fn detached(&self) -> VersionSegment {
        VersionSegment {
            separator: self.separator.clone(),
            digits: self.digits.clone(),
            letters: self.letters.clone(),
            valid: self.valid,
            next: None,
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// The digits as written, leading zeros kept
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The number of this segment, `0` if it has no digits.
    ///
    /// Returns `None` if the number does not fit into a `u64`. Ordering does
    /// not depend on this and works for numbers of any length.
    pub fn number(&self) -> Option<u64> {
        if self.digits.is_empty() {
            Some(0)
        } else {
            self.digits.parse().ok()
        }
    }

    pub fn has_positive_number(&self) -> bool {
        !significant_digits(&self.digits).is_empty()
    }

    pub fn letters(&self) -> &VersionLetters {
        &self.letters
    }

    pub fn is_pattern(&self) -> bool {
        self.letters.is_pattern()
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_empty(&self) -> bool {
        self.separator.is_empty() && self.digits.is_empty() && self.letters.is_empty()
    }

    pub fn next_or_none(&self) -> Option<&VersionSegment> {
        self.next.as_deref()
    }

    pub fn next_or_empty(&self) -> &VersionSegment {
        self.next.as_deref().unwrap_or(&EMPTY)
    }

    /// Iterate over this segment and all of its successors
    pub fn iter(&self) -> Segments<'_> {
        Segments {
            current: Some(self),
        }
    }

    fn compare_number(&self, other: &VersionSegment) -> Ordering {
        let number = significant_digits(&self.digits);
        let other_number = significant_digits(&other.digits);
        number
            .len()
            .cmp(&other_number.len())
            .then_with(|| number.cmp(other_number))
    }

    /// Compare this segment with the segment at the same position of another chain.
    ///
    /// Numbers decide first, then letters. Segments that only differ in their
    /// separator are an unsafe tie unless one of them is the padding segment.
    pub fn compare_version(&self, other: &VersionSegment) -> VersionComparisonResult {
        let ordering = self.compare_number(other);
        if ordering != Ordering::Equal {
            return VersionComparisonResult::from_ordering(ordering, false);
        }
        let result = self.letters.compare_version(&other.letters);
        if result == VersionComparisonResult::Equal
            && self.separator != other.separator
            && !self.is_empty()
            && !other.is_empty()
        {
            return VersionComparisonResult::EqualUnsafe;
        }
        result
    }

    /// Match this segment of a pattern against the segment at the same position
    /// of a version.
    ///
    /// `development_phase` is the aggregated phase of the version the other
    /// segment belongs to, used by the `*!` wildcard.
    pub fn matches(
        &self,
        other: &VersionSegment,
        development_phase: &VersionLetters,
    ) -> VersionMatchResult {
        if self.is_empty() && other.is_empty() {
            return VersionMatchResult::Match;
        }
        let same_number = self.compare_number(other) == Ordering::Equal;
        if let Some(wildcard) = self.letters.wildcard() {
            if !self.digits.is_empty() && !same_number {
                return VersionMatchResult::Mismatch;
            }
            return match wildcard {
                Wildcard::Any => VersionMatchResult::Match,
                Wildcard::AnyUnstable if !development_phase.is_empty() => VersionMatchResult::Match,
                Wildcard::AnyUnstable => VersionMatchResult::Mismatch,
            };
        }
        if same_number && self.letters == other.letters {
            VersionMatchResult::Continue
        } else {
            VersionMatchResult::Mismatch
        }
    }
}

fn is_separator_char(c: char) -> bool {
    !c.is_ascii_digit() && !c.is_alphabetic() && c != '*'
}

fn significant_digits(digits: &str) -> &str {
    digits.trim_start_matches('0')
}

impl Clone for VersionSegment {
    fn clone(&self) -> Self {
        let mut start = self.detached();
        start.next = Self::link(self.iter().skip(1).map(Self::detached).collect());
        start
    }
}

impl Drop for VersionSegment {
    // Unlink iteratively so long chains do not recurse on drop.
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut segment) = next {
            next = segment.next.take();
        }
    }
}

impl PartialEq for VersionSegment {
    fn eq(&self, other: &Self) -> bool {
        self.iter()
            .map(|s| (&s.separator, &s.digits, &s.letters))
            .eq(other.iter().map(|s| (&s.separator, &s.digits, &s.letters)))
    }
}

impl Eq for VersionSegment {}

impl Hash for VersionSegment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for segment in self.iter() {
            segment.separator.hash(state);
            segment.digits.hash(state);
            segment.letters.hash(state);
        }
    }
}

/// Formats this segment only, not its successors
impl fmt::Display for VersionSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.separator, self.digits, self.letters)
    }
}

/// Iterator over a segment chain
pub struct Segments<'a> {
    current: Option<&'a VersionSegment>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a VersionSegment;

    fn next(&mut self) -> Option<Self::Item> {
        let segment = self.current?;
        self.current = segment.next_or_none();
        Some(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn texts(segment: &VersionSegment) -> Vec<String> {
        segment.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case("1.0", vec!["1", ".0"])]
    #[case("1.0-alpha1", vec!["1", ".0", "-alpha", "1"])]
    #[case("17*", vec!["17*"])]
    #[case("17.*", vec!["17", ".*"])]
    #[case("*!", vec!["*!"])]
    #[case("2.0b3", vec!["2", ".0b", "3"])]
    #[case("1..0", vec!["1", ".", ".0"])]
    #[case("", vec![""])]
    fn parse_splits_into_segments(#[case] text: &str, #[case] expected: Vec<&str>) {
        let segment = VersionSegment::parse(text).unwrap();
        assert_eq!(texts(&segment), expected);
    }

    #[rstest]
    #[case("1 0")]
    #[case("1.0\n")]
    #[case("\t")]
    fn parse_rejects_whitespace_and_control_characters(#[case] text: &str) {
        assert!(VersionSegment::parse(text).is_none());
    }

    #[test]
    fn parse_reads_separator_number_and_letters() {
        let start = VersionSegment::parse("3.01rc").unwrap();
        let second = start.next_or_empty();

        assert_eq!(start.separator(), "");
        assert_eq!(start.number(), Some(3));
        assert_eq!(second.separator(), ".");
        assert_eq!(second.digits(), "01");
        assert_eq!(second.number(), Some(1));
        assert_eq!(second.letters().as_str(), "rc");
        assert!(second.next_or_none().is_none());
        assert!(second.next_or_empty().is_empty());
    }

    #[rstest]
    #[case("1.0", true)]
    #[case("1_0+b", true)]
    #[case("1..0", false)]
    #[case("1.", false)]
    #[case("1!0", false)]
    #[case("1#0", false)]
    fn segments_are_valid_only_with_known_separators_and_content(
        #[case] text: &str,
        #[case] expected: bool,
    ) {
        let start = VersionSegment::parse(text).unwrap();
        assert_eq!(start.iter().all(VersionSegment::is_valid), expected);
    }

    #[test]
    fn number_is_unbounded_for_ordering() {
        let big = VersionSegment::parse("123456789012345678901234567890").unwrap();
        let small = VersionSegment::parse("99").unwrap();

        assert_eq!(big.number(), None);
        assert!(big.has_positive_number());
        assert_eq!(
            big.compare_version(&small),
            VersionComparisonResult::Greater
        );
    }

    #[rstest]
    #[case("2", "10", VersionComparisonResult::Less)]
    #[case("007", "7", VersionComparisonResult::Equal)]
    #[case("1", "", VersionComparisonResult::Greater)]
    #[case("0", "", VersionComparisonResult::Equal)]
    fn compare_version_orders_numbers(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: VersionComparisonResult,
    ) {
        let left = VersionSegment::parse(left).unwrap();
        let right = VersionSegment::parse(right).unwrap();
        assert_eq!(left.compare_version(&right), expected);
    }

    #[test]
    fn compare_version_flags_differing_separators_as_unsafe() {
        let dot = VersionSegment::parse("1.0").unwrap();
        let dash = VersionSegment::parse("1-0").unwrap();

        assert_eq!(
            dot.next_or_empty().compare_version(dash.next_or_empty()),
            VersionComparisonResult::EqualUnsafe
        );
        assert_eq!(
            dot.next_or_empty()
                .compare_version(VersionSegment::empty()),
            VersionComparisonResult::Equal
        );
    }

    #[test]
    fn wildcard_segment_requires_its_number() {
        let pattern = VersionSegment::parse("17*").unwrap();
        let same = VersionSegment::parse("17").unwrap();
        let other = VersionSegment::parse("18").unwrap();

        assert_eq!(
            pattern.matches(&same, &VersionLetters::Empty),
            VersionMatchResult::Match
        );
        assert_eq!(
            pattern.matches(&other, &VersionLetters::Empty),
            VersionMatchResult::Mismatch
        );
    }

    #[test]
    fn plain_segments_continue_when_equal() {
        let one = VersionSegment::parse("1").unwrap();
        let two = VersionSegment::parse("2").unwrap();

        assert_eq!(
            one.matches(&one.clone(), &VersionLetters::Empty),
            VersionMatchResult::Continue
        );
        assert_eq!(
            one.matches(&two, &VersionLetters::Empty),
            VersionMatchResult::Mismatch
        );
        assert_eq!(
            VersionSegment::empty().matches(VersionSegment::empty(), &VersionLetters::Empty),
            VersionMatchResult::Match
        );
    }

    #[test]
    fn clone_and_eq_cover_the_whole_chain() {
        let start = VersionSegment::parse("1.2.3-rc1").unwrap();
        let copy = start.clone();

        assert_eq!(start, copy);
        assert_eq!(texts(&copy), vec!["1", ".2", ".3", "-rc", "1"]);
        assert_ne!(start, VersionSegment::parse("1.2.3-rc2").unwrap());
        assert_ne!(start, VersionSegment::parse("1.2.3").unwrap());
    }

    #[test]
    fn long_chains_drop_without_recursion() {
        let text = "1.".repeat(100_000);
        let start = VersionSegment::parse(&text).unwrap();
        assert_eq!(start.iter().count(), 100_001);
        drop(start);
    }
}
