//! Known release phases ranked by maturity

use std::fmt;

/// A phase keyword recognized in the letters of a version segment.
///
/// Variants are declared in ascending maturity, so the derived `Ord` is the
/// phase rank used when two recognized keywords are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VersionPhase {
    /// Nightly or snapshot builds (e.g. `1.0-SNAPSHOT`)
    Snapshot,
    /// Early access or alpha builds (e.g. `1.0-alpha1`)
    Alpha,
    /// Beta builds (e.g. `2.0b3`)
    Beta,
    /// Milestone builds (e.g. `5.0-M2`)
    Milestone,
    /// Release candidates (e.g. `3.1.0-rc1`)
    ReleaseCandidate,
    /// Explicit release markers (e.g. `17.2.final`, `1.0.GA`)
    Release,
    /// Service packs published after a release (e.g. `4.0-sp1`)
    ServicePack,
}

impl VersionPhase {
    /// All phases, lowest maturity first
    pub const ALL: [VersionPhase; 7] = [
        VersionPhase::Snapshot,
        VersionPhase::Alpha,
        VersionPhase::Beta,
        VersionPhase::Milestone,
        VersionPhase::ReleaseCandidate,
        VersionPhase::Release,
        VersionPhase::ServicePack,
    ];

    /// Keywords mapped to this phase, lowercase. The first one is canonical.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            VersionPhase::Snapshot => &["snapshot", "nightly", "dev"],
            VersionPhase::Alpha => &["alpha", "a", "ea"],
            VersionPhase::Beta => &["beta", "b"],
            VersionPhase::Milestone => &["milestone", "m"],
            VersionPhase::ReleaseCandidate => &["rc", "cr"],
            VersionPhase::Release => &["release", "final", "ga"],
            VersionPhase::ServicePack => &["sp"],
        }
    }

    /// Look up the phase for a letter sequence, ignoring case.
    ///
    /// Returns `None` for letters that are not a known keyword.
    pub fn of(letters: &str) -> Option<Self> {
        if letters.is_empty() {
            return None;
        }
        let lower = letters.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|phase| phase.keywords().contains(&lower.as_str()))
    }

    /// Whether this phase denotes an unstable pre-release build.
    pub fn is_development_phase(self) -> bool {
        self < VersionPhase::Release
    }
}

impl fmt::Display for VersionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keywords()[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("alpha", Some(VersionPhase::Alpha))]
    #[case("ALPHA", Some(VersionPhase::Alpha))]
    #[case("SNAPSHOT", Some(VersionPhase::Snapshot))]
    #[case("nightly", Some(VersionPhase::Snapshot))]
    #[case("b", Some(VersionPhase::Beta))]
    #[case("M", Some(VersionPhase::Milestone))]
    #[case("RC", Some(VersionPhase::ReleaseCandidate))]
    #[case("final", Some(VersionPhase::Release))]
    #[case("sp", Some(VersionPhase::ServicePack))]
    #[case("foo", None)]
    #[case("", None)]
    fn of_returns_expected_phase(#[case] letters: &str, #[case] expected: Option<VersionPhase>) {
        assert_eq!(VersionPhase::of(letters), expected);
    }

    #[test]
    fn phases_are_ranked_by_maturity() {
        assert!(VersionPhase::Snapshot < VersionPhase::Alpha);
        assert!(VersionPhase::Alpha < VersionPhase::Beta);
        assert!(VersionPhase::Beta < VersionPhase::Milestone);
        assert!(VersionPhase::Milestone < VersionPhase::ReleaseCandidate);
        assert!(VersionPhase::ReleaseCandidate < VersionPhase::Release);
        assert!(VersionPhase::Release < VersionPhase::ServicePack);
    }

    #[test]
    fn only_pre_release_phases_are_development_phases() {
        let development: Vec<_> = VersionPhase::ALL
            .into_iter()
            .filter(|p| p.is_development_phase())
            .collect();

        assert_eq!(
            development,
            vec![
                VersionPhase::Snapshot,
                VersionPhase::Alpha,
                VersionPhase::Beta,
                VersionPhase::Milestone,
                VersionPhase::ReleaseCandidate,
            ]
        );
    }
}
