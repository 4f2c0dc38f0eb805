//! # tpgen-assignment
//!
//! Decides whether a sandbox title belongs to a given assignment and which
//! question number the title encodes.
//!
//! Students have named their sandboxes in three historical grammars:
//!
//! ```text
//! V1: DR2-TP1.3            (prefix form, early units of semester 1)
//! V2: TP2.5-DR3            (activity-first form)
//! V3: TP2.5-DR3-S2         (semester suffix, any semester past the first)
//! ```
//!
//! Special (`AT`) activities use `AT.<index>-DR<unit>` before V3 and
//! `AT.<index>-DR<unit>-S<semester>` from V3 on. A user-supplied custom
//! pattern, when present, fully overrides the built-in grammars.
//!
//! The grammar version is a pure function of the assignment coordinates and
//! is derived exactly once when the matcher is built, so membership and
//! extraction always agree within one matcher.

mod error;

pub use error::MatcherError;

use regex::{Regex, RegexBuilder};
use tpgen_core::{ActivityKind, AssignmentCoordinates};

/// Upper bound on compiled size for user-supplied custom patterns. The
/// pattern text arrives from a request body; the regex engine is
/// linear-time at match time, so compilation size is the remaining cost
/// to bound.
const CUSTOM_PATTERN_SIZE_LIMIT: usize = 1 << 16;

// ---------------------------------------------------------------------------
// TitleFormat
// ---------------------------------------------------------------------------

/// Historical title-grammar version, ordered oldest to newest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TitleFormat {
    V1,
    V2,
    V3,
}

impl TitleFormat {
    /// Derive the grammar version for a set of assignment coordinates.
    ///
    /// Any semester past the first forces [`V3`](Self::V3) regardless of
    /// the other fields; otherwise an activity past 1 or a unit past 2
    /// forces [`V2`](Self::V2); otherwise [`V1`](Self::V1).
    #[must_use]
    pub const fn for_coordinates(coords: &AssignmentCoordinates) -> Self {
        Self::derive(coords.activity, coords.unit, coords.semester)
    }

    /// Same derivation from bare numbers.
    #[must_use]
    pub const fn derive(activity: u32, unit: u32, semester: u32) -> Self {
        if semester > 1 {
            Self::V3
        } else if activity > 1 || unit > 2 {
            Self::V2
        } else {
            Self::V1
        }
    }
}

// ---------------------------------------------------------------------------
// AssignmentMatcher
// ---------------------------------------------------------------------------

/// The single title rule selected for one assignment, compiled once at
/// construction.
#[derive(Debug)]
enum TitleRule {
    /// User-supplied pattern; overrides every built-in grammar.
    Custom(Regex),
    /// `AT.<index>-DR<unit>`, case-insensitive (special, before V3).
    SpecialLegacy(Regex),
    /// `AT.<index>-DR<unit>-S<semester>`, case-insensitive (special, V3).
    Special(Regex),
    /// Literal `DR<unit>-TP<activity>.` prefix (regular, V1).
    RegularPrefix(String),
    /// `TP<activity>.<index>-DR<unit>[-S<semester>]` (regular, after V1).
    Regular(Regex),
}

/// Matches sandbox titles against one assignment's coordinates.
#[derive(Debug)]
pub struct AssignmentMatcher {
    format: TitleFormat,
    rule: TitleRule,
}

impl AssignmentMatcher {
    /// Build a matcher for the given coordinates, deriving the grammar
    /// version and compiling the applicable title rule.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::Pattern`] when the custom pattern (after
    /// token substitution) is not a valid regex or exceeds the size bound.
    pub fn new(coords: &AssignmentCoordinates) -> Result<Self, MatcherError> {
        let format = TitleFormat::for_coordinates(coords);

        let rule = if let Some(pattern) = coords.custom_pattern.as_deref() {
            TitleRule::Custom(compile_custom(pattern, coords)?)
        } else {
            match (coords.kind, format) {
                (ActivityKind::Special, TitleFormat::V1 | TitleFormat::V2) => {
                    TitleRule::SpecialLegacy(case_insensitive(&format!(
                        r"AT\.(\d+)-DR{}",
                        coords.unit
                    ))?)
                }
                (ActivityKind::Special, TitleFormat::V3) => {
                    TitleRule::Special(case_insensitive(&format!(
                        r"AT\.(\d+)-DR{}-S{}",
                        coords.unit, coords.semester
                    ))?)
                }
                (ActivityKind::Regular, TitleFormat::V1) => TitleRule::RegularPrefix(format!(
                    "DR{}-TP{}.",
                    coords.unit, coords.activity
                )),
                (ActivityKind::Regular, TitleFormat::V2) => TitleRule::Regular(Regex::new(
                    &format!(r"TP{}\.(\d+)-DR{}", coords.activity, coords.unit),
                )?),
                (ActivityKind::Regular, TitleFormat::V3) => TitleRule::Regular(Regex::new(
                    &format!(
                        r"TP{}\.(\d+)-DR{}-S{}",
                        coords.activity, coords.unit, coords.semester
                    ),
                )?),
            }
        };

        Ok(Self { format, rule })
    }

    /// The grammar version this matcher was built with.
    #[must_use]
    pub const fn format(&self) -> TitleFormat {
        self.format
    }

    /// Whether a sandbox title belongs to this assignment.
    ///
    /// Absent titles are treated as empty, never as an error; leading and
    /// trailing whitespace is ignored.
    #[must_use]
    pub fn is_member(&self, title: Option<&str>) -> bool {
        let trimmed = title.unwrap_or_default().trim();

        match &self.rule {
            TitleRule::Custom(re)
            | TitleRule::SpecialLegacy(re)
            | TitleRule::Special(re)
            | TitleRule::Regular(re) => re.is_match(trimmed),
            TitleRule::RegularPrefix(prefix) => trimmed.starts_with(prefix.as_str()),
        }
    }

    /// Extract the question number a title encodes, or `None` when it does
    /// not parse. Never errors: malformed and absent titles both yield the
    /// `None` sentinel.
    ///
    /// Built-in grammars take the segment after the last `.`; from V2 on
    /// that segment additionally stops at the first `-`. A custom pattern
    /// instead uses its first capture group.
    #[must_use]
    pub fn question_number(&self, title: Option<&str>) -> Option<u32> {
        let trimmed = title.unwrap_or_default().trim();

        if let TitleRule::Custom(re) = &self.rule {
            return re.captures(trimmed)?.get(1)?.as_str().parse().ok();
        }

        let last = trimmed.rsplit('.').next()?;
        let segment = if self.format == TitleFormat::V1 {
            last
        } else {
            last.split('-').next()?
        };

        segment.parse().ok()
    }
}

/// Substitute the `{{dr}}`/`{{tp}}`/`{{semester}}` tokens and compile the
/// user-supplied pattern case-insensitively under the size bound.
fn compile_custom(
    pattern: &str,
    coords: &AssignmentCoordinates,
) -> Result<Regex, MatcherError> {
    let substituted = pattern
        .replace("{{dr}}", &coords.unit.to_string())
        .replace("{{tp}}", &coords.activity.to_string())
        .replace("{{semester}}", &coords.semester.to_string());

    RegexBuilder::new(&substituted)
        .case_insensitive(true)
        .size_limit(CUSTOM_PATTERN_SIZE_LIMIT)
        .build()
        .map_err(MatcherError::from)
}

fn case_insensitive(pattern: &str) -> Result<Regex, MatcherError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(MatcherError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn coords(unit: u32, activity: u32, semester: u32, kind: ActivityKind) -> AssignmentCoordinates {
        AssignmentCoordinates::new(unit, activity, semester, kind)
    }

    fn matcher(unit: u32, activity: u32, semester: u32, kind: ActivityKind) -> AssignmentMatcher {
        AssignmentMatcher::new(&coords(unit, activity, semester, kind)).unwrap()
    }

    fn custom_matcher(unit: u32, activity: u32, semester: u32, pattern: &str) -> AssignmentMatcher {
        let mut coords = coords(unit, activity, semester, ActivityKind::Regular);
        coords.custom_pattern = Some(pattern.to_string());
        AssignmentMatcher::new(&coords).unwrap()
    }

    // -- Format derivation --------------------------------------------------

    #[test]
    fn format_derivation_table() {
        // (activity, unit, semester) -> format
        let cases = [
            (1, 1, 1, TitleFormat::V1),
            (1, 2, 1, TitleFormat::V1),
            (2, 1, 1, TitleFormat::V2),
            (1, 3, 1, TitleFormat::V2),
            (3, 5, 1, TitleFormat::V2),
            (1, 1, 2, TitleFormat::V3),
            (2, 3, 4, TitleFormat::V3),
        ];
        for (activity, unit, semester, expected) in cases {
            assert_eq!(
                TitleFormat::derive(activity, unit, semester),
                expected,
                "derive({activity}, {unit}, {semester})"
            );
        }
    }

    #[test]
    fn later_semester_never_lowers_the_format() {
        for activity in 1..4 {
            for unit in 1..5 {
                for semester in 1..4 {
                    let now = TitleFormat::derive(activity, unit, semester);
                    let next = TitleFormat::derive(activity, unit, semester + 1);
                    assert!(next >= now, "({activity}, {unit}, {semester})");
                }
            }
        }
    }

    #[test]
    fn first_semester_depends_only_on_activity_and_unit() {
        assert_eq!(TitleFormat::derive(1, 2, 1), TitleFormat::V1);
        assert_eq!(TitleFormat::derive(1, 2, 0), TitleFormat::V1);
        assert_eq!(TitleFormat::derive(2, 2, 1), TitleFormat::V2);
        assert_eq!(TitleFormat::derive(2, 2, 0), TitleFormat::V2);
    }

    // -- Regular (TP) grammars ----------------------------------------------

    #[test]
    fn v1_prefix_title_matches_and_extracts() {
        let m = matcher(2, 1, 1, ActivityKind::Regular);
        assert_eq!(m.format(), TitleFormat::V1);
        assert!(m.is_member(Some("DR2-TP1.3")));
        assert_eq!(m.question_number(Some("DR2-TP1.3")), Some(3));
    }

    #[test]
    fn v1_prefix_rejects_other_assignments() {
        let m = matcher(2, 1, 1, ActivityKind::Regular);
        assert!(!m.is_member(Some("DR1-TP1.3")));
        assert!(!m.is_member(Some("TP1.3-DR2")));
    }

    #[test]
    fn v2_title_matches_and_extracts() {
        let m = matcher(3, 2, 1, ActivityKind::Regular);
        assert_eq!(m.format(), TitleFormat::V2);
        assert!(m.is_member(Some("TP2.5-DR3")));
        assert_eq!(m.question_number(Some("TP2.5-DR3")), Some(5));
    }

    #[test]
    fn v2_regular_grammar_is_case_sensitive() {
        let m = matcher(3, 2, 1, ActivityKind::Regular);
        assert!(!m.is_member(Some("tp2.5-dr3")));
    }

    #[test]
    fn v3_regular_requires_semester_suffix() {
        let m = matcher(3, 2, 2, ActivityKind::Regular);
        assert_eq!(m.format(), TitleFormat::V3);
        assert!(m.is_member(Some("TP2.7-DR3-S2")));
        assert_eq!(m.question_number(Some("TP2.7-DR3-S2")), Some(7));
        assert!(!m.is_member(Some("TP2.7-DR3")));
    }

    #[test]
    fn titles_are_trimmed_before_matching() {
        let m = matcher(2, 1, 1, ActivityKind::Regular);
        assert!(m.is_member(Some("  DR2-TP1.3  ")));
        assert_eq!(m.question_number(Some("  DR2-TP1.3  ")), Some(3));
    }

    // -- Special (AT) grammars ----------------------------------------------

    #[test]
    fn legacy_special_matches_case_insensitively_before_v3() {
        let m = matcher(3, 1, 1, ActivityKind::Special);
        assert_eq!(m.format(), TitleFormat::V2);
        assert!(m.is_member(Some("AT.2-DR3")));
        assert!(m.is_member(Some("at.2-dr3")));
        assert_eq!(m.question_number(Some("AT.2-DR3")), Some(2));
    }

    #[test]
    fn v3_special_requires_semester_suffix() {
        let m = matcher(1, 1, 2, ActivityKind::Special);
        assert_eq!(m.format(), TitleFormat::V3);
        assert!(m.is_member(Some("AT.4-DR1-S2")));
        assert_eq!(m.question_number(Some("AT.4-DR1-S2")), Some(4));
        assert!(!m.is_member(Some("AT.4-DR1")));
    }

    #[test]
    fn legacy_special_under_v1_matches_but_yields_no_question() {
        // V1 extraction takes the whole last dot-segment ("4-DR1"), which
        // is not numeric. Faithful to how the legacy titles behaved.
        let m = matcher(1, 1, 1, ActivityKind::Special);
        assert_eq!(m.format(), TitleFormat::V1);
        assert!(m.is_member(Some("AT.4-DR1")));
        assert_eq!(m.question_number(Some("AT.4-DR1")), None);
    }

    // -- Custom patterns ----------------------------------------------------

    #[test]
    fn custom_pattern_tokens_are_substituted() {
        let m = custom_matcher(5, 1, 1, r"ASSIGN-{{dr}}-(\d+)");
        assert!(m.is_member(Some("ASSIGN-5-7")));
        assert_eq!(m.question_number(Some("ASSIGN-5-7")), Some(7));
        assert!(!m.is_member(Some("ASSIGN-6-7")));
    }

    #[test]
    fn custom_pattern_is_case_insensitive() {
        let m = custom_matcher(5, 1, 1, r"assign-{{dr}}-(\d+)");
        assert!(m.is_member(Some("Assign-5-7")));
    }

    #[test]
    fn custom_pattern_overrides_builtin_grammar() {
        let mut coords = coords(2, 1, 1, ActivityKind::Regular);
        coords.custom_pattern = Some(r"NOPE-(\d+)".to_string());
        let m = AssignmentMatcher::new(&coords).unwrap();

        // The title matches the built-in V1 grammar for these coordinates,
        // but the custom pattern is the sole rule.
        assert!(!m.is_member(Some("DR2-TP1.3")));
        assert_eq!(m.question_number(Some("DR2-TP1.3")), None);
        assert!(m.is_member(Some("NOPE-9")));
        assert_eq!(m.question_number(Some("NOPE-9")), Some(9));
    }

    #[test]
    fn custom_pattern_without_capture_yields_no_question() {
        let m = custom_matcher(5, 1, 1, r"ASSIGN-{{dr}}-\d+");
        assert!(m.is_member(Some("ASSIGN-5-7")));
        assert_eq!(m.question_number(Some("ASSIGN-5-7")), None);
    }

    #[test]
    fn custom_pattern_with_non_numeric_capture_yields_no_question() {
        let m = custom_matcher(5, 1, 1, r"ASSIGN-{{dr}}-(\w+)");
        assert_eq!(m.question_number(Some("ASSIGN-5-seven")), None);
    }

    #[test]
    fn invalid_custom_pattern_is_a_construction_error() {
        let mut coords = coords(1, 1, 1, ActivityKind::Regular);
        coords.custom_pattern = Some("(".to_string());
        let err = AssignmentMatcher::new(&coords).unwrap_err();
        assert!(matches!(err, MatcherError::Pattern(_)));
    }

    #[test]
    fn semester_and_activity_tokens_substitute_too() {
        let m = custom_matcher(1, 4, 3, r"S{{semester}}/TP{{tp}}/Q(\d+)");
        assert!(m.is_member(Some("S3/TP4/Q12")));
        assert_eq!(m.question_number(Some("S3/TP4/Q12")), Some(12));
    }

    // -- Absent and malformed titles ----------------------------------------

    #[test]
    fn absent_title_is_never_a_member() {
        for kind in [ActivityKind::Regular, ActivityKind::Special] {
            for semester in [1, 2] {
                let m = matcher(3, 2, semester, kind);
                assert!(!m.is_member(None));
                assert!(!m.is_member(Some("")));
                assert!(!m.is_member(Some("   ")));
                assert_eq!(m.question_number(None), None);
            }
        }
    }

    #[test]
    fn malformed_titles_yield_no_question() {
        let m = matcher(3, 2, 1, ActivityKind::Regular);
        assert_eq!(m.question_number(Some("hello")), None);
        assert_eq!(m.question_number(Some("TP2.x-DR3")), None);
    }
}
