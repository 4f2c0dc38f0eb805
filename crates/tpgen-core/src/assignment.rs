//! Assignment coordinates: which assignment a report is being built for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of activity within a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// `TP` — regular performance-test activity.
    Regular,
    /// `AT` — special/extra activity.
    Special,
}

impl ActivityKind {
    /// The title prefix students use for this kind of activity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "TP",
            Self::Special => "AT",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coordinates identifying one assignment.
///
/// Constructed once per request and immutable for the lifetime of the
/// matcher built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentCoordinates {
    /// DR unit number.
    pub unit: u32,
    /// TP/AT activity number within the unit.
    pub activity: u32,
    /// Semester number.
    pub semester: u32,
    /// Regular (`TP`) or special (`AT`) activity.
    pub kind: ActivityKind,
    /// Optional user-supplied pattern that fully overrides the built-in
    /// title grammars. Tokens `{{dr}}`, `{{tp}}`, and `{{semester}}` are
    /// substituted with the numeric coordinates before compilation.
    #[serde(default)]
    pub custom_pattern: Option<String>,
}

impl AssignmentCoordinates {
    /// Coordinates with no custom pattern.
    #[must_use]
    pub const fn new(unit: u32, activity: u32, semester: u32, kind: ActivityKind) -> Self {
        Self {
            unit,
            activity,
            semester,
            kind,
            custom_pattern: None,
        }
    }
}
