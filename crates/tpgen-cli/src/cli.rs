//! Command-line argument definitions and request-level validation.

use clap::Parser;
use tpgen_core::{ActivityKind, AssignmentCoordinates};

/// Locate a student's CodeSandbox workspaces for an assignment and emit
/// the ordered question/link list a report is built from.
#[derive(Debug, Parser)]
#[command(name = "tpgen", version, about)]
pub struct Cli {
    /// DR unit number.
    #[arg(long)]
    pub dr: u32,

    /// TP/AT activity number within the unit.
    #[arg(long)]
    pub tp: u32,

    /// Semester number.
    #[arg(long, default_value_t = 1)]
    pub semester: u32,

    /// Treat the activity as a special (AT) activity instead of a regular TP.
    #[arg(long)]
    pub at: bool,

    /// Custom title pattern overriding the built-in grammars. Literal
    /// `{{dr}}`, `{{tp}}`, and `{{semester}}` tokens are substituted with
    /// the numeric coordinates before compilation.
    #[arg(long)]
    pub pattern: Option<String>,

    /// Stop paging after this many matches (the final page is kept whole).
    #[arg(long)]
    pub max_results: Option<usize>,

    /// CodeSandbox access token; overrides the configured one.
    #[arg(long)]
    pub token: Option<String>,

    /// Emit JSON instead of human-readable lines.
    #[arg(long)]
    pub json: bool,

    /// Only log errors.
    #[arg(long, short)]
    pub quiet: bool,

    /// Debug logging.
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Validate the assignment fields and assemble the coordinates.
    pub fn coordinates(&self) -> anyhow::Result<AssignmentCoordinates> {
        if self.dr == 0 {
            anyhow::bail!("DR unit must be at least 1");
        }
        if self.tp == 0 {
            anyhow::bail!("TP/AT activity must be at least 1");
        }
        if self.semester == 0 {
            anyhow::bail!("semester must be at least 1");
        }

        let kind = if self.at {
            ActivityKind::Special
        } else {
            ActivityKind::Regular
        };

        let mut coords = AssignmentCoordinates::new(self.dr, self.tp, self.semester, kind);
        coords.custom_pattern = self.pattern.clone();
        Ok(coords)
    }
}
