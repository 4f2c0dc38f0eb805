//! Sandbox snapshots as returned by the CodeSandbox REST API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visibility level of a sandbox.
///
/// The REST API encodes privacy as a numeric level: 0 = public,
/// 1 = unlisted, 2 = private. Levels this crate does not know about
/// deserialize to [`Private`](Self::Private) so they can never pass a
/// public-only check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum SandboxPrivacy {
    Public,
    Unlisted,
    Private,
}

impl SandboxPrivacy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Unlisted => "unlisted",
            Self::Private => "private",
        }
    }

    /// Whether this sandbox is visible without authentication or a link.
    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }
}

impl From<u8> for SandboxPrivacy {
    fn from(level: u8) -> Self {
        match level {
            0 => Self::Public,
            1 => Self::Unlisted,
            _ => Self::Private,
        }
    }
}

impl From<SandboxPrivacy> for u8 {
    fn from(privacy: SandboxPrivacy) -> Self {
        match privacy {
            SandboxPrivacy::Public => 0,
            SandboxPrivacy::Unlisted => 1,
            SandboxPrivacy::Private => 2,
        }
    }
}

impl fmt::Display for SandboxPrivacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable snapshot of a remote sandbox.
///
/// Identity is the opaque `id`; the title is whatever the student typed
/// and may be absent entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sandbox {
    /// Opaque CodeSandbox identifier.
    pub id: String,
    /// Human-assigned title, if any.
    pub title: Option<String>,
    /// Visibility level.
    pub privacy: SandboxPrivacy,
}

/// One report entry: a browsable sandbox URL paired with the question
/// number extracted from its title.
///
/// `question` is `None` when the title did not yield a numeric index;
/// callers decide whether to reject or render the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SandboxLink {
    pub url: String,
    pub question: Option<u32>,
}
