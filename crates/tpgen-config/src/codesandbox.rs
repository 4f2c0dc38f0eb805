//! CodeSandbox access configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CodeSandboxConfig {
    /// Personal access token for the CodeSandbox REST API. Only ever
    /// forwarded as a bearer header; never persisted by tpgen.
    #[serde(default)]
    pub token: String,
}

impl CodeSandboxConfig {
    /// Whether a token is available.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.token.is_empty()
    }
}
