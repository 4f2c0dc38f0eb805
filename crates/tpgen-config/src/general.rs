//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default cap on accepted sandboxes per run; 0 means uncapped.
const fn default_max_results() -> usize {
    0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Stop paging once this many matches have accumulated (0 = uncapped;
    /// the final page is never truncated).
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
        }
    }
}

impl GeneralConfig {
    /// The cap as the listing layer expects it.
    #[must_use]
    pub const fn cap(&self) -> Option<usize> {
        if self.max_results == 0 {
            None
        } else {
            Some(self.max_results)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_uncapped() {
        let config = GeneralConfig::default();
        assert_eq!(config.max_results, 0);
        assert_eq!(config.cap(), None);
    }

    #[test]
    fn nonzero_cap_maps_to_some() {
        let config = GeneralConfig { max_results: 25 };
        assert_eq!(config.cap(), Some(25));
    }
}
