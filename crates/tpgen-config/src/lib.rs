//! # tpgen-config
//!
//! Layered configuration loading for tpgen using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TPGEN_*` prefix, `__` as separator)
//! 2. Project-level `.tpgen/config.toml`
//! 3. User-level `~/.config/tpgen/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TPGEN_CODESANDBOX__TOKEN` -> `codesandbox.token`,
//! `TPGEN_GENERAL__MAX_RESULTS` -> `general.max_results`. The `__`
//! (double underscore) separates nested config sections.

mod codesandbox;
mod error;
mod general;

pub use codesandbox::CodeSandboxConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TpgenConfig {
    #[serde(default)]
    pub codesandbox: CodeSandboxConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl TpgenConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source fails to merge or
    /// extract.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source fails to merge or
    /// extract.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".tpgen/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("TPGEN_").split("__"))
    }

    /// The CodeSandbox token, as a hard requirement.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when no token is configured.
    pub fn require_token(&self) -> Result<&str, ConfigError> {
        if self.codesandbox.is_configured() {
            Ok(&self.codesandbox.token)
        } else {
            Err(ConfigError::Missing {
                field: "codesandbox.token".to_string(),
                env_hint: "TPGEN_CODESANDBOX__TOKEN".to_string(),
            })
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tpgen").join("config.toml"))
    }
}
