//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Environment variables: `GRAPHBURN_*` prefix
//! 3. Command line flags (applied by the CLI layer)

use std::collections::HashMap;

use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::FrontierPolicy;

pub const ENV_PREFIX: &str = "GRAPHBURN";

/// Unified configuration for graphburn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Frontier policy used by the burn simulator (default: dedupe)
    pub frontier: FrontierPolicy,
    /// Line printed between demo scenarios (default: "=====")
    pub divider: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frontier: FrontierPolicy::default(),
            divider: "=====".to_string(),
        }
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Load settings from defaults and the process environment.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from_env(None)
    }

    /// Load settings, reading `GRAPHBURN_*` variables from `vars` instead of
    /// the process environment when given.
    pub fn load_from_env(vars: Option<HashMap<String, String>>) -> Result<Self, ApplicationError> {
        // frontier falls back through #[serde(default)]
        let defaults = Settings::default();
        let builder = Config::builder()
            .set_default("divider", defaults.divider)
            .map_err(config_err)?
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .source(vars),
            );

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }
}
