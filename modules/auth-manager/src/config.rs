//! Configuration for the auth manager.

use std::path::Path;

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::Deserialize;

/// Prefix of environment variables overriding file configuration
/// (`AC_AUTH_ENABLED=false`).
pub const ENV_PREFIX: &str = "AC_AUTH_";

/// Configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthManagerConfig {
    /// When `false` every authorization check succeeds without consulting
    /// any collaborator.
    pub enabled: bool,
}

impl Default for AuthManagerConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl AuthManagerConfig {
    #[must_use]
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Load configuration from a YAML file, then apply `AC_AUTH_*` environment
    /// overrides. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is not valid YAML, contains unknown fields
    /// or a value of the wrong type.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .with_context(|| format!("failed to load auth manager config from {}", path.display()))
    }
}
