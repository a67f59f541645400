//! Runtime configuration for Gropius.
//!
//! Configuration is layered: [`GropiusConfig::default`], then an optional
//! JSON document via [`GropiusConfig::from_json_str`], then environment
//! overrides via [`GropiusConfig::with_env_overrides`].
//!
//! # Examples
//!
//! ```
//! use gropius::config::{DispatchConfig, GropiusConfig};
//!
//! let config = GropiusConfig::default();
//! assert_eq!(config.dispatch.deadline_ms, 10_000);
//!
//! let interactive = DispatchConfig::interactive();
//! assert_eq!(interactive.deadline_ms, 2_000);
//! ```

use crate::workspace::domain::{DEFAULT_ROOT_URI, NamespaceTranslator, TranslationError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding [`DispatchConfig::deadline_ms`].
pub const DEADLINE_ENV: &str = "GROPIUS_DISPATCH_DEADLINE_MS";

/// Environment variable overriding [`WorkspaceConfig::root_uri`].
pub const ROOT_URI_ENV: &str = "GROPIUS_WORKSPACE_ROOT_URI";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is syntactically valid but not acceptable.
    #[error("invalid value for {key}: {reason}")]
    InvalidValue {
        /// Configuration key.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The workspace root cannot be used for translation.
    #[error(transparent)]
    Translation(#[from] TranslationError),
}

/// Scatter-gather dispatch settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Budget for one dispatch in milliseconds. Must be positive.
    pub deadline_ms: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            deadline_ms: 10_000,
        }
    }
}

impl DispatchConfig {
    /// Creates a configuration with an explicit deadline.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `deadline_ms` is zero.
    pub fn new(deadline_ms: u64) -> Result<Self, ConfigError> {
        let config = Self { deadline_ms };
        config.validate()?;
        Ok(config)
    }

    /// Creates a configuration for editor-facing latency budgets.
    #[must_use]
    pub const fn interactive() -> Self {
        Self { deadline_ms: 2_000 }
    }

    /// Returns the deadline as a duration.
    #[must_use]
    pub const fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.deadline_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "dispatch.deadline_ms",
                reason: "deadline must be positive".to_owned(),
            });
        }
        Ok(())
    }
}

/// Workspace namespace settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Root URI under which language servers see the workspace.
    pub root_uri: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            root_uri: DEFAULT_ROOT_URI.to_owned(),
        }
    }
}

impl WorkspaceConfig {
    /// Builds the namespace translator for this workspace.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Translation`] when the root is blank.
    pub fn translator(&self) -> Result<NamespaceTranslator, ConfigError> {
        Ok(NamespaceTranslator::new(self.root_uri.as_str())?)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GropiusConfig {
    /// Dispatch settings.
    pub dispatch: DispatchConfig,
    /// Workspace settings.
    pub workspace: WorkspaceConfig,
}

impl GropiusConfig {
    /// Parses a JSON document. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed documents and
    /// [`ConfigError::InvalidValue`] or [`ConfigError::Translation`] for
    /// unacceptable values.
    pub fn from_json_str(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when an override cannot be
    /// parsed or is not acceptable.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides looked up through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when an override cannot be
    /// parsed or is not acceptable.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(DEADLINE_ENV) {
            let parsed = raw.trim().parse::<u64>();
            self.dispatch.deadline_ms = parsed.map_err(|err| ConfigError::InvalidValue {
                key: DEADLINE_ENV,
                reason: err.to_string(),
            })?;
        }
        if let Some(root_uri) = lookup(ROOT_URI_ENV) {
            self.workspace.root_uri = root_uri;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks every section.
    ///
    /// # Errors
    ///
    /// Returns the first invalid value found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dispatch.validate()?;
        self.workspace.translator()?;
        Ok(())
    }
}
