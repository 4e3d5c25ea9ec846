//! Typed config structs loaded from the environment.

use super::env_keys::{observability as obv_keys, paths};
use super::loader::{env_bool, env_optional, env_or};
use std::path::PathBuf;

/// Default filter: console output is the interface, logs only surface warnings.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self {
            quiet: env_bool(obv_keys::MIDNIGHT_SKILLS_QUIET, false),
            log_level: env_or(obv_keys::MIDNIGHT_SKILLS_LOG_LEVEL, || {
                DEFAULT_LOG_LEVEL.to_string()
            }),
            log_json: env_bool(obv_keys::MIDNIGHT_SKILLS_LOG_JSON, false),
        }
    }
}

/// Path overrides.
#[derive(Debug, Clone, Default)]
pub struct PathsConfig {
    /// Package root override; skips executable-relative discovery.
    pub package_root: Option<PathBuf>,
}

impl PathsConfig {
    pub fn from_env() -> Self {
        Self {
            package_root: env_optional(paths::MIDNIGHT_SKILLS_ROOT).map(PathBuf::from),
        }
    }
}
