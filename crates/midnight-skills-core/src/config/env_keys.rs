//! Environment variable keys.

/// Package install root (where `skills/` and the agent files live).
pub mod paths {
    pub const MIDNIGHT_SKILLS_ROOT: &str = "MIDNIGHT_SKILLS_ROOT";
}

/// Logging.
pub mod observability {
    pub const MIDNIGHT_SKILLS_QUIET: &str = "MIDNIGHT_SKILLS_QUIET";
    pub const MIDNIGHT_SKILLS_LOG_LEVEL: &str = "MIDNIGHT_SKILLS_LOG_LEVEL";
    pub const MIDNIGHT_SKILLS_LOG_JSON: &str = "MIDNIGHT_SKILLS_LOG_JSON";
}
