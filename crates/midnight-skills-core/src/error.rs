use thiserror::Error;

/// Failures the dispatcher recognizes and reports with a hint.
///
/// Anything else (I/O, permissions) travels as a plain `anyhow::Error`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SkillsError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Please specify a skill name")]
    MissingSkillName,

    #[error("Unknown skill '{0}'")]
    UnknownSkill(String),
}

impl SkillsError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
