//! SKILL.md descriptor parsing.
//!
//! Only the `description:` line is read. The file is not validated as YAML;
//! the first `description:` occurrence anywhere in the text wins.

use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Placeholder shown when a descriptor has no `description:` line.
pub const NO_DESCRIPTION: &str = "No description";

fn description_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    // `\s*` may run past a newline; `.` never does.
    RE.get_or_init(|| Regex::new(r"description:\s*(.+)").ok()).as_ref()
}

/// Extract the one-line description shown by `list`.
///
/// Returns the text after the first `description:` up to (not including) the
/// first period, or the whole line when it has none. `None` when the field is
/// absent.
pub fn extract_description(content: &str) -> Option<String> {
    let caps = description_re()?.captures(content)?;
    let line = caps.get(1)?.as_str();
    let first = line.split('.').next().unwrap_or(line);
    Some(first.trim_end().to_string())
}

/// A bundle's SKILL.md, loaded for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDescriptor {
    pub description: Option<String>,
}

impl SkillDescriptor {
    pub fn parse(content: &str) -> Self {
        Self {
            description: extract_description(content),
        }
    }

    /// Load from `path`. `Ok(None)` when the file does not exist; read
    /// failures on an existing file are errors.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.is_file() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read descriptor: {}", path.display()))?;
        Ok(Some(Self::parse(&content)))
    }

    /// Description text, or the placeholder.
    pub fn display_description(&self) -> &str {
        self.description.as_deref().unwrap_or(NO_DESCRIPTION)
    }
}
