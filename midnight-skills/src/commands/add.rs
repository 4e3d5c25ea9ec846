//! `midnight-agent-skills add <skill>`: copy one bundle into `<cwd>/skills/`.

use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::path::Path;

use midnight_skills_core::skill::package::SKILLS_DIR;
use midnight_skills_core::skill::{registry, PackageLayout};
use midnight_skills_core::SkillsError;

use super::common::copy_skill;
use crate::console::Console;

/// Validation happens before any filesystem access, so a rejected name leaves
/// the working directory untouched. Returns whether the bundle was copied.
pub fn cmd_add<W: Write>(
    console: &mut Console<W>,
    package: &PackageLayout,
    cwd: &Path,
    skill: Option<&str>,
) -> Result<bool> {
    console.banner()?;

    let id = match skill {
        Some(s) if !s.is_empty() => s,
        _ => return Err(SkillsError::MissingSkillName.into()),
    };
    if !registry::is_known(id) {
        return Err(SkillsError::UnknownSkill(id.to_string()).into());
    }

    tracing::info!(skill = id, target = %cwd.display(), "add");
    console.heading(&format!("Adding skill: {}", id))?;
    console.blank()?;

    midnight_skills_fs::ensure_dir(&cwd.join(SKILLS_DIR))?;

    let added = copy_skill(console, package, id, cwd)?;
    if added {
        console.blank()?;
        console.line(format!("{} Skill added successfully", "Done!".green().bold()))?;
    }
    Ok(added)
}
