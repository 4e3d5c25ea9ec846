//! `midnight-agent-skills list`: show each shipped skill with its description.

use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use midnight_skills_core::skill::{registry, PackageLayout, SkillDescriptor};

use crate::console::Console;

/// Identifiers whose bundle has no SKILL.md are left out silently. Returns
/// the identifiers that were shown.
pub fn cmd_list<W: Write>(
    console: &mut Console<W>,
    package: &PackageLayout,
) -> Result<Vec<&'static str>> {
    console.banner()?;
    console.heading("Available Skills:")?;
    console.blank()?;

    let mut shown = Vec::new();
    for id in registry::ids() {
        let Some(descriptor) = SkillDescriptor::load(&package.descriptor(id))? else {
            tracing::debug!(skill = id, "no descriptor, skipping");
            continue;
        };
        console.line(format!("  {}", id.cyan()))?;
        console.line(format!("  {}", descriptor.display_description().dimmed()))?;
        console.blank()?;
        shown.push(id);
    }
    Ok(shown)
}
