//! `midnight-agent-skills init [dir]`: copy every skill plus the agent files.
//!
//! Flow:
//!   1. Resolve the target against the cwd and create `<target>/skills/`
//!   2. Copy each registered bundle; a bundle missing from the package is
//!      reported and skipped
//!   3. Copy the agent instruction files the package ships
//!   4. Print the summary
//!
//! Nothing is rolled back if a copy fails partway.

use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::path::Path;

use midnight_skills_core::skill::package::SKILLS_DIR;
use midnight_skills_core::skill::{registry, PackageLayout};

use super::common::{copy_agent_files, copy_skill, resolve_target};
use crate::console::Console;

/// Counts reported at the end of `init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitSummary {
    pub skills_copied: usize,
    pub agent_files_copied: usize,
}

pub fn cmd_init<W: Write>(
    console: &mut Console<W>,
    package: &PackageLayout,
    cwd: &Path,
    dir: &str,
) -> Result<InitSummary> {
    console.banner()?;

    let target = resolve_target(cwd, dir);
    tracing::info!(target = %target.display(), package = %package.root().display(), "init");

    console.heading("Initializing midnight-agent-skills skills...")?;
    console.blank()?;
    console.dim(&format!("Target: {}", target.display()))?;
    console.blank()?;

    midnight_skills_fs::ensure_dir(&target.join(SKILLS_DIR))?;

    console.heading("Copying skills:")?;
    let mut skills_copied = 0;
    for id in registry::ids() {
        if copy_skill(console, package, id, &target)? {
            skills_copied += 1;
        }
    }

    console.blank()?;
    console.heading("Copying agent files:")?;
    let agent_files_copied = copy_agent_files(console, package, &target)?;

    let shown = if dir == "." { "current directory" } else { dir };
    console.blank()?;
    console.line(format!(
        "{} Copied {} skills to {}",
        "Done!".green().bold(),
        skills_copied,
        shown
    ))?;
    console.blank()?;
    console.next_steps()?;

    Ok(InitSummary {
        skills_copied,
        agent_files_copied,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::common::fixtures;
    use crate::console::render;
    use midnight_skills_core::skill::SKILLS;
    use std::fs;

    #[test]
    fn test_init_copies_everything() {
        let pkg = tempfile::tempdir().unwrap();
        let cwd = tempfile::tempdir().unwrap();
        fixtures::full_package(pkg.path());
        let layout = PackageLayout::new(pkg.path());

        let mut summary = None;
        let out = render(|c| {
            summary = Some(cmd_init(c, &layout, cwd.path(), ".").unwrap());
            Ok(())
        });

        assert_eq!(
            summary,
            Some(InitSummary {
                skills_copied: 5,
                agent_files_copied: 2
            })
        );
        for skill in SKILLS {
            assert!(cwd.path().join("skills").join(skill.id).join("SKILL.md").is_file());
        }
        assert!(cwd.path().join("AGENTS.md").is_file());
        assert!(cwd.path().join("CLAUDE.md").is_file());
        assert!(out.contains("Copied 5 skills to current directory"));
        assert!(out.contains(&format!("Target: {}", cwd.path().display())));
    }

    #[test]
    fn test_init_nested_dir_twice_is_stable() {
        let pkg = tempfile::tempdir().unwrap();
        let cwd = tempfile::tempdir().unwrap();
        fixtures::full_package(pkg.path());
        let layout = PackageLayout::new(pkg.path());

        let first = render(|c| {
            cmd_init(c, &layout, cwd.path(), "./sub/dir").unwrap();
            Ok(())
        });
        let skill_md = cwd.path().join("sub/dir/skills/midnight-deploy/SKILL.md");
        let before = fs::read(&skill_md).unwrap();

        let second = render(|c| {
            cmd_init(c, &layout, cwd.path(), "./sub/dir").unwrap();
            Ok(())
        });
        assert_eq!(fs::read(&skill_md).unwrap(), before);
        assert_eq!(first, second);
        assert!(first.contains("Copied 5 skills to ./sub/dir"));
    }

    #[test]
    fn test_init_missing_bundles_are_soft_failures() {
        let pkg = tempfile::tempdir().unwrap();
        let cwd = tempfile::tempdir().unwrap();
        let only = pkg.path().join("skills/midnight-deploy");
        fs::create_dir_all(&only).unwrap();
        fs::write(only.join("SKILL.md"), "description: Deploy.").unwrap();
        let layout = PackageLayout::new(pkg.path());

        let mut summary = None;
        let out = render(|c| {
            summary = Some(cmd_init(c, &layout, cwd.path(), ".").unwrap());
            Ok(())
        });

        let summary = summary.unwrap();
        assert_eq!(summary.skills_copied, 1);
        assert_eq!(summary.agent_files_copied, 0);
        assert!(out.contains("Skill not found: midnight-compact-guide"));
        assert!(out.contains("Copied 1 skills"));
        assert!(cwd.path().join("skills").is_dir());
        assert!(!cwd.path().join("skills/midnight-sdk-guide").exists());
        assert!(!cwd.path().join("AGENTS.md").exists());
    }
}
