//! Shared helpers for the copy commands.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use midnight_skills_core::skill::package::{AGENT_FILES, SKILLS_DIR};
use midnight_skills_core::skill::PackageLayout;

use crate::console::Console;

/// Resolve `dir` against `cwd`. Absolute paths pass through; `.` segments are
/// dropped so `init .` reports the cwd itself.
pub fn resolve_target(cwd: &Path, dir: &str) -> PathBuf {
    let p = Path::new(dir);
    let joined = if p.is_absolute() {
        p.to_path_buf()
    } else {
        cwd.join(p)
    };
    joined
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Copy one bundle into `<target_root>/skills/<id>`.
///
/// Returns `Ok(false)` without touching the target when the package does not
/// ship the bundle.
pub fn copy_skill<W: Write>(
    console: &mut Console<W>,
    package: &PackageLayout,
    id: &str,
    target_root: &Path,
) -> Result<bool> {
    let source = package.skill_dir(id);
    let dest = target_root.join(SKILLS_DIR).join(id);

    if !source.exists() {
        tracing::debug!(skill = id, source = %source.display(), "skill bundle missing from package");
        console.failure(&format!("Skill not found: {}", id))?;
        return Ok(false);
    }

    let stats = midnight_skills_fs::copy_dir_all(&source, &dest)
        .with_context(|| format!("Failed to copy skill '{}' to {}", id, dest.display()))?;
    tracing::debug!(
        skill = id,
        files = stats.files,
        dirs = stats.dirs,
        bytes = stats.bytes,
        "skill copied"
    );
    console.success(id)?;
    Ok(true)
}

/// Copy each agent instruction file the package ships into `target_root`.
/// Returns how many were written.
pub fn copy_agent_files<W: Write>(
    console: &mut Console<W>,
    package: &PackageLayout,
    target_root: &Path,
) -> Result<usize> {
    let mut copied = 0;
    for name in AGENT_FILES {
        let source = package.agent_file(name);
        if !source.is_file() {
            tracing::debug!(file = name, "agent file not shipped, skipping");
            continue;
        }
        midnight_skills_fs::copy_file_verbatim(&source, &target_root.join(name))?;
        console.success(name)?;
        copied += 1;
    }
    Ok(copied)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::render;
    use std::fs;

    #[test]
    fn test_resolve_target() {
        let cwd = Path::new("/work/project");
        assert_eq!(resolve_target(cwd, "."), PathBuf::from("/work/project"));
        assert_eq!(resolve_target(cwd, "./sub/dir"), PathBuf::from("/work/project/sub/dir"));
        assert_eq!(resolve_target(cwd, "/abs/other"), PathBuf::from("/abs/other"));
        assert_eq!(resolve_target(cwd, "../sibling"), PathBuf::from("/work/project/../sibling"));
    }

    #[test]
    fn test_copy_skill_missing_source_leaves_target_untouched() {
        let pkg = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        let layout = PackageLayout::new(pkg.path());

        let mut ok = true;
        let out = render(|c| {
            ok = copy_skill(c, &layout, "midnight-deploy", target.path()).unwrap();
            Ok(())
        });
        assert!(!ok);
        assert!(out.contains("Skill not found: midnight-deploy"));
        assert_eq!(fs::read_dir(target.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_copy_skill_copies_tree() {
        let pkg = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        fixtures::full_package(pkg.path());
        let layout = PackageLayout::new(pkg.path());

        let out = render(|c| {
            assert!(copy_skill(c, &layout, "midnight-sdk-guide", target.path()).unwrap());
            Ok(())
        });
        assert!(out.contains("✓ midnight-sdk-guide"));
        let dest = target.path().join("skills/midnight-sdk-guide");
        assert_eq!(
            fs::read(dest.join("SKILL.md")).unwrap(),
            fs::read(layout.descriptor("midnight-sdk-guide")).unwrap()
        );
        assert!(dest.join("references/notes.md").is_file());
    }

    #[test]
    fn test_copy_agent_files_skips_absent() {
        let pkg = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        fs::write(pkg.path().join("AGENTS.md"), "agents").unwrap();
        let layout = PackageLayout::new(pkg.path());

        let mut copied = 0;
        render(|c| {
            copied = copy_agent_files(c, &layout, target.path()).unwrap();
            Ok(())
        });
        assert_eq!(copied, 1);
        assert_eq!(fs::read_to_string(target.path().join("AGENTS.md")).unwrap(), "agents");
        assert!(!target.path().join("CLAUDE.md").exists());
    }
}
