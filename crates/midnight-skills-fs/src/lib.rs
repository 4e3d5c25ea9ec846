//! File operations used when scaffolding skills into a project.
//!
//! Copies are additive: directories are created when missing and files at the
//! same relative path are overwritten. Nothing is ever deleted.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Counters reported by [`copy_dir_all`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyStats {
    pub files: usize,
    pub dirs: usize,
    pub bytes: u64,
}

/// Create `path` and any missing parents.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))
}

/// Recursively copy the tree rooted at `src` into `dest`.
///
/// `dest` is created if needed. Symlinks are followed, so the copy holds
/// regular files only.
pub fn copy_dir_all(src: &Path, dest: &Path) -> Result<CopyStats> {
    ensure_dir(dest)?;
    let mut stats = CopyStats::default();

    for entry in WalkDir::new(src)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Failed to walk {}", src.display()))?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .with_context(|| format!("Entry escaped source root: {}", entry.path().display()))?;
        let target = dest.join(rel);

        if entry.file_type().is_dir() {
            ensure_dir(&target)?;
            stats.dirs += 1;
            continue;
        }

        if let Some(parent) = target.parent() {
            ensure_dir(parent)?;
        }
        let n = fs::copy(entry.path(), &target).with_context(|| {
            format!(
                "Failed to copy: {} -> {}",
                entry.path().display(),
                target.display()
            )
        })?;
        tracing::debug!(from = %entry.path().display(), to = %target.display(), bytes = n, "copied file");
        stats.files += 1;
        stats.bytes += n;
    }

    Ok(stats)
}

/// Copy one file's bytes to `dest`, replacing whatever is there.
pub fn copy_file_verbatim(src: &Path, dest: &Path) -> Result<u64> {
    let content =
        fs::read(src).with_context(|| format!("Failed to read: {}", src.display()))?;
    fs::write(dest, &content).with_context(|| format!("Failed to write: {}", dest.display()))?;
    Ok(content.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_copy_dir_all_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        write(&src.join("SKILL.md"), "description: demo\n");
        write(&src.join("references/api.md"), "# API\n");
        write(&src.join("references/deep/notes.txt"), "notes");

        let dest = tmp.path().join("out/a/b");
        let stats = copy_dir_all(&src, &dest).unwrap();

        assert_eq!(stats.files, 3);
        assert_eq!(stats.dirs, 2);
        assert_eq!(
            fs::read_to_string(dest.join("references/deep/notes.txt")).unwrap(),
            "notes"
        );
        assert_eq!(
            fs::read_to_string(dest.join("SKILL.md")).unwrap(),
            "description: demo\n"
        );
    }

    #[test]
    fn test_copy_dir_all_overwrites_and_keeps_extra_files() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        write(&src.join("SKILL.md"), "new");

        let dest = tmp.path().join("dest");
        write(&dest.join("SKILL.md"), "old");
        write(&dest.join("local.md"), "mine");

        copy_dir_all(&src, &dest).unwrap();

        assert_eq!(fs::read_to_string(dest.join("SKILL.md")).unwrap(), "new");
        assert_eq!(fs::read_to_string(dest.join("local.md")).unwrap(), "mine");
    }

    #[test]
    fn test_copy_dir_all_is_repeatable() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        write(&src.join("a/b.md"), "b");
        let dest = tmp.path().join("dest");

        let first = copy_dir_all(&src, &dest).unwrap();
        let second = copy_dir_all(&src, &dest).unwrap();
        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(dest.join("a/b.md")).unwrap(), "b");
    }

    #[test]
    fn test_copy_dir_all_missing_source_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let err = copy_dir_all(&tmp.path().join("nope"), &tmp.path().join("dest"));
        assert!(err.is_err());
    }

    #[test]
    fn test_copy_file_verbatim_replaces() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("AGENTS.md");
        let dest = tmp.path().join("target/AGENTS.md");
        write(&src, "# Agents\n\nünïcode ok\n");
        write(&dest, "stale content that is longer than the source file");

        let n = copy_file_verbatim(&src, &dest).unwrap();
        assert_eq!(n, fs::metadata(&src).unwrap().len());
        assert_eq!(fs::read(&dest).unwrap(), fs::read(&src).unwrap());
    }
}
