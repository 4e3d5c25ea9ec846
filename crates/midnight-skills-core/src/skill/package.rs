//! Layout of the installed package: where bundles and agent files are read from.

use std::path::{Path, PathBuf};

pub const SKILLS_DIR: &str = "skills";
pub const DESCRIPTOR_FILE: &str = "SKILL.md";

/// Top-level agent instruction files copied by `init` when present.
pub const AGENT_FILES: &[&str] = &["AGENTS.md", "CLAUDE.md"];

/// Directory name under `<prefix>/share` for packaged installs.
const SHARE_DIR_NAME: &str = "midnight-agent-skills";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLayout {
    root: PathBuf,
}

impl PackageLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Pick the package root.
    ///
    /// An explicit root wins unconditionally. Otherwise the first location
    /// near the executable that has a `skills/` directory is used, and
    /// `build_root` is the last resort.
    pub fn resolve(explicit: Option<&Path>, exe: Option<&Path>, build_root: &Path) -> Self {
        if let Some(root) = explicit {
            tracing::debug!(root = %root.display(), "using explicit package root");
            return Self::new(root);
        }

        if let Some(found) = exe
            .map(exe_candidates)
            .unwrap_or_default()
            .into_iter()
            .find(|c| c.join(SKILLS_DIR).is_dir())
        {
            tracing::debug!(root = %found.display(), "found package root next to executable");
            return Self::new(found);
        }

        tracing::debug!(root = %build_root.display(), "falling back to build-time package root");
        Self::new(build_root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn skills_dir(&self) -> PathBuf {
        self.root.join(SKILLS_DIR)
    }

    pub fn skill_dir(&self, id: &str) -> PathBuf {
        self.skills_dir().join(id)
    }

    pub fn descriptor(&self, id: &str) -> PathBuf {
        self.skill_dir(id).join(DESCRIPTOR_FILE)
    }

    pub fn agent_file(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

/// `<exe dir>`, its parent and grandparent, then `<exe dir>/../share/<name>`.
fn exe_candidates(exe: &Path) -> Vec<PathBuf> {
    let Some(bin_dir) = exe.parent() else {
        return Vec::new();
    };
    let mut out = vec![bin_dir.to_path_buf()];
    if let Some(parent) = bin_dir.parent() {
        out.push(parent.to_path_buf());
        if let Some(grand) = parent.parent() {
            out.push(grand.to_path_buf());
        }
        out.push(parent.join("share").join(SHARE_DIR_NAME));
    }
    out
}
