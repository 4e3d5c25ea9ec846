//! The closed set of skills this package ships.

/// One shipped skill. `summary` is the short blurb used in help output; the
/// `list` command reads the real description from the bundle's SKILL.md.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillEntry {
    pub id: &'static str,
    pub summary: &'static str,
}

/// Known skills, in display and copy order.
pub const SKILLS: &[SkillEntry] = &[
    SkillEntry {
        id: "midnight-compact-guide",
        summary: "Compact language reference (v0.19+)",
    },
    SkillEntry {
        id: "midnight-sdk-guide",
        summary: "TypeScript SDK & wallet integration",
    },
    SkillEntry {
        id: "midnight-infra-setup",
        summary: "Local infrastructure setup",
    },
    SkillEntry {
        id: "midnight-deploy",
        summary: "Contract deployment",
    },
    SkillEntry {
        id: "midnight-test-runner",
        summary: "Test execution & debugging",
    },
];

/// Identifiers in registry order.
pub fn ids() -> impl Iterator<Item = &'static str> {
    SKILLS.iter().map(|s| s.id)
}

/// Exact, case-sensitive lookup.
pub fn find(id: &str) -> Option<&'static SkillEntry> {
    SKILLS.iter().find(|s| s.id == id)
}

pub fn is_known(id: &str) -> bool {
    find(id).is_some()
}
