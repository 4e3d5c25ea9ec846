//! Skill bundles: the fixed registry, descriptor parsing, and where bundles
//! live inside the installed package.

pub mod descriptor;
pub mod package;
pub mod registry;

pub use descriptor::{extract_description, SkillDescriptor};
pub use package::PackageLayout;
pub use registry::{SkillEntry, SKILLS};
