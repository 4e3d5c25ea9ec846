//! Command handlers.
//!
//! Handlers never read the process cwd or environment; the dispatcher passes
//! both the resolved package layout and the working directory in.

pub mod add;
pub mod common;
pub mod init;
pub mod list;
