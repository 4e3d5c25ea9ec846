//! midnight-agent-skills: scaffold Midnight Network agent skills into a project.
//!
//! The binary is a thin wrapper around [`run`]; everything else is reachable
//! here so the dispatcher can be driven in-process.

pub mod cli;
pub mod commands;
pub mod console;
pub mod dispatch;

pub use console::Console;
pub use dispatch::{run, Context};
