use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Usage text comes from `console::Console::help`, so clap's help flag (on
// every subcommand too) and help subcommand are disabled. `-h/--help` is only
// recognized before the command; after it, hyphenated words are arguments.
// Words past the first argument are accepted and ignored.

/// midnight-agent-skills - AI agent skills for Midnight Network
#[derive(Parser, Debug)]
#[command(name = "midnight-agent-skills")]
#[command(version, disable_help_flag = true, disable_help_subcommand = true)]
pub struct Cli {
    /// Show usage
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Read skills and agent files from DIR instead of the installed package
    #[arg(long, global = true, value_name = "DIR")]
    pub package_root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Initialize skills in a directory (default: current directory)
    #[command(disable_help_flag = true)]
    Init {
        /// Target project directory
        #[arg(value_name = "DIR", default_value = ".", allow_hyphen_values = true)]
        dir: String,

        #[arg(hide = true, num_args = 0.., allow_hyphen_values = true)]
        rest: Vec<String>,
    },

    /// List all available skills
    #[command(disable_help_flag = true)]
    List {
        #[arg(hide = true, num_args = 0.., allow_hyphen_values = true)]
        rest: Vec<String>,
    },

    /// Add a specific skill to the current directory
    #[command(disable_help_flag = true)]
    Add {
        /// Skill identifier (see `list`)
        #[arg(value_name = "SKILL", allow_hyphen_values = true)]
        skill: Option<String>,

        #[arg(hide = true, num_args = 0.., allow_hyphen_values = true)]
        rest: Vec<String>,
    },

    /// Show usage
    #[command(disable_help_flag = true)]
    Help {
        #[arg(hide = true, num_args = 0.., allow_hyphen_values = true)]
        rest: Vec<String>,
    },

    /// Anything unrecognized; reported as an unknown command
    #[command(external_subcommand)]
    External(Vec<String>),
}
