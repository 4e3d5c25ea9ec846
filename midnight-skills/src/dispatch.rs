//! Argument routing and exit codes.
//!
//! [`run`] takes the raw argv plus a [`Context`] describing the process
//! (cwd, executable path, env overrides) so the whole CLI can be driven from
//! tests without touching real process state.

use anyhow::{Context as _, Result};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use midnight_skills_core::config::PathsConfig;
use midnight_skills_core::skill::PackageLayout;
use midnight_skills_core::SkillsError;

use crate::cli::{Cli, Commands};
use crate::commands;
use crate::console::{Console, BIN_NAME};

/// Process inputs the commands depend on.
#[derive(Debug, Clone)]
pub struct Context {
    pub cwd: PathBuf,
    pub exe: Option<PathBuf>,
    /// Package root baked in at build time, used when nothing else matches.
    pub build_root: PathBuf,
    pub paths: PathsConfig,
}

impl Context {
    pub fn from_process() -> Result<Self> {
        Ok(Self {
            cwd: std::env::current_dir().context("Failed to read current directory")?,
            exe: std::env::current_exe().ok(),
            build_root: default_build_root(),
            paths: PathsConfig::from_env(),
        })
    }

    /// Context rooted at `cwd` with no executable and no env overrides.
    pub fn new(cwd: impl Into<PathBuf>, build_root: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            exe: None,
            build_root: build_root.into(),
            paths: PathsConfig::default(),
        }
    }

    /// Package layout for this invocation; `--package-root` beats the env.
    pub fn package(&self, cli_root: Option<&Path>) -> PackageLayout {
        let explicit = cli_root
            .or(self.paths.package_root.as_deref())
            .map(|p| self.cwd.join(p));
        PackageLayout::resolve(explicit.as_deref(), self.exe.as_deref(), &self.build_root)
    }
}

/// Workspace root of this build (the binary crate's parent directory).
fn default_build_root() -> PathBuf {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest.parent().unwrap_or(manifest).to_path_buf()
}

/// Parse `args` (including argv[0]) and run the command.
///
/// Returns the exit code. Recognized failures are rendered to `console` and
/// yield 1; any other error is returned for the caller to report.
pub fn run<I, T, W>(args: I, ctx: &Context, console: &mut Console<W>) -> Result<u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => {
            console.line(e.to_string().trim_end())?;
            return Ok(0);
        }
        Err(e) => {
            if let Some(name) = leading_unknown_flag(&e, &args) {
                return reject(console, &SkillsError::UnknownCommand(name));
            }
            tracing::debug!(kind = ?e.kind(), "argument parse failed");
            console.line(e.to_string().trim_end())?;
            console.blank()?;
            console.line(format!("Run {} help for usage", BIN_NAME))?;
            return Ok(1);
        }
    };

    match dispatch(cli, ctx, console) {
        Ok(()) => Ok(0),
        Err(e) => match e.downcast_ref::<SkillsError>() {
            Some(known) => reject(console, known),
            None => Err(e),
        },
    }
}

fn reject<W: Write>(console: &mut Console<W>, err: &SkillsError) -> Result<u8> {
    tracing::debug!(error = %err, "command rejected");
    console.report(err)?;
    Ok(err.exit_code())
}

/// The first word when clap rejected it as an unknown flag, i.e. a
/// hyphenated word in command position.
fn leading_unknown_flag(e: &clap::Error, args: &[OsString]) -> Option<String> {
    if e.kind() != ErrorKind::UnknownArgument {
        return None;
    }
    let Some(ContextValue::String(invalid)) = e.get(ContextKind::InvalidArg) else {
        return None;
    };
    let first = args.get(1)?.to_str()?;
    first.starts_with(invalid.as_str()).then(|| first.to_string())
}

fn dispatch<W: Write>(cli: Cli, ctx: &Context, console: &mut Console<W>) -> Result<()> {
    if cli.help {
        console.help()?;
        return Ok(());
    }

    let package = ctx.package(cli.package_root.as_deref());
    match cli.command {
        None | Some(Commands::Help { .. }) => console.help()?,
        Some(Commands::Init { dir, .. }) => {
            commands::init::cmd_init(console, &package, &ctx.cwd, &dir)?;
        }
        Some(Commands::List { .. }) => {
            commands::list::cmd_list(console, &package)?;
        }
        Some(Commands::Add { skill, .. }) => {
            commands::add::cmd_add(console, &package, &ctx.cwd, skill.as_deref())?;
        }
        Some(Commands::External(argv)) => {
            let name = argv.into_iter().next().unwrap_or_default();
            return Err(SkillsError::UnknownCommand(name).into());
        }
    }
    Ok(())
}
