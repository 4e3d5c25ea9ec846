//! Console formatting: banner, usage text, per-item progress, and error reports.
//!
//! All user-facing output goes through [`Console`], which writes to any
//! `Write` so commands can be exercised against an in-memory buffer.

use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};

use midnight_skills_core::skill::SKILLS;
use midnight_skills_core::SkillsError;

pub const BIN_NAME: &str = "midnight-agent-skills";
const TAGLINE: &str = "AI Agent Skills for Midnight Network";
const AUTHOR_LINE: &str = "By Webisoft Development Labs";
const REPO_URL: &str = "https://github.com/UvRoxx/midnight-agent-skills";
const DOCS_URL: &str = "https://docs.midnight.network";

/// Inner width of the banner box, in columns.
const BANNER_WIDTH: usize = 59;

pub struct Console<W: Write> {
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn line(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", msg)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn heading(&mut self, title: &str) -> io::Result<()> {
        self.line(title.bold())
    }

    pub fn dim(&mut self, msg: &str) -> io::Result<()> {
        self.line(msg.dimmed())
    }

    /// `  ✓ item`
    pub fn success(&mut self, item: &str) -> io::Result<()> {
        writeln!(self.out, "  {} {}", "✓".green(), item)
    }

    /// `  ✗ msg`, all red.
    pub fn failure(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "  {} {}", "✗".red(), msg.red())
    }

    pub fn banner(&mut self) -> io::Result<()> {
        let version = format!("v{}", env!("CARGO_PKG_VERSION"));
        let border = "═".repeat(BANNER_WIDTH);

        self.blank()?;
        writeln!(self.out, "╔{}╗", border)?;
        self.boxed("", String::new())?;
        self.boxed(
            &format!("   {}  {}", BIN_NAME, version),
            format!("   {}  {}", BIN_NAME.cyan(), version.dimmed()),
        )?;
        self.boxed(&format!("   {}", TAGLINE), format!("   {}", TAGLINE.dimmed()))?;
        self.boxed("", String::new())?;
        self.boxed(
            &format!("   {}", AUTHOR_LINE),
            format!("   {}", AUTHOR_LINE.dimmed()),
        )?;
        self.boxed("", String::new())?;
        writeln!(self.out, "╚{}╝", border)?;
        self.blank()
    }

    /// One banner row. `plain` sizes the padding, `styled` is what gets printed.
    fn boxed(&mut self, plain: &str, styled: String) -> io::Result<()> {
        let pad = BANNER_WIDTH.saturating_sub(plain.chars().count());
        writeln!(self.out, "║{}{}║", styled, " ".repeat(pad))
    }

    /// Banner plus full usage text. Identical for `help`, `--help`, `-h`, and
    /// a bare invocation.
    pub fn help(&mut self) -> io::Result<()> {
        self.banner()?;

        self.heading("USAGE")?;
        self.line(format!("  {} <command> [options]", BIN_NAME))?;
        self.blank()?;

        self.heading("COMMANDS")?;
        for (cmd, about) in [
            ("init", "Initialize skills in current directory"),
            ("init <dir>", "Initialize skills in specified directory"),
            ("list", "List all available skills"),
            ("add <skill>", "Add a specific skill"),
            ("help", "Show this help message"),
        ] {
            self.line(format!("  {}{}", format!("{:<22}", cmd).cyan(), about))?;
        }
        self.blank()?;

        self.heading("OPTIONS")?;
        self.line(format!(
            "  {}{}",
            format!("{:<22}", "--package-root <dir>").cyan(),
            "Read skills from <dir> (env: MIDNIGHT_SKILLS_ROOT)"
        ))?;
        self.line(format!("  {}{}", format!("{:<22}", "-V, --version").cyan(), "Print version"))?;
        self.blank()?;

        self.heading("EXAMPLES")?;
        for (comment, example) in [
            ("# Add all skills to current project", "init"),
            ("# Add skills to a specific directory", "init ./my-midnight-project"),
            ("# Add only the compact guide skill", "add midnight-compact-guide"),
            ("# List available skills", "list"),
        ] {
            self.line(format!("  {}", comment.dimmed()))?;
            self.line(format!("  {} {}", BIN_NAME, example))?;
            self.blank()?;
        }

        self.heading("SKILLS")?;
        for skill in SKILLS {
            self.line(format!("  {}{}", format!("{:<25}", skill.id).cyan(), skill.summary))?;
        }
        self.blank()?;

        self.heading("MORE INFO")?;
        self.line(format!("  {}  {}", "GitHub:".dimmed(), REPO_URL))?;
        self.line(format!("  {}    {}", "Docs:".dimmed(), DOCS_URL))?;
        self.blank()
    }

    /// Closing block printed after a successful `init`.
    pub fn next_steps(&mut self) -> io::Result<()> {
        self.heading("Next steps:")?;
        self.line("  1. Your AI agent will automatically use these skills")?;
        self.line(format!(
            "  2. Try asking: \"{}\"",
            "Write a Midnight contract for voting".cyan()
        ))?;
        self.line(format!(
            "  3. Or: \"{}\"",
            "Set up local Midnight infrastructure".cyan()
        ))?;
        self.blank()?;
        self.dim(&format!("Learn more: {}", REPO_URL))
    }

    /// Render a recognized failure with its hint.
    pub fn report(&mut self, err: &SkillsError) -> io::Result<()> {
        match err {
            SkillsError::UnknownCommand(_) => {
                self.line(err.to_string().red())?;
                self.blank()?;
                self.line(format!("Run {} for usage", format!("{} help", BIN_NAME).cyan()))
            }
            SkillsError::MissingSkillName => {
                self.line(format!("Error: {}", err).red())?;
                self.blank()?;
                self.line(format!("Usage: {} add <skill-name>", BIN_NAME))?;
                self.blank()?;
                self.line(format!(
                    "Run {} to see available skills",
                    format!("{} list", BIN_NAME).cyan()
                ))
            }
            SkillsError::UnknownSkill(_) => {
                self.line(format!("Error: {}", err).red())?;
                self.blank()?;
                self.line("Available skills:")?;
                for skill in SKILLS {
                    self.line(format!("  - {}", skill.id))?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
pub(crate) fn render<F>(f: F) -> String
where
    F: FnOnce(&mut Console<Vec<u8>>) -> io::Result<()>,
{
    colored::control::set_override(false);
    let mut console = Console::new(Vec::new());
    f(&mut console).unwrap();
    String::from_utf8(console.into_inner()).unwrap()
}
