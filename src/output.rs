//! Output handling
//!
//! The attestation itself goes to an [`OutputSink`] (stdout or a file).
//! Human-readable progress goes to stderr through a [`Reporter`] so that
//! stdout only ever carries the JSON document.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset};
use colored::Colorize;

use crate::core::models::rfc3339;
use crate::error::{FritotoError, Result};

/// Where the serialized statement is written
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputSink {
    /// Standard output (default)
    #[default]
    Stdout,
    /// A file, created or truncated on write
    File(PathBuf),
}

impl OutputSink {
    /// Sink for an optional `--out` path
    #[must_use]
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// Path of the output file, if any
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdout => None,
            Self::File(path) => Some(path.as_path()),
        }
    }

    /// Write `contents` in one go
    ///
    /// The file is only created here, so runs that fail earlier never leave
    /// one behind.
    pub fn write(&self, contents: &str) -> Result<()> {
        match self {
            Self::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(contents.as_bytes())?;
                out.flush()?;
            },
            Self::File(path) => {
                let mut file = File::create(path).map_err(|source| FritotoError::CreateOutput {
                    path: path.clone(),
                    source,
                })?;
                file.write_all(contents.as_bytes())?;
                file.flush()?;
            },
        }
        Ok(())
    }
}

/// Colored progress messages on stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    quiet: bool,
}

impl Reporter {
    /// Create a reporter; a quiet one prints nothing
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Opening headline
    pub fn heading(&self) {
        if self.quiet {
            return;
        }
        eprintln!();
        eprintln!("{}", "  ✨ Generating in-toto attestation".bright_white().bold());
        eprintln!();
    }

    /// A single progress step
    pub fn step(&self, message: &str) {
        if self.quiet {
            return;
        }
        eprintln!("  • {}", message.bright_cyan());
    }

    /// The resolved build time and the verdict
    pub fn verdict(&self, build_time: &DateTime<FixedOffset>, is_friday: bool) {
        if self.quiet {
            return;
        }
        self.step(&format!(
            "📅 Build time: {} ({})",
            rfc3339::format(build_time),
            build_time.offset()
        ));
        if is_friday {
            eprintln!(
                "  • {}",
                "🎉 T.G.I.F.! It *is* a Friday build. No need to deploy, woohoo!"
                    .green()
                    .bold()
            );
        } else {
            eprintln!("  • {}", "🧊 Not Friday. Stay cool and ship.".blue().bold());
        }
    }

    /// Closing lines after the statement was written
    pub fn done(&self, sink: &OutputSink) {
        if self.quiet {
            return;
        }
        eprintln!();
        match sink.path() {
            Some(path) => {
                eprintln!(
                    "{}",
                    format!("✅ Done! Attestation saved to {}", path.display()).bright_white()
                );
            },
            None => eprintln!("{}", "✅ Done!".bright_white()),
        }
        eprintln!(
            "{}{}",
            "🔐 Pro-tip!".bright_cyan().bold(),
            " Sign your JSON with bnd for extra ✨ vibes.".bright_cyan()
        );
        eprintln!();
    }
}
