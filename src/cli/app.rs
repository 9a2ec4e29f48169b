//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use super::commands::{self, GenerateArgs};

/// Long help header: the logo and tagline
fn banner() -> String {
    let logo = r"
     _
   _|_._o_|_ __|_ _
    | | | |_(_)|_(_)
";
    format!(
        "{}\n{}\n\n\
         Hashes the subject files and emits an in-toto statement recording whether\n\
         the build happened on a Friday. Sign the JSON with your usual tooling.",
        logo.bright_magenta().bold(),
        "   🔏🍟 fritoto — the *Friday-or-not* attestationator".white().bold()
    )
}

/// fritoto - in-toto attestor for Friday builds
#[derive(Parser, Debug)]
#[command(
    name = "fritoto",
    version,
    about = "🔏🍟 fritoto — in-toto attestor that asks the only question that matters: was it built on Friday?",
    long_about = banner(),
    override_usage = "fritoto [OPTIONS] <FILE>...\n       fritoto [OPTIONS] --subject <PATH>..."
)]
pub struct Cli {
    /// Paths to subject files to attest (required unless FILEs are given)
    #[arg(short, long = "subject", value_name = "PATH", value_delimiter = ',')]
    pub subjects: Vec<PathBuf>,

    /// Subject files, same as --subject
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output file for the attestation (default: stdout)
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Build time to attest, RFC 3339 (default: now)
    #[arg(long, value_name = "RFC3339")]
    pub time: Option<String>,

    /// Optional note to include in the predicate
    #[arg(long)]
    pub notes: Option<String>,

    /// Config file (default: ~/.config/fritoto/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress progress messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Subjects from `--subject` followed by positional files
    #[must_use]
    pub fn all_subjects(&self) -> Vec<PathBuf> {
        self.subjects.iter().chain(&self.files).cloned().collect()
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            err.print().ok();
            std::process::exit(1);
        },
    };

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let subjects = cli.all_subjects();
    commands::generate(GenerateArgs {
        subjects,
        out: cli.out,
        time: cli.time,
        notes: cli.notes,
        config: cli.config,
        quiet: cli.quiet,
    })
}
