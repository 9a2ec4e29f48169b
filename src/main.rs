//! fritoto - in-toto attestor that asks the only question that matters:
//! was it built on a Friday?

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

use colored::Colorize;

/// Main entry point for the fritoto CLI
fn main() {
    if let Err(err) = cli::run() {
        eprintln!("{} {}", "✖".red(), format!("error: {err}").bright_yellow());
        std::process::exit(1);
    }
}
