//! Generate command - hash subjects and write the Friday attestation

use std::path::PathBuf;

use fritoto::FritotoError;
use fritoto::adapters::{InTotoAssembler, Sha2FileHasher};
use fritoto::config::Config;
use fritoto::core::services::{AttestRequest, Attestor, local_now};
use fritoto::output::{OutputSink, Reporter};

/// Arguments for a single attestation run
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Subject files from `--subject` and positional arguments
    pub subjects: Vec<PathBuf>,
    /// Output file; stdout when absent
    pub out: Option<PathBuf>,
    /// Raw `--time` value
    pub time: Option<String>,
    /// `--notes` value
    pub notes: Option<String>,
    /// Explicit config file
    pub config: Option<PathBuf>,
    /// Suppress progress messages
    pub quiet: bool,
}

/// Generate the attestation and write it to the requested sink
pub fn generate(args: GenerateArgs) -> anyhow::Result<()> {
    // "now" is read once, when the run starts
    let now = local_now();

    let mut request = AttestRequest {
        subjects: args.subjects,
        time: args.time,
        notes: args.notes,
    };
    request.validate()?;

    let config = Config::load(args.config.as_deref())?;
    if request.notes.is_none() {
        request.notes = config.attestation.notes;
    }

    let reporter = Reporter::new(args.quiet);
    reporter.heading();
    reporter.step("🧮 Hashing subject…");

    let hasher = Sha2FileHasher::new(&config.attestation.algorithms);
    log::debug!("digest algorithms: {:?}", hasher.algorithms());
    let attestor = Attestor::new(hasher, InTotoAssembler::new());
    let statement = attestor.attest(&request, now)?;
    reporter.verdict(&statement.predicate.build_time, statement.predicate.built_on_friday);

    let json = statement.to_json_pretty().map_err(FritotoError::from)?;

    reporter.step("🧾 Writing attestation…");
    let sink = OutputSink::from_path(args.out);
    sink.write(&json)?;
    reporter.done(&sink);

    Ok(())
}
