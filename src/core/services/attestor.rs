//! Attestation pipeline
//!
//! Sequences hashing, time resolution and predicate construction. Every
//! step is fail-fast; nothing is produced unless all of them succeed.

use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};

use super::build_time::resolve_build_time;
use crate::core::models::{FridayPredicate, Statement};
use crate::core::ports::{FileHasher, StatementAssembler};
use crate::error::{FritotoError, Result};

/// Inputs for one attestation run
#[derive(Debug, Clone, Default)]
pub struct AttestRequest {
    /// Subject files, in the order given
    pub subjects: Vec<PathBuf>,
    /// Raw `--time` value, if any
    pub time: Option<String>,
    /// Free-text note for the predicate
    pub notes: Option<String>,
}

impl AttestRequest {
    /// Fail unless at least one subject was given
    pub fn validate(&self) -> Result<()> {
        if self.subjects.is_empty() {
            return Err(FritotoError::NoSubjects);
        }
        Ok(())
    }
}

/// Runs the attestation pipeline against a pair of collaborators
#[derive(Debug)]
pub struct Attestor<H, A> {
    hasher: H,
    assembler: A,
}

impl<H: FileHasher, A: StatementAssembler> Attestor<H, A> {
    /// Create an attestor from its collaborators
    pub const fn new(hasher: H, assembler: A) -> Self {
        Self { hasher, assembler }
    }

    /// Produce the statement for `request`
    ///
    /// `now` is the clock reading used when the request has no time.
    pub fn attest(&self, request: &AttestRequest, now: DateTime<FixedOffset>) -> Result<Statement> {
        request.validate()?;

        let subjects = self.hasher.hash_files(&request.subjects)?;
        log::debug!("hashed {} subject(s)", subjects.len());

        let build_time = resolve_build_time(request.time.as_deref(), now)?;
        log::debug!("build time resolved to {build_time}");

        let predicate = FridayPredicate::new(build_time, request.notes.clone());
        Ok(self.assembler.build_statement(subjects, predicate))
    }
}
