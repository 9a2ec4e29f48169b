//! Statement assembler port
//!
//! Defines the interface for wrapping subjects and a predicate into an
//! attestation envelope.

use super::super::models::{FridayPredicate, ResourceDescriptor, Statement};

/// Builds the attestation envelope
pub trait StatementAssembler {
    /// Bind `predicate` to `subjects`
    fn build_statement(
        &self,
        subjects: Vec<ResourceDescriptor>,
        predicate: FridayPredicate,
    ) -> Statement;
}

impl<T: StatementAssembler + ?Sized> StatementAssembler for &T {
    fn build_statement(
        &self,
        subjects: Vec<ResourceDescriptor>,
        predicate: FridayPredicate,
    ) -> Statement {
        (**self).build_statement(subjects, predicate)
    }
}
