//! in-toto statement assembly
//!
//! Implements `StatementAssembler` producing in-toto v1 statements.

use crate::core::models::{FridayPredicate, ResourceDescriptor, Statement};
use crate::core::ports::StatementAssembler;

/// Assembler for in-toto v1 statements
#[derive(Debug, Clone, Copy, Default)]
pub struct InTotoAssembler;

impl InTotoAssembler {
    /// Create a new assembler
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl StatementAssembler for InTotoAssembler {
    fn build_statement(
        &self,
        subjects: Vec<ResourceDescriptor>,
        predicate: FridayPredicate,
    ) -> Statement {
        Statement::new(subjects, predicate)
    }
}
