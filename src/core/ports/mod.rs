//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the attestation pipeline
//! and the collaborators it delegates to (file hashing, envelope assembly).
//!
//! Implementations live in the `adapters` module. Tests swap in mocks.

mod assembler;
mod hasher;

pub use assembler::StatementAssembler;
pub use hasher::FileHasher;
