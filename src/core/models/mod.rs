//! Domain models for fritoto
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ResourceDescriptor`] - A subject file and its digests
//! - [`FridayPredicate`] - "Was this built on a Friday?"
//! - [`Statement`] - The in-toto envelope tying the two together

mod digest;
mod predicate;
mod statement;

pub use digest::{DigestAlgorithm, DigestSet, ResourceDescriptor};
pub use predicate::{FRIDAY_PREDICATE_TYPE, FridayPredicate, rfc3339};
pub use statement::{STATEMENT_TYPE_V1, Statement};
