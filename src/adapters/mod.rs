//! Adapter implementations for port traits
//!
//! This module contains the concrete collaborators of the pipeline:
//!
//! - `hasher/` - File hashing with the SHA-2 family
//! - `intoto/` - in-toto v1 statement assembly

pub mod hasher;
pub mod intoto;

pub use hasher::Sha2FileHasher;
pub use intoto::InTotoAssembler;
