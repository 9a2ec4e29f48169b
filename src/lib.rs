//! fritoto - an in-toto attestor that asks the only question that matters:
//! was it built on a Friday?
//!
//! This library hashes subject files, evaluates the build time and assembles
//! an in-toto v1 statement carrying the `built-on-friday` predicate. Signing
//! the resulting JSON is left to external tooling.

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

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod paths;

pub use error::{FritotoError, HashError, Result};
