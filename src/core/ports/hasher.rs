//! File hasher port
//!
//! Defines the interface for turning subject paths into resource descriptors.

use std::path::PathBuf;

use super::super::models::ResourceDescriptor;
use crate::error::HashError;

/// Produces content digests for subject files
///
/// Implementations must fail as a whole when any path cannot be hashed;
/// callers never see a partial list.
pub trait FileHasher {
    /// Hash every path, returning one descriptor per distinct path in order
    fn hash_files(&self, paths: &[PathBuf]) -> Result<Vec<ResourceDescriptor>, HashError>;
}

impl<T: FileHasher + ?Sized> FileHasher for &T {
    fn hash_files(&self, paths: &[PathBuf]) -> Result<Vec<ResourceDescriptor>, HashError> {
        (**self).hash_files(paths)
    }
}
