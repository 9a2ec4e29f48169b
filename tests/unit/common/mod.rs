//! Shared test fixtures and mock port implementations
//!
//! The mocks provide configurable behavior for unit testing the
//! attestation pipeline without touching the filesystem.

use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset};
use fritoto::HashError;
use fritoto::core::models::{DigestAlgorithm, FridayPredicate, ResourceDescriptor, Statement};
use fritoto::core::ports::{FileHasher, StatementAssembler};
use tempfile::TempDir;

/// SHA-256 of the empty input
pub const SHA256_EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// SHA-512 of the empty input
pub const SHA512_EMPTY: &str = "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e";

/// SHA-256 of `abc`
pub const SHA256_ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

/// SHA-512 of `abc`
pub const SHA512_ABC: &str = "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f";

/// Parse an RFC 3339 literal
pub fn ts(raw: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(raw).unwrap()
}

/// A scratch directory holding subject files
pub struct Subjects {
    dir: TempDir,
}

impl Subjects {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a subject file and return its full path
    pub fn add(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

impl Default for Subjects {
    fn default() -> Self {
        Self::new()
    }
}

/// Hasher that fabricates one sha256 digest per path and records calls
pub struct MockHasher {
    calls: RefCell<Vec<Vec<PathBuf>>>,
}

impl MockHasher {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn last_call(&self) -> Option<Vec<PathBuf>> {
        self.calls.borrow().last().cloned()
    }
}

impl Default for MockHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl FileHasher for MockHasher {
    fn hash_files(&self, paths: &[PathBuf]) -> Result<Vec<ResourceDescriptor>, HashError> {
        self.calls.borrow_mut().push(paths.to_vec());
        Ok(paths
            .iter()
            .enumerate()
            .map(|(i, p)| {
                ResourceDescriptor::new(p.display().to_string())
                    .with_digest(DigestAlgorithm::Sha256, format!("{i:064x}"))
            })
            .collect())
    }
}

/// Hasher that always fails as if the first path were a directory
#[derive(Default)]
pub struct FailingHasher;

impl FileHasher for FailingHasher {
    fn hash_files(&self, paths: &[PathBuf]) -> Result<Vec<ResourceDescriptor>, HashError> {
        Err(HashError::NotAFile(paths.first().cloned().unwrap_or_default()))
    }
}

/// Assembler that counts how often it was asked to build
pub struct CountingAssembler {
    builds: Cell<usize>,
}

impl CountingAssembler {
    pub fn new() -> Self {
        Self {
            builds: Cell::new(0),
        }
    }

    pub fn builds(&self) -> usize {
        self.builds.get()
    }
}

impl Default for CountingAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl StatementAssembler for CountingAssembler {
    fn build_statement(
        &self,
        subjects: Vec<ResourceDescriptor>,
        predicate: FridayPredicate,
    ) -> Statement {
        self.builds.set(self.builds.get() + 1);
        Statement::new(subjects, predicate)
    }
}
