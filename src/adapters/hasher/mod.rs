//! SHA-2 file hasher
//!
//! Implements `FileHasher` by streaming each subject through the configured
//! SHA-2 digests.

use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256, Sha512};

use crate::core::models::{DigestAlgorithm, ResourceDescriptor};
use crate::core::ports::FileHasher;
use crate::error::HashError;

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// File hasher backed by the `sha2` crate
#[derive(Debug, Clone)]
pub struct Sha2FileHasher {
    algorithms: Vec<DigestAlgorithm>,
}

impl Sha2FileHasher {
    /// Create a hasher computing the given algorithms
    ///
    /// Duplicates are ignored; an empty list falls back to the default set.
    #[must_use]
    pub fn new(algorithms: &[DigestAlgorithm]) -> Self {
        let mut algorithms = algorithms.to_vec();
        algorithms.sort_unstable();
        algorithms.dedup();
        if algorithms.is_empty() {
            algorithms = DigestAlgorithm::DEFAULT_SET.to_vec();
        }
        Self { algorithms }
    }

    /// Algorithms this hasher computes
    #[must_use]
    pub fn algorithms(&self) -> &[DigestAlgorithm] {
        &self.algorithms
    }

    fn hash_file(&self, path: &Path) -> Result<ResourceDescriptor, HashError> {
        let io_err = |source| HashError::Io {
            path: path.to_path_buf(),
            source,
        };

        if !fs::metadata(path).map_err(io_err)?.is_file() {
            return Err(HashError::NotAFile(path.to_path_buf()));
        }

        let mut states: Vec<State> = self.algorithms.iter().map(|&a| State::new(a)).collect();
        let mut reader = BufReader::new(File::open(path).map_err(io_err)?);
        let mut buf = vec![0u8; READ_BUFFER_SIZE];
        loop {
            let n = reader.read(&mut buf).map_err(io_err)?;
            if n == 0 {
                break;
            }
            for state in &mut states {
                state.update(&buf[..n]);
            }
        }

        let descriptor = states
            .into_iter()
            .fold(ResourceDescriptor::new(path.display().to_string()), |desc, state| {
                let (algorithm, hex) = state.finish();
                desc.with_digest(algorithm, hex)
            });
        Ok(descriptor)
    }
}

impl Default for Sha2FileHasher {
    fn default() -> Self {
        Self::new(&DigestAlgorithm::DEFAULT_SET)
    }
}

impl FileHasher for Sha2FileHasher {
    fn hash_files(&self, paths: &[PathBuf]) -> Result<Vec<ResourceDescriptor>, HashError> {
        let mut seen: Vec<&PathBuf> = Vec::with_capacity(paths.len());
        let mut descriptors = Vec::with_capacity(paths.len());
        for path in paths {
            if seen.contains(&path) {
                log::debug!("skipping duplicate subject {}", path.display());
                continue;
            }
            seen.push(path);
            log::debug!("hashing {}", path.display());
            descriptors.push(self.hash_file(path)?);
        }
        Ok(descriptors)
    }
}

/// Running digest state for one algorithm
enum State {
    Sha256(Sha256),
    Sha512(Sha512),
}

impl State {
    fn new(algorithm: DigestAlgorithm) -> Self {
        match algorithm {
            DigestAlgorithm::Sha256 => Self::Sha256(Sha256::new()),
            DigestAlgorithm::Sha512 => Self::Sha512(Sha512::new()),
        }
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            Self::Sha256(h) => h.update(data),
            Self::Sha512(h) => h.update(data),
        }
    }

    fn finish(self) -> (DigestAlgorithm, String) {
        match self {
            Self::Sha256(h) => (DigestAlgorithm::Sha256, hex::encode(h.finalize())),
            Self::Sha512(h) => (DigestAlgorithm::Sha512, hex::encode(h.finalize())),
        }
    }
}
