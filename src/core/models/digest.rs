//! Digest algorithms and resource descriptors
//!
//! A [`ResourceDescriptor`] names one attested file together with the
//! hex digests of its content.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Supported content digest algorithms
///
/// Names are case-insensitive and may be written with a dash (`SHA-256`);
/// config files go through the same parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum DigestAlgorithm {
    /// SHA-256
    Sha256,
    /// SHA-512
    Sha512,
}

impl DigestAlgorithm {
    /// Algorithms used when nothing else is configured
    pub const DEFAULT_SET: [Self; 2] = [Self::Sha256, Self::Sha512];

    /// The key this algorithm uses inside a digest set
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DigestAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "sha512" | "sha-512" => Ok(Self::Sha512),
            _ => Err(format!("Unknown digest algorithm: {s}. Use: sha256, sha512")),
        }
    }
}

impl TryFrom<String> for DigestAlgorithm {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Map from algorithm name to lowercase hex digest
pub type DigestSet = BTreeMap<String, String>;

/// A file identified by name and content digests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Path of the subject as it was given
    pub name: String,
    /// Content digests keyed by algorithm
    pub digest: DigestSet,
}

impl ResourceDescriptor {
    /// Create a descriptor with an empty digest set
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            digest: DigestSet::new(),
        }
    }

    /// Add a digest, replacing any previous value for the same algorithm
    #[must_use]
    pub fn with_digest(mut self, algorithm: DigestAlgorithm, hex: impl Into<String>) -> Self {
        self.digest.insert(algorithm.as_str().to_string(), hex.into());
        self
    }
}
