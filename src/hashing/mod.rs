//! Digests identifying an inspected buffer.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Computes the SHA-256 digest of the given data and returns it as a hex string.
pub fn sha256_digest(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Computes the MD5 digest of the given data and returns it as a hex string.
pub fn md5_digest(data: &[u8]) -> String {
    format!("{:x}", md5::compute(data))
}

/// Both digests of one buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Digests {
    pub md5: String,
    pub sha256: String,
}

impl Digests {
    pub fn of(data: &[u8]) -> Self {
        Self {
            md5: md5_digest(data),
            sha256: sha256_digest(data),
        }
    }
}
