//! Loading inspection input.
//!
//! The whole file is buffered once and shared as a cheap, reference-counted
//! [`Bytes`] handle. No size limit is enforced.

use crate::error::{InspectError, Result};
use bytes::Bytes;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Immutable bytes of one input file together with where they came from.
#[derive(Debug, Clone)]
pub struct InputBuffer {
    path: PathBuf,
    data: Bytes,
}

impl InputBuffer {
    /// Wraps bytes that did not come from disk, e.g. in tests or fuzzing.
    pub fn from_bytes(path: impl Into<PathBuf>, data: impl Into<Bytes>) -> Self {
        Self {
            path: path.into(),
            data: data.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// First `n` bytes, or the whole buffer when it is shorter.
    pub fn head(&self, n: usize) -> &[u8] {
        &self.data[..n.min(self.data.len())]
    }

    /// Last `n` bytes, or the whole buffer when it is shorter.
    pub fn tail(&self, n: usize) -> &[u8] {
        let start = self.data.len().saturating_sub(n);
        &self.data[start..]
    }
}

impl AsRef<[u8]> for InputBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

/// Reads the entire file at `path` into memory.
///
/// # Errors
///
/// Returns [`InspectError::Io`] when the path does not exist or cannot be read.
/// This is the only fatal failure of an inspection run.
pub fn load_buffer<P: AsRef<Path>>(path: P) -> Result<InputBuffer> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| {
        debug!(path = %path.display(), error = %source, "Failed to read input");
        InspectError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    debug!(path = %path.display(), size = data.len(), "Loaded input buffer");
    Ok(InputBuffer {
        path: path.to_path_buf(),
        data: Bytes::from(data),
    })
}
