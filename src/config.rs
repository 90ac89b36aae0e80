//! Configuration for an inspection run.
//!
//! Every knob has a default matching the original analyst scripts. The CLI
//! maps its flags onto this struct; library callers build it directly.

use crate::error::{InspectError, Result};
use crate::inflate::{DEFAULT_MAX_OUTPUT, DEFAULT_SCAN_LIMIT};
use crate::patterns::DEFAULT_WINDOWS;
use crate::strings::DEFAULT_MIN_STRING_LEN;
use serde::{Deserialize, Serialize};

/// Settings shared by every inspection phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectConfig {
    /// Bytes shown from the start and from the end of the buffer.
    pub preview_len: usize,
    /// Entries listed from the byte histogram.
    pub top_bytes: usize,
    /// Window lengths for repeated-pattern counting.
    pub pattern_windows: Vec<usize>,
    /// Repeated patterns listed per window length.
    pub top_patterns: usize,
    /// Minimum length of a printable region.
    pub min_string_len: usize,
    /// Printable regions listed in the report.
    pub string_samples: usize,
    /// Offsets tried when the buffer carries the irregular deflate header.
    pub inflate_scan_limit: usize,
    /// Output cap for a single decompression attempt.
    pub max_inflate_bytes: usize,
    /// Bytes of decompressed output shown in the report.
    pub inflate_preview_len: usize,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            preview_len: 32,
            top_bytes: 10,
            pattern_windows: DEFAULT_WINDOWS.to_vec(),
            top_patterns: 3,
            min_string_len: DEFAULT_MIN_STRING_LEN,
            string_samples: 20,
            inflate_scan_limit: DEFAULT_SCAN_LIMIT,
            max_inflate_bytes: DEFAULT_MAX_OUTPUT,
            inflate_preview_len: 100,
        }
    }
}

impl InspectConfig {
    /// Rejects settings no inspection can honour.
    pub fn validate(&self) -> Result<()> {
        if self.pattern_windows.contains(&0) {
            return Err(InspectError::InvalidConfig(
                "pattern window length must be non-zero".to_string(),
            ));
        }
        if self.min_string_len == 0 {
            return Err(InspectError::InvalidConfig(
                "minimum string length must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
