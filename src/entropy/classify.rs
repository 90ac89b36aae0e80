//! Heuristic reading of an entropy value.
//!
//! The thresholds are informational. Plenty of compressed formats land
//! below 7.5 and some text encodings land above 6.0.

use serde::Serialize;
use std::fmt;

/// Above this, content is most likely compressed or encrypted.
pub const COMPRESSED_THRESHOLD: f64 = 7.5;
/// Above this, content is most likely encoded.
pub const ENCODED_THRESHOLD: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntropyClass {
    CompressedOrEncrypted,
    Encoded,
    LikelyText,
}

impl EntropyClass {
    pub fn from_entropy(bits_per_byte: f64) -> Self {
        if bits_per_byte > COMPRESSED_THRESHOLD {
            EntropyClass::CompressedOrEncrypted
        } else if bits_per_byte > ENCODED_THRESHOLD {
            EntropyClass::Encoded
        } else {
            EntropyClass::LikelyText
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            EntropyClass::CompressedOrEncrypted => "High entropy - likely encrypted or compressed",
            EntropyClass::Encoded => "Medium entropy - possibly encoded",
            EntropyClass::LikelyText => "Low entropy - might contain readable text",
        }
    }
}

impl fmt::Display for EntropyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}
