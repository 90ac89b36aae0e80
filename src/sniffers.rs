//! Content sniffing with `infer`.
//!
//! A second opinion next to the signature table. `infer` knows far more
//! formats but says nothing about the vendor headers the table covers.

use serde::Serialize;
use tracing::debug;

/// What `infer` recognised in the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentHint {
    pub mime: String,
    pub extension: String,
}

/// Sniffs `data` for a known file type.
pub fn sniff_bytes(data: &[u8]) -> Option<ContentHint> {
    match infer::get(data) {
        Some(kind) => {
            debug!(
                mime = kind.mime_type(),
                extension = kind.extension(),
                "Content type detected"
            );
            Some(ContentHint {
                mime: kind.mime_type().to_string(),
                extension: kind.extension().to_string(),
            })
        }
        None => {
            debug!("No content type detected from {} bytes", data.len());
            None
        }
    }
}
