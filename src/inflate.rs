//! Best-effort decompression of zlib and raw-deflate payloads.
//!
//! Two cases are attempted, selected by the buffer's signature:
//!
//! - a standard zlib header: one zlib-wrapped decode from offset 0
//! - the irregular `78 8d` header: raw deflate tried at each offset below the
//!   scan limit, first success wins
//!
//! The container around the irregular payload is undocumented, so the offset
//! scan is a heuristic. Once the header layout is known, [`scan_raw_deflate`]
//! should be replaced with a direct offset.
//!
//! Every failure is a [`DecodeError`] that stays inside this module; callers
//! only see an [`InflateOutcome`].

use crate::signatures::{detect_signature, SignatureKind, SIGNATURES};
use flate2::{Decompress, DecompressError, FlushDecompress, Status};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Offsets tried by the raw-deflate scan when none is configured.
pub const DEFAULT_SCAN_LIMIT: usize = 10;

/// Decoded bytes retained per stream (64 MiB). Output past this is counted
/// but dropped.
pub const DEFAULT_MAX_OUTPUT: usize = 64 * 1024 * 1024;

/// Internal inflate buffer size.
const INFLATE_BUF_SIZE: usize = 64 * 1024;

/// Why a single decode attempt failed.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("corrupt deflate stream: {0}")]
    Corrupt(#[from] DecompressError),

    #[error("stream ended before its end marker")]
    Truncated,
}

/// Which decoder produced the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InflateMethod {
    Zlib,
    RawDeflate,
}

/// A fully decoded deflate stream.
///
/// `data` holds at most the retention cap passed to [`inflate_stream`];
/// `size` is the full decoded length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamOutput {
    pub data: Vec<u8>,
    pub size: u64,
}

impl StreamOutput {
    /// True when decoded bytes were dropped at the retention cap.
    pub fn is_truncated(&self) -> bool {
        (self.data.len() as u64) < self.size
    }
}

/// Decompressed bytes and where the stream started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inflated {
    pub method: InflateMethod,
    pub offset: usize,
    pub output: StreamOutput,
}

impl Inflated {
    /// Retained decoded bytes.
    pub fn data(&self) -> &[u8] {
        &self.output.data
    }

    /// Full decoded length, including bytes past the retention cap.
    pub fn size(&self) -> u64 {
        self.output.size
    }
}

/// Result of [`attempt_inflate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InflateOutcome {
    /// The buffer has no zlib-like header.
    NotAttempted,
    Decoded(Inflated),
    /// Every attempt failed; `last_error` describes the final one.
    Failed {
        method: InflateMethod,
        attempts: usize,
        last_error: String,
    },
}

impl InflateOutcome {
    pub fn decoded(&self) -> Option<&Inflated> {
        match self {
            InflateOutcome::Decoded(inflated) => Some(inflated),
            _ => None,
        }
    }
}

/// Decodes one complete deflate stream from the start of `input`.
///
/// With `zlib_header` the stream must carry a zlib header and a matching
/// Adler-32 trailer. Bytes after the end marker are ignored.
///
/// Only the first `max_out` decoded bytes are kept. Decoding continues past
/// that point so the stream is still validated to its end and its full size
/// is known.
pub fn inflate_stream(
    input: &[u8],
    zlib_header: bool,
    max_out: usize,
) -> Result<StreamOutput, DecodeError> {
    let mut de = Decompress::new(zlib_header);
    let mut buf = vec![0u8; INFLATE_BUF_SIZE];
    let mut out = Vec::new();
    let mut size = 0u64;
    let mut in_pos = 0usize;

    loop {
        let before_in = de.total_in();
        let before_out = de.total_out();

        let status = de.decompress(&input[in_pos..], &mut buf, FlushDecompress::None)?;

        let consumed = (de.total_in() - before_in) as usize;
        let produced = (de.total_out() - before_out) as usize;
        in_pos += consumed;

        if produced != 0 {
            let keep = produced.min(max_out.saturating_sub(out.len()));
            out.extend_from_slice(&buf[..keep]);
            size += produced as u64;
        }

        match status {
            Status::StreamEnd => {
                if size > out.len() as u64 {
                    debug!(size, kept = out.len(), "Decoded output exceeded retention cap");
                }
                return Ok(StreamOutput { data: out, size });
            }
            Status::Ok | Status::BufError => {
                if consumed == 0 && produced == 0 {
                    return Err(DecodeError::Truncated);
                }
            }
        }
    }
}

/// Tries raw deflate at every offset in `0..min(scan_limit, len)`.
///
/// Returns the first offset that decodes, with its output. When nothing
/// decodes, returns the number of attempts and the last error.
pub fn scan_raw_deflate(
    data: &[u8],
    scan_limit: usize,
    max_out: usize,
) -> Result<(usize, StreamOutput), (usize, Option<DecodeError>)> {
    let end = scan_limit.min(data.len());
    let mut last_error = None;

    for offset in 0..end {
        match inflate_stream(&data[offset..], false, max_out) {
            Ok(out) => {
                debug!(offset, size = out.size, "Raw deflate succeeded");
                return Ok((offset, out));
            }
            Err(e) => {
                trace!(offset, error = %e, "Raw deflate failed");
                last_error = Some(e);
            }
        }
    }
    Err((end, last_error))
}

/// Attempts to decompress `data` according to its leading signature.
///
/// Never fails: decode errors are folded into [`InflateOutcome::Failed`].
pub fn attempt_inflate(data: &[u8], scan_limit: usize, max_out: usize) -> InflateOutcome {
    let kind = detect_signature(data, SIGNATURES).map(|sig| sig.kind);

    match kind {
        Some(SignatureKind::Zlib) => match inflate_stream(data, true, max_out) {
            Ok(out) => {
                debug!(size = out.size, "Zlib stream decoded");
                InflateOutcome::Decoded(Inflated {
                    method: InflateMethod::Zlib,
                    offset: 0,
                    output: out,
                })
            }
            Err(e) => {
                warn!(error = %e, "Zlib header present but stream did not decode");
                InflateOutcome::Failed {
                    method: InflateMethod::Zlib,
                    attempts: 1,
                    last_error: e.to_string(),
                }
            }
        },
        Some(SignatureKind::IrregularDeflate) => {
            match scan_raw_deflate(data, scan_limit, max_out) {
                Ok((offset, out)) => InflateOutcome::Decoded(Inflated {
                    method: InflateMethod::RawDeflate,
                    offset,
                    output: out,
                }),
                Err((attempts, last)) => {
                    warn!(attempts, "No raw deflate offset decoded");
                    InflateOutcome::Failed {
                        method: InflateMethod::RawDeflate,
                        attempts,
                        last_error: last
                            .map(|e| e.to_string())
                            .unwrap_or_else(|| "no offsets to try".to_string()),
                    }
                }
            }
        }
        _ => InflateOutcome::NotAttempted,
    }
}
