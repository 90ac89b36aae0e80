//! The inspection pipeline and its write-once report.
//!
//! [`inspect`] runs every phase over one [`InputBuffer`] in a fixed order.
//! Phases are independent; none of them can fail once the buffer is loaded.

mod render;

use crate::config::InspectConfig;
use crate::entropy::{histogram, percent, shannon_entropy, ByteFrequency, EntropyClass};
use crate::error::Result;
use crate::hashing::Digests;
use crate::inflate::{attempt_inflate, InflateMethod, InflateOutcome};
use crate::io::InputBuffer;
use crate::patterns::{pattern_counts, PatternCount};
use crate::signatures::{check_signatures, detect_signature, SignatureCheck, SIGNATURES};
use crate::sniffers::{sniff_bytes, ContentHint};
use crate::strings::{self, StringsSummary};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Everything learned about one buffer.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub path: PathBuf,
    pub size: usize,
    #[serde(with = "hex::serde")]
    pub head: Vec<u8>,
    #[serde(with = "hex::serde")]
    pub tail: Vec<u8>,
    pub digests: Digests,
    /// Label of the first matching signature.
    pub signature: Option<&'static str>,
    pub signature_checks: Vec<SignatureCheck>,
    pub content_hint: Option<ContentHint>,
    pub top_bytes: Vec<ByteFrequency>,
    pub distinct_bytes: usize,
    pub null_bytes: usize,
    pub entropy: f64,
    pub entropy_class: EntropyClass,
    pub patterns: Vec<PatternSummary>,
    pub inflate: InflateSummary,
    pub strings: StringsSummary,
}

impl Report {
    /// Signature label, or "unknown".
    pub fn signature_label(&self) -> &'static str {
        self.signature.unwrap_or(crate::signatures::UNKNOWN_LABEL)
    }

    /// Share of zero bytes, 0-100.
    pub fn null_percent(&self) -> f64 {
        percent(self.null_bytes as u64, self.size as u64)
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Repeated patterns of one window length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternSummary {
    pub window_len: usize,
    pub observations: u64,
    pub distinct: usize,
    pub top: Vec<PatternCount>,
}

/// Reportable form of an [`InflateOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InflateSummary {
    NotAttempted,
    Decoded {
        method: InflateMethod,
        offset: usize,
        /// Full decoded length.
        size: u64,
        /// Output past the retention cap was dropped.
        truncated: bool,
        preview: String,
    },
    Failed {
        method: InflateMethod,
        attempts: usize,
        last_error: String,
    },
}

impl InflateSummary {
    fn from_outcome(outcome: InflateOutcome, preview_len: usize) -> Self {
        match outcome {
            InflateOutcome::NotAttempted => InflateSummary::NotAttempted,
            InflateOutcome::Decoded(inflated) => {
                let data = inflated.data();
                let shown = &data[..data.len().min(preview_len)];
                InflateSummary::Decoded {
                    method: inflated.method,
                    offset: inflated.offset,
                    size: inflated.size(),
                    truncated: inflated.output.is_truncated(),
                    preview: shown.escape_ascii().to_string(),
                }
            }
            InflateOutcome::Failed {
                method,
                attempts,
                last_error,
            } => InflateSummary::Failed {
                method,
                attempts,
                last_error,
            },
        }
    }
}

/// Runs every inspection phase over `buffer`.
///
/// # Errors
///
/// Only an invalid `cfg` is rejected; the phases themselves cannot fail.
pub fn inspect(buffer: &InputBuffer, cfg: &InspectConfig) -> Result<Report> {
    cfg.validate()?;

    let span = crate::span_trace!("inspect", path = %buffer.path().display(), size = buffer.len());
    let _guard = span.enter();

    let data = buffer.data();

    let hist = histogram(data);
    let entropy = shannon_entropy(&hist, data.len());

    let patterns = cfg
        .pattern_windows
        .iter()
        .map(|&window_len| {
            let counts = pattern_counts(data, window_len);
            PatternSummary {
                window_len: counts.window_len(),
                observations: counts.observations(),
                distinct: counts.distinct(),
                top: counts.top_repeated(cfg.top_patterns),
            }
        })
        .collect();

    let inflate = InflateSummary::from_outcome(
        attempt_inflate(data, cfg.inflate_scan_limit, cfg.max_inflate_bytes),
        cfg.inflate_preview_len,
    );

    let report = Report {
        path: buffer.path().to_path_buf(),
        size: data.len(),
        head: buffer.head(cfg.preview_len).to_vec(),
        tail: buffer.tail(cfg.preview_len).to_vec(),
        digests: Digests::of(data),
        signature: detect_signature(data, SIGNATURES).map(|sig| sig.label),
        signature_checks: check_signatures(data, SIGNATURES),
        content_hint: sniff_bytes(data),
        top_bytes: hist.top_n(cfg.top_bytes),
        distinct_bytes: hist.distinct(),
        null_bytes: memchr::memchr_iter(0, data).count(),
        entropy,
        entropy_class: EntropyClass::from_entropy(entropy),
        patterns,
        inflate,
        strings: strings::summarize(data, cfg.min_string_len, cfg.string_samples),
    };

    info!(
        signature = report.signature_label(),
        entropy = report.entropy,
        strings = report.strings.total,
        "Inspection finished"
    );
    Ok(report)
}
