//! Printable-text regions embedded in binary data.
//!
//! The scanner only recognises printable ASCII (`0x20..=0x7e`). Regions are
//! produced lazily in offset order; [`summarize`] drains the scanner once to
//! count everything while keeping a bounded sample.

pub mod scan;

use serde::Serialize;

pub use self::scan::{extract_strings, is_printable, StringRegion, Strings};

/// Minimum run length for a printable region.
///
/// The analyst scripts disagreed (one used 3, two used 4). Four is the
/// default; pass another value through [`crate::InspectConfig`] to change it.
pub const DEFAULT_MIN_STRING_LEN: usize = 4;

/// Count of all regions plus the first few of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StringsSummary {
    pub min_len: usize,
    pub total: usize,
    pub samples: Vec<StringRegion>,
}

/// Counts every region of `data` and keeps the first `max_samples`.
pub fn summarize(data: &[u8], min_len: usize, max_samples: usize) -> StringsSummary {
    let mut summary = StringsSummary {
        min_len,
        ..Default::default()
    };
    for region in extract_strings(data, min_len) {
        summary.total += 1;
        if summary.samples.len() < max_samples {
            summary.samples.push(region);
        }
    }
    tracing::debug!(
        total = summary.total,
        sampled = summary.samples.len(),
        min_len,
        "Extracted printable regions"
    );
    summary
}
