//! Repeated fixed-length byte patterns.
//!
//! A window of `window_len` bytes slides over the buffer with stride 1 and
//! every distinct window value is counted. Keys borrow from the input, so a
//! histogram never outlives the buffer it describes.

use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Window lengths examined when no others are configured.
pub const DEFAULT_WINDOWS: &[usize] = &[2, 4, 8];

#[derive(Debug, Clone, Copy)]
struct Tally {
    count: u64,
    first_offset: usize,
}

/// Occurrence counts of every window value of one length.
#[derive(Debug, Clone)]
pub struct PatternHistogram<'a> {
    window_len: usize,
    counts: HashMap<&'a [u8], Tally>,
    observations: u64,
}

impl PatternHistogram<'_> {
    pub fn window_len(&self) -> usize {
        self.window_len
    }

    /// Total windows examined: `len - window_len + 1`, or zero when the
    /// buffer is shorter than the window.
    pub fn observations(&self) -> u64 {
        self.observations
    }

    /// Number of distinct window values.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, pattern: &[u8]) -> u64 {
        self.counts.get(pattern).map_or(0, |t| t.count)
    }

    /// Patterns seen more than once, most frequent first.
    ///
    /// Equal counts are ordered by the offset of their first occurrence.
    pub fn repeated(&self) -> Vec<PatternCount> {
        let mut out: Vec<PatternCount> = self
            .counts
            .iter()
            .filter(|(_, t)| t.count > 1)
            .map(|(bytes, t)| PatternCount {
                pattern: bytes.to_vec(),
                count: t.count,
                first_offset: t.first_offset,
            })
            .collect();
        out.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then(a.first_offset.cmp(&b.first_offset))
        });
        out
    }

    /// The `k` most frequent repeated patterns.
    pub fn top_repeated(&self, k: usize) -> Vec<PatternCount> {
        let mut out = self.repeated();
        out.truncate(k);
        out
    }
}

/// A pattern that occurred more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternCount {
    #[serde(with = "hex::serde")]
    pub pattern: Vec<u8>,
    pub count: u64,
    pub first_offset: usize,
}

impl PatternCount {
    pub fn pattern_hex(&self) -> String {
        hex::encode(&self.pattern)
    }
}

/// Counts every `window_len`-byte window of `data`.
///
/// A zero `window_len` yields an empty histogram; configuration validation
/// rejects it before an inspection starts.
pub fn pattern_counts(data: &[u8], window_len: usize) -> PatternHistogram<'_> {
    let mut counts: HashMap<&[u8], Tally> = HashMap::new();
    let mut observations = 0u64;

    if window_len > 0 {
        for (offset, window) in data.windows(window_len).enumerate() {
            counts
                .entry(window)
                .and_modify(|t| t.count += 1)
                .or_insert(Tally {
                    count: 1,
                    first_offset: offset,
                });
            observations += 1;
        }
    }

    debug!(
        window_len,
        observations,
        distinct = counts.len(),
        "Counted byte patterns"
    );

    PatternHistogram {
        window_len,
        counts,
        observations,
    }
}
