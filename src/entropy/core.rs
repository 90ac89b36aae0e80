//! Byte histograms and Shannon entropy.

use serde::Serialize;

/// Occurrence count of every byte value in a buffer.
///
/// Counts always sum to [`ByteHistogram::total`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteHistogram {
    counts: [u64; 256],
    total: u64,
}

impl ByteHistogram {
    /// Creates a new empty histogram.
    #[inline]
    pub fn new() -> Self {
        Self {
            counts: [0; 256],
            total: 0,
        }
    }

    /// Counts every byte of `data` in a single pass.
    #[inline]
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut hist = Self::new();
        for &byte in data {
            hist.add(byte);
        }
        hist
    }

    #[inline]
    pub fn add(&mut self, byte: u8) {
        self.counts[byte as usize] += 1;
        self.total += 1;
    }

    /// Number of bytes counted.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// True if no byte has been counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of byte values with a nonzero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c != 0).count()
    }

    /// Byte values with a nonzero count, in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != 0)
            .map(|(b, &c)| (b as u8, c))
    }

    /// The `n` most frequent byte values, highest count first.
    ///
    /// Zero counts are never returned. Callers should not rely on the order
    /// among equal counts.
    pub fn top_n(&self, n: usize) -> Vec<ByteFrequency> {
        let mut entries: Vec<(u8, u64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
            .into_iter()
            .map(|(byte, count)| ByteFrequency {
                byte,
                count,
                percent: percent(count, self.total),
            })
            .collect()
    }

    /// Shannon entropy of the counted bytes in bits per byte.
    #[inline]
    pub fn entropy(&self) -> f64 {
        shannon_entropy(self, self.total as usize)
    }
}

impl Default for ByteHistogram {
    fn default() -> Self {
        Self::new()
    }
}

/// One entry of [`ByteHistogram::top_n`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ByteFrequency {
    pub byte: u8,
    pub count: u64,
    /// Share of the whole buffer, 0-100.
    pub percent: f64,
}

/// Share of `count` in `total` as a percentage; 0.0 when `total` is zero.
#[inline]
pub fn percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

/// Counts occurrences of each byte value.
#[inline]
pub fn histogram(data: &[u8]) -> ByteHistogram {
    ByteHistogram::from_bytes(data)
}

/// Computes `-Σ p·log2(p)` over all byte values with a nonzero count, where
/// `p = count / total_len`.
///
/// Returns a value between 0.0 and 8.0, and 0.0 when `total_len` is zero.
pub fn shannon_entropy(hist: &ByteHistogram, total_len: usize) -> f64 {
    if total_len == 0 {
        return 0.0;
    }

    let len = total_len as f64;
    let mut entropy = 0.0;

    for &count in &hist.counts {
        if count == 0 {
            continue;
        }
        let p = (count as f64) / len;
        entropy -= p * p.log2();
    }

    // A single distinct value yields -0.0
    entropy.max(0.0)
}
