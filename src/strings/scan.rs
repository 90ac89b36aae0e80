//! Lazy printable-ASCII scanner.

use serde::Serialize;
use std::iter::FusedIterator;

/// Lowest printable ASCII byte (space).
pub const PRINTABLE_MIN: u8 = 0x20;
/// Highest printable ASCII byte (`~`).
pub const PRINTABLE_MAX: u8 = 0x7e;

/// True for bytes in `[32, 126]`. Tab, newline and DEL all end a run.
#[inline]
pub fn is_printable(b: u8) -> bool {
    (PRINTABLE_MIN..=PRINTABLE_MAX).contains(&b)
}

/// A maximal run of printable bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringRegion {
    /// Offset of the first byte.
    pub start: usize,
    /// Offset of the last byte (inclusive).
    pub end: usize,
    pub text: String,
}

impl StringRegion {
    /// Region length in bytes; the text is ASCII, one char per byte.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Iterator over the [`StringRegion`]s of a buffer, in offset order.
///
/// Created by [`extract_strings`]. Each call to `next` resumes the scan
/// where the previous region ended.
#[derive(Debug, Clone)]
pub struct Strings<'a> {
    data: &'a [u8],
    pos: usize,
    min_len: usize,
}

impl<'a> Iterator for Strings<'a> {
    type Item = StringRegion;

    fn next(&mut self) -> Option<StringRegion> {
        while self.pos < self.data.len() {
            let rest = &self.data[self.pos..];
            let Some(skip) = rest.iter().position(|&b| is_printable(b)) else {
                self.pos = self.data.len();
                break;
            };
            let start = self.pos + skip;
            let run = self.data[start..]
                .iter()
                .take_while(|&&b| is_printable(b))
                .count();
            self.pos = start + run;

            if run >= self.min_len {
                let bytes = &self.data[start..start + run];
                // Every byte is ASCII, so each maps to exactly one char.
                let text: String = bytes.iter().map(|&b| b as char).collect();
                return Some(StringRegion {
                    start,
                    end: start + run - 1,
                    text,
                });
            }
        }
        None
    }
}

impl FusedIterator for Strings<'_> {}

/// Scans `data` for runs of at least `min_len` printable bytes.
///
/// A `min_len` of zero behaves like one: empty runs are never reported.
pub fn extract_strings(data: &[u8], min_len: usize) -> Strings<'_> {
    Strings {
        data,
        pos: 0,
        min_len: min_len.max(1),
    }
}
