//! Human-readable rendering of a [`Report`].

use super::{InflateSummary, Report};
use std::fmt;

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Analysis of {} ===", self.path.display())?;
        writeln!(f, "File size: {} bytes", self.size)?;
        writeln!(f, "First {} bytes: {}", self.head.len(), hex::encode(&self.head))?;
        writeln!(f, "Last {} bytes: {}", self.tail.len(), hex::encode(&self.tail))?;
        writeln!(f, "MD5: {}", self.digests.md5)?;
        writeln!(f, "SHA-256: {}", self.digests.sha256)?;
        writeln!(f, "Detected: {}", self.signature_label())?;
        if let Some(hint) = &self.content_hint {
            writeln!(f, "Content type: {} (.{})", hint.mime, hint.extension)?;
        }

        writeln!(f, "\nFile signature analysis:")?;
        for check in &self.signature_checks {
            let mark = if check.matched { '✓' } else { '✗' };
            writeln!(f, "  {mark} {}: {}", check.label, check.prefix)?;
        }

        writeln!(f, "\nMost common bytes:")?;
        for entry in &self.top_bytes {
            writeln!(
                f,
                "  {:02x}: {} times ({:.1}%)",
                entry.byte, entry.count, entry.percent
            )?;
        }
        writeln!(f, "  ({} distinct byte values)", self.distinct_bytes)?;

        writeln!(f, "\nEntropy: {:.2} bits per byte", self.entropy)?;
        writeln!(f, "  {}", self.entropy_class)?;
        writeln!(
            f,
            "  Null bytes: {} ({:.1}%)",
            self.null_bytes,
            self.null_percent()
        )?;

        writeln!(f, "\nPattern analysis:")?;
        for summary in &self.patterns {
            if summary.top.is_empty() {
                writeln!(f, "  {}-byte patterns: none repeated", summary.window_len)?;
                continue;
            }
            writeln!(f, "  {}-byte patterns:", summary.window_len)?;
            for pattern in &summary.top {
                writeln!(f, "    {}: {} times", pattern.pattern_hex(), pattern.count)?;
            }
        }

        writeln!(f, "\nDecompression:")?;
        match &self.inflate {
            InflateSummary::NotAttempted => {
                writeln!(f, "  Not attempted (no zlib-like header)")?;
            }
            InflateSummary::Decoded {
                method,
                offset,
                size,
                truncated,
                preview,
            } => {
                writeln!(f, "  Success ({method:?}) at offset {offset}: {size} bytes")?;
                if *truncated {
                    writeln!(f, "  (output past the retention cap was not kept)")?;
                }
                writeln!(f, "  Preview: {preview}")?;
            }
            InflateSummary::Failed {
                method,
                attempts,
                last_error,
            } => {
                writeln!(
                    f,
                    "  No decoding succeeded ({method:?}, {attempts} attempt(s); last error: {last_error})"
                )?;
            }
        }

        writeln!(
            f,
            "\nFound {} strings of {}+ characters:",
            self.strings.total, self.strings.min_len
        )?;
        for (i, region) in self.strings.samples.iter().enumerate() {
            writeln!(
                f,
                "  Region {}: offset {}-{}: '{}'",
                i + 1,
                region.start,
                region.end,
                region.text
            )?;
        }
        Ok(())
    }
}
