//! File signatures and magic numbers.
//!
//! One ordered table of known prefixes. The first matching entry wins, so
//! longer or more specific prefixes must precede shorter ones that share a
//! leading byte.

use serde::Serialize;

/// What a matched prefix says about the bytes behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureKind {
    Archive,
    /// A standard zlib stream header (CMF 0x78 with a valid FLG).
    Zlib,
    /// Looks like a zlib header but fails the header check; the deflate
    /// payload may start at a small unknown offset.
    IrregularDeflate,
    Image,
    /// Vendor header with no known decoder.
    Custom,
}

/// A fixed byte prefix identifying a container format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub prefix: &'static [u8],
    pub label: &'static str,
    pub kind: SignatureKind,
}

impl Signature {
    const fn new(prefix: &'static [u8], label: &'static str, kind: SignatureKind) -> Self {
        Self {
            prefix,
            label,
            kind,
        }
    }

    /// True when `data` starts with this signature's prefix.
    #[inline]
    pub fn matches(&self, data: &[u8]) -> bool {
        data.starts_with(self.prefix)
    }

    pub fn prefix_hex(&self) -> String {
        hex::encode(self.prefix)
    }
}

/// Known prefixes, in match order.
pub const SIGNATURES: &[Signature] = &[
    Signature::new(b"PK\x03\x04", "ZIP", SignatureKind::Archive),
    Signature::new(b"\x1f\x8b\x08", "GZIP", SignatureKind::Archive),
    Signature::new(b"\x78\x9c", "ZLIB", SignatureKind::Zlib),
    Signature::new(b"\x78\xda", "ZLIB", SignatureKind::Zlib),
    Signature::new(b"\x78\x01", "ZLIB", SignatureKind::Zlib),
    Signature::new(b"\x78\x5e", "ZLIB", SignatureKind::Zlib),
    Signature::new(
        b"\x78\x8d",
        "Possible custom compression",
        SignatureKind::IrregularDeflate,
    ),
    Signature::new(b"\x04\x7f", "Custom header (04 7f)", SignatureKind::Custom),
    Signature::new(b"\x89PNG", "PNG", SignatureKind::Image),
    Signature::new(b"GIF8", "GIF", SignatureKind::Image),
    Signature::new(b"\xff\xd8\xff", "JPEG", SignatureKind::Image),
    Signature::new(b"JFIF", "JPEG (JFIF marker)", SignatureKind::Image),
];

/// Label used when no signature matches.
pub const UNKNOWN_LABEL: &str = "unknown";

/// Returns the first signature in `table` whose prefix starts `data`.
pub fn detect_signature<'t>(data: &[u8], table: &'t [Signature]) -> Option<&'t Signature> {
    table.iter().find(|sig| sig.matches(data))
}

/// One row of the signature checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureCheck {
    pub label: &'static str,
    pub prefix: String,
    pub matched: bool,
}

/// Evaluates every entry of `table` against `data`, in table order.
pub fn check_signatures(data: &[u8], table: &[Signature]) -> Vec<SignatureCheck> {
    table
        .iter()
        .map(|sig| SignatureCheck {
            label: sig.label,
            prefix: sig.prefix_hex(),
            matched: sig.matches(data),
        })
        .collect()
}
