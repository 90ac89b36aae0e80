//! Byte-frequency and entropy analysis.
//!
//! - [`histogram`] counts every byte value in one pass
//! - [`shannon_entropy`] turns a histogram into bits per byte
//! - [`EntropyClass`] maps that value onto a rough content guess
//!
//! # Example
//!
//! ```
//! use bytesniff::entropy::{histogram, shannon_entropy, EntropyClass};
//!
//! let data = b"Hello, World!";
//! let hist = histogram(data);
//! let bits = shannon_entropy(&hist, data.len());
//! assert_eq!(EntropyClass::from_entropy(bits), EntropyClass::LikelyText);
//! ```

pub mod classify;
pub mod core;

pub use self::classify::{EntropyClass, COMPRESSED_THRESHOLD, ENCODED_THRESHOLD};
pub use self::core::{histogram, percent, shannon_entropy, ByteFrequency, ByteHistogram};
