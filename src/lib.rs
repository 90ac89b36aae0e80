//! Byte-level inspection of binary files whose format is unknown.
//!
//! A run loads one file into memory and reports, in order: size, head and
//! tail bytes, digests, signature matches, byte frequencies, entropy,
//! repeated byte patterns, a best-effort decompression attempt and the
//! printable-ASCII regions.
//!
//! ```no_run
//! use bytesniff::{inspect, load_buffer, InspectConfig};
//!
//! let buffer = load_buffer("checklist.gplts")?;
//! let report = inspect(&buffer, &InspectConfig::default())?;
//! println!("{report}");
//! # Ok::<(), bytesniff::InspectError>(())
//! ```

pub mod config;
pub mod entropy;
pub mod error;
pub mod hashing;
pub mod inflate;
pub mod io;
pub mod logging;
pub mod patterns;
pub mod report;
pub mod signatures;
pub mod sniffers;
pub mod strings;

pub use config::InspectConfig;
pub use error::{InspectError, Result};
pub use io::{load_buffer, InputBuffer};
pub use report::{inspect, Report};
