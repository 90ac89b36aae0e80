use bytesniff::strings::DEFAULT_MIN_STRING_LEN;
use bytesniff::InspectConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "bytesniff",
    version,
    about = "Print byte-level statistics for a binary file of unknown format"
)]
pub struct Cli {
    /// File to inspect.
    #[arg(env = "BYTESNIFF_FILE")]
    pub path: PathBuf,

    /// Minimum length of a printable-ASCII region.
    #[arg(long = "min-len", default_value_t = DEFAULT_MIN_STRING_LEN)]
    pub min_len: usize,

    /// Number of most common bytes to list.
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Window lengths for repeated-pattern counting.
    #[arg(long, value_delimiter = ',', default_values_t = [2usize, 4, 8])]
    pub windows: Vec<usize>,

    /// Number of printable regions to list.
    #[arg(long, default_value_t = 20)]
    pub strings: usize,

    /// Offsets tried for raw deflate behind an irregular zlib header.
    #[arg(long = "scan-offsets", default_value_t = 10)]
    pub scan_offsets: usize,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Emit logs (stderr) as JSON.
    #[arg(long = "log-json")]
    pub log_json: bool,
}

impl Cli {
    pub fn inspect_config(&self) -> InspectConfig {
        InspectConfig {
            min_string_len: self.min_len,
            top_bytes: self.top,
            pattern_windows: self.windows.clone(),
            string_samples: self.strings,
            inflate_scan_limit: self.scan_offsets,
            ..InspectConfig::default()
        }
    }
}
