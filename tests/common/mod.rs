//! Shared helpers for integration tests.

use std::io::Write;
use tempfile::NamedTempFile;

/// Creates a temporary file with the given content.
///
/// The file is removed when the returned handle is dropped.
pub fn create_temp_file(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file
}

/// Deterministic pseudo-random bytes (64-bit LCG, high byte of each step).
pub fn lcg_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 56) as u8
        })
        .collect()
}

/// A spread of buffers used by the property tests.
pub fn sample_buffers() -> Vec<Vec<u8>> {
    let mut out = vec![
        Vec::new(),
        vec![0u8],
        vec![0x41; 64],
        b"Hello, World!\x00\x01\x02checklist\xff\xfeTAXI".to_vec(),
        (0..=255u8).collect(),
    ];
    for (seed, len) in [(1u64, 7usize), (2, 300), (3, 4096), (4, 65_537)] {
        out.push(lcg_bytes(seed, len));
    }
    out
}

/// zlib-compresses `data` at the default level.
pub fn zlib(data: &[u8]) -> Vec<u8> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
    enc.write_all(data).unwrap();
    enc.finish().unwrap()
}
