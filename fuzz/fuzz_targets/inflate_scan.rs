#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Force the irregular header so every input exercises the offset scan
    let mut buf = vec![0x78, 0x8d];
    buf.extend_from_slice(data);
    let _ = bytesniff::inflate::attempt_inflate(&buf, 10, 1 << 20);
});
