#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let buffer = bytesniff::InputBuffer::from_bytes("fuzz", data.to_vec());
    let cfg = bytesniff::InspectConfig::default();
    let report = bytesniff::inspect(&buffer, &cfg).expect("default config is valid");
    assert_eq!(report.size, data.len());
    let _ = report.to_string();
});
