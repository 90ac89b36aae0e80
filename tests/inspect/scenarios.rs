//! Concrete buffers with known reports.

use crate::common::{create_temp_file, zlib};
use bytesniff::entropy::histogram;
use bytesniff::inflate::{attempt_inflate, DEFAULT_MAX_OUTPUT, DEFAULT_SCAN_LIMIT};
use bytesniff::report::InflateSummary;
use bytesniff::signatures::{detect_signature, SIGNATURES};
use bytesniff::strings::{extract_strings, StringRegion};
use bytesniff::{inspect, load_buffer, InspectConfig};

#[test]
fn single_region_between_zero_padding() {
    let mut data = vec![0u8; 4];
    data.extend_from_slice(b"test");
    data.extend_from_slice(&[0u8; 4]);

    let regions: Vec<StringRegion> = extract_strings(&data, 4).collect();
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].start, 4);
    assert_eq!(regions[0].end, 7);
    assert_eq!(regions[0].text, "test");
}

#[test]
fn zlib_hello_is_detected_and_inflated() {
    let data = zlib(b"hello");
    assert_eq!(&data[..2], b"\x78\x9c");

    let sig = detect_signature(&data, SIGNATURES).expect("signature");
    assert_eq!(sig.label, "ZLIB");

    let outcome = attempt_inflate(&data, DEFAULT_SCAN_LIMIT, DEFAULT_MAX_OUTPUT);
    assert_eq!(outcome.decoded().expect("decoded").data(), b"hello");
}

#[test]
fn empty_buffer_yields_empty_statistics() {
    let hist = histogram(b"");
    assert!(hist.is_empty());
    assert_eq!(hist.entropy(), 0.0);
    assert_eq!(extract_strings(b"", 4).count(), 0);
}

#[test]
fn full_report_for_zlib_file() {
    let file = create_temp_file(&zlib(b"Preflight: fuel quantity CHECK"));
    let buffer = load_buffer(file.path()).unwrap();
    let report = inspect(&buffer, &InspectConfig::default()).unwrap();

    assert_eq!(report.signature_label(), "ZLIB");
    assert_eq!(report.size, buffer.len());
    match &report.inflate {
        InflateSummary::Decoded {
            offset,
            size,
            preview,
            ..
        } => {
            assert_eq!(*offset, 0);
            assert_eq!(*size, 30);
            assert_eq!(preview, "Preflight: fuel quantity CHECK");
        }
        other => panic!("expected decode, got {other:?}"),
    }

    let text = report.to_string();
    assert!(text.contains("✓ ZLIB: 789c"));
    assert!(text.contains("✗ ZIP: 504b0304"));
    assert!(text.contains("Success (Zlib) at offset 0: 30 bytes"));
}

#[test]
fn custom_header_with_three_char_minimum() {
    let mut data = vec![0x04, 0x7f, 0x00, 0x00];
    data.extend_from_slice(b"ABC\x00LONGER\x00");
    let file = create_temp_file(&data);
    let buffer = load_buffer(file.path()).unwrap();

    let default_report = inspect(&buffer, &InspectConfig::default()).unwrap();
    assert_eq!(default_report.signature_label(), "Custom header (04 7f)");
    assert_eq!(default_report.strings.total, 1);

    let cfg = InspectConfig {
        min_string_len: 3,
        ..Default::default()
    };
    let report = inspect(&buffer, &cfg).unwrap();
    assert_eq!(report.strings.total, 2);
    assert_eq!(report.strings.samples[0].text, "ABC");
    assert_eq!(report.inflate, InflateSummary::NotAttempted);
}

#[test]
fn json_report_round_trips_through_serde_json() {
    let file = create_temp_file(b"GIF89a\x01\x00\x01\x00");
    let buffer = load_buffer(file.path()).unwrap();
    let report = inspect(&buffer, &InspectConfig::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(value["signature"], "GIF");
    assert_eq!(value["size"], 10);
    assert_eq!(value["inflate"]["status"], "not_attempted");
    assert_eq!(value["content_hint"]["mime"], "image/gif");
}
