//! The `bytesniff` binary: exit status and stream separation.

use crate::common::{create_temp_file, zlib};
use std::path::Path;
use std::process::{Command, Output};

fn run_bytesniff(args: &[&str], path: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bytesniff"))
        .args(args)
        .arg(path)
        .env_remove("RUST_LOG")
        .env_remove("BYTESNIFF_FILE")
        .output()
        .expect("failed to run bytesniff")
}

#[test]
fn missing_file_exits_nonzero_with_empty_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.fmd");
    let out = run_bytesniff(&[], &path);

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("missing.fmd"));
}

#[test]
fn valid_file_prints_report_to_stdout() {
    let file = create_temp_file(&zlib(b"Before takeoff: flaps SET"));
    let out = run_bytesniff(&[], file.path());

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("=== Analysis of "));
    assert!(stdout.contains("Detected: ZLIB"));
    assert!(stdout.contains("Preview: Before takeoff: flaps SET"));
}

#[test]
fn json_stdout_stays_parseable_when_warnings_are_logged() {
    // Irregular header with nothing decodable behind it logs a warning
    let file = create_temp_file(&[0x78, 0x8d, 0xff, 0xff]);
    let out = run_bytesniff(&["--json"], file.path());

    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["signature"], "Possible custom compression");
    assert_eq!(value["inflate"]["status"], "failed");
    assert_eq!(value["inflate"]["attempts"], 4);

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("No raw deflate offset decoded"));
}
