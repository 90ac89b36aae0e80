//! Loading failures and the fatal path.

use crate::common::create_temp_file;
use bytesniff::{inspect, load_buffer, InspectConfig, InspectError};

#[test]
fn missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Mooney M20J 201 Checklists.gplts");
    let err = load_buffer(&path).unwrap_err();
    assert!(matches!(err, InspectError::Io { .. }));
    assert!(err.to_string().contains("Mooney M20J 201 Checklists.gplts"));
}

#[test]
fn directory_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_buffer(dir.path()),
        Err(InspectError::Io { .. })
    ));
}

#[test]
fn empty_file_inspects_cleanly() {
    let file = create_temp_file(b"");
    let buffer = load_buffer(file.path()).unwrap();
    let report = inspect(&buffer, &InspectConfig::default()).unwrap();
    assert_eq!(report.size, 0);
    assert_eq!(report.entropy, 0.0);
    assert!(report.head.is_empty());
    assert!(report.tail.is_empty());
    assert_eq!(report.strings.total, 0);
}

#[test]
fn head_and_tail_previews() {
    let data: Vec<u8> = (0..100u8).collect();
    let file = create_temp_file(&data);
    let buffer = load_buffer(file.path()).unwrap();
    let report = inspect(&buffer, &InspectConfig::default()).unwrap();
    assert_eq!(report.head, &data[..32]);
    assert_eq!(report.tail, &data[68..]);
}
