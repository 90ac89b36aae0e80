//! Invariants that hold for every buffer.

use crate::common::{sample_buffers, zlib};
use bytesniff::entropy::{histogram, shannon_entropy};
use bytesniff::inflate::{attempt_inflate, DEFAULT_MAX_OUTPUT, DEFAULT_SCAN_LIMIT};
use bytesniff::patterns::pattern_counts;
use bytesniff::strings::{extract_strings, is_printable};

#[test]
fn histogram_counts_sum_to_length() {
    for data in sample_buffers() {
        let hist = histogram(&data);
        let sum: u64 = hist.iter().map(|(_, c)| c).sum();
        assert_eq!(sum, data.len() as u64);
    }
}

#[test]
fn entropy_is_bounded_and_zero_only_when_uniform() {
    for data in sample_buffers() {
        let hist = histogram(&data);
        let bits = shannon_entropy(&hist, data.len());
        assert!((0.0..=8.0).contains(&bits), "entropy {bits} out of range");
        if hist.distinct() <= 1 {
            assert_eq!(bits, 0.0);
        } else {
            assert!(bits > 0.0);
        }
    }
}

#[test]
fn pattern_observations_match_window_count() {
    for data in sample_buffers() {
        for len in [2usize, 4, 8] {
            let counts = pattern_counts(&data, len);
            let expected = if data.len() >= len {
                (data.len() - len + 1) as u64
            } else {
                0
            };
            assert_eq!(counts.observations(), expected);
            assert!(counts.repeated().iter().all(|p| p.count > 1));
        }
    }
}

#[test]
fn strings_are_printable_and_long_enough() {
    for data in sample_buffers() {
        for min_len in [3usize, 4, 8] {
            let mut last_end = None;
            for region in extract_strings(&data, min_len) {
                let bytes = &data[region.start..=region.end];
                assert!(bytes.iter().all(|&b| is_printable(b)));
                assert!(region.len() >= min_len);
                assert_eq!(region.text.as_bytes(), bytes);
                // Maximal runs: neighbours are not printable
                if region.start > 0 {
                    assert!(!is_printable(data[region.start - 1]));
                }
                if region.end + 1 < data.len() {
                    assert!(!is_printable(data[region.end + 1]));
                }
                // Offset order
                if let Some(prev) = last_end {
                    assert!(region.start > prev);
                }
                last_end = Some(region.end);
            }
        }
    }
}

#[test]
fn zlib_round_trip_recovers_original() {
    for data in sample_buffers() {
        let packed = zlib(&data);
        let outcome = attempt_inflate(&packed, DEFAULT_SCAN_LIMIT, DEFAULT_MAX_OUTPUT);
        let inflated = outcome.decoded().expect("zlib stream decodes");
        assert_eq!(inflated.size(), data.len() as u64);
        assert_eq!(inflated.data(), data);
    }
}
