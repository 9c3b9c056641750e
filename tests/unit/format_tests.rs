//! Unit tests for human-readable size formatting

use filescope::services::format::format_size;

#[test]
fn test_zero_bytes() {
    assert_eq!(format_size(0), "0.0 bytes");
}

#[test]
fn test_fractional_kilobytes() {
    assert_eq!(format_size(1536), "1.5 KB");
}

#[test]
fn test_unit_boundaries() {
    assert_eq!(format_size(1023), "1023.0 bytes");
    assert_eq!(format_size(1024), "1.0 KB");
    assert_eq!(format_size(1024 * 1024), "1.0 MB");
    assert_eq!(format_size(1024 * 1024 * 1024), "1.0 GB");
}

#[test]
fn test_terabytes_is_the_last_unit() {
    let tb = 1024_u64.pow(4);
    assert_eq!(format_size(tb), "1.0 TB");
    assert_eq!(format_size(tb * 1024), "1024.0 TB");
}
