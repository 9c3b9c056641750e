//! Human-readable size formatting

const UNITS: [&str; 4] = ["bytes", "KB", "MB", "GB"];

/// Format a byte count with one decimal place, e.g. `1536` -> `"1.5 KB"`.
///
/// Units step by 1024; anything at or beyond 1024 GB is reported in TB.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;

    for unit in UNITS {
        if size < 1024.0 {
            return format!("{size:.1} {unit}");
        }
        size /= 1024.0;
    }

    format!("{size:.1} TB")
}
