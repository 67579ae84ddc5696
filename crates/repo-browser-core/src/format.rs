//! Formatting utilities for display values.

const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Placeholder for unknown sizes.
const UNKNOWN_SIZE: &str = "-";

/// Format a byte count for display (e.g. "1.5 KB").
///
/// Scales by 1024 until the value drops below 1024 or the unit is GB, then
/// prints one fractional digit. Missing and zero sizes render as `-`.
pub fn format_size(size: Option<u64>) -> String {
    let bytes = match size {
        None | Some(0) => return UNKNOWN_SIZE.to_string(),
        Some(bytes) => bytes,
    };

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.1} {}", value, SIZE_UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(None), "-");
        assert_eq!(format_size(Some(0)), "-");
        assert_eq!(format_size(Some(1)), "1.0 B");
        assert_eq!(format_size(Some(500)), "500.0 B");
        assert_eq!(format_size(Some(1023)), "1023.0 B");
        assert_eq!(format_size(Some(1024)), "1.0 KB");
        assert_eq!(format_size(Some(1536)), "1.5 KB");
        assert_eq!(format_size(Some(1_572_864)), "1.5 MB");
        assert_eq!(format_size(Some(1_073_741_824)), "1.0 GB");
    }

    #[test]
    fn test_format_size_caps_at_gb() {
        assert_eq!(format_size(Some(2 * 1024 * 1_073_741_824)), "2048.0 GB");
    }
}
