//! Utilities for date and time formatting
//!
//! Reshapes browser `datetime-local` values into the API server's wire shape.

use chrono::NaiveDateTime;

/// Convert a `datetime-local` value to the server's `YYYY-MM-DD HH:MM:SS`
/// shape. Browsers omit the seconds unless the input uses a sub-minute step,
/// so both variants are accepted; missing seconds become ":00".
/// Example: "2024-03-15T10:30" -> "2024-03-15 10:30:00"
pub fn normalize_datetime(raw: &str) -> String {
    const INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

    for format in INPUT_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return parsed.format("%Y-%m-%d %H:%M:%S").to_string();
        }
    }
    // Unrecognized input goes through with just the separator swapped,
    // leaving rejection to the server.
    raw.replace('T', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_with_seconds() {
        assert_eq!(
            normalize_datetime("2024-03-15T10:30:00"),
            "2024-03-15 10:30:00"
        );
        assert_eq!(
            normalize_datetime("2024-12-31T23:59:59"),
            "2024-12-31 23:59:59"
        );
    }

    #[test]
    fn test_normalize_adds_missing_seconds() {
        assert_eq!(
            normalize_datetime("2024-03-15T10:30"),
            "2024-03-15 10:30:00"
        );
    }

    #[test]
    fn test_unparsed_input_swaps_separator() {
        assert_eq!(normalize_datetime("2024-13-15T10:30"), "2024-13-15 10:30");
        assert_eq!(normalize_datetime("invalid"), "invalid");
    }
}
