//! Number formatting for the result tables.

/// Format a price with exactly two decimals: 1.5 -> "1.50".
///
/// Currency markers are the caller's business; the tables prefix "$" per
/// cell and "SGD " on the total line.
pub fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_pads_and_rounds() {
        assert_eq!(format_price(1.5), "1.50");
        assert_eq!(format_price(1234.567), "1234.57");
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(-2.5), "-2.50");
    }
}
