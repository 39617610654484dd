//! Locale-tolerant numeric parsing of stored characteristic values.
//!
//! Stored values are opaque strings; numeric interpretation happens at
//! read time only. Parsing is a total function: anything that does not
//! look like a number yields `None`, never an error.

/// Parse free-form text as a number.
///
/// Trims whitespace and accepts a comma as the decimal separator.
/// Non-finite results are treated as unparseable.
pub fn parse_numeric(text: &str) -> Option<f64> {
    let cleaned = text.trim().replace(',', ".");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integers_and_decimals() {
        assert_eq!(parse_numeric("430"), Some(430.0));
        assert_eq!(parse_numeric("430.0"), Some(430.0));
        assert_eq!(parse_numeric("-12.5"), Some(-12.5));
    }

    #[test]
    fn test_comma_decimal_separator() {
        assert_eq!(parse_numeric("3,14"), Some(3.14));
        assert_eq!(parse_numeric("  1,5  "), Some(1.5));
    }

    #[test]
    fn test_non_numeric_yields_none() {
        assert_eq!(parse_numeric("N/A"), None);
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("   "), None);
        assert_eq!(parse_numeric("12 m"), None);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(parse_numeric("inf"), None);
        assert_eq!(parse_numeric("NaN"), None);
    }
}
