/// Number of fractional digits in every rendered result
pub const FRACTION_DIGITS: usize = 4;

/// Render a value with exactly four fractional digits.
/// Always uses '.' as the decimal separator.
pub fn format_value(value: f64) -> String {
    format!("{:.*}", FRACTION_DIGITS, value)
}

/// Render a value followed by a unit label (e.g. "2.5400 Centimeter")
pub fn format_with_label(value: f64, label: &str) -> String {
    format!("{} {}", format_value(value), label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_fraction_digits() {
        assert_eq!(format_value(0.0), "0.0000");
        assert_eq!(format_value(1.0), "1.0000");
        assert_eq!(format_value(3.280839895), "3.2808");
        assert_eq!(format_value(-0.5), "-0.5000");
        assert_eq!(format_value(1234567.0), "1234567.0000");
        assert_eq!(format_value(0.00004), "0.0000");
    }

    #[test]
    fn test_with_label() {
        assert_eq!(format_with_label(2.54, "Centimeter"), "2.5400 Centimeter");
    }
}
