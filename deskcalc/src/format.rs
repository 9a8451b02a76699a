//! Operand parsing and canonical result text.

/// Fractional digits kept when a result is not integral.
pub const FRACTION_DIGITS: usize = 10;

/// Parse an operand as the engine writes them: an optional leading `-`,
/// digits, and at most one `.`. A trailing `.` (mid-entry) is accepted.
/// Exponents, `inf`, `NaN` and values that overflow to infinity are rejected.
pub fn parse_operand(text: &str) -> Option<f64> {
    let body = text.strip_prefix('-').unwrap_or(text);
    let mut digits = 0usize;
    let mut dots = 0usize;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return None,
        }
    }
    if digits == 0 || dots > 1 {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Canonical text for a finite result.
///
/// Integral values print without a decimal point. Anything else is rounded
/// to [`FRACTION_DIGITS`] places and printed in the shortest form that reads
/// back as the rounded value. Never uses an exponent, and never yields `-0`.
pub fn format_result(value: f64) -> String {
    let rounded = if value.fract() == 0.0 {
        value
    } else {
        format!("{:.*}", FRACTION_DIGITS, value)
            .parse::<f64>()
            .unwrap_or(value)
    };
    let text = format!("{}", rounded);
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse_operand("0"), Some(0.0));
        assert_eq!(parse_operand("42"), Some(42.0));
        assert_eq!(parse_operand("-4"), Some(-4.0));
        assert_eq!(parse_operand("3.25"), Some(3.25));
    }

    #[test]
    fn test_parse_mid_entry() {
        assert_eq!(parse_operand("3."), Some(3.0));
        assert_eq!(parse_operand("0."), Some(0.0));
        assert_eq!(parse_operand("-0."), Some(0.0));
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(parse_operand(""), None);
        assert_eq!(parse_operand("-"), None);
        assert_eq!(parse_operand("."), None);
        assert_eq!(parse_operand("1.2.3"), None);
        assert_eq!(parse_operand("1e5"), None);
        assert_eq!(parse_operand("inf"), None);
        assert_eq!(parse_operand("NaN"), None);
        assert_eq!(parse_operand("--1"), None);
        assert_eq!(parse_operand("+1"), None);
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let huge = "9".repeat(400);
        assert_eq!(parse_operand(&huge), None);
    }

    #[test]
    fn test_format_integers() {
        assert_eq!(format_result(2.0), "2");
        assert_eq!(format_result(-15.0), "-15");
        assert_eq!(format_result(0.0), "0");
        assert_eq!(format_result(-0.0), "0");
        assert_eq!(format_result(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_result(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_result(2.0 / 3.0), "0.6666666667");
        assert_eq!(format_result(0.5), "0.5");
        assert_eq!(format_result(-0.25), "-0.25");
        assert_eq!(format_result(0.1 + 0.2), "0.3");
    }

    #[test]
    fn test_format_rounds_away_tiny_values() {
        assert_eq!(format_result(1e-11), "0");
        assert_eq!(format_result(-1e-11), "0");
        assert_eq!(format_result(0.99999999999), "1");
    }

    #[test]
    fn test_format_large_fractions_have_no_float_noise() {
        assert_eq!(format_result(123456789.1), "123456789.1");
        assert_eq!(format_result(12345678.9), "12345678.9");
        assert_eq!(format_result(-98765432.25), "-98765432.25");
        assert_eq!(format_result(1234567.0 / 100.0), "12345.67");
    }

    #[test]
    fn test_format_never_uses_exponent() {
        assert_eq!(format_result(0.0000001), "0.0000001");
        assert!(!format_result(123456789012.5).contains('e'));
    }
}
