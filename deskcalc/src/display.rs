//! Fitting the engine's `current` text into the primary display.
//!
//! The engine never truncates; long operands are shortened here, first to
//! scientific notation and, when the text is not a number (mid-entry states
//! such as `"-"`), by cutting it and appending an ellipsis.

use deskcore::safety::{char_len, prefix_chars};
use serde::{Deserialize, Serialize};

use crate::format::parse_operand;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Longest text shown as-is.
    pub max_chars: usize,
    /// Mantissa digits after the point in scientific notation.
    pub sci_precision: usize,
    /// Appended when text is cut.
    pub ellipsis: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_chars: 15,
            sci_precision: 6,
            ellipsis: "...".to_string(),
        }
    }
}

impl DisplayConfig {
    /// Text for the primary display line.
    pub fn fit(&self, current: &str) -> String {
        if char_len(current) <= self.max_chars {
            return current.to_string();
        }
        match parse_operand(current) {
            Some(value) => scientific(value, self.sci_precision),
            None => format!("{}{}", prefix_chars(current, self.max_chars), self.ellipsis),
        }
    }
}

/// `d.dddddde+XX`: signed exponent, at least two digits.
pub fn scientific(value: f64, precision: usize) -> String {
    let raw = format!("{:.*e}", precision, value);
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return raw;
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_verbatim() {
        let cfg = DisplayConfig::default();
        assert_eq!(cfg.fit("0"), "0");
        assert_eq!(cfg.fit("0.3333333333"), "0.3333333333");
        assert_eq!(cfg.fit("123456789012345"), "123456789012345");
        assert_eq!(cfg.fit("-"), "-");
    }

    #[test]
    fn test_long_number_goes_scientific() {
        let cfg = DisplayConfig::default();
        assert_eq!(cfg.fit("1234567890123456"), "1.234568e+15");
        assert_eq!(cfg.fit("-1234567890123456"), "-1.234568e+15");
        assert_eq!(cfg.fit("0.00000000000001"), "1.000000e-14");
    }

    #[test]
    fn test_unparsable_long_text_truncated() {
        let cfg = DisplayConfig::default();
        let huge = "9".repeat(400);
        assert_eq!(cfg.fit(&huge), format!("{}...", "9".repeat(15)));
    }

    #[test]
    fn test_custom_budget() {
        let cfg = DisplayConfig {
            max_chars: 4,
            sci_precision: 2,
            ellipsis: "…".to_string(),
        };
        assert_eq!(cfg.fit("1234"), "1234");
        assert_eq!(cfg.fit("12345"), "1.23e+04");
        assert_eq!(cfg.fit("1.2.3.4"), "1.2.…");
    }

    #[test]
    fn test_scientific_exponent_padding() {
        assert_eq!(scientific(1e100, 1), "1.0e+100");
        assert_eq!(scientific(2.5e-7, 3), "2.500e-07");
        assert_eq!(scientific(0.0, 2), "0.00e+00");
    }

    #[test]
    fn test_partial_config_json() {
        let cfg: DisplayConfig = serde_json::from_str(r#"{"max_chars": 20}"#).unwrap();
        assert_eq!(cfg.max_chars, 20);
        assert_eq!(cfg.sci_precision, 6);
        assert_eq!(cfg.ellipsis, "...");
    }
}
