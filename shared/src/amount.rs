//! Text <-> number conversions for budget amounts.
//!
//! Amounts are edited as text so that partial input such as `"12."` or `"-"`
//! survives between keystrokes. Stored text always uses `.` as the decimal
//! separator.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Optional sign, digits, at most one separator (period or comma), digits.
    static ref AMOUNT_INPUT: Regex = Regex::new(r"^-?[0-9]*[.,]?[0-9]*$").unwrap();
}

/// Format an amount with exactly two decimals
pub fn format_amount(amount: f64) -> String {
    if amount.is_finite() {
        format!("{:.2}", amount)
    } else {
        "0.00".to_string()
    }
}

/// Whether `raw` is a complete or partial decimal numeral the form accepts
pub fn is_acceptable(raw: &str) -> bool {
    raw.is_empty() || AMOUNT_INPUT.is_match(raw)
}

/// Validate and normalize user input, returning `None` when it is rejected
pub fn normalize(raw: &str) -> Option<String> {
    if !is_acceptable(raw) {
        return None;
    }
    Some(raw.replacen(',', ".", 1))
}

/// Numeric value of stored amount text; blank or unparsable text is 0
pub fn parse_amount(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        // `-0` and overflowing digit strings both collapse to 0
        Ok(value) if value.is_finite() && value != 0.0 => value,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_two_decimals() {
        assert_eq!(format_amount(12.0), "12.00");
        assert_eq!(format_amount(100.0), "100.00");
        assert_eq!(format_amount(12.5), "12.50");
        assert_eq!(format_amount(-3.25), "-3.25");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(f64::NAN), "0.00");
    }

    #[test]
    fn test_accepts_partial_numerals() {
        for raw in ["", "1", "12", "-", "-12", "12.", "12,", ".5", ",5", "12.50", "-0,75", "."] {
            assert!(is_acceptable(raw), "expected {:?} to be accepted", raw);
        }
    }

    #[test]
    fn test_rejects_malformed_input() {
        for raw in ["1.2.3", "1,2,3", "1.2,3", "abc", "12a", "--1", "1-", "+5", " 12", "1e5", "١٢"] {
            assert!(!is_acceptable(raw), "expected {:?} to be rejected", raw);
        }
    }

    #[test]
    fn test_normalize_rewrites_comma() {
        assert_eq!(normalize("12,5").as_deref(), Some("12.5"));
        assert_eq!(normalize("-0,75").as_deref(), Some("-0.75"));
        assert_eq!(normalize("12.5").as_deref(), Some("12.5"));
        assert_eq!(normalize("").as_deref(), Some(""));
        assert_eq!(normalize("1.2.3"), None);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["12,5", "12.5", "", "-", ",", "-3,", "42"] {
            let once = normalize(raw).unwrap();
            let twice = normalize(&once).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_normalized_text_never_has_two_separators() {
        let inputs = ["1.2.3", "1,,2", "12,5", "1.2,3", ".,", "9.", "-,1"];
        for raw in inputs {
            if let Some(stored) = normalize(raw) {
                let separators = stored.chars().filter(|c| *c == '.' || *c == ',').count();
                assert!(separators <= 1, "{:?} stored as {:?}", raw, stored);
                assert!(!stored.contains(','));
            }
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100.00"), 100.0);
        assert_eq!(parse_amount("12.5"), 12.5);
        assert_eq!(parse_amount("12."), 12.0);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("-4"), -4.0);
    }

    #[test]
    fn test_parse_amount_falls_back_to_zero() {
        for text in ["", "-", ".", "-.", "abc"] {
            assert_eq!(parse_amount(text), 0.0, "text {:?}", text);
        }
        let negative_zero = parse_amount("-0");
        assert_eq!(negative_zero, 0.0);
        assert!(negative_zero.is_sign_positive());

        let huge = "9".repeat(400);
        assert_eq!(parse_amount(&huge), 0.0);
    }
}
