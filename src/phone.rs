//! Brazilian mobile number mask: `(95) 99999-9999`.
//!
//! Formatting is idempotent, so it can be re-applied on every keystroke.

fn digits_of(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).take(11).collect()
}

/// Masks raw input progressively as the user types. Non-digits are stripped
/// and anything past 11 digits is dropped.
pub fn format(raw: &str) -> String {
    let digits = digits_of(raw);

    match digits.len() {
        0 => String::new(),
        1..=2 => format!("({digits}"),
        3..=7 => format!("({}) {}", &digits[..2], &digits[2..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

/// A number is complete at exactly 11 digits: 2-digit area code plus the
/// 9-digit mobile number.
pub fn is_valid(masked: &str) -> bool {
    masked.chars().filter(|c| c.is_ascii_digit()).count() == 11
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_progressive() {
        assert_eq!(format(""), "");
        assert_eq!(format("9"), "(9");
        assert_eq!(format("95"), "(95");
        assert_eq!(format("959"), "(95) 9");
        assert_eq!(format("95999"), "(95) 999");
        assert_eq!(format("9599999"), "(95) 99999");
        assert_eq!(format("95999999"), "(95) 99999-9");
        assert_eq!(format("95999999999"), "(95) 99999-9999");
    }

    #[test]
    fn test_format_strips_junk() {
        assert_eq!(format("(95) 99999-9999"), "(95) 99999-9999");
        assert_eq!(format("95 9.9999-9999"), "(95) 99999-9999");
        assert_eq!(format("abc95x9"), "(95) 9");
    }

    #[test]
    fn test_format_truncates_past_eleven_digits() {
        assert_eq!(format("959999999991234"), "(95) 99999-9999");
    }

    #[test]
    fn test_format_is_idempotent() {
        for raw in ["9", "959", "95999999", "95999999999"] {
            let once = format(raw);
            assert_eq!(format(&once), once);
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid("(95) 99999-9999"));
        assert!(is_valid("95999999999"));
        assert!(!is_valid(""));
        assert!(!is_valid("(95) 99999-999"));
        assert!(!is_valid("nope"));
    }
}
