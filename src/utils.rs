use crate::config::SECONDS_WIDTH;
use once_cell::sync::Lazy;
use regex::Regex;
use std::num::IntErrorKind;

// Leading integer, the way a browser's parseInt(value, 10) reads it: only
// JS whitespace is skipped and only ASCII digits count.
static LEADING_INT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\t\n\x0B\x0C\r\p{Zs}\x{2028}\x{2029}\x{FEFF}]*([+-]?)([0-9]+)")
        .expect("static regex is valid")
});

/// Coerce raw minute input into an integer.
///
/// Accepts optional leading whitespace and sign followed by ASCII digits;
/// trailing garbage is ignored (`"12abc"` is 12). Returns `None` when no
/// digits lead the input. Values beyond `i64` saturate.
///
/// # Examples
/// ```
/// use kitchen_timer::utils::parse_minutes;
/// assert_eq!(parse_minutes(" 15"), Some(15));
/// assert_eq!(parse_minutes("-3"), Some(-3));
/// assert_eq!(parse_minutes("2.5"), Some(2));
/// assert_eq!(parse_minutes("soon"), None);
/// ```
pub fn parse_minutes(raw: &str) -> Option<i64> {
    let caps = LEADING_INT_REGEX.captures(raw)?;
    let negative = &caps[1] == "-";
    let magnitude = match caps[2].parse::<i64>() {
        Ok(value) => value,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => i64::MAX,
        Err(_) => return None,
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// Left-pad `number` with zeros up to `size` characters. Never truncates.
pub fn zero_pad(number: u64, size: usize) -> String {
    format!("{:0>width$}", number, width = size)
}

/// Render a window title like `"4:05 - Kitchen Timer"`.
pub fn format_title(minutes: u64, seconds: u64, postfix: &str) -> String {
    format!("{}:{} - {}", minutes, zero_pad(seconds, SECONDS_WIDTH), postfix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_pad_pads_short_numbers() {
        assert_eq!(zero_pad(5, 2), "05");
        assert_eq!(zero_pad(0, 2), "00");
        assert_eq!(zero_pad(7, 4), "0007");
    }

    #[test]
    fn zero_pad_leaves_wide_numbers_alone() {
        assert_eq!(zero_pad(42, 2), "42");
        assert_eq!(zero_pad(123, 2), "123");
        assert_eq!(zero_pad(9, 0), "9");
    }

    #[test]
    fn title_pads_seconds_but_not_minutes() {
        assert_eq!(format_title(1, 0, "Kitchen Timer"), "1:00 - Kitchen Timer");
        assert_eq!(format_title(125, 9, "Kitchen Timer"), "125:09 - Kitchen Timer");
        assert_eq!(format_title(0, 59, "x"), "0:59 - x");
    }

    #[test]
    fn parse_minutes_reads_leading_integer() {
        assert_eq!(parse_minutes("10"), Some(10));
        assert_eq!(parse_minutes("  7"), Some(7));
        assert_eq!(parse_minutes("+4"), Some(4));
        assert_eq!(parse_minutes("12abc"), Some(12));
        assert_eq!(parse_minutes("3.9"), Some(3));
        assert_eq!(parse_minutes("-20"), Some(-20));
    }

    #[test]
    fn parse_minutes_rejects_non_numeric() {
        assert_eq!(parse_minutes(""), None);
        assert_eq!(parse_minutes("   "), None);
        assert_eq!(parse_minutes("abc"), None);
        assert_eq!(parse_minutes("-"), None);
        assert_eq!(parse_minutes(".5"), None);
    }

    #[test]
    fn parse_minutes_ignores_non_ascii_digits() {
        assert_eq!(parse_minutes("\u{0663}"), None);
        assert_eq!(parse_minutes("\u{0661}\u{0662}"), None);
        assert_eq!(parse_minutes("\u{FF15}"), None);
        assert_eq!(parse_minutes("4\u{0663}"), Some(4));
    }

    #[test]
    fn parse_minutes_skips_only_browser_whitespace() {
        assert_eq!(parse_minutes("\t\r\n 8"), Some(8));
        assert_eq!(parse_minutes("\u{00A0}8"), Some(8));
        assert_eq!(parse_minutes("\u{3000}8"), Some(8));
        assert_eq!(parse_minutes("\u{FEFF}8"), Some(8));
        assert_eq!(parse_minutes("\u{2028}8"), Some(8));
        assert_eq!(parse_minutes("\u{0085}8"), None);
    }

    #[test]
    fn parse_minutes_saturates_huge_values() {
        assert_eq!(parse_minutes("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_minutes("-99999999999999999999999"), Some(-i64::MAX));
    }
}
