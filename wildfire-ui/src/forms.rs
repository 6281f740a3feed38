//! Form Input Parsing
//!
//! Text inputs are converted the way the browser's `parseFloat` and
//! `parseInt` do it: leading whitespace is skipped, the longest numeric
//! prefix is used, and anything else yields NaN / no value. No range
//! validation happens here; the server receives what the user typed.

/// Parse the longest decimal prefix of `input`, or NaN.
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();

    let unsigned = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    if unsigned.starts_with("Infinity") {
        return if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let end = float_prefix_len(s.as_bytes());
    if end == 0 {
        return f64::NAN;
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// Parse the leading integer of `input` as a JS number: base 10, or base 16
/// after a `0x` prefix. Values beyond `i64` stay representable, as in the
/// browser.
pub fn parse_int(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let len = digits
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map_or(digits.len(), |(i, _)| i);
    if len == 0 {
        return None;
    }

    let value = if radix == 10 {
        digits[..len].parse::<f64>().ok()?
    } else {
        digits[..len]
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d))
    };

    Some(if negative { -value } else { value })
}

/// Length of the `[sign] digits [. digits] [e [sign] digits]` prefix.
fn float_prefix_len(bytes: &[u8]) -> usize {
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i = 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        if mantissa_digits > 0 {
            i = j;
        }
    }

    if mantissa_digits == 0 {
        return 0;
    }

    // Exponent only counts when it has digits
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

/// Render a number the way it appears when written into a text input.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_plain() {
        assert_eq!(parse_float("36.5"), 36.5);
        assert_eq!(parse_float("  -4"), -4.0);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("1e3"), 1000.0);
    }

    #[test]
    fn test_parse_float_takes_numeric_prefix() {
        assert_eq!(parse_float("42kmh"), 42.0);
        assert_eq!(parse_float("3.14.15"), 3.14);
        assert_eq!(parse_float("7e"), 7.0);
        assert_eq!(parse_float("5."), 5.0);
    }

    #[test]
    fn test_parse_float_invalid_is_nan() {
        assert!(parse_float("").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float(".").is_nan());
    }

    #[test]
    fn test_parse_float_infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("1"), Some(1.0));
        assert_eq!(parse_int(" 0 "), Some(0.0));
        assert_eq!(parse_int("3.7"), Some(3.0));
        assert_eq!(parse_int("-2x"), Some(-2.0));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("yes"), None);
        assert_eq!(parse_int("-"), None);
    }

    #[test]
    fn test_parse_int_hex_and_large_values() {
        assert_eq!(parse_int("0x1A"), Some(26.0));
        assert_eq!(parse_int("-0Xff"), Some(-255.0));
        assert_eq!(parse_int("0x"), None);
        assert_eq!(parse_int("99999999999999999999"), Some(1e20));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(25.0), "25");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(36.72), "36.72");
    }
}
