// Number parsing and digit-string helpers shared by the formatter and the engine.

/// Parses the longest numeric prefix of `s`, the way a browser's `parseFloat`
/// does: leading whitespace is skipped, trailing garbage is ignored, and
/// `Infinity` is accepted. Returns `None` when no prefix is a number.
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let t = s.trim_start();
    let bytes = t.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if t[end..].starts_with("Infinity") {
        return Some(if t.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let int_digits = end - int_start;

    let mut frac_digits = 0;
    if end < bytes.len() && bytes[end] == b'.' {
        let mut j = end + 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = j - end - 1;
        if int_digits > 0 || frac_digits > 0 {
            end = j;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut j = end + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        // "2e" or "2e+" keep only the mantissa
        if j > exp_start {
            end = j;
        }
    }

    t[..end].parse::<f64>().ok()
}

/// Lenient decimal used for every form input: anything that does not parse,
/// parses to NaN, or parses to zero becomes `0.0`.
pub fn parse_decimal_or_zero(s: &str) -> f64 {
    number_or_zero(parse_float_prefix(s).unwrap_or(f64::NAN))
}

/// Collapses NaN and negative zero to `0.0`.
pub fn number_or_zero(value: f64) -> f64 {
    if value.is_nan() || value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Shortest round-trip decimal digits of `|value|`, split at the decimal point.
/// `1e300` gives `"1"` followed by 300 zeros, `1.5e-7` gives `("0", "00000015")`.
pub fn shortest_decimal(value: f64) -> (String, String) {
    let sci = format!("{:e}", value.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();

    // Position of the decimal point within `digits`.
    let point = 1 + exponent;
    if point <= 0 {
        let zeros = "0".repeat(point.unsigned_abs() as usize);
        ("0".to_string(), format!("{}{}", zeros, digits))
    } else if point as usize >= digits.len() {
        let zeros = "0".repeat(point as usize - digits.len());
        (format!("{}{}", digits, zeros), String::new())
    } else {
        let (int_digits, frac_digits) = digits.split_at(point as usize);
        (int_digits.to_string(), frac_digits.to_string())
    }
}

/// Splits `|value|` into integer and fraction digit strings, rounded to
/// `decimals` places half away from zero on the shortest decimal form of the
/// value, so `2.675` rounds to `2.68` like it reads.
pub fn round_half_away(value: f64, decimals: usize) -> (String, String) {
    let (int_part, frac_part) = shortest_decimal(value);

    let mut digits: Vec<u8> = int_part.bytes().collect();
    digits.extend(frac_part.bytes().chain(std::iter::repeat(b'0')).take(decimals));

    if frac_part.as_bytes().get(decimals).is_some_and(|d| *d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - decimals;
    let int_digits = digits[..split].iter().map(|&b| b as char).collect();
    let frac_digits = digits[split..].iter().map(|&b| b as char).collect();
    (int_digits, frac_digits)
}

/// Inserts `separator` between groups of three digits, counting from the right.
pub fn group_digits(int_digits: &str, separator: &str) -> String {
    let len = int_digits.chars().count();
    let mut out = String::with_capacity(int_digits.len() + len / 3 * separator.len());
    for (i, c) in int_digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_prefix_plain() {
        assert_eq!(parse_float_prefix("10"), Some(10.0));
        assert_eq!(parse_float_prefix("5.5"), Some(5.5));
        assert_eq!(parse_float_prefix("  -3.25"), Some(-3.25));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("7."), Some(7.0));
    }

    #[test]
    fn test_parse_float_prefix_ignores_trailing_text() {
        assert_eq!(parse_float_prefix("12abc"), Some(12.0));
        assert_eq!(parse_float_prefix("1.5.3"), Some(1.5));
        assert_eq!(parse_float_prefix("2e3kg"), Some(2000.0));
        assert_eq!(parse_float_prefix("2e"), Some(2.0));
        assert_eq!(parse_float_prefix("1,000"), Some(1.0));
    }

    #[test]
    fn test_parse_float_prefix_rejects_non_numbers() {
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("-"), None);
        assert_eq!(parse_float_prefix("nan"), None);
    }

    #[test]
    fn test_parse_float_prefix_infinity() {
        assert_eq!(parse_float_prefix("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_float_prefix("-Infinity and more"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_float_prefix("infinity"), None);
    }

    #[test]
    fn test_parse_decimal_or_zero() {
        assert_eq!(parse_decimal_or_zero("abc"), 0.0);
        assert_eq!(parse_decimal_or_zero(""), 0.0);
        assert_eq!(parse_decimal_or_zero("-0"), 0.0);
        assert!(parse_decimal_or_zero("-0").is_sign_positive());
        assert_eq!(parse_decimal_or_zero("4.75"), 4.75);
    }

    #[test]
    fn test_round_half_away() {
        assert_eq!(round_half_away(2.5, 0), ("3".to_string(), String::new()));
        assert_eq!(round_half_away(0.125, 2), ("0".to_string(), "13".to_string()));
        assert_eq!(round_half_away(-0.125, 2), ("0".to_string(), "13".to_string()));
        assert_eq!(round_half_away(9.999, 2), ("10".to_string(), "00".to_string()));
        assert_eq!(round_half_away(27.5, 2), ("27".to_string(), "50".to_string()));
        // stored as 1.00499999999999989... and 2.67499999999999982...
        assert_eq!(round_half_away(1.005, 2), ("1".to_string(), "01".to_string()));
        assert_eq!(round_half_away(2.675, 2), ("2".to_string(), "68".to_string()));
        assert_eq!(round_half_away(0.1 + 0.2, 3), ("0".to_string(), "300".to_string()));
        assert_eq!(round_half_away(0.004, 2), ("0".to_string(), "00".to_string()));
    }

    #[test]
    fn test_shortest_decimal_expands_exponents() {
        assert_eq!(shortest_decimal(2.675), ("2".to_string(), "675".to_string()));
        assert_eq!(shortest_decimal(0.0), ("0".to_string(), String::new()));
        assert_eq!(shortest_decimal(1.5e-7), ("0".to_string(), "00000015".to_string()));
        assert_eq!(shortest_decimal(1200.0), ("1200".to_string(), String::new()));

        let (int_digits, frac_digits) = shortest_decimal(1e300);
        assert_eq!(int_digits, format!("1{}", "0".repeat(300)));
        assert!(frac_digits.is_empty());
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("0", ","), "0");
        assert_eq!(group_digits("999", ","), "999");
        assert_eq!(group_digits("1000", ","), "1,000");
        assert_eq!(group_digits("1234567", "٬"), "1٬234٬567");
    }
}
