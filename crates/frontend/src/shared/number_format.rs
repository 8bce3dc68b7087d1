//! Number formatting for tables, following the ja-JP convention (`1,234,567`).

/// Форматирует число с разделителем тысяч и указанным количеством знаков после запятой
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", decimals as usize, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Целое число с разделителем тысяч
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Up to `max_decimals` fraction digits with trailing zeros dropped (`0.42`, `12`).
pub fn format_decimal(value: f64, max_decimals: u8) -> String {
    let formatted = format_number_with_decimals(value, max_decimals);
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

/// Optional value, `-` when missing.
pub fn format_optional(value: Option<f64>, max_decimals: u8) -> String {
    value
        .map(|v| format_decimal(v, max_decimals))
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(-1234567.891, 2), "-1,234,567.89");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1,234,567");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(999.0), "999");
        assert_eq!(format_number_int(-1234.0), "-1,234");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(0.42, 2), "0.42");
        assert_eq!(format_decimal(12.0, 2), "12");
        assert_eq!(format_decimal(1500.5, 2), "1,500.5");
        assert_eq!(format_optional(None, 2), "-");
    }
}
