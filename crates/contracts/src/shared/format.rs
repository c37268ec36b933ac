//! Number and currency formatting for the dashboard (en-US rules).

/// Inserts a thousands separator every three digits of an unsigned digit string.
fn group_digits(digits: &str, separator: char) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Formats a value with comma grouping and a fixed number of decimals.
///
/// ```
/// use contracts::shared::format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    let grouped = group_digits(integer_part, ',');
    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Formats a count with comma grouping, e.g. `3781` → `"3,781"`.
pub fn format_integer(value: u64) -> String {
    group_digits(&value.to_string(), ',')
}

/// Formats a US-dollar amount.
///
/// Whole amounts carry no decimals (`$695`), anything else is shown with two
/// (`$6,518.18`, `$128.50`).
pub fn format_currency(amount: f64) -> String {
    let decimals = if amount.fract() == 0.0 { 0 } else { 2 };
    let body = format_number_with_decimals(amount.abs(), decimals);
    if amount < 0.0 {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// Formats a percentage using the shortest representation of the value, e.g. `30.1%`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integer() {
        assert_eq!(format_integer(0), "0");
        assert_eq!(format_integer(999), "999");
        assert_eq!(format_integer(1219), "1,219");
        assert_eq!(format_integer(3781), "3,781");
        assert_eq!(format_integer(1234567), "1,234,567");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(-1234.5, 2), "-1,234.50");
        assert_eq!(format_number_with_decimals(-0.001, 2), "0.00");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(695.0), "$695");
        assert_eq!(format_currency(20.0), "$20");
        assert_eq!(format_currency(79.49), "$79.49");
        assert_eq!(format_currency(128.5), "$128.50");
        assert_eq!(format_currency(6518.18), "$6,518.18");
        assert_eq!(format_currency(58211.0), "$58,211");
        assert_eq!(format_currency(-48.96), "-$48.96");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(30.1), "30.1%");
        assert_eq!(format_percent(38.6), "38.6%");
        assert_eq!(format_percent(100.0), "100%");
    }
}
