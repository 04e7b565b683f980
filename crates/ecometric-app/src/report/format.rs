//! Number and currency formatting for reports and tables

/// Group the integer digits of a non-negative number string with commas
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Fixed-point formatting with thousands separators
pub fn format_decimal(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };
    let negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Whole number with thousands separators, e.g. `25,000`
pub fn format_number(value: f64) -> String {
    format_decimal(value, 0)
}

/// Whole dollars, e.g. `$1,250,000` / `-$3,400`
pub fn format_currency(value: f64) -> String {
    let body = format_number(value.abs());
    if value.round() < 0.0 {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// Euro amount with cents, used by the LCCA panel, e.g. `€ 1,234.50`
pub fn format_euro(value: f64) -> String {
    format!("€ {}", format_decimal(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.4), "999");
        assert_eq!(format_number(25000.0), "25,000");
        assert_eq!(format_number(1234567.8), "1,234,568");
        assert_eq!(format_number(-1234.0), "-1,234");
        assert_eq!(format_number(-0.2), "0");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1250000.0), "$1,250,000");
        assert_eq!(format_currency(-3400.4), "-$3,400");
        assert_eq!(format_currency(0.3), "$0");
    }

    #[test]
    fn test_format_euro() {
        assert_eq!(format_euro(350.0), "€ 350.00");
        assert_eq!(format_euro(1234.5), "€ 1,234.50");
        assert_eq!(format_euro(-12.5), "€ -12.50");
    }
}
