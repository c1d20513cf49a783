//! Number-to-text formatting for narrative copy and chart labels
//!
//! Percentages carry one decimal, currency is rounded to whole dollars with
//! thousands separators, and non-negative deltas get an explicit "+".

/// Insert thousands separators into a whole number
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Locale-style number: grouped integer part, at most three decimals
pub fn locale_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    let whole = rounded.trunc();
    let mut out = group_thousands(whole as i64);
    if rounded < 0.0 && whole == 0.0 {
        out.insert(0, '-');
    }
    let fraction = format!("{:.3}", rounded.abs().fract());
    let fraction = fraction.trim_start_matches('0').trim_end_matches('0');
    if fraction.len() > 1 {
        out.push_str(fraction);
    }
    out
}

/// `$1,234`
pub fn currency(value: f64) -> String {
    let rounded = value.round();
    let digits = group_thousands(rounded.abs() as i64);
    if rounded < 0.0 {
        format!("-${digits}")
    } else {
        format!("${digits}")
    }
}

/// `+$1,234` / `-$1,234`
pub fn signed_currency(value: f64) -> String {
    let sign = if value >= 0.0 { '+' } else { '-' };
    format!("{sign}${}", group_thousands(value.abs().round() as i64))
}

/// `+12.3%` / `-4.0%`
pub fn percent(value: f64) -> String {
    signed(value, 1, "%")
}

/// Fixed precision with an explicit "+" for non-negative values
pub fn signed(value: f64, decimals: usize, suffix: &str) -> String {
    // -0.0 + 0.0 is +0.0
    let value = value + 0.0;
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.decimals$}{suffix}")
}

/// Fixed precision without a forced sign
pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(-45_000), "-45,000");
    }

    #[test]
    fn test_currency_rounds_to_whole_dollars() {
        assert_eq!(currency(3612.6), "$3,613");
        assert_eq!(currency(-120.2), "-$120");
        assert_eq!(signed_currency(812.4), "+$812");
        assert_eq!(signed_currency(0.0), "+$0");
        assert_eq!(signed_currency(-1540.0), "-$1,540");
    }

    #[test]
    fn test_percent_sign_convention() {
        assert_eq!(percent(41.26), "+41.3%");
        assert_eq!(percent(0.0), "+0.0%");
        assert_eq!(percent(-3.04), "-3.0%");
        assert_eq!(signed(1.26, 1, " pts"), "+1.3 pts");
    }

    #[test]
    fn test_currency_saturates_on_extreme_values() {
        assert_eq!(currency(-1e19), "-$9,223,372,036,854,775,807");
        assert_eq!(currency(1e19), "$9,223,372,036,854,775,807");
        assert_eq!(currency(-0.4), "$0");
    }

    #[test]
    fn test_negative_zero_reads_as_zero() {
        assert_eq!(percent(-0.0), "+0.0%");
        assert_eq!(signed(-0.0, 1, " pts"), "+0.0 pts");
    }

    #[test]
    fn test_locale_number() {
        assert_eq!(locale_number(85000.0), "85,000");
        assert_eq!(locale_number(1234.5), "1,234.5");
        assert_eq!(locale_number(0.12345), "0.123");
        assert_eq!(locale_number(-0.5), "-0.5");
    }
}
