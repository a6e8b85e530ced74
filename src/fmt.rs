//! Shared formatting helpers for the TUI and text reports.
//!
//! All pure formatting functions (no ratatui styles, no layout) live here.

/// Inserts `,` between groups of three digits in an unsigned digit string.
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a number with grouped thousands and at most three decimals.
///
/// `1234567.5` → `"1,234,567.5"`, `350000.0` → `"350,000"`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let formatted = format!("{:.3}", value.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if value < 0.0 && (int_part != "0" || !frac.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// `350000.0` → `"$350,000"`, `-1200.5` → `"-$1,200.5"`.
pub fn format_price(value: f64) -> String {
    let n = format_number(value);
    match n.strip_prefix('-') {
        Some(abs) => format!("-${}", abs),
        None => format!("${}", n),
    }
}

/// Axis-style price in thousands: `452310.0` → `"$452k"`.
pub fn format_price_k(value: f64) -> String {
    format!("${:.0}k", value / 1000.0)
}

/// `1800` → `"1,800 sqft"`.
pub fn format_sqft(sqft: u32) -> String {
    format!("{} sqft", group_digits(&sqft.to_string()))
}

/// One decimal with a percent sign: `4.26` → `"4.3%"`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_group_thousands() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(350_000.0), "350,000");
        assert_eq!(format_number(1_234_567.5), "1,234,567.5");
        assert_eq!(format_number(412_345.67), "412,345.67");
        assert_eq!(format_number(-2500.0), "-2,500");
    }

    #[test]
    fn prices_carry_currency_sign() {
        assert_eq!(format_price(350_000.0), "$350,000");
        assert_eq!(format_price(-1200.5), "-$1,200.5");
        assert_eq!(format_price_k(452_310.0), "$452k");
    }

    #[test]
    fn sizes_and_percents() {
        assert_eq!(format_sqft(1800), "1,800 sqft");
        assert_eq!(format_sqft(950), "950 sqft");
        assert_eq!(format_percent(4.0), "4.0%");
        assert_eq!(format_percent(-12.34), "-12.3%");
    }
}
