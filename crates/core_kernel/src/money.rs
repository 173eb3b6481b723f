//! USD amount formatting
//!
//! Routing explanations quote damage amounts as `$1,234,567.50`: a dollar
//! sign, comma thousands separators and exactly two decimal places.

/// Formats an amount as US dollars with thousands separators
///
/// # Examples
///
/// ```rust
/// use core_kernel::format_usd;
///
/// assert_eq!(format_usd(1234567.5), "$1,234,567.50");
/// assert_eq!(format_usd(0.0), "$0.00");
/// ```
pub fn format_usd(amount: f64) -> String {
    format!("${}", format_grouped(amount, 2))
}

/// Formats a number with a fixed number of decimals and comma grouping
/// of the integer part.
pub fn format_grouped(amount: f64, decimals: usize) -> String {
    if amount.is_nan() {
        return "nan".to_string();
    }
    if amount.is_infinite() {
        return if amount.is_sign_negative() { "-inf" } else { "inf" }.to_string();
    }

    let fixed = format!("{:.*}", decimals, amount.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    if amount.is_sign_negative() && fixed.bytes().any(|b| b != b'0' && b != b'.') {
        grouped.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd_small() {
        assert_eq!(format_usd(3200.0), "$3,200.00");
        assert_eq!(format_usd(999.0), "$999.00");
        assert_eq!(format_usd(0.5), "$0.50");
    }

    #[test]
    fn test_format_usd_large() {
        assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_usd(1234567.5), "$1,234,567.50");
    }

    #[test]
    fn test_format_usd_rounds_to_cents() {
        assert_eq!(format_usd(4999.999), "$5,000.00");
        assert_eq!(format_usd(24999.99), "$24,999.99");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_usd(-1234.5), "$-1,234.50");
        assert_eq!(format_grouped(-0.001, 2), "0.00");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_usd(f64::INFINITY), "$inf");
        assert_eq!(format_grouped(f64::NAN, 2), "nan");
    }
}
