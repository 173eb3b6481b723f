//! Damage amount normalization

use serde_json::Value;

use crate::extracted::FieldText;

/// Parses a free-form damage estimate into a number.
///
/// Everything except ASCII digits and `.` is dropped before parsing, so
/// `"$8,500.00"` becomes `8500.0`. Input that leaves nothing parsable, such
/// as `"$8,500.00 est."` (two decimal points), yields `0.0`.
pub fn parse_amount(value: &str) -> f64 {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return 0.0;
    }
    cleaned.parse().unwrap_or(0.0)
}

/// Parses a damage estimate held in a JSON value.
///
/// Numbers are returned unchanged, strings go through [`parse_amount`] and
/// anything else yields `0.0`.
pub fn parse_amount_value(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(text) => parse_amount(text),
        _ => 0.0,
    }
}

/// Parses the damage estimate of an extracted claim
pub fn parse_amount_field(value: &FieldText) -> f64 {
    match value {
        FieldText::Text(text) => parse_amount(text),
        FieldText::Other(value) => parse_amount_value(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_currency_formatting_is_stripped() {
        assert_eq!(parse_amount("$8,500.00"), 8500.0);
        assert_eq!(parse_amount("USD 12 000"), 12000.0);
        assert_eq!(parse_amount("3200"), 3200.0);
    }

    #[test]
    fn test_unparsable_yields_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("unknown"), 0.0);
        assert_eq!(parse_amount("."), 0.0);
        assert_eq!(parse_amount("$8,500.00 est."), 0.0);
        assert_eq!(parse_amount("1.2.3"), 0.0);
    }

    #[test]
    fn test_sign_is_dropped() {
        assert_eq!(parse_amount("-250"), 250.0);
    }

    #[test]
    fn test_json_values() {
        assert_eq!(parse_amount_value(&json!(18500)), 18500.0);
        assert_eq!(parse_amount_value(&json!(99.5)), 99.5);
        assert_eq!(parse_amount_value(&json!("$1,000")), 1000.0);
        assert_eq!(parse_amount_value(&json!(null)), 0.0);
        assert_eq!(parse_amount_value(&json!({ "amount": 5 })), 0.0);
    }

    #[test]
    fn test_claim_field() {
        assert_eq!(parse_amount_field(&FieldText::from("$3,200")), 3200.0);
        assert_eq!(parse_amount_field(&FieldText::Other(json!(18500))), 18500.0);
        assert_eq!(parse_amount_field(&FieldText::Other(json!(["3200"]))), 0.0);
    }
}
