//! Post-processing of extracted fields
//!
//! Cleans the raw JSON object returned by the model before it becomes an
//! [`ExtractedClaim`]: every field is present, whitespace is collapsed,
//! leftover template text is blanked and Contact Details has its
//! `{phone, email}` shape.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Map, Value};

use core_kernel::FnolField;
use domain_claims::ExtractedClaim;

/// Template-text patterns, matched against the lower-cased value
pub const TEMPLATE_PATTERNS: &[&str] = &[
    r"^enter\s+.+\s+here$",
    r"^\[.+\]$",
    r"^click\s+to\s+enter",
    r"^select\s+.+",
    r"^type\s+.+",
    r"^please\s+enter",
    r"^n/a$",
    r"^not\s+applicable$",
    r"^\s*$",
];

static TEMPLATE_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    TEMPLATE_PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern).expect("template pattern is valid"))
        .collect()
});

/// Cleans a raw model object and builds the claim from it
pub fn post_process(mut fields: Map<String, Value>) -> ExtractedClaim {
    for field in FnolField::ALL {
        fields
            .entry(field.as_str())
            .or_insert_with(|| Value::String(String::new()));
    }

    for value in fields.values_mut() {
        if let Value::String(text) = value {
            *text = clean_text(text);
        }
    }

    normalize_contact(&mut fields);

    ExtractedClaim::from_value(Value::Object(fields))
}

/// Collapses whitespace and blanks template text
pub fn clean_text(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if is_template_text(&collapsed) {
        String::new()
    } else {
        collapsed
    }
}

/// Returns true if the text matches one of the template patterns
pub fn is_template_text(text: &str) -> bool {
    let lower = text.to_lowercase();
    TEMPLATE_REGEXES.iter().any(|regex| regex.is_match(&lower))
}

fn normalize_contact(fields: &mut Map<String, Value>) {
    let key = FnolField::ContactDetails.as_str();
    match fields.get_mut(key) {
        Some(Value::Object(contact)) => {
            for part in ["phone", "email"] {
                contact
                    .entry(part)
                    .or_insert_with(|| Value::String(String::new()));
            }
        }
        _ => {
            fields.insert(key.to_string(), json!({ "phone": "", "email": "" }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_claims::{validate_and_route, FieldText, Route};

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_template_text() {
        assert!(is_template_text("Enter policy number here"));
        assert!(is_template_text("[Insert date]"));
        assert!(is_template_text("Click to enter a date."));
        assert!(is_template_text("Select one"));
        assert!(is_template_text("N/A"));
        assert!(is_template_text("Not Applicable"));
        assert!(is_template_text(""));
        assert!(!is_template_text("NA"));
        assert!(!is_template_text("Selected vehicle was parked"));
        assert!(!is_template_text("123 Main Street"));
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("  John \n  Smith "), "John Smith");
        assert_eq!(clean_text("Enter   name\there"), "");
    }

    #[test]
    fn test_missing_keys_are_added() {
        let claim = post_process(object(json!({ "Policy Number": "P-1" })));

        assert_eq!(claim.policy_number, "P-1");
        assert_eq!(claim.description, "");
        assert_eq!(claim.contact_details.phone, "");
    }

    #[test]
    fn test_contact_details_shape() {
        let claim = post_process(object(json!({
            "Contact Details": { "phone": "+1-555-123-4567" }
        })));
        assert_eq!(claim.contact_details.phone, "+1-555-123-4567");
        assert_eq!(claim.contact_details.email, "");

        let claim = post_process(object(json!({ "Contact Details": "555-0100" })));
        assert_eq!(claim.contact_details.phone, "");
    }

    #[test]
    fn test_non_string_values_pass_through_untouched() {
        let claim = post_process(object(json!({ "Estimated Damage": 18500 })));

        assert_eq!(claim.estimated_damage, FieldText::Other(json!(18500)));
        assert_eq!(validate_and_route(&claim).route, Route::ManualReview);
    }
}
