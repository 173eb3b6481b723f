//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::FnolField;

#[test]
fn test_unknown_field_from_parse() {
    let error = "Policy No.".parse::<FnolField>().unwrap_err();

    assert_eq!(error, CoreError::UnknownField("Policy No.".to_string()));
    assert_eq!(error.to_string(), "Unknown field: Policy No.");
}

#[test]
fn test_labels_are_case_sensitive() {
    let error = "policy number".parse::<FnolField>().unwrap_err();

    assert_eq!(error, CoreError::unknown_field("policy number"));
}
