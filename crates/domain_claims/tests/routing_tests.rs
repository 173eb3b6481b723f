//! Comprehensive tests for domain_claims

use proptest::prelude::*;

use core_kernel::FnolField;
use domain_claims::{
    find_missing, parse_amount, validate_and_route, ContactDetails, ExtractedClaim, FieldValue,
    Route,
};
use domain_claims::placeholder::{classify_name, classify_placeholder, is_placeholder_text};
use test_utils::{
    arbitrary_claim_strategy, assert_missing, assert_nothing_missing, assert_route, assert_routed,
    form_label_strategy, placeholder_token_strategy, routable_claim_strategy, valid_name_strategy,
    ClaimFixtures, ExtractedClaimBuilder,
};

// ============================================================================
// Scenario Tests
// ============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn test_end_to_end_fast_track() {
        let claim = ExtractedClaimBuilder::new()
            .with_description("minor fender bender, no injuries")
            .with_estimated_damage("3200")
            .build();

        let result = validate_and_route(&claim);

        assert_nothing_missing(&result);
        assert_routed(&result, Route::FastTrack, "Low damage: $3,200.00");
    }

    #[test]
    fn test_fraud_precedes_damage_amount() {
        let claim = ExtractedClaimBuilder::new()
            .with_description("Other driver claims a staged collision suspected by witnesses")
            .with_estimated_damage("50000")
            .build();

        let result = validate_and_route(&claim);

        assert_routed(&result, Route::InvestigationFlag, "Potential fraud indicators");
    }

    #[test]
    fn test_business_name_is_not_missing() {
        let result = validate_and_route(&ClaimFixtures::business_policyholder());

        assert_nothing_missing(&result);
        assert_routed(&result, Route::StandardReview, "Moderate damage: $18,500.00");
    }

    #[test]
    fn test_policy_number_label_echo_is_missing() {
        let claim = ExtractedClaimBuilder::new()
            .with_policy_number("POLICY NUMBER")
            .build();

        let result = validate_and_route(&claim);

        assert_missing(&result, &[FnolField::PolicyNumber]);
        assert_routed(&result, Route::ManualReview, "Missing: Policy Number");
    }

    #[test]
    fn test_blank_form_reports_every_required_field() {
        let result = validate_and_route(&ClaimFixtures::blank_form());

        assert_missing(&result, &FnolField::ROUTING_REQUIRED);
        assert_routed(
            &result,
            Route::ManualReview,
            "Missing: Policy Number, Policyholder Name, Date, Description, Estimated Damage, Location",
        );
    }

    #[test]
    fn test_injury_claim_type_goes_to_specialist() {
        let claim = ExtractedClaimBuilder::new()
            .with_claim_type("Bodily Injury")
            .with_estimated_damage("2000000")
            .build();

        assert_routed(&validate_and_route(&claim), Route::SpecialistQueue, "Injury/medical related");
    }

    #[test]
    fn test_random_policyholder_names_pass() {
        for _ in 0..20 {
            assert_nothing_missing(&validate_and_route(&ClaimFixtures::with_random_policyholder()));
        }
    }

    #[test]
    fn test_unparsable_damage_fails_safe_to_zero() {
        let claim = ExtractedClaimBuilder::new()
            .with_estimated_damage("$8,500.00 est.")
            .build();

        assert_routed(&validate_and_route(&claim), Route::FastTrack, "Low damage: $0.00");
    }

    #[test]
    fn test_numeric_damage_is_missing() {
        let mut fields = test_utils::ExtractionFixtures::complete_json();
        fields["Estimated Damage"] = serde_json::json!(18500);

        let result = validate_and_route(&ExtractedClaim::from_value(fields));

        assert_missing(&result, &[FnolField::EstimatedDamage]);
        assert_routed(&result, Route::ManualReview, "Missing: Estimated Damage");
    }

    #[test]
    fn test_list_description_is_missing() {
        let mut fields = test_utils::ExtractionFixtures::complete_json();
        fields["Description"] = serde_json::json!(["rear-ended", "bumper"]);

        let result = validate_and_route(&ExtractedClaim::from_value(fields));

        assert_missing(&result, &[FnolField::Description]);
        assert_routed(&result, Route::ManualReview, "Missing: Description");
    }

    #[test]
    fn test_contact_details_do_not_affect_routing() {
        let claim = ExtractedClaimBuilder::new().with_contact("", "").build();
        assert_route(&validate_and_route(&claim), Route::FastTrack);
    }
}

// ============================================================================
// Threshold Tests
// ============================================================================

mod thresholds {
    use super::*;

    fn route_for(damage: &str) -> Route {
        let claim = ExtractedClaimBuilder::new().with_estimated_damage(damage).build();
        validate_and_route(&claim).route
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(route_for("4999.99"), Route::FastTrack);
        assert_eq!(route_for("5000.00"), Route::StandardReview);
        assert_eq!(route_for("24999.99"), Route::StandardReview);
        assert_eq!(route_for("25000.00"), Route::ExtendedReview);
        assert_eq!(route_for("99999.99"), Route::ExtendedReview);
        assert_eq!(route_for("100000.00"), Route::HighValueReview);
        assert_eq!(route_for("999999.99"), Route::HighValueReview);
        assert_eq!(route_for("1000000.00"), Route::ExecutiveReview);
    }

    #[test]
    fn test_formatted_amounts() {
        assert_eq!(parse_amount("$8,500.00"), 8500.0);

        let claim = ExtractedClaimBuilder::new().with_estimated_damage("$1,234,567.50").build();
        let result = validate_and_route(&claim);
        assert_routed(&result, Route::ExecutiveReview, "Very high value: $1,234,567.50");
    }
}

// ============================================================================
// Classifier Tests
// ============================================================================

mod classifiers {
    use super::*;

    #[test]
    fn test_non_text_is_placeholder() {
        let contact = ContactDetails::default();
        assert!(classify_placeholder(FieldValue::Contact(&contact)));
        assert!(!classify_name(FieldValue::Contact(&contact)));
    }

    #[test]
    fn test_business_name() {
        assert!(classify_name(FieldValue::Text("QUICK DELIVERY SERVICES LLC")));
    }

    #[test]
    fn test_name_with_digits_is_missing() {
        let claim = ExtractedClaimBuilder::new().with_policyholder_name("Policy 12345").build();
        assert_eq!(find_missing(&claim), vec![FnolField::PolicyholderName]);
    }

    #[test]
    fn test_missing_order_is_declaration_order() {
        let claim = ExtractedClaimBuilder::new()
            .without(FnolField::Location)
            .with(FnolField::Date, "N/A")
            .without(FnolField::PolicyNumber)
            .build();

        assert_eq!(
            find_missing(&claim),
            vec![FnolField::PolicyNumber, FnolField::Date, FnolField::Location]
        );
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_routing_is_idempotent(claim in arbitrary_claim_strategy()) {
        prop_assert_eq!(validate_and_route(&claim), validate_and_route(&claim));
    }

    #[test]
    fn prop_missing_fields_force_manual_review(claim in arbitrary_claim_strategy()) {
        let result = validate_and_route(&claim);
        if !result.missing.is_empty() {
            prop_assert_eq!(result.route, Route::ManualReview);
            prop_assert!(result.reason.starts_with("Missing: "));
        } else {
            prop_assert_ne!(result.route, Route::ManualReview);
        }
    }

    #[test]
    fn prop_present_fields_passed_their_checks(claim in arbitrary_claim_strategy()) {
        let result = validate_and_route(&claim);
        for field in FnolField::ROUTING_REQUIRED {
            if result.missing.contains(&field) {
                continue;
            }
            let text = claim.text(field).unwrap_or_default();
            prop_assert!(!text.is_empty());
            if field == FnolField::PolicyholderName {
                prop_assert!(classify_name(FieldValue::Text(text)));
            } else {
                prop_assert!(!is_placeholder_text(text));
            }
        }
    }

    #[test]
    fn prop_routable_claims_route_by_amount((claim, amount) in routable_claim_strategy()) {
        let result = validate_and_route(&claim);
        prop_assert!(result.missing.is_empty());
        prop_assert!(result.route.is_amount_based());

        let expected = if amount >= 1_000_000.0 {
            Route::ExecutiveReview
        } else if amount >= 100_000.0 {
            Route::HighValueReview
        } else if amount < 5_000.0 {
            Route::FastTrack
        } else if amount < 25_000.0 {
            Route::StandardReview
        } else {
            Route::ExtendedReview
        };
        prop_assert_eq!(result.route, expected);
    }

    #[test]
    fn prop_placeholder_tokens_are_missing(token in placeholder_token_strategy()) {
        let claim = ExtractedClaimBuilder::new().with(FnolField::Description, token).build();
        prop_assert_eq!(find_missing(&claim), vec![FnolField::Description]);
    }

    #[test]
    fn prop_form_labels_are_missing(label in form_label_strategy()) {
        let claim = ExtractedClaimBuilder::new().with(FnolField::Location, label).build();
        prop_assert_eq!(find_missing(&claim), vec![FnolField::Location]);
    }

    #[test]
    fn prop_generated_names_are_valid(name in valid_name_strategy()) {
        prop_assert!(classify_name(FieldValue::Text(&name)));
    }

    #[test]
    fn prop_parse_amount_never_panics(text in ".{0,64}") {
        let amount = parse_amount(&text);
        prop_assert!(amount >= 0.0);
    }
}

#[test]
fn test_extracted_claim_from_raw_json() {
    let claim = ExtractedClaim::from_value(test_utils::ExtractionFixtures::complete_json());
    assert_eq!(claim, ClaimFixtures::complete());
}
