//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating claims and field values
//! with known classification.

use domain_claims::placeholder::{FORM_LABELS, PLACEHOLDER_TOKENS};
use domain_claims::ExtractedClaim;
use proptest::prelude::*;

use crate::fixtures::ClaimFixtures;

/// Descriptions that trigger neither the fraud nor the injury indicators
const NEUTRAL_DESCRIPTIONS: &[&str] = &[
    "Vehicle was rear-ended while stopped at a traffic light",
    "Hail damaged the roof and two skylights",
    "Tree branch fell on the parked car during a storm",
    "Kitchen flooded after a pipe burst",
    "Side mirror clipped in a parking garage",
];

/// Strategy for damage amounts in cents, from zero to ten million dollars
pub fn amount_cents_strategy() -> impl Strategy<Value = u64> {
    0u64..1_000_000_000u64
}

/// Strategy for damage amounts written the way documents write them.
///
/// Yields the text together with the amount it should parse to.
pub fn damage_text_strategy() -> impl Strategy<Value = (String, f64)> {
    (amount_cents_strategy(), 0usize..3).prop_map(|(cents, style)| {
        let amount = cents as f64 / 100.0;
        let plain = format!("{:.2}", amount);
        let text = match style {
            0 => plain,
            1 => format!("${}", core_kernel::money::format_grouped(amount, 2)),
            _ => format!("USD {}", plain),
        };
        (text, amount)
    })
}

/// Strategy for generic placeholder tokens
pub fn placeholder_token_strategy() -> impl Strategy<Value = String> {
    proptest::sample::select(PLACEHOLDER_TOKENS).prop_map(str::to_string)
}

/// Strategy for form labels in random letter case
pub fn form_label_strategy() -> impl Strategy<Value = String> {
    (proptest::sample::select(FORM_LABELS), any::<bool>()).prop_map(|(label, lower)| {
        if lower {
            label.to_lowercase()
        } else {
            label.to_string()
        }
    })
}

/// Strategy for plausible person and business names
pub fn valid_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Z][a-z]{1,12} [A-Z][a-z]{1,12}",
        "[A-Z][a-z]{1,12} [A-Z]\\. [A-Z][a-z]{1,12}",
        "[A-Z]{3,10} [A-Z]{3,10} (LLC|INC\\.|& SONS)",
    ]
}

/// Strategy for descriptions free of fraud and injury keywords
pub fn neutral_description_strategy() -> impl Strategy<Value = String> {
    proptest::sample::select(NEUTRAL_DESCRIPTIONS).prop_map(str::to_string)
}

/// Strategy for complete claims that route purely by damage amount
pub fn routable_claim_strategy() -> impl Strategy<Value = (ExtractedClaim, f64)> {
    (valid_name_strategy(), neutral_description_strategy(), damage_text_strategy()).prop_map(
        |(name, description, (damage, amount))| {
            let claim = ExtractedClaim {
                policyholder_name: name.into(),
                description: description.into(),
                estimated_damage: damage.into(),
                ..ClaimFixtures::complete()
            };
            (claim, amount)
        },
    )
}

/// Strategy for arbitrary claims, including garbage in every field
pub fn arbitrary_claim_strategy() -> impl Strategy<Value = ExtractedClaim> {
    (
        proptest::collection::vec(".{0,40}", 6),
        ".{0,40}",
    )
        .prop_map(|(values, claim_type)| {
            let mut values = values.into_iter();
            let mut next = || values.next().unwrap_or_default();
            ExtractedClaim {
                policy_number: next().into(),
                policyholder_name: next().into(),
                date: next().into(),
                description: next().into(),
                estimated_damage: next().into(),
                location: next().into(),
                claim_type: claim_type.into(),
                ..ExtractedClaim::empty()
            }
        })
}
