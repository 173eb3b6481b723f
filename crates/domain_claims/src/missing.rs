//! Missing-field detection

use tracing::debug;

use core_kernel::FnolField;
use crate::extracted::ExtractedClaim;
use crate::placeholder::{classify_name, classify_placeholder};

/// Returns the routing-required fields that hold no usable data.
///
/// Fields are checked, and reported, in the order of
/// [`FnolField::ROUTING_REQUIRED`]. An empty value is missing outright;
/// otherwise the policyholder name goes through the name check and every
/// other field through the placeholder check.
pub fn find_missing(claim: &ExtractedClaim) -> Vec<FnolField> {
    FnolField::ROUTING_REQUIRED
        .into_iter()
        .filter(|&field| is_missing(claim, field))
        .collect()
}

fn is_missing(claim: &ExtractedClaim, field: FnolField) -> bool {
    let value = claim.get(field);

    if value.is_empty() {
        debug!(field = %field, "Required field is empty");
        return true;
    }

    let missing = match field {
        FnolField::PolicyholderName => !classify_name(value),
        _ => classify_placeholder(value),
    };

    if missing {
        debug!(field = %field, "Required field holds placeholder text");
    }
    missing
}
