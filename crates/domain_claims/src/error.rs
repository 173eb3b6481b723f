//! Claims domain errors

use thiserror::Error;

/// Errors that can occur in the claims domain
///
/// Routing itself never fails; these cover lookups by label and edits to
/// an extracted claim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Field {0} does not hold text")]
    NotATextField(String),
}
