//! Claims Intake Domain
//!
//! This crate decides what happens to a First Notice of Loss once its
//! fields have been extracted: which required fields are missing or only
//! hold form boilerplate, and which operational queue the claim goes to.
//!
//! # Routing Pipeline
//!
//! ```text
//! ExtractedClaim -> find_missing -> parse_amount / indicators -> decide_route -> RoutingResult
//! ```
//!
//! Every function here is pure and total: malformed input degrades to a
//! conservative decision (usually "Manual Review") instead of an error.

pub mod extracted;
pub mod placeholder;
pub mod missing;
pub mod amount;
pub mod indicators;
pub mod routing;
pub mod error;

pub use extracted::{ExtractedClaim, ContactDetails, FieldText, FieldValue};
pub use placeholder::{classify_placeholder, classify_name, is_placeholder_text, is_valid_name};
pub use missing::find_missing;
pub use amount::{parse_amount, parse_amount_field, parse_amount_value};
pub use indicators::{has_fraud_indicators, has_injury_indicators};
pub use routing::{decide_route, validate_and_route, Route, RoutingResult};
pub use error::ClaimError;
