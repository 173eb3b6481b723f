//! Claim routing
//!
//! Routing is a strict priority list; the first matching rule wins:
//!
//! | Priority | Condition | Route |
//! |---|---|---|
//! | 1 | a required field is missing | Manual Review |
//! | 2 | fraud indicator in description | Investigation Flag |
//! | 3 | injury indicator | Specialist Queue |
//! | 4 | amount >= 1,000,000 | Executive Review |
//! | 5 | amount >= 100,000 | High Value Review |
//! | 6 | amount < 5,000 | Fast-track |
//! | 7 | amount < 25,000 | Standard Review |
//! | 8 | otherwise | Extended Review |

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use core_kernel::{format_usd, FnolField};
use crate::amount::parse_amount_field;
use crate::error::ClaimError;
use crate::extracted::ExtractedClaim;
use crate::indicators::{has_fraud_indicators, has_injury_indicators};
use crate::missing::find_missing;

/// Amounts at or above this go to executive review
pub const EXECUTIVE_REVIEW_THRESHOLD: f64 = 1_000_000.0;
/// Amounts at or above this go to high value review
pub const HIGH_VALUE_THRESHOLD: f64 = 100_000.0;
/// Amounts below this are fast-tracked
pub const FAST_TRACK_LIMIT: f64 = 5_000.0;
/// Amounts below this (and not fast-tracked) get a standard review
pub const STANDARD_REVIEW_LIMIT: f64 = 25_000.0;

/// Operational queue a claim is sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Required data missing, a person has to complete the claim
    ManualReview,
    /// Possible fraud
    InvestigationFlag,
    /// Injury or medical treatment involved
    SpecialistQueue,
    /// Very high value loss
    ExecutiveReview,
    /// High value loss
    HighValueReview,
    /// Low value loss, can be settled quickly
    FastTrack,
    /// Moderate loss
    StandardReview,
    /// Significant loss below the high value threshold
    ExtendedReview,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::ManualReview,
        Route::InvestigationFlag,
        Route::SpecialistQueue,
        Route::ExecutiveReview,
        Route::HighValueReview,
        Route::FastTrack,
        Route::StandardReview,
        Route::ExtendedReview,
    ];

    /// Returns the route label
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::ManualReview => "Manual Review",
            Route::InvestigationFlag => "Investigation Flag",
            Route::SpecialistQueue => "Specialist Queue",
            Route::ExecutiveReview => "Executive Review",
            Route::HighValueReview => "High Value Review",
            Route::FastTrack => "Fast-track",
            Route::StandardReview => "Standard Review",
            Route::ExtendedReview => "Extended Review",
        }
    }

    /// Returns true if the route was chosen by damage amount alone
    pub fn is_amount_based(&self) -> bool {
        matches!(
            self,
            Route::ExecutiveReview
                | Route::HighValueReview
                | Route::FastTrack
                | Route::StandardReview
                | Route::ExtendedReview
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Route {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|route| route.as_str() == s)
            .ok_or_else(|| ClaimError::UnknownRoute(s.to_string()))
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Route {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// Outcome of validating and routing one claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingResult {
    /// Required fields without usable data, in check order
    #[serde(rename = "missingFields")]
    pub missing: Vec<FnolField>,
    /// Chosen queue
    #[serde(rename = "recommendedRoute")]
    pub route: Route,
    /// Human-readable justification
    #[serde(rename = "reasoning")]
    pub reason: String,
}

/// Validates a claim and picks its route
///
/// # Examples
///
/// ```rust
/// use domain_claims::{validate_and_route, ExtractedClaim, Route};
///
/// let claim = ExtractedClaim {
///     policy_number: "AUTO-PL-45879231".into(),
///     policyholder_name: "Jane Smith".into(),
///     date: "2024-03-15".into(),
///     description: "minor fender bender, no injuries".into(),
///     estimated_damage: "3200".into(),
///     location: "Springfield, IL".into(),
///     ..ExtractedClaim::default()
/// };
///
/// let result = validate_and_route(&claim);
/// assert!(result.missing.is_empty());
/// assert_eq!(result.route, Route::FastTrack);
/// assert_eq!(result.reason, "Low damage: $3,200.00");
/// ```
pub fn validate_and_route(claim: &ExtractedClaim) -> RoutingResult {
    let missing = find_missing(claim);
    let amount = parse_amount_field(&claim.estimated_damage);
    let description = claim.description.as_str().unwrap_or_default();
    let claim_type = claim.claim_type.as_str().unwrap_or_default();

    let (route, reason) = decide_route(&missing, description, claim_type, amount);

    debug!(
        route = %route,
        missing = missing.len(),
        amount,
        "Claim routed"
    );

    RoutingResult { missing, route, reason }
}

/// Picks a route from already-computed inputs
pub fn decide_route(
    missing: &[FnolField],
    description: &str,
    claim_type: &str,
    amount: f64,
) -> (Route, String) {
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|field| field.as_str()).collect();
        return (Route::ManualReview, format!("Missing: {}", names.join(", ")));
    }

    if has_fraud_indicators(description) {
        return (Route::InvestigationFlag, "Potential fraud indicators".to_string());
    }

    if has_injury_indicators(description, claim_type) {
        return (Route::SpecialistQueue, "Injury/medical related".to_string());
    }

    let (route, label) = if amount >= EXECUTIVE_REVIEW_THRESHOLD {
        (Route::ExecutiveReview, "Very high value")
    } else if amount >= HIGH_VALUE_THRESHOLD {
        (Route::HighValueReview, "High damage")
    } else if amount < FAST_TRACK_LIMIT {
        (Route::FastTrack, "Low damage")
    } else if amount < STANDARD_REVIEW_LIMIT {
        (Route::StandardReview, "Moderate damage")
    } else {
        (Route::ExtendedReview, "Significant damage")
    };

    (route, format!("{}: {}", label, format_usd(amount)))
}
