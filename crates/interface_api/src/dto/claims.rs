//! Claims DTOs

use domain_claims::{validate_and_route, ExtractedClaim, RoutingResult};
use serde::{Deserialize, Serialize};

/// Response for processed and routed claims
///
/// ```json
/// {
///   "extractedFields": { "Policy Number": "...", ... },
///   "missingFields": ["Date"],
///   "recommendedRoute": "Manual Review",
///   "reasoning": "Missing: Date"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessClaimResponse {
    #[serde(rename = "extractedFields")]
    pub extracted: ExtractedClaim,
    #[serde(flatten)]
    pub routing: RoutingResult,
}

impl ProcessClaimResponse {
    /// Validates and routes a claim
    pub fn route(extracted: ExtractedClaim) -> Self {
        let routing = validate_and_route(&extracted);
        Self { extracted, routing }
    }
}
