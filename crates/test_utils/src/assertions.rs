//! Custom Test Assertions
//!
//! Assertion helpers for routing results that print the whole decision on
//! failure.

use core_kernel::FnolField;
use domain_claims::{Route, RoutingResult};

/// Asserts the route of a result
pub fn assert_route(result: &RoutingResult, expected: Route) {
    assert_eq!(
        result.route, expected,
        "Expected route {}, got {} (reason: {:?}, missing: {:?})",
        expected, result.route, result.reason, result.missing
    );
}

/// Asserts route and reason of a result
pub fn assert_routed(result: &RoutingResult, expected: Route, reason: &str) {
    assert_route(result, expected);
    assert_eq!(result.reason, reason, "Unexpected reason for route {}", expected);
}

/// Asserts the exact list of missing fields, in order
pub fn assert_missing(result: &RoutingResult, expected: &[FnolField]) {
    assert_eq!(
        result.missing, expected,
        "Missing fields differ (route: {}, reason: {:?})",
        result.route, result.reason
    );
}

/// Asserts that no required field is missing
pub fn assert_nothing_missing(result: &RoutingResult) {
    assert_missing(result, &[]);
}
