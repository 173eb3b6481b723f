//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! FNOL routing test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built claims and raw extraction payloads
//! - `builders`: Builder for extracted claims
//! - `assertions`: Assertion helpers for routing results
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
