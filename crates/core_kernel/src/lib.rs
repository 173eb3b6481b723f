//! Core Kernel - Foundational types for the FNOL intake system
//!
//! This crate provides the building blocks shared by the extraction,
//! routing and API crates:
//! - The fixed set of FNOL field names extracted from every document
//! - USD amount formatting used in routing explanations
//! - Strongly-typed request identifiers
//! - The kernel error type

pub mod fields;
pub mod money;
pub mod identifiers;
pub mod error;

pub use fields::FnolField;
pub use money::format_usd;
pub use identifiers::{RequestId, DocumentId};
pub use error::CoreError;
