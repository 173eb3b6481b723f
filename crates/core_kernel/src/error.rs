//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown field: {0}")]
    UnknownField(String),
}

impl CoreError {
    pub fn unknown_field(name: impl Into<String>) -> Self {
        CoreError::UnknownField(name.into())
    }
}
