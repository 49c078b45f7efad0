//! Error types for the findme library
//!
//! This module defines the crate-level error type. Attribute access failures
//! keep their own [`AttError`] so they can be mapped to a status code.

use crate::att::{AttError, AttErrorCode};
use crate::stack::StackError;
use thiserror::Error;

/// Errors raised while building or driving the application
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Attribute error: {0}")]
    Att(#[from] AttError),

    #[error("Stack error: {0}")]
    Stack(#[from] StackError),

    #[error("Duplicate attribute handle: {0:#06x}")]
    DuplicateHandle(u16),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Status code to report for an attribute request that failed with this error
    pub fn att_code(&self) -> Option<AttErrorCode> {
        match self {
            Error::Att(e) => Some(e.code()),
            _ => None,
        }
    }
}
