//! Error handling for attribute access
use super::constants::*;
use thiserror::Error;

/// Status reported to the stack for an attribute request
///
/// Only the statuses this application produces get a named variant; any
/// other byte round-trips through `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttErrorCode {
    Success,
    InvalidHandle,
    InvalidOffset,
    InvalidAttributeValueLength,
    /// Generic failure, used for events and requests the application does not serve
    GattError,
    Unknown(u8),
}

impl From<u8> for AttErrorCode {
    fn from(code: u8) -> Self {
        match code {
            ATT_SUCCESS => AttErrorCode::Success,
            ATT_ERROR_INVALID_HANDLE => AttErrorCode::InvalidHandle,
            ATT_ERROR_INVALID_OFFSET => AttErrorCode::InvalidOffset,
            ATT_ERROR_INVALID_ATTRIBUTE_VALUE_LENGTH => AttErrorCode::InvalidAttributeValueLength,
            GATT_ERROR => AttErrorCode::GattError,
            other => AttErrorCode::Unknown(other),
        }
    }
}

impl From<AttErrorCode> for u8 {
    fn from(code: AttErrorCode) -> u8 {
        match code {
            AttErrorCode::Success => ATT_SUCCESS,
            AttErrorCode::InvalidHandle => ATT_ERROR_INVALID_HANDLE,
            AttErrorCode::InvalidOffset => ATT_ERROR_INVALID_OFFSET,
            AttErrorCode::InvalidAttributeValueLength => ATT_ERROR_INVALID_ATTRIBUTE_VALUE_LENGTH,
            AttErrorCode::GattError => GATT_ERROR,
            AttErrorCode::Unknown(other) => other,
        }
    }
}

/// Attribute access error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttError {
    #[error("Invalid handle: {0:#06x}")]
    InvalidHandle(u16),

    #[error("Invalid offset {offset} for handle {handle:#06x} (capacity {capacity})")]
    InvalidOffset {
        handle: u16,
        offset: u16,
        capacity: usize,
    },

    #[error("Value of {len} bytes at offset {offset} overflows handle {handle:#06x} (capacity {capacity})")]
    InvalidAttributeLength {
        handle: u16,
        offset: u16,
        len: usize,
        capacity: usize,
    },

    #[error("Request not supported: {0}")]
    RequestNotSupported(&'static str),

    #[error("Event delivered without data")]
    MissingEventData,
}

impl AttError {
    /// Get the status code reported to the stack for this error
    pub fn code(&self) -> AttErrorCode {
        match self {
            AttError::InvalidHandle(_) => AttErrorCode::InvalidHandle,
            AttError::InvalidOffset { .. } => AttErrorCode::InvalidOffset,
            AttError::InvalidAttributeLength { .. } => AttErrorCode::InvalidAttributeValueLength,
            AttError::RequestNotSupported(_) => AttErrorCode::GattError,
            AttError::MissingEventData => AttErrorCode::GattError,
        }
    }

    /// Get the handle associated with this error, if any
    pub fn handle(&self) -> Option<u16> {
        match self {
            AttError::InvalidHandle(handle) => Some(*handle),
            AttError::InvalidOffset { handle, .. } => Some(*handle),
            AttError::InvalidAttributeLength { handle, .. } => Some(*handle),
            _ => None,
        }
    }
}

/// Attribute access result type
pub type AttResult<T> = Result<T, AttError>;
