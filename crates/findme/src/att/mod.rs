//! Attribute storage and status codes
//!
//! This module holds the application's attribute values and the status codes
//! returned to the stack when a peer reads or writes them.

pub mod constants;
pub mod error;
pub mod store;

#[cfg(test)]
mod tests;

// Re-export the public API
pub use self::constants::*;
pub use self::error::{AttError, AttErrorCode, AttResult};
pub use self::store::{AttributeDescriptor, AttributeRecord, AttributeStore};
