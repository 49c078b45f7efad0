//! findme - Bluetooth LE "Find Me" target
//!
//! This library implements the application side of a Find Me proximity
//! peripheral. It advertises, accepts a single connection and lets the
//! connected peer write the Immediate Alert Service alert level, which is
//! shown on a local indicator.
//!
//! The Bluetooth stack and the indicator hardware are external; the
//! application talks to them through the [`BleStack`] and [`Indicator`]
//! traits and receives stack callbacks as [`StackEvent`]s.

pub mod app;
pub mod att;
pub mod config;
pub mod error;
pub mod gap;
pub mod gatt;
pub mod indicator;
pub mod profile;
pub mod stack;

#[cfg(test)]
mod testutil;

// Re-export common types for convenience
pub use app::FindMeApp;
pub use att::{AttError, AttErrorCode, AttResult, AttributeRecord, AttributeStore};
pub use config::FindMeConfig;
pub use error::Error;
pub use gap::{AdvConnMode, AdvertisementData, AdvertisingMode, BdAddr};
pub use gatt::GattResponse;
pub use indicator::{AlertLevel, Indicator, LedDriver, LedIndicator, LedPattern};
pub use stack::{
    AttributeRequest, BleStack, ConnectionStatus, GattEvent, ManagementEvent, StackError,
    StackEvent, StackStatus,
};
