//! GAP (Generic Access Profile) support
//!
//! Advertising payloads, device addresses and the combined
//! advertising/connection state of the peripheral.

pub mod advertising;
pub mod constants;
pub mod state;
pub mod types;


pub use advertising::{AdvElement, AdvertisementData};
pub use constants::*;
pub use state::{AdvConnMode, StateTracker};
pub use types::*;
