//! GATT (Generic Attribute Profile) server side
//!
//! This module dispatches GATT events from the stack: attribute reads and
//! writes against the application's store, and connection status changes.

pub mod dispatcher;


pub use dispatcher::GattResponse;
