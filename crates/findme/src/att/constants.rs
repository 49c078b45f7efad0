//! Attribute request status codes

pub const ATT_SUCCESS: u8 = 0x00;
pub const ATT_ERROR_INVALID_HANDLE: u8 = 0x01;
pub const ATT_ERROR_INVALID_OFFSET: u8 = 0x07;
pub const ATT_ERROR_INVALID_ATTRIBUTE_VALUE_LENGTH: u8 = 0x0D;

// Generic failure returned for requests the application does not serve
pub const GATT_ERROR: u8 = 0x85;
