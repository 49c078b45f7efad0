// Address types
pub const PUBLIC_DEVICE_ADDRESS: u8 = 0x00;
pub const RANDOM_DEVICE_ADDRESS: u8 = 0x01;

// Advertising Data Types
pub const ADV_TYPE_FLAGS: u8 = 0x01;
pub const ADV_TYPE_COMPLETE_LOCAL_NAME: u8 = 0x09;
pub const ADV_TYPE_APPEARANCE: u8 = 0x19;

// Legacy advertising payload limit
pub const MAX_ADV_DATA_LEN: usize = 31;

// Advertising modes as reported by the stack
pub const ADVERT_OFF: u8 = 0x00;
pub const ADVERT_DIRECTED_HIGH: u8 = 0x01;
pub const ADVERT_DIRECTED_LOW: u8 = 0x02;
pub const ADVERT_UNDIRECTED_HIGH: u8 = 0x03;
pub const ADVERT_UNDIRECTED_LOW: u8 = 0x04;
pub const ADVERT_NONCONN_HIGH: u8 = 0x05;
pub const ADVERT_NONCONN_LOW: u8 = 0x06;
pub const ADVERT_DISCOVERABLE_HIGH: u8 = 0x07;
pub const ADVERT_DISCOVERABLE_LOW: u8 = 0x08;

// Appearance values
pub const APPEARANCE_GENERIC_TAG: u16 = 0x0200;
pub const APPEARANCE_GENERIC_KEYRING: u16 = 0x0240;
