use crate::gap::constants::*;
use bitflags::bitflags;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressType {
    Public,
    Random,
}

impl From<u8> for AddressType {
    fn from(value: u8) -> Self {
        match value {
            RANDOM_DEVICE_ADDRESS => AddressType::Random,
            _ => AddressType::Public,
        }
    }
}

impl From<AddressType> for u8 {
    fn from(value: AddressType) -> Self {
        match value {
            AddressType::Public => PUBLIC_DEVICE_ADDRESS,
            AddressType::Random => RANDOM_DEVICE_ADDRESS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BdAddr {
    pub bytes: [u8; 6],
}

impl BdAddr {
    pub fn new(bytes: [u8; 6]) -> Self {
        Self { bytes }
    }

    /// Take the first six bytes of `slice`, least significant byte first
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        let bytes: [u8; 6] = slice.get(..6)?.try_into().ok()?;
        Some(Self { bytes })
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

/// Formats most significant byte first, as addresses are usually written
impl fmt::Display for BdAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.bytes.iter().rev().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

/// Advertising mode requested from, or reported by, the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvertisingMode {
    Off,
    DirectedHigh,
    DirectedLow,
    UndirectedHigh,
    UndirectedLow,
    NonConnectableHigh,
    NonConnectableLow,
    DiscoverableHigh,
    DiscoverableLow,
}

impl AdvertisingMode {
    /// Whether the radio is advertising in this mode
    pub fn is_active(&self) -> bool {
        *self != AdvertisingMode::Off
    }

    /// Whether a peer may connect while advertising in this mode
    pub fn is_connectable(&self) -> bool {
        matches!(
            self,
            AdvertisingMode::DirectedHigh
                | AdvertisingMode::DirectedLow
                | AdvertisingMode::UndirectedHigh
                | AdvertisingMode::UndirectedLow
        )
    }
}

impl From<u8> for AdvertisingMode {
    fn from(value: u8) -> Self {
        match value {
            ADVERT_DIRECTED_HIGH => AdvertisingMode::DirectedHigh,
            ADVERT_DIRECTED_LOW => AdvertisingMode::DirectedLow,
            ADVERT_UNDIRECTED_HIGH => AdvertisingMode::UndirectedHigh,
            ADVERT_UNDIRECTED_LOW => AdvertisingMode::UndirectedLow,
            ADVERT_NONCONN_HIGH => AdvertisingMode::NonConnectableHigh,
            ADVERT_NONCONN_LOW => AdvertisingMode::NonConnectableLow,
            ADVERT_DISCOVERABLE_HIGH => AdvertisingMode::DiscoverableHigh,
            ADVERT_DISCOVERABLE_LOW => AdvertisingMode::DiscoverableLow,
            _ => AdvertisingMode::Off,
        }
    }
}

impl From<AdvertisingMode> for u8 {
    fn from(value: AdvertisingMode) -> Self {
        match value {
            AdvertisingMode::Off => ADVERT_OFF,
            AdvertisingMode::DirectedHigh => ADVERT_DIRECTED_HIGH,
            AdvertisingMode::DirectedLow => ADVERT_DIRECTED_LOW,
            AdvertisingMode::UndirectedHigh => ADVERT_UNDIRECTED_HIGH,
            AdvertisingMode::UndirectedLow => ADVERT_UNDIRECTED_LOW,
            AdvertisingMode::NonConnectableHigh => ADVERT_NONCONN_HIGH,
            AdvertisingMode::NonConnectableLow => ADVERT_NONCONN_LOW,
            AdvertisingMode::DiscoverableHigh => ADVERT_DISCOVERABLE_HIGH,
            AdvertisingMode::DiscoverableLow => ADVERT_DISCOVERABLE_LOW,
        }
    }
}

bitflags! {
    /// Contents of the advertising "Flags" data type
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AdvFlags: u8 {
        const LE_LIMITED_DISCOVERABLE = 0x01;
        const LE_GENERAL_DISCOVERABLE = 0x02;
        const BR_EDR_NOT_SUPPORTED = 0x04;
        const SIMULTANEOUS_LE_BR_EDR_CONTROLLER = 0x08;
        const SIMULTANEOUS_LE_BR_EDR_HOST = 0x10;
    }
}
