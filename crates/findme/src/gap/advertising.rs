//! Advertising payload construction
//!
//! The payload is handed to the stack as an ordered list of
//! length/type/value elements. [`AdvertisementData::encode`] produces the
//! on-air byte layout of the same list.

use crate::error::Error;
use crate::gap::constants::*;
use crate::gap::types::AdvFlags;
use byteorder::{ByteOrder, LittleEndian};

/// One advertising data element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvElement {
    /// AD type
    pub ad_type: u8,
    /// AD payload, without the length and type octets
    pub data: Vec<u8>,
}

impl AdvElement {
    pub fn new(ad_type: u8, data: Vec<u8>) -> Self {
        Self { ad_type, data }
    }

    /// Size of this element on air: length octet, type octet and data
    pub fn encoded_len(&self) -> usize {
        2 + self.data.len()
    }
}

/// Ordered set of advertising elements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvertisementData {
    elements: Vec<AdvElement>,
}

impl AdvertisementData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payload advertised by the Find Me target: flags, complete local name
    /// and appearance, in that order
    pub fn find_me(device_name: &str, appearance: u16) -> Self {
        Self::new()
            .flags(AdvFlags::LE_GENERAL_DISCOVERABLE | AdvFlags::BR_EDR_NOT_SUPPORTED)
            .complete_local_name(device_name)
            .appearance(appearance)
    }

    /// Append a Flags element
    pub fn flags(mut self, flags: AdvFlags) -> Self {
        self.elements
            .push(AdvElement::new(ADV_TYPE_FLAGS, vec![flags.bits()]));
        self
    }

    /// Append a Complete Local Name element
    pub fn complete_local_name(mut self, name: &str) -> Self {
        self.elements.push(AdvElement::new(
            ADV_TYPE_COMPLETE_LOCAL_NAME,
            name.as_bytes().to_vec(),
        ));
        self
    }

    /// Append an Appearance element (little-endian)
    pub fn appearance(mut self, appearance: u16) -> Self {
        self.elements
            .push(AdvElement::new(ADV_TYPE_APPEARANCE, appearance_bytes(appearance).to_vec()));
        self
    }

    pub fn elements(&self) -> &[AdvElement] {
        &self.elements
    }

    /// Total on-air size of the payload
    pub fn encoded_len(&self) -> usize {
        self.elements.iter().map(AdvElement::encoded_len).sum()
    }

    /// Encode as a legacy advertising payload
    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        let len = self.encoded_len();
        if len > MAX_ADV_DATA_LEN {
            return Err(Error::InvalidConfig(format!(
                "advertising data is {} bytes, limit is {}",
                len, MAX_ADV_DATA_LEN
            )));
        }

        let mut buf = Vec::with_capacity(len);
        for element in &self.elements {
            // data.len() + 1 <= MAX_ADV_DATA_LEN here, so it fits in a u8
            buf.push((element.data.len() + 1) as u8);
            buf.push(element.ad_type);
            buf.extend_from_slice(&element.data);
        }

        Ok(buf)
    }
}

/// Appearance value as sent on air and stored in the GAP characteristic
pub fn appearance_bytes(appearance: u16) -> [u8; 2] {
    let mut buf = [0u8; 2];
    LittleEndian::write_u16(&mut buf, appearance);
    buf
}
