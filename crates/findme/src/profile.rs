//! Find Me target GATT layout
//!
//! The target exposes the GAP service (device name, appearance) and the
//! Immediate Alert Service (alert level). Service and characteristic
//! declarations are served by the stack; the application stores only the
//! characteristic values listed here.

use crate::att::{AttributeRecord, AttributeStore};
use crate::config::FindMeConfig;
use crate::error::Error;
use crate::gap::advertising::appearance_bytes;

// Service UUIDs
pub const GAP_SERVICE_UUID: u16 = 0x1800;
pub const IMMEDIATE_ALERT_SERVICE_UUID: u16 = 0x1802;

// Characteristic UUIDs
pub const DEVICE_NAME_UUID: u16 = 0x2A00;
pub const APPEARANCE_UUID: u16 = 0x2A01;
pub const ALERT_LEVEL_UUID: u16 = 0x2A06;

// Characteristic properties
pub const PROP_READ: u8 = 0x02;
pub const PROP_WRITE_WITHOUT_RESPONSE: u8 = 0x04;

// Attribute handles
pub const HDLS_GAP: u16 = 0x0001;
pub const HDLC_GAP_DEVICE_NAME: u16 = 0x0002;
pub const HDLC_GAP_DEVICE_NAME_VALUE: u16 = 0x0003;
pub const HDLC_GAP_APPEARANCE: u16 = 0x0004;
pub const HDLC_GAP_APPEARANCE_VALUE: u16 = 0x0005;
pub const HDLS_IAS: u16 = 0x0006;
pub const HDLC_IAS_ALERT_LEVEL: u16 = 0x0007;
pub const HDLC_IAS_ALERT_LEVEL_VALUE: u16 = 0x0008;

/// Alert level value size
pub const ALERT_LEVEL_LEN: usize = 1;

/// A characteristic value held by the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacteristicLayout {
    /// Owning service UUID
    pub service: u16,
    pub service_handle: u16,
    pub uuid: u16,
    /// Handle of the characteristic declaration
    pub declaration_handle: u16,
    pub value_handle: u16,
    pub properties: u8,
    pub capacity: usize,
    pub initial_value: Vec<u8>,
}

/// Characteristic values of the Find Me target, in handle order
pub fn characteristics(config: &FindMeConfig) -> Vec<CharacteristicLayout> {
    let name = config.device_name.as_bytes().to_vec();

    vec![
        CharacteristicLayout {
            service: GAP_SERVICE_UUID,
            service_handle: HDLS_GAP,
            uuid: DEVICE_NAME_UUID,
            declaration_handle: HDLC_GAP_DEVICE_NAME,
            value_handle: HDLC_GAP_DEVICE_NAME_VALUE,
            properties: PROP_READ,
            capacity: name.len(),
            initial_value: name,
        },
        CharacteristicLayout {
            service: GAP_SERVICE_UUID,
            service_handle: HDLS_GAP,
            uuid: APPEARANCE_UUID,
            declaration_handle: HDLC_GAP_APPEARANCE,
            value_handle: HDLC_GAP_APPEARANCE_VALUE,
            properties: PROP_READ,
            capacity: 2,
            initial_value: appearance_bytes(config.appearance).to_vec(),
        },
        CharacteristicLayout {
            service: IMMEDIATE_ALERT_SERVICE_UUID,
            service_handle: HDLS_IAS,
            uuid: ALERT_LEVEL_UUID,
            declaration_handle: HDLC_IAS_ALERT_LEVEL,
            value_handle: config.alert_level_handle,
            properties: PROP_WRITE_WITHOUT_RESPONSE,
            capacity: ALERT_LEVEL_LEN,
            initial_value: vec![0],
        },
    ]
}

/// Build the attribute store for the Find Me target
pub fn attribute_table(config: &FindMeConfig) -> Result<AttributeStore, Error> {
    let records = characteristics(config)
        .iter()
        .map(|c| AttributeRecord::with_capacity_and_value(c.value_handle, c.capacity, &c.initial_value))
        .collect();

    AttributeStore::new(records)
}
