//! Recording stand-ins for the stack and the indicator

use crate::att::AttributeDescriptor;
use crate::gap::{AdvConnMode, AdvElement, AdvertisingMode, BdAddr};
use crate::indicator::Indicator;
use crate::stack::{BleStack, StackError, StackResult};

/// Outbound stack call, as recorded by [`MockStack`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackCall {
    LocalAddress,
    SetPairable(bool),
    SetAdvertisementData(Vec<AdvElement>),
    RegisterGattHandler,
    LoadGattDatabase(Vec<AttributeDescriptor>),
    StartAdvertisements(AdvertisingMode),
}

/// Stack that records every call and can be told to fail one operation
#[derive(Debug, Default)]
pub struct MockStack {
    pub calls: Vec<StackCall>,
    pub address: BdAddr,
    pub fail_operation: Option<&'static str>,
}

impl MockStack {
    pub fn new() -> Self {
        Self {
            address: BdAddr::new([0x55, 0x44, 0x33, 0x22, 0x11, 0x00]),
            ..Default::default()
        }
    }

    pub fn failing(operation: &'static str) -> Self {
        Self {
            fail_operation: Some(operation),
            ..Self::new()
        }
    }

    pub fn advertising_starts(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, StackCall::StartAdvertisements(_)))
            .count()
    }

    fn record(&mut self, operation: &'static str, call: StackCall) -> StackResult<()> {
        self.calls.push(call);
        if self.fail_operation == Some(operation) {
            return Err(StackError::Failed {
                operation,
                status: 0x01,
            });
        }
        Ok(())
    }
}

impl BleStack for MockStack {
    fn local_address(&mut self) -> StackResult<BdAddr> {
        self.record("local_address", StackCall::LocalAddress)?;
        Ok(self.address)
    }

    fn set_pairable_mode(&mut self, allow_pairing: bool) -> StackResult<()> {
        self.record("set_pairable_mode", StackCall::SetPairable(allow_pairing))
    }

    fn set_raw_advertisement_data(&mut self, elements: &[AdvElement]) -> StackResult<()> {
        self.record(
            "set_raw_advertisement_data",
            StackCall::SetAdvertisementData(elements.to_vec()),
        )
    }

    fn register_gatt_handler(&mut self) -> StackResult<()> {
        self.record("register_gatt_handler", StackCall::RegisterGattHandler)
    }

    fn load_gatt_database(&mut self, table: &[AttributeDescriptor]) -> StackResult<()> {
        self.record(
            "load_gatt_database",
            StackCall::LoadGattDatabase(table.to_vec()),
        )
    }

    fn start_advertisements(&mut self, mode: AdvertisingMode) -> StackResult<()> {
        self.record("start_advertisements", StackCall::StartAdvertisements(mode))
    }
}

/// Indicator notification, as recorded by [`MockIndicator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorCall {
    Init,
    Mode(AdvConnMode),
    AlertLevel(u8),
    AlertOff,
}

#[derive(Debug, Default)]
pub struct MockIndicator {
    pub calls: Vec<IndicatorCall>,
}

impl MockIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, call: IndicatorCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }

    pub fn alert_levels(&self) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                IndicatorCall::AlertLevel(level) => Some(*level),
                _ => None,
            })
            .collect()
    }

    pub fn last_mode(&self) -> Option<AdvConnMode> {
        self.calls.iter().rev().find_map(|c| match c {
            IndicatorCall::Mode(mode) => Some(*mode),
            _ => None,
        })
    }
}

impl Indicator for MockIndicator {
    fn init(&mut self) {
        self.calls.push(IndicatorCall::Init);
    }

    fn adv_conn_mode_changed(&mut self, mode: AdvConnMode) {
        self.calls.push(IndicatorCall::Mode(mode));
    }

    fn alert_level_changed(&mut self, level: u8) {
        self.calls.push(IndicatorCall::AlertLevel(level));
    }

    fn alert_off(&mut self) {
        self.calls.push(IndicatorCall::AlertOff);
    }
}
