//! Interface to the Bluetooth stack
//!
//! The stack is an external collaborator. It delivers [`StackEvent`]s to the
//! application and exposes the handful of operations the application calls
//! back through the [`BleStack`] trait.

use crate::att::AttributeDescriptor;
use crate::gap::{AdvElement, AddressType, AdvertisingMode, BdAddr};
use thiserror::Error;

/// Errors reported by the stack for an outbound call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error("{operation} failed with status {status:#04x}")]
    Failed { operation: &'static str, status: u8 },
}

/// Stack result type
pub type StackResult<T> = Result<T, StackError>;

/// Operations the application requests from the stack
pub trait BleStack {
    /// Read the local device address
    fn local_address(&mut self) -> StackResult<BdAddr>;

    /// Allow or refuse pairing requests
    fn set_pairable_mode(&mut self, allow_pairing: bool) -> StackResult<()>;

    /// Replace the advertising payload with the given elements, in order
    fn set_raw_advertisement_data(&mut self, elements: &[AdvElement]) -> StackResult<()>;

    /// Route GATT events to the application
    fn register_gatt_handler(&mut self) -> StackResult<()>;

    /// Hand the application's attribute table to the stack
    fn load_gatt_database(&mut self, table: &[AttributeDescriptor]) -> StackResult<()>;

    /// Start advertising immediately in the given mode
    fn start_advertisements(&mut self, mode: AdvertisingMode) -> StackResult<()>;
}

/// Outcome of stack enablement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackStatus {
    Success,
    Failed(u8),
}

impl StackStatus {
    pub fn is_success(&self) -> bool {
        *self == StackStatus::Success
    }
}

impl From<u8> for StackStatus {
    fn from(status: u8) -> Self {
        match status {
            0 => StackStatus::Success,
            code => StackStatus::Failed(code),
        }
    }
}

/// Stack lifecycle events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagementEvent {
    /// Controller and host stack finished enabling
    StackEnabled { status: StackStatus },
    /// Advertising was started, stopped or changed mode
    AdvertisingStateChanged { mode: AdvertisingMode },
    /// A peer asked to raise link security
    SecurityRequest { peer: BdAddr },
    /// Connection parameters were renegotiated
    ConnectionParametersUpdated {
        peer: BdAddr,
        interval: u16,
        latency: u16,
        timeout: u16,
    },
    /// Any event the application has no interest in
    Other { code: u8 },
}

/// Connection state change delivered with a GATT connection event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionStatus {
    pub connected: bool,
    pub peer_address: BdAddr,
    pub address_type: AddressType,
    pub connection_id: u16,
    /// Disconnection reason, zero on connect
    pub reason: u8,
}

/// A peer request against an attribute
#[derive(Debug, PartialEq, Eq)]
pub enum AttributeRequest<'a> {
    /// Read into `buf`; the buffer length is the requested length
    Read {
        handle: u16,
        offset: u16,
        buf: &'a mut [u8],
    },
    /// Write `value` at `offset`
    Write {
        handle: u16,
        offset: u16,
        value: &'a [u8],
    },
    /// Queue part of a long write
    PrepareWrite {
        handle: u16,
        offset: u16,
        value: &'a [u8],
    },
    /// Commit or cancel queued writes
    ExecuteWrite { commit: bool },
    /// Peer proposed an MTU
    MtuExchange { mtu: u16 },
    /// Peer confirmed an indication
    ValueConfirmation { handle: u16 },
}

impl AttributeRequest<'_> {
    /// Short name of the request kind, for logging
    pub fn kind(&self) -> &'static str {
        match self {
            AttributeRequest::Read { .. } => "read",
            AttributeRequest::Write { .. } => "write",
            AttributeRequest::PrepareWrite { .. } => "prepare write",
            AttributeRequest::ExecuteWrite { .. } => "execute write",
            AttributeRequest::MtuExchange { .. } => "MTU exchange",
            AttributeRequest::ValueConfirmation { .. } => "value confirmation",
        }
    }
}

/// GATT events
#[derive(Debug, PartialEq, Eq)]
pub enum GattEvent<'a> {
    /// A peer connected or disconnected; `None` if the stack sent no status
    ConnectionStatusChanged(Option<ConnectionStatus>),
    /// A peer read or wrote an attribute
    AttributeRequest {
        connection_id: u16,
        request: AttributeRequest<'a>,
    },
    /// A client operation completed
    OperationComplete { connection_id: u16 },
    /// Any event the application has no interest in
    Other { code: u8 },
}

/// Every event the stack can deliver to the application
#[derive(Debug, PartialEq, Eq)]
pub enum StackEvent<'a> {
    Management(ManagementEvent),
    Gatt(GattEvent<'a>),
}

impl From<ManagementEvent> for StackEvent<'_> {
    fn from(event: ManagementEvent) -> Self {
        StackEvent::Management(event)
    }
}

impl<'a> From<GattEvent<'a>> for StackEvent<'a> {
    fn from(event: GattEvent<'a>) -> Self {
        StackEvent::Gatt(event)
    }
}
