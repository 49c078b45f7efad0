//! GATT event handling
//!
//! Attribute requests are served from the application's attribute store;
//! connection status changes drive the advertising/connection state.

use crate::app::FindMeApp;
use crate::att::{AttError, AttResult};
use crate::indicator::Indicator;
use crate::stack::{AttributeRequest, BleStack, ConnectionStatus, GattEvent};
use log::{debug, info, warn};

/// Successful outcome of a GATT event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GattResponse {
    /// Event handled, nothing to return
    Complete,
    /// A read request copied `len` bytes into its buffer
    Read { len: usize },
}

impl<S: BleStack, I: Indicator> FindMeApp<S, I> {
    /// Handle a GATT event
    ///
    /// Events other than connection status changes and attribute requests
    /// are ignored and reported as handled.
    pub fn handle_gatt_event(&mut self, event: GattEvent<'_>) -> AttResult<GattResponse> {
        match event {
            GattEvent::ConnectionStatusChanged(status) => {
                self.handle_connection_status(status.as_ref())?;
                Ok(GattResponse::Complete)
            }
            GattEvent::AttributeRequest {
                connection_id,
                request,
            } => self.handle_attribute_request(connection_id, request),
            other => {
                debug!("Ignoring GATT event: {:?}", other);
                Ok(GattResponse::Complete)
            }
        }
    }

    /// Serve a read or write request from the attribute store
    pub fn handle_attribute_request(
        &mut self,
        connection_id: u16,
        request: AttributeRequest<'_>,
    ) -> AttResult<GattResponse> {
        match request {
            AttributeRequest::Read {
                handle,
                offset,
                buf,
            } => {
                debug!(
                    "Read request on connection {}: handle {:#06x} offset {} len {}",
                    connection_id,
                    handle,
                    offset,
                    buf.len()
                );
                let len = self.store.read_into(handle, offset, buf)?;
                Ok(GattResponse::Read { len })
            }
            AttributeRequest::Write {
                handle,
                offset,
                value,
            } => {
                debug!(
                    "Write request on connection {}: handle {:#06x} offset {}",
                    connection_id, handle, offset
                );
                self.write_attribute(handle, offset, value)?;
                Ok(GattResponse::Complete)
            }
            other => {
                warn!("Unsupported {} request on connection {}", other.kind(), connection_id);
                Err(AttError::RequestNotSupported(other.kind()))
            }
        }
    }

    /// Write an attribute value and run the side effects tied to its handle
    ///
    /// A successful write to the alert level handle passes the stored level
    /// to the indicator.
    pub fn write_attribute(&mut self, handle: u16, offset: u16, value: &[u8]) -> AttResult<()> {
        self.store.write(handle, offset, value)?;

        if handle == self.config.alert_level_handle {
            let level = self
                .store
                .lookup(handle)
                .and_then(|record| record.value().first().copied());
            if let Some(level) = level {
                self.indicator.alert_level_changed(level);
            }
        }

        Ok(())
    }

    /// Track a peer connecting or disconnecting
    ///
    /// Fails only when the stack delivered the event without status data.
    pub fn handle_connection_status(&mut self, status: Option<&ConnectionStatus>) -> AttResult<()> {
        let status = status.ok_or(AttError::MissingEventData)?;

        if status.connected {
            info!(
                "Connected: BDA '{}', connection id {}",
                status.peer_address, status.connection_id
            );
            self.state
                .on_connected(status.connection_id, &mut self.indicator);
        } else {
            info!(
                "Disconnected: BDA '{}', connection id {}, reason {:#04x}",
                status.peer_address, status.connection_id, status.reason
            );
            self.state.on_disconnected(
                self.config.advertising_mode,
                &mut self.stack,
                &mut self.indicator,
            );
        }

        Ok(())
    }
}
