//! Combined advertising/connection state
//!
//! Advertising state arrives through management events and connection state
//! through GATT events. [`StateTracker`] folds both into a single
//! [`AdvConnMode`] and refreshes the indicator on every transition.

use crate::gap::types::AdvertisingMode;
use crate::indicator::Indicator;
use crate::stack::BleStack;
use log::{info, warn};

/// Connection id meaning "no connection"
pub const NO_CONNECTION: u16 = 0;

/// Advertising and connection state of the peripheral
///
/// The device never advertises while connected, so there is no
/// "advertising and connected" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdvConnMode {
    #[default]
    AdvOffConnOff,
    AdvOnConnOff,
    AdvOffConnOn,
}

/// Tracks the connection slot and the combined mode
#[derive(Debug, Clone, Default)]
pub struct StateTracker {
    connection_id: u16,
    mode: AdvConnMode,
}

impl StateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> AdvConnMode {
        self.mode
    }

    /// Id of the active connection, [`NO_CONNECTION`] if none
    pub fn connection_id(&self) -> u16 {
        self.connection_id
    }

    pub fn is_connected(&self) -> bool {
        self.connection_id != NO_CONNECTION
    }

    fn transition<I: Indicator>(&mut self, mode: AdvConnMode, indicator: &mut I) {
        self.mode = mode;
        indicator.adv_conn_mode_changed(mode);
    }

    /// Advertising stopped
    pub fn on_advertising_stopped<I: Indicator>(&mut self, indicator: &mut I) {
        info!("Advertisement stopped");
        let mode = if self.is_connected() {
            AdvConnMode::AdvOffConnOn
        } else {
            AdvConnMode::AdvOffConnOff
        };
        self.transition(mode, indicator);
    }

    /// Advertising started
    pub fn on_advertising_started<I: Indicator>(&mut self, indicator: &mut I) {
        info!("Advertisement started");
        self.transition(AdvConnMode::AdvOnConnOff, indicator);
    }

    /// A peer connected with the given connection id
    pub fn on_connected<I: Indicator>(&mut self, connection_id: u16, indicator: &mut I) {
        if self.is_connected() {
            warn!(
                "Connection {} replaces active connection {}",
                connection_id, self.connection_id
            );
        }
        self.connection_id = connection_id;
        self.transition(AdvConnMode::AdvOffConnOn, indicator);
    }

    /// The peer disconnected
    ///
    /// Clears the connection slot, asks the stack to advertise again in
    /// `restart_mode` and clears the alert indicator. A failed restart is
    /// logged and otherwise ignored.
    pub fn on_disconnected<S: BleStack, I: Indicator>(
        &mut self,
        restart_mode: AdvertisingMode,
        stack: &mut S,
        indicator: &mut I,
    ) {
        self.connection_id = NO_CONNECTION;

        if let Err(e) = stack.start_advertisements(restart_mode) {
            warn!("Failed to restart advertising: {}", e);
        }

        indicator.alert_off();
        self.transition(AdvConnMode::AdvOnConnOff, indicator);
    }
}
