//! Find Me target application
//!
//! [`FindMeApp`] owns everything the stack callbacks touch: the attribute
//! store, the advertising/connection state, the stack handle and the
//! indicator. Every entry point takes `&mut self`, so one event is processed
//! to completion before the next one starts.

use crate::att::AttributeStore;
use crate::config::FindMeConfig;
use crate::error::Error;
use crate::gap::{AdvConnMode, StateTracker};
use crate::gatt::GattResponse;
use crate::indicator::Indicator;
use crate::profile;
use crate::stack::{BleStack, ManagementEvent, StackEvent, StackStatus};
use log::{debug, info, warn};

/// The Find Me target
pub struct FindMeApp<S, I> {
    pub(crate) config: FindMeConfig,
    pub(crate) store: AttributeStore,
    pub(crate) state: StateTracker,
    pub(crate) stack: S,
    pub(crate) indicator: I,
    initialized: bool,
}

impl<S: BleStack, I: Indicator> FindMeApp<S, I> {
    /// Create the application with the standard Find Me attribute table
    pub fn new(config: FindMeConfig, stack: S, indicator: I) -> Result<Self, Error> {
        config.validate()?;
        let store = profile::attribute_table(&config)?;
        Ok(Self::with_store(config, store, stack, indicator))
    }

    /// Create the application around an existing attribute table
    pub fn with_store(config: FindMeConfig, store: AttributeStore, stack: S, indicator: I) -> Self {
        Self {
            config,
            store,
            state: StateTracker::new(),
            stack,
            indicator,
            initialized: false,
        }
    }

    pub fn config(&self) -> &FindMeConfig {
        &self.config
    }

    pub fn store(&self) -> &AttributeStore {
        &self.store
    }

    pub fn state(&self) -> &StateTracker {
        &self.state
    }

    /// Current advertising/connection mode
    pub fn mode(&self) -> AdvConnMode {
        self.state.mode()
    }

    pub fn stack(&self) -> &S {
        &self.stack
    }

    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    /// Whether the one-time initialisation after stack enablement has run
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Single entry point for stack events
    pub fn handle_event(&mut self, event: StackEvent<'_>) -> Result<GattResponse, Error> {
        match event {
            StackEvent::Management(event) => {
                self.handle_management_event(event)?;
                Ok(GattResponse::Complete)
            }
            StackEvent::Gatt(event) => Ok(self.handle_gatt_event(event)?),
        }
    }

    /// Handle a stack lifecycle event
    pub fn handle_management_event(&mut self, event: ManagementEvent) -> Result<(), Error> {
        match event {
            ManagementEvent::StackEnabled { status } => {
                info!(
                    "Bluetooth enabled ({})",
                    if status.is_success() { "success" } else { "failure" }
                );

                match status {
                    StackStatus::Success => self.init(),
                    StackStatus::Failed(code) => {
                        warn!("Stack enablement failed with status {:#04x}, skipping init", code);
                    }
                }
            }
            ManagementEvent::AdvertisingStateChanged { mode } => {
                info!("Advertisement state change: {:?}", mode);
                if mode.is_active() {
                    self.state.on_advertising_started(&mut self.indicator);
                } else {
                    self.state.on_advertising_stopped(&mut self.indicator);
                }
            }
            other => {
                debug!("Unhandled management event: {:?}", other);
            }
        }

        Ok(())
    }

    /// Application setup once the stack is up
    ///
    /// Every setup call is made in order even if an earlier one fails;
    /// failures are logged and the application counts as initialized.
    fn init(&mut self) {
        if self.initialized {
            warn!("Stack enabled again, application already initialized");
            return;
        }

        match self.stack.local_address() {
            Ok(addr) => info!("Local Bluetooth address: [{}]", addr),
            Err(e) => warn!("Could not read local address: {}", e),
        }

        self.indicator.init();

        if let Err(e) = self.stack.set_pairable_mode(self.config.pairable) {
            warn!("Could not set pairable mode: {}", e);
        }

        let advertisement = self.config.advertisement();
        if let Ok(raw) = advertisement.encode() {
            debug!("Advertisement data: {}", hex::encode(raw));
        }
        if let Err(e) = self
            .stack
            .set_raw_advertisement_data(advertisement.elements())
        {
            warn!("Could not set advertisement data: {}", e);
        }

        if let Err(e) = self.stack.register_gatt_handler() {
            warn!("Could not register GATT handler: {}", e);
        }

        let table = self.store.descriptors();
        debug!("Loading {} attributes", table.len());
        if let Err(e) = self.stack.load_gatt_database(&table) {
            warn!("Could not load GATT database: {}", e);
        }

        if let Err(e) = self.stack.start_advertisements(self.config.advertising_mode) {
            warn!("Could not start advertising: {}", e);
        }

        self.initialized = true;
    }
}
