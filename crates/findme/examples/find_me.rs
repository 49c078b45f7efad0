//! Example driving a Find Me target through a scripted session
//!
//! A simulated stack logs the calls the application makes and the LEDs are
//! printed through the logger. Run with `RUST_LOG=debug` to see attribute
//! traffic.

use findme::att::AttributeDescriptor;
use findme::gap::{AdvElement, AddressType};
use findme::stack::StackResult;
use findme::{
    AdvertisingMode, AttributeRequest, BdAddr, BleStack, ConnectionStatus, FindMeApp,
    FindMeConfig, GattEvent, LedDriver, LedIndicator, LedPattern, ManagementEvent, StackStatus,
};
use log::info;

/// Stack that accepts every request
struct SimulatedStack {
    address: BdAddr,
}

impl BleStack for SimulatedStack {
    fn local_address(&mut self) -> StackResult<BdAddr> {
        Ok(self.address)
    }

    fn set_pairable_mode(&mut self, allow_pairing: bool) -> StackResult<()> {
        info!("[stack] pairable: {}", allow_pairing);
        Ok(())
    }

    fn set_raw_advertisement_data(&mut self, elements: &[AdvElement]) -> StackResult<()> {
        info!("[stack] advertisement with {} elements", elements.len());
        Ok(())
    }

    fn register_gatt_handler(&mut self) -> StackResult<()> {
        info!("[stack] GATT handler registered");
        Ok(())
    }

    fn load_gatt_database(&mut self, table: &[AttributeDescriptor]) -> StackResult<()> {
        for entry in table {
            info!("[stack] attribute {:#06x} ({} bytes)", entry.handle, entry.capacity);
        }
        Ok(())
    }

    fn start_advertisements(&mut self, mode: AdvertisingMode) -> StackResult<()> {
        info!("[stack] advertising: {:?}", mode);
        Ok(())
    }
}

struct ConsoleLeds;

impl LedDriver for ConsoleLeds {
    fn set_advertising_led(&mut self, pattern: LedPattern) {
        info!("[led] advertising: {:?}", pattern);
    }

    fn set_alert_led(&mut self, pattern: LedPattern) {
        info!("[led] alert: {:?}", pattern);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = FindMeConfig::default();
    let alert_handle = config.alert_level_handle;
    let stack = SimulatedStack {
        address: BdAddr::new([0x01, 0x00, 0x5B, 0xA0, 0x43, 0x20]),
    };
    let mut app = FindMeApp::new(config, stack, LedIndicator::new(ConsoleLeds))?;

    app.handle_event(ManagementEvent::StackEnabled { status: StackStatus::Success }.into())?;
    app.handle_event(
        ManagementEvent::AdvertisingStateChanged {
            mode: AdvertisingMode::UndirectedHigh,
        }
        .into(),
    )?;

    let peer = ConnectionStatus {
        connected: true,
        peer_address: BdAddr::new([0x11, 0x22, 0x33, 0x44, 0x55, 0x66]),
        address_type: AddressType::Random,
        connection_id: 0x0040,
        reason: 0,
    };
    app.handle_event(GattEvent::ConnectionStatusChanged(Some(peer)).into())?;
    app.handle_event(
        ManagementEvent::AdvertisingStateChanged {
            mode: AdvertisingMode::Off,
        }
        .into(),
    )?;

    // Peer raises a high alert, then reads it back
    let request = AttributeRequest::Write {
        handle: alert_handle,
        offset: 0,
        value: &[0x02],
    };
    app.handle_event(GattEvent::AttributeRequest { connection_id: 0x0040, request }.into())?;

    let mut buf = [0u8; 4];
    let response = app.handle_event(
        GattEvent::AttributeRequest {
            connection_id: 0x0040,
            request: AttributeRequest::Read {
                handle: alert_handle,
                offset: 0,
                buf: &mut buf,
            },
        }
        .into(),
    )?;
    info!("Read response: {:?}, value {}", response, hex::encode(&buf[..1]));

    // An oversized write is rejected with a status code
    let request = AttributeRequest::Write {
        handle: alert_handle,
        offset: 0,
        value: &[0x01, 0x02],
    };
    if let Err(e) = app.handle_event(GattEvent::AttributeRequest { connection_id: 0x0040, request }.into()) {
        info!("Write rejected: {} (status {:?})", e, e.att_code());
    }

    let peer = ConnectionStatus {
        connected: false,
        reason: 0x13,
        ..peer
    };
    app.handle_event(GattEvent::ConnectionStatusChanged(Some(peer)).into())?;

    info!("Final mode: {:?}", app.mode());
    Ok(())
}
