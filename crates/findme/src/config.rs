//! Application configuration

use crate::error::Error;
use crate::gap::{AdvertisementData, AdvertisingMode, APPEARANCE_GENERIC_KEYRING, MAX_ADV_DATA_LEN};
use crate::profile::HDLC_IAS_ALERT_LEVEL_VALUE;

/// Default advertised device name
pub const DEFAULT_DEVICE_NAME: &str = "Find Me Target";

/// Find Me target configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindMeConfig {
    /// Name advertised and exposed through the GAP device name characteristic
    pub device_name: String,
    /// GAP appearance value
    pub appearance: u16,
    /// Handle of the alert level value; writes to it drive the alert indicator
    pub alert_level_handle: u16,
    /// Mode used when starting and restarting advertising
    pub advertising_mode: AdvertisingMode,
    /// Whether pairing requests are accepted
    pub pairable: bool,
}

impl Default for FindMeConfig {
    fn default() -> Self {
        Self {
            device_name: DEFAULT_DEVICE_NAME.to_string(),
            appearance: APPEARANCE_GENERIC_KEYRING,
            alert_level_handle: HDLC_IAS_ALERT_LEVEL_VALUE,
            advertising_mode: AdvertisingMode::UndirectedHigh,
            pairable: false,
        }
    }
}

impl FindMeConfig {
    /// Check that the configuration can be advertised and served
    pub fn validate(&self) -> Result<(), Error> {
        if self.device_name.is_empty() {
            return Err(Error::InvalidConfig("device name is empty".into()));
        }

        let adv_len = self.advertisement().encoded_len();
        if adv_len > MAX_ADV_DATA_LEN {
            return Err(Error::InvalidConfig(format!(
                "device name '{}' makes the advertisement {} bytes, limit is {}",
                self.device_name, adv_len, MAX_ADV_DATA_LEN
            )));
        }

        if self.alert_level_handle == 0 {
            return Err(Error::InvalidConfig("alert level handle is 0".into()));
        }

        if !self.advertising_mode.is_connectable() {
            return Err(Error::InvalidConfig(format!(
                "advertising mode {:?} does not accept connections",
                self.advertising_mode
            )));
        }

        Ok(())
    }

    /// Advertising payload for this configuration
    pub fn advertisement(&self) -> AdvertisementData {
        AdvertisementData::find_me(&self.device_name, self.appearance)
    }
}
