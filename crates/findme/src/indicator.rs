//! Local indicators
//!
//! The application reports two things to the user: the advertising/connection
//! mode and the alert level most recently written by the peer. How they are
//! shown is up to the [`Indicator`] implementation; [`LedIndicator`] maps
//! both onto a pair of LEDs.

use crate::gap::AdvConnMode;
use log::{debug, info};

/// Receiver of indicator updates
///
/// All methods are one-way notifications.
pub trait Indicator {
    /// Prepare the indicator hardware; called once when the stack comes up
    fn init(&mut self) {}

    /// The advertising/connection mode changed
    fn adv_conn_mode_changed(&mut self, mode: AdvConnMode);

    /// The peer wrote a new alert level
    fn alert_level_changed(&mut self, level: u8);

    /// Clear any alert being shown
    fn alert_off(&mut self);
}

/// Immediate Alert Service alert level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    NoAlert,
    MildAlert,
    HighAlert,
    Unknown(u8),
}

impl From<u8> for AlertLevel {
    fn from(value: u8) -> Self {
        match value {
            0 => AlertLevel::NoAlert,
            1 => AlertLevel::MildAlert,
            2 => AlertLevel::HighAlert,
            other => AlertLevel::Unknown(other),
        }
    }
}

impl From<AlertLevel> for u8 {
    fn from(level: AlertLevel) -> Self {
        match level {
            AlertLevel::NoAlert => 0,
            AlertLevel::MildAlert => 1,
            AlertLevel::HighAlert => 2,
            AlertLevel::Unknown(other) => other,
        }
    }
}

/// What an LED should be doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LedPattern {
    #[default]
    Off,
    Blinking,
    On,
}

impl From<AdvConnMode> for LedPattern {
    fn from(mode: AdvConnMode) -> Self {
        match mode {
            AdvConnMode::AdvOffConnOff => LedPattern::Off,
            AdvConnMode::AdvOnConnOff => LedPattern::Blinking,
            AdvConnMode::AdvOffConnOn => LedPattern::On,
        }
    }
}

impl From<AlertLevel> for LedPattern {
    fn from(level: AlertLevel) -> Self {
        match level {
            AlertLevel::MildAlert => LedPattern::Blinking,
            AlertLevel::HighAlert => LedPattern::On,
            AlertLevel::NoAlert | AlertLevel::Unknown(_) => LedPattern::Off,
        }
    }
}

/// Hardware side of [`LedIndicator`]
pub trait LedDriver {
    fn set_advertising_led(&mut self, pattern: LedPattern);
    fn set_alert_led(&mut self, pattern: LedPattern);
}

/// Indicator showing the mode and alert level on two LEDs
#[derive(Debug)]
pub struct LedIndicator<D> {
    driver: D,
    advertising_led: LedPattern,
    alert_led: LedPattern,
}

impl<D: LedDriver> LedIndicator<D> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            advertising_led: LedPattern::Off,
            alert_led: LedPattern::Off,
        }
    }

    /// Current advertising LED pattern
    pub fn advertising_led(&self) -> LedPattern {
        self.advertising_led
    }

    /// Current alert LED pattern
    pub fn alert_led(&self) -> LedPattern {
        self.alert_led
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn into_driver(self) -> D {
        self.driver
    }

    fn set_alert(&mut self, pattern: LedPattern) {
        self.alert_led = pattern;
        self.driver.set_alert_led(pattern);
    }
}

impl<D: LedDriver> Indicator for LedIndicator<D> {
    fn init(&mut self) {
        self.driver.set_advertising_led(LedPattern::Off);
        self.driver.set_alert_led(LedPattern::Off);
    }

    fn adv_conn_mode_changed(&mut self, mode: AdvConnMode) {
        let pattern = LedPattern::from(mode);
        debug!("Advertising LED: {:?} ({:?})", pattern, mode);
        self.advertising_led = pattern;
        self.driver.set_advertising_led(pattern);
    }

    fn alert_level_changed(&mut self, level: u8) {
        let level = AlertLevel::from(level);
        info!("Alert level = {:?}", level);
        self.set_alert(LedPattern::from(level));
    }

    fn alert_off(&mut self) {
        self.set_alert(LedPattern::Off);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingDriver {
        advertising: Vec<LedPattern>,
        alert: Vec<LedPattern>,
    }

    impl LedDriver for RecordingDriver {
        fn set_advertising_led(&mut self, pattern: LedPattern) {
            self.advertising.push(pattern);
        }

        fn set_alert_led(&mut self, pattern: LedPattern) {
            self.alert.push(pattern);
        }
    }

    #[test]
    fn test_mode_patterns() {
        let mut leds = LedIndicator::new(RecordingDriver::default());

        leds.adv_conn_mode_changed(AdvConnMode::AdvOnConnOff);
        assert_eq!(leds.advertising_led(), LedPattern::Blinking);
        leds.adv_conn_mode_changed(AdvConnMode::AdvOffConnOn);
        assert_eq!(leds.advertising_led(), LedPattern::On);
        leds.adv_conn_mode_changed(AdvConnMode::AdvOffConnOff);
        assert_eq!(leds.advertising_led(), LedPattern::Off);

        assert_eq!(
            leds.driver().advertising,
            vec![LedPattern::Blinking, LedPattern::On, LedPattern::Off]
        );
    }

    #[test]
    fn test_alert_patterns() {
        let mut leds = LedIndicator::new(RecordingDriver::default());

        leds.alert_level_changed(1);
        assert_eq!(leds.alert_led(), LedPattern::Blinking);
        leds.alert_level_changed(2);
        assert_eq!(leds.alert_led(), LedPattern::On);
        leds.alert_level_changed(0x17);
        assert_eq!(leds.alert_led(), LedPattern::Off);

        leds.alert_level_changed(2);
        leds.alert_off();
        assert_eq!(leds.alert_led(), LedPattern::Off);

        let driver = leds.into_driver();
        assert_eq!(
            driver.alert,
            vec![
                LedPattern::Blinking,
                LedPattern::On,
                LedPattern::Off,
                LedPattern::On,
                LedPattern::Off
            ]
        );
    }

    #[test]
    fn test_init_turns_leds_off() {
        let mut leds = LedIndicator::new(RecordingDriver::default());
        leds.init();

        assert_eq!(leds.driver().advertising, vec![LedPattern::Off]);
        assert_eq!(leds.driver().alert, vec![LedPattern::Off]);
    }

    #[test]
    fn test_alert_level_conversion() {
        assert_eq!(AlertLevel::from(0), AlertLevel::NoAlert);
        assert_eq!(AlertLevel::from(2), AlertLevel::HighAlert);
        assert_eq!(AlertLevel::from(9), AlertLevel::Unknown(9));
        assert_eq!(u8::from(AlertLevel::MildAlert), 1);
    }
}
