//! IR reflective presence sensor driver
//!
//! One sensor per monitored point: each parking slot plus the entry and exit
//! thresholds. The common IR obstacle modules pull their output low when a
//! reflection is detected, so the driver defaults to active-low.

use crate::devices::traits::{PointState, PresencePoint};
use crate::platform::traits::GpioInterface;

/// IR presence sensor on a GPIO input
pub struct IrPresenceSensor<G: GpioInterface> {
    pin: G,
    active_low: bool,
}

impl<G: GpioInterface> IrPresenceSensor<G> {
    /// Create an active-low sensor (output pulled low on detection)
    pub fn new(pin: G) -> Self {
        Self {
            pin,
            active_low: true,
        }
    }

    /// Create an active-high sensor
    pub fn active_high(pin: G) -> Self {
        Self {
            pin,
            active_low: false,
        }
    }

    /// Access the underlying pin (used by tests to simulate vehicles)
    pub fn pin_mut(&mut self) -> &mut G {
        &mut self.pin
    }
}

impl<G: GpioInterface> PresencePoint for IrPresenceSensor<G> {
    fn read(&self) -> PointState {
        let high = self.pin.read();
        let detected = if self.active_low { !high } else { high };
        if detected {
            PointState::Occupied
        } else {
            PointState::Free
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockGpio;

    #[test]
    fn test_active_low_mapping() {
        let mut sensor = IrPresenceSensor::new(MockGpio::new_input_pull_up());
        assert_eq!(sensor.read(), PointState::Free);

        sensor.pin_mut().set_input_state(false);
        assert_eq!(sensor.read(), PointState::Occupied);
    }

    #[test]
    fn test_active_high_mapping() {
        let mut sensor = IrPresenceSensor::active_high(MockGpio::new_input());
        assert_eq!(sensor.read(), PointState::Free);

        sensor.pin_mut().set_input_state(true);
        assert_eq!(sensor.read(), PointState::Occupied);
    }

    #[test]
    fn test_read_is_idempotent() {
        let sensor = IrPresenceSensor::new(MockGpio::new_input_pull_up());
        assert_eq!(sensor.read(), sensor.read());
    }
}
