//! Servo barrier arm driver
//!
//! A hobby servo on a 50 Hz PWM channel raises and lowers the gate arm.
//! Positions are calibrated as pulse widths in microseconds and converted to
//! duty cycle against the channel's configured frequency.

use crate::devices::traits::{BarrierActuator, BarrierPosition};
use crate::platform::traits::PwmInterface;
use crate::platform::Result;

/// Barrier servo calibration
///
/// Pulse widths in microseconds for the two arm positions.
#[derive(Debug, Clone, Copy)]
pub struct BarrierConfig {
    /// Pulse width for the raised (open) arm
    pub open_pulse_us: u16,
    /// Pulse width for the lowered (closed) arm
    pub closed_pulse_us: u16,
}

impl Default for BarrierConfig {
    fn default() -> Self {
        Self {
            open_pulse_us: 2000,   // arm vertical
            closed_pulse_us: 1000, // arm horizontal
        }
    }
}

/// Servo-driven barrier arm
pub struct ServoBarrier<P: PwmInterface> {
    pwm: P,
    config: BarrierConfig,
}

impl<P: PwmInterface> ServoBarrier<P> {
    /// Create the driver and enable the PWM output
    pub fn new(mut pwm: P, config: BarrierConfig) -> Self {
        pwm.enable();
        Self { pwm, config }
    }

    /// Access the underlying PWM channel
    pub fn pwm_mut(&mut self) -> &mut P {
        &mut self.pwm
    }

    fn duty_for_pulse(&self, pulse_us: u16) -> f32 {
        let period_us = 1_000_000.0 / self.pwm.frequency() as f32;
        pulse_us as f32 / period_us
    }
}

impl<P: PwmInterface> BarrierActuator for ServoBarrier<P> {
    fn set_position(&mut self, position: BarrierPosition) -> Result<()> {
        let pulse_us = match position {
            BarrierPosition::Open => self.config.open_pulse_us,
            BarrierPosition::Closed => self.config.closed_pulse_us,
        };
        self.pwm.set_duty_cycle(self.duty_for_pulse(pulse_us))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockPwm;

    fn barrier() -> ServoBarrier<MockPwm> {
        ServoBarrier::new(MockPwm::new(Default::default()), BarrierConfig::default())
    }

    #[test]
    fn test_new_enables_pwm() {
        let mut barrier = barrier();
        assert!(barrier.pwm_mut().is_enabled());
    }

    #[test]
    fn test_open_pulse_duty() {
        let mut barrier = barrier();
        barrier.set_position(BarrierPosition::Open).unwrap();
        // 2000 us of a 20 ms period at 50 Hz
        assert!((barrier.pwm_mut().duty_cycle() - 0.10).abs() < 1e-6);
    }

    #[test]
    fn test_closed_pulse_duty() {
        let mut barrier = barrier();
        barrier.set_position(BarrierPosition::Closed).unwrap();
        assert!((barrier.pwm_mut().duty_cycle() - 0.05).abs() < 1e-6);
    }
}
