//! SIM800 GSM modem driver (SMS transport)
//!
//! Text-mode SMS over the modem's serial AT-command channel. The driver is
//! fire-and-forget: commands are paced with a fixed guard delay instead of
//! parsing modem responses, and delivery is never confirmed. `init()` runs
//! the fixed mode-configuration handshake and must be called once at
//! startup, before the first send.

use crate::devices::traits::MessageTransport;
use crate::platform::traits::{TimerInterface, UartInterface};
use crate::platform::Result;

/// Inter-command guard delay
const DEFAULT_GUARD_MS: u32 = 500;

/// SMS body terminator in text mode
const CTRL_Z: u8 = 0x1A;

/// SIM800-family GSM modem over UART
pub struct Sim800<U: UartInterface, T: TimerInterface> {
    uart: U,
    timer: T,
    guard_ms: u32,
}

impl<U: UartInterface, T: TimerInterface> Sim800<U, T> {
    /// Create a driver with the default command pacing
    pub fn new(uart: U, timer: T) -> Self {
        Self::with_guard(uart, timer, DEFAULT_GUARD_MS)
    }

    /// Create a driver with custom command pacing
    pub fn with_guard(uart: U, timer: T, guard_ms: u32) -> Self {
        Self {
            uart,
            timer,
            guard_ms,
        }
    }

    /// Access the underlying UART
    pub fn uart_mut(&mut self) -> &mut U {
        &mut self.uart
    }

    /// Run the fixed startup handshake: probe, echo off, SMS text mode
    ///
    /// # Errors
    ///
    /// Returns `PlatformError` if a serial write fails. The modem's replies
    /// are drained, not checked.
    pub fn init(&mut self) -> Result<()> {
        self.command(b"AT")?;
        self.command(b"ATE0")?;
        self.command(b"AT+CMGF=1")?;
        #[cfg(feature = "defmt")]
        defmt::info!("modem handshake complete");
        Ok(())
    }

    fn command(&mut self, cmd: &[u8]) -> Result<()> {
        self.uart.write(cmd)?;
        self.uart.write(b"\r")?;
        self.uart.flush()?;
        self.timer.delay_ms(self.guard_ms)?;
        self.drain();
        Ok(())
    }

    /// Discard any pending modem responses
    fn drain(&mut self) {
        let mut scratch = [0u8; 16];
        while self.uart.available() {
            if self.uart.read(&mut scratch).unwrap_or(0) == 0 {
                break;
            }
        }
    }
}

impl<U: UartInterface, T: TimerInterface> MessageTransport for Sim800<U, T> {
    fn send(&mut self, destination: &str, body: &str) -> Result<()> {
        self.uart.write(b"AT+CMGS=\"")?;
        self.uart.write(destination.as_bytes())?;
        self.uart.write(b"\"\r")?;
        self.uart.flush()?;
        // Fixed wait for the "> " prompt instead of parsing it
        self.timer.delay_ms(self.guard_ms)?;

        self.uart.write(body.as_bytes())?;
        self.uart.write(&[CTRL_Z])?;
        self.uart.flush()?;
        self.timer.delay_ms(self.guard_ms)?;
        self.drain();

        #[cfg(feature = "defmt")]
        defmt::info!("SMS handed to modem");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockTimer, MockUart};

    fn modem() -> Sim800<MockUart, MockTimer> {
        Sim800::new(MockUart::new(Default::default()), MockTimer::new())
    }

    #[test]
    fn test_init_handshake_bytes() {
        let mut modem = modem();
        modem.init().unwrap();
        assert_eq!(modem.uart_mut().tx_buffer(), b"AT\rATE0\rAT+CMGF=1\r");
    }

    #[test]
    fn test_send_framing() {
        let mut modem = modem();
        modem.send("+15550100", "Vehicle entered").unwrap();

        let expected: &[u8] = b"AT+CMGS=\"+15550100\"\rVehicle entered\x1A";
        assert_eq!(modem.uart_mut().tx_buffer(), expected);
    }

    #[test]
    fn test_send_paces_commands() {
        let mut modem = Sim800::with_guard(
            MockUart::new(Default::default()),
            MockTimer::new(),
            250,
        );
        modem.send("+15550100", "x").unwrap();
        // Prompt wait plus post-body wait
        assert_eq!(modem.timer.now_us(), 2 * 250 * 1000);
    }

    #[test]
    fn test_init_drains_responses() {
        let mut modem = modem();
        modem.uart_mut().inject_rx_data(b"OK\r\n");
        modem.init().unwrap();
        assert!(!modem.uart_mut().available());
    }
}
