//! HD44780 16x2 LCD driver (PCF8574 I2C backpack)
//!
//! Drives the character LCD in 4-bit mode through the common PCF8574
//! expander wiring: RS on P0, R/W on P1, EN on P2, backlight on P3, data
//! nibble on P4-P7. `init()` performs the standard wake-up sequence and must
//! run once before the first render.

use crate::devices::traits::TextDisplay;
use crate::platform::traits::{I2cInterface, TimerInterface};
use crate::platform::Result;

/// Default PCF8574 backpack address
pub const DEFAULT_ADDR: u8 = 0x27;

/// Characters per display line
const COLS: usize = 16;

// PCF8574 control bits
const RS: u8 = 0x01;
const EN: u8 = 0x04;
const BACKLIGHT: u8 = 0x08;

// DDRAM addresses of the two lines
const LINE1_ADDR: u8 = 0x80;
const LINE2_ADDR: u8 = 0xC0;

/// 16x2 character LCD behind a PCF8574 I2C backpack
pub struct Lcd1602<I: I2cInterface> {
    i2c: I,
    addr: u8,
}

impl<I: I2cInterface> Lcd1602<I> {
    /// Create a driver at the default backpack address
    pub fn new(i2c: I) -> Self {
        Self::with_addr(i2c, DEFAULT_ADDR)
    }

    /// Create a driver at a specific backpack address
    pub fn with_addr(i2c: I, addr: u8) -> Self {
        Self { i2c, addr }
    }

    /// Access the underlying I2C bus
    pub fn i2c_mut(&mut self) -> &mut I {
        &mut self.i2c
    }

    /// Run the HD44780 4-bit wake-up sequence
    ///
    /// Must be called once, at least 40 ms after power-on, before any
    /// rendering.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError` if a bus write or delay fails.
    pub fn init<T: TimerInterface>(&mut self, timer: &mut T) -> Result<()> {
        timer.delay_ms(50)?;

        // Three times 8-bit function set, then the switch to 4-bit mode
        self.write_nibble(0x03, false)?;
        timer.delay_ms(5)?;
        self.write_nibble(0x03, false)?;
        timer.delay_us(150)?;
        self.write_nibble(0x03, false)?;
        timer.delay_us(150)?;
        self.write_nibble(0x02, false)?;

        self.command(0x28)?; // function set: 4-bit, 2 lines, 5x8 font
        self.command(0x08)?; // display off
        self.command(0x01)?; // clear
        timer.delay_ms(2)?;
        self.command(0x06)?; // entry mode: increment, no shift
        self.command(0x0C)?; // display on, cursor off
        Ok(())
    }

    fn write_nibble(&mut self, nibble: u8, rs: bool) -> Result<()> {
        let base = (nibble << 4) | BACKLIGHT | if rs { RS } else { 0 };
        // Latch the nibble with an EN pulse. At 100 kHz each transfer
        // outlasts the 37 us instruction time, so no extra delay is needed.
        self.i2c.write(self.addr, &[base | EN])?;
        self.i2c.write(self.addr, &[base])
    }

    fn send(&mut self, value: u8, rs: bool) -> Result<()> {
        self.write_nibble(value >> 4, rs)?;
        self.write_nibble(value & 0x0F, rs)
    }

    fn command(&mut self, cmd: u8) -> Result<()> {
        self.send(cmd, false)
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        let mut written = 0;
        for byte in text.bytes().take(COLS) {
            let c = if byte.is_ascii_graphic() || byte == b' ' {
                byte
            } else {
                b'?'
            };
            self.send(c, true)?;
            written += 1;
        }
        // Pad so stale characters never remain visible
        for _ in written..COLS {
            self.send(b' ', true)?;
        }
        Ok(())
    }
}

impl<I: I2cInterface> TextDisplay for Lcd1602<I> {
    fn render(&mut self, line1: &str, line2: &str) -> Result<()> {
        self.command(LINE1_ADDR)?;
        self.write_line(line1)?;
        self.command(LINE2_ADDR)?;
        self.write_line(line2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{I2cTransaction, MockI2c, MockTimer};

    /// Decode the nibble stream back into (commands, displayed text)
    fn decode(transactions: &[I2cTransaction]) -> (Vec<u8>, String) {
        let mut nibbles: Vec<(u8, bool)> = Vec::new();
        for t in transactions {
            if let I2cTransaction::Write { data, .. } = t {
                let byte = data[0];
                if byte & EN != 0 {
                    nibbles.push((byte >> 4, byte & RS != 0));
                }
            }
        }
        let mut commands = Vec::new();
        let mut text = String::new();
        for pair in nibbles.chunks_exact(2) {
            let value = (pair[0].0 << 4) | pair[1].0;
            if pair[0].1 {
                text.push(value as char);
            } else {
                commands.push(value);
            }
        }
        (commands, text)
    }

    fn display() -> (Lcd1602<MockI2c>, MockTimer) {
        (Lcd1602::new(MockI2c::new(Default::default())), MockTimer::new())
    }

    #[test]
    fn test_init_sequence() {
        let (mut lcd, mut timer) = display();
        lcd.init(&mut timer).unwrap();

        let (commands, text) = decode(lcd.i2c_mut().transactions());
        assert!(text.is_empty());
        // Function set, display off, clear, entry mode, display on
        assert!(commands.ends_with(&[0x28, 0x08, 0x01, 0x06, 0x0C]));
    }

    #[test]
    fn test_render_pads_both_lines() {
        let (mut lcd, mut timer) = display();
        lcd.init(&mut timer).unwrap();
        lcd.i2c_mut().clear_transactions();

        lcd.render("Free slots: 4", "").unwrap();

        let (commands, text) = decode(lcd.i2c_mut().transactions());
        assert_eq!(commands, vec![LINE1_ADDR, LINE2_ADDR]);
        assert_eq!(text.len(), 32);
        assert_eq!(&text[..16], "Free slots: 4   ");
        assert_eq!(&text[16..], " ".repeat(16));
    }

    #[test]
    fn test_render_truncates_long_line() {
        let (mut lcd, mut timer) = display();
        lcd.init(&mut timer).unwrap();
        lcd.i2c_mut().clear_transactions();

        lcd.render("0123456789ABCDEF-overflow", "x").unwrap();

        let (_, text) = decode(lcd.i2c_mut().transactions());
        assert_eq!(&text[..16], "0123456789ABCDEF");
    }
}
