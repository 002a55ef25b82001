//! Mock I2C implementation for testing

use crate::platform::{
    traits::{I2cConfig, I2cInterface},
    Result,
};
use heapless::{Deque, Vec};

/// Maximum bytes recorded per write transaction
const MAX_WRITE_LEN: usize = 8;

/// Maximum transactions kept in the log
const MAX_TRANSACTIONS: usize = 1024;

/// I2C transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cTransaction {
    /// Write transaction
    Write {
        addr: u8,
        data: Vec<u8, MAX_WRITE_LEN>,
    },
    /// Read transaction
    Read { addr: u8, len: usize },
}

/// Mock I2C implementation
///
/// Records all transactions for test verification and allows
/// pre-programming expected read data.
#[derive(Debug)]
pub struct MockI2c {
    config: I2cConfig,
    transactions: Vec<I2cTransaction, MAX_TRANSACTIONS>,
    read_data: Deque<u8, 64>,
}

impl MockI2c {
    /// Create a new mock I2C
    pub fn new(config: I2cConfig) -> Self {
        Self {
            config,
            transactions: Vec::new(),
            read_data: Deque::new(),
        }
    }

    /// Get transaction log (for test verification)
    pub fn transactions(&self) -> &[I2cTransaction] {
        &self.transactions
    }

    /// Clear transaction log
    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
    }

    /// Set data to return for read operations
    pub fn set_read_data(&mut self, data: &[u8]) {
        self.read_data.clear();
        for &byte in data {
            let _ = self.read_data.push_back(byte);
        }
    }

    /// Get current frequency
    pub fn frequency(&self) -> u32 {
        self.config.frequency
    }
}

impl I2cInterface for MockI2c {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        let mut logged = Vec::new();
        let keep = core::cmp::min(data.len(), MAX_WRITE_LEN);
        let _ = logged.extend_from_slice(&data[..keep]);
        // Entries past the log capacity are dropped
        let _ = self
            .transactions
            .push(I2cTransaction::Write { addr, data: logged });
        Ok(())
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()> {
        let _ = self.transactions.push(I2cTransaction::Read {
            addr,
            len: buffer.len(),
        });
        for slot in buffer.iter_mut() {
            if let Some(byte) = self.read_data.pop_front() {
                *slot = byte;
            } else {
                break;
            }
        }
        Ok(())
    }

    fn set_frequency(&mut self, frequency: u32) -> Result<()> {
        self.config.frequency = frequency;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_i2c_write() {
        let mut i2c = MockI2c::new(I2cConfig::default());
        i2c.write(0x27, &[0x01, 0x02, 0x03]).unwrap();

        let transactions = i2c.transactions();
        assert_eq!(transactions.len(), 1);
        match &transactions[0] {
            I2cTransaction::Write { addr, data } => {
                assert_eq!(*addr, 0x27);
                assert_eq!(data.as_slice(), &[0x01, 0x02, 0x03]);
            }
            other => panic!("unexpected transaction: {:?}", other),
        }
    }

    #[test]
    fn test_mock_i2c_read() {
        let mut i2c = MockI2c::new(I2cConfig::default());
        i2c.set_read_data(&[0xAA, 0xBB, 0xCC]);

        let mut buffer = [0u8; 3];
        i2c.read(0x51, &mut buffer).unwrap();

        assert_eq!(buffer, [0xAA, 0xBB, 0xCC]);
        assert_eq!(
            i2c.transactions()[0],
            I2cTransaction::Read { addr: 0x51, len: 3 }
        );
    }

    #[test]
    fn test_mock_i2c_frequency() {
        let mut i2c = MockI2c::new(I2cConfig::default());
        assert_eq!(i2c.frequency(), 100_000);

        i2c.set_frequency(400_000).unwrap();
        assert_eq!(i2c.frequency(), 400_000);
    }
}
