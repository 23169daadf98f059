//! I2C (Inter-Integrated Circuit) HAL traits
//!
//! This module defines the I2C master abstraction used to reach the
//! identity EEPROM on the module's configuration bus.

use crate::error::Result;

/// I2C address (7-bit or 10-bit)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum I2cAddress {
    /// 7-bit address (most common)
    SevenBit(u8),
    /// 10-bit address
    TenBit(u16),
}

impl I2cAddress {
    /// Create a 7-bit address
    pub fn seven_bit(addr: u8) -> Self {
        debug_assert!(addr < 128, "7-bit address must be < 128");
        I2cAddress::SevenBit(addr)
    }

    /// Create a 10-bit address
    pub fn ten_bit(addr: u16) -> Self {
        debug_assert!(addr < 1024, "10-bit address must be < 1024");
        I2cAddress::TenBit(addr)
    }

    /// Get the raw address value
    pub fn raw(&self) -> u16 {
        match self {
            I2cAddress::SevenBit(addr) => *addr as u16,
            I2cAddress::TenBit(addr) => *addr,
        }
    }
}

impl From<u8> for I2cAddress {
    fn from(addr: u8) -> Self {
        I2cAddress::SevenBit(addr)
    }
}

/// I2C speed mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum I2cSpeed {
    /// Standard mode (100 kHz)
    Standard,
    /// Fast mode (400 kHz)
    Fast,
    /// Custom frequency
    Custom(u32),
}

impl I2cSpeed {
    /// Get the frequency in Hz
    pub fn frequency_hz(&self) -> u32 {
        match self {
            I2cSpeed::Standard => 100_000,
            I2cSpeed::Fast => 400_000,
            I2cSpeed::Custom(freq) => *freq,
        }
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy)]
pub struct I2cConfig {
    /// Bus speed
    pub speed: I2cSpeed,
    /// Enable clock stretching
    pub clock_stretching: bool,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self {
            speed: I2cSpeed::Standard,
            clock_stretching: true,
        }
    }
}

/// I2C bus trait
pub trait I2c {
    /// Configure the I2C bus
    fn configure(&mut self, config: I2cConfig) -> Result<()>;

    /// Write data to a device
    fn write(&mut self, address: I2cAddress, data: &[u8]) -> Result<()>;

    /// Read data from a device
    fn read(&mut self, address: I2cAddress, buffer: &mut [u8]) -> Result<()>;

    /// Write then read (combined operation)
    fn write_read(&mut self, address: I2cAddress, write: &[u8], read: &mut [u8]) -> Result<()>;
}
