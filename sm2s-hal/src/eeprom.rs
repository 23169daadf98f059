//! Serial EEPROM access
//!
//! The module identity record lives in a small I2C EEPROM. This module
//! defines the byte-addressed [`Eeprom`] storage trait consumed by the
//! board identity code, plus [`I2cEeprom`], a generic device driver for
//! 24Cxx-style parts layered on any [`I2c`] bus implementation.

use crate::error::{Error, Result};
use crate::i2c::{I2c, I2cAddress};
use crate::time::Delay;

/// Byte-addressed persistent storage
///
/// Reads and writes are whole-buffer operations: any failure is treated as
/// total failure of the call. Retries and timeouts are the bus driver's
/// concern, not the caller's.
pub trait Eeprom {
    /// Device capacity in bytes
    fn capacity(&self) -> usize;

    /// Read `buf.len()` bytes starting at `offset`
    fn read(&mut self, offset: usize, buf: &mut [u8]) -> Result<()>;

    /// Write `data` starting at `offset`
    fn write(&mut self, offset: usize, data: &[u8]) -> Result<()>;
}

/// Memory address width of the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressWidth {
    /// Single address byte (parts up to 2 Kbit)
    OneByte,
    /// Two address bytes, big-endian on the wire
    TwoByte,
}

/// Largest page write a single bus transaction will carry
const MAX_PAGE_SIZE: usize = 32;

/// I2C EEPROM device driver
///
/// Writes are chunked so they never cross a device page boundary, with a
/// fixed settle delay after each page (the device does not acknowledge
/// while its internal write cycle runs).
pub struct I2cEeprom<B, D> {
    bus: B,
    delay: D,
    address: I2cAddress,
    addr_width: AddressWidth,
    page_size: usize,
    write_delay_ms: u32,
    capacity: usize,
}

impl<B: I2c, D: Delay> I2cEeprom<B, D> {
    /// Create a driver for a device at `address`
    pub fn new(
        bus: B,
        delay: D,
        address: I2cAddress,
        addr_width: AddressWidth,
        page_size: usize,
        write_delay_ms: u32,
        capacity: usize,
    ) -> Self {
        Self {
            bus,
            delay,
            address,
            addr_width,
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            write_delay_ms,
            capacity,
        }
    }

    /// Release the underlying bus and delay source
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }

    fn check_range(&self, offset: usize, len: usize) -> Result<()> {
        if offset.checked_add(len).map_or(true, |end| end > self.capacity) {
            return Err(Error::OutOfRange);
        }
        Ok(())
    }

    fn mem_addr(&self, offset: usize) -> ([u8; 2], usize) {
        match self.addr_width {
            AddressWidth::OneByte => ([offset as u8, 0], 1),
            AddressWidth::TwoByte => ([(offset >> 8) as u8, offset as u8], 2),
        }
    }
}

impl<B: I2c, D: Delay> Eeprom for I2cEeprom<B, D> {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn read(&mut self, offset: usize, buf: &mut [u8]) -> Result<()> {
        self.check_range(offset, buf.len())?;

        let (addr, alen) = self.mem_addr(offset);
        self.bus.write_read(self.address, &addr[..alen], buf)
    }

    fn write(&mut self, offset: usize, data: &[u8]) -> Result<()> {
        self.check_range(offset, data.len())?;

        let mut pos = 0;
        while pos < data.len() {
            let cursor = offset + pos;
            // Stop each chunk at the next page boundary
            let room = self.page_size - (cursor % self.page_size);
            let chunk = room.min(data.len() - pos);

            let (addr, alen) = self.mem_addr(cursor);
            let mut frame = [0u8; 2 + MAX_PAGE_SIZE];
            frame[..alen].copy_from_slice(&addr[..alen]);
            frame[alen..alen + chunk].copy_from_slice(&data[pos..pos + chunk]);

            log::trace!("eeprom: page write, offset {:#x}, {} bytes", cursor, chunk);
            self.bus.write(self.address, &frame[..alen + chunk])?;
            self.delay.delay_ms(self.write_delay_ms);

            pos += chunk;
        }
        Ok(())
    }
}
