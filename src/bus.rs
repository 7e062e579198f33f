// Copyright 2024, F. Stan
//
// Licensed under the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>,
// This file may not be copied, modified, or distributed
// except according to those terms.

use i2cdev::core::I2CDevice;
use std::error::Error;
use std::fmt;

/// Largest block an SMBus I2C block read can return
pub const SMBUS_BLOCK_MAX: usize = 32;

/// Register addressed transport used by the driver.
///
/// The device address is part of the bus handle, so every call only names
/// the register. Any [`I2CDevice`] from i2cdev, `LinuxI2CDevice` included,
/// is a `RegisterBus` already.
pub trait RegisterBus {
    /// Transport error reported by every transaction
    type Error: Error;

    /// Reads a single byte register.
    fn read_byte(&mut self, register: u8) -> Result<u8, Self::Error>;

    /// Reads `buffer.len()` bytes starting at `register`.
    /// Either the whole buffer is filled or an error is returned.
    fn read_bytes(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;

    /// Writes a single byte register.
    fn write_byte(&mut self, register: u8, value: u8) -> Result<(), Self::Error>;

    /// Writes `data` to `register` in one transaction. An empty `data`
    /// sends the register address alone.
    fn write_bytes(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error>;
}

///
///Error of an i2cdev backed bus. I2c wraps the
///device error, the others are block reads that
///cannot fill the caller's buffer.
///
#[derive(Debug)]
pub enum BusError<E> {
    /// Error from the i2cdev device
    I2c(E),
    /// Block read longer than [`SMBUS_BLOCK_MAX`]
    BlockTooLong(usize),
    /// Device returned fewer or more bytes than requested
    ShortRead { expected: usize, received: usize },
}

impl<E: fmt::Display> fmt::Display for BusError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            BusError::I2c(ref e) => fmt::Display::fmt(e, f),
            BusError::BlockTooLong(len) => write!(
                f,
                "Block read of {} bytes exceeds the SMBus limit of {}",
                len, SMBUS_BLOCK_MAX
            ),
            BusError::ShortRead { expected, received } => write!(
                f,
                "Block read returned {} bytes, expected {}",
                received, expected
            ),
        }
    }
}

impl<E: Error + 'static> Error for BusError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            BusError::I2c(ref e) => Some(e),
            _ => None,
        }
    }
}

impl<T: I2CDevice> RegisterBus for T
where
    T::Error: 'static,
{
    type Error = BusError<T::Error>;

    fn read_byte(&mut self, register: u8) -> Result<u8, Self::Error> {
        self.smbus_read_byte_data(register).map_err(BusError::I2c)
    }

    /// Uses an SMBus I2C block read, so at most [`SMBUS_BLOCK_MAX`] bytes.
    fn read_bytes(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        if buffer.len() > SMBUS_BLOCK_MAX {
            return Err(BusError::BlockTooLong(buffer.len()));
        }
        let data = self
            .smbus_read_i2c_block_data(register, buffer.len() as u8)
            .map_err(BusError::I2c)?;
        if data.len() != buffer.len() {
            return Err(BusError::ShortRead {
                expected: buffer.len(),
                received: data.len(),
            });
        }
        buffer.copy_from_slice(&data);
        Ok(())
    }

    fn write_byte(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        self.smbus_write_byte_data(register, value)
            .map_err(BusError::I2c)
    }

    fn write_bytes(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error> {
        let mut message = Vec::with_capacity(data.len() + 1);
        message.push(register);
        message.extend_from_slice(data);
        self.write(&message).map_err(BusError::I2c)
    }
}
