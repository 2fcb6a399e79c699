//! I²C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::{I2c, Operation};

use super::Lis3xInterface;
use crate::registers::I2C_AUTO_INCREMENT;

/// Default 7-bit address (SDO/SA0 tied low).
pub const DEFAULT_ADDRESS: u8 = 0x18;
/// Alternate 7-bit address (SDO/SA0 tied high).
pub const ALTERNATE_ADDRESS: u8 = 0x19;

/// I²C-based interface implementation for the LIS3x driver.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface talking to `address` on the provided bus.
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Returns the 7-bit device address in use.
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Register sub-address, with the auto-increment bit set for bursts.
    fn sub_address(register: u8, len: usize) -> u8 {
        if len > 1 {
            register | I2C_AUTO_INCREMENT
        } else {
            register
        }
    }

    /// Provides mutable access to the wrapped I²C bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned I²C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Lis3xInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        self.i2c.write(self.address, &[register, value])
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.i2c.write_read(self.address, &[register], &mut value)?;
        Ok(value[0])
    }

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        let sub_address = [Self::sub_address(register, buf.len())];
        self.i2c.write_read(self.address, &sub_address, buf)
    }

    fn write_many(&mut self, register: u8, data: &[u8]) -> core::result::Result<(), Self::Error> {
        if data.is_empty() {
            return Ok(());
        }

        // Adjacent writes inside one transaction go out without a repeated start.
        let sub_address = [Self::sub_address(register, data.len())];
        let mut operations = [Operation::Write(&sub_address), Operation::Write(data)];
        self.i2c.transaction(self.address, &mut operations)
    }
}
