//! Bus interface abstraction for the LIS3x driver family.

pub mod i2c;
pub mod spi;

use crate::registers::Field;

/// Abstraction over the low-level bus access required by the driver.
///
/// Implementations take plain register addresses; read/auto-increment flags
/// are added by each transport according to its own framing.
pub trait Lis3xInterface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes a single register.
    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error>;

    /// Reads a single register.
    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error>;

    /// Reads multiple consecutive registers into the provided buffer.
    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error>;

    /// Writes multiple consecutive registers from the provided buffer.
    fn write_many(&mut self, register: u8, data: &[u8]) -> core::result::Result<(), Self::Error>;

    /// Reads one register and returns the bits selected by `field`.
    fn read_field(&mut self, field: Field) -> core::result::Result<u8, Self::Error> {
        let current = self.read_register(field.register)?;
        Ok(field.extract(current))
    }

    /// Read-modify-write of `field`, leaving every other bit of the register untouched.
    ///
    /// `value` is truncated to the field width.
    fn write_field(&mut self, field: Field, value: u8) -> core::result::Result<(), Self::Error> {
        let current = self.read_register(field.register)?;
        self.write_register(field.register, field.insert(current, value))
    }
}
