//! SPI interface implementation built on top of `embedded-hal` `SpiDevice`.
//!
//! Works with hardware SPI peripherals as well as bit-banged (software-clocked)
//! `SpiDevice` implementations; the bus must run in mode 0, MSB first.

use embedded_hal::spi::{Operation, SpiDevice};

use super::Lis3xInterface;
use crate::registers::{SPI_AUTO_INCREMENT, SPI_READ};

// Bits 5:0 of the command byte carry the register address.
const ADDRESS_MASK: u8 = 0x3F;

/// SPI-based interface implementation for the LIS3x driver.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Creates a new interface from the provided SPI device abstraction.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Builds the command byte used to address registers over SPI.
    fn command_byte(register: u8, is_read: bool, is_multi: bool) -> u8 {
        let mut command = register & ADDRESS_MASK;
        if is_read {
            command |= SPI_READ;
        }
        if is_multi {
            command |= SPI_AUTO_INCREMENT;
        }
        command
    }

    /// Provides mutable access to the wrapped SPI device.
    pub fn spi_mut(&mut self) -> &mut SPI {
        &mut self.spi
    }

    /// Consumes the interface and returns the owned SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> Lis3xInterface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    type Error = SPI::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        self.write_many(register, core::slice::from_ref(&value))
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.read_many(register, &mut value)?;
        Ok(value[0])
    }

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        let command = [Self::command_byte(register, true, buf.len() > 1)];
        let mut operations = [Operation::Write(&command), Operation::Read(buf)];
        self.spi.transaction(&mut operations)
    }

    fn write_many(&mut self, register: u8, data: &[u8]) -> core::result::Result<(), Self::Error> {
        if data.is_empty() {
            return Ok(());
        }

        let command = [Self::command_byte(register, false, data.len() > 1)];
        let mut operations = [Operation::Write(&command), Operation::Write(data)];
        self.spi.transaction(&mut operations)
    }
}
