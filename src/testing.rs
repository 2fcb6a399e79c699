//! In-memory register file used by unit tests.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;

use crate::interface::Lis3xInterface;

const REGISTER_COUNT: usize = 0x40;

/// Flat register file with auto-incrementing bursts and a write counter.
pub struct FakeRegisters {
    registers: [u8; REGISTER_COUNT],
    writes: usize,
}

impl FakeRegisters {
    pub fn new() -> Self {
        Self {
            registers: [0; REGISTER_COUNT],
            writes: 0,
        }
    }

    /// Preloads a register without counting it as a bus write.
    pub fn set(&mut self, register: u8, value: u8) {
        self.registers[register as usize] = value;
    }

    pub fn get(&self, register: u8) -> u8 {
        self.registers[register as usize]
    }

    /// Number of registers written over the bus so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl Lis3xInterface for FakeRegisters {
    type Error = Infallible;

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        self.write_many(register, &[value])
    }

    fn read_register(&mut self, register: u8) -> Result<u8, Self::Error> {
        Ok(self.get(register))
    }

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        let start = register as usize;
        buf.copy_from_slice(&self.registers[start..start + buf.len()]);
        Ok(())
    }

    fn write_many(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error> {
        let start = register as usize;
        self.registers[start..start + data.len()].copy_from_slice(data);
        self.writes += data.len();
        Ok(())
    }
}

/// Delay provider that returns immediately.
pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}
