#![no_std]

mod error;

pub mod chip;
pub mod click;
pub mod config;
pub mod device;
pub mod event;
pub mod interface;
mod log;
pub mod params;
pub mod registers;
pub mod sample;

#[cfg(test)]
mod testing;

pub use crate::chip::{H3lis331, Lis331hh, Lis3dh};
pub use crate::config::Config;
pub use crate::device::Lis3x;
pub use crate::error::{Error, Result};
