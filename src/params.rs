//! Strongly typed parameter enumerations for the LIS3x driver family.
//!
//! Every chip gets its own range and data-rate enums. The field layout is the
//! same across the family but the codes are not portable: `0b01` is ±4 g on the
//! LIS3DH, ±200 g on the H3LIS331 and ±12 g on the LIS331HH.
//!
//! # Examples
//!
//! ```rust
//! use lis3x::params::{FieldCode, H3lis331Range, Lis3dhRange};
//!
//! assert_eq!(Lis3dhRange::G4.code(), H3lis331Range::G200.code());
//! assert_eq!(H3lis331Range::from_code(0b10), None);
//! ```

use core::fmt::Debug;

use crate::registers::{REG_OUT_ADC1_L, REG_OUT_ADC2_L, REG_OUT_ADC3_L};

/// Enumerations stored verbatim in a register [`Field`](crate::registers::Field).
pub trait FieldCode: Copy + Debug + PartialEq + Eq {
    /// Bit pattern written into the field.
    fn code(self) -> u8;

    /// Decodes a field value, returning `None` for patterns with no meaning on this chip.
    fn from_code(code: u8) -> Option<Self>;
}

/// Data-rate codes, which additionally know whether they select low-power mode.
pub trait DataRateCode: FieldCode {
    /// Returns `true` when the rate runs the chip in its low-power mode.
    fn is_low_power(self) -> bool;
}

macro_rules! impl_field_code {
    ($ty:ty, [$($variant:ident),+ $(,)?]) => {
        impl FieldCode for $ty {
            fn code(self) -> u8 {
                self as u8
            }

            fn from_code(code: u8) -> Option<Self> {
                [$(Self::$variant),+].into_iter().find(|v| *v as u8 == code)
            }
        }
    };
}

/// LIS3DH full-scale selections encoded in `CTRL_REG4[5:4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Lis3dhRange {
    /// ±2 g.
    G2 = 0b00,
    /// ±4 g.
    G4 = 0b01,
    /// ±8 g.
    G8 = 0b10,
    /// ±16 g.
    G16 = 0b11,
}

impl_field_code!(Lis3dhRange, [G2, G4, G8, G16]);

/// LIS3DH data rates encoded in `CTRL_REG1[7:3]` (ODR[3:0] followed by LPen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Lis3dhDataRate {
    /// Power-down mode.
    PowerDown = 0b0000_0,
    /// 1 Hz.
    Hz1 = 0b0001_0,
    /// 10 Hz.
    Hz10 = 0b0010_0,
    /// 25 Hz.
    Hz25 = 0b0011_0,
    /// 50 Hz.
    Hz50 = 0b0100_0,
    /// 100 Hz.
    Hz100 = 0b0101_0,
    /// 200 Hz.
    Hz200 = 0b0110_0,
    /// 400 Hz.
    Hz400 = 0b0111_0,
    /// 1.344 kHz, normal or high-resolution mode.
    Hz1344 = 0b1001_0,
    /// 1.6 kHz, low-power mode only.
    LowPower1600Hz = 0b1000_1,
    /// 5.376 kHz, low-power mode only.
    LowPower5376Hz = 0b1001_1,
}

impl_field_code!(
    Lis3dhDataRate,
    [PowerDown, Hz1, Hz10, Hz25, Hz50, Hz100, Hz200, Hz400, Hz1344, LowPower1600Hz, LowPower5376Hz]
);

impl DataRateCode for Lis3dhDataRate {
    fn is_low_power(self) -> bool {
        (self as u8) & 0b1 != 0
    }
}

/// H3LIS331 full-scale selections encoded in `CTRL_REG4[5:4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum H3lis331Range {
    /// ±100 g.
    G100 = 0b00,
    /// ±200 g.
    G200 = 0b01,
    /// ±400 g.
    G400 = 0b11,
}

impl_field_code!(H3lis331Range, [G100, G200, G400]);

/// H3LIS331 data rates encoded in `CTRL_REG1[7:3]` (PM[2:0] followed by DR[1:0]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum H3lis331DataRate {
    /// Power-down mode.
    PowerDown = 0x00,
    /// 50 Hz, normal mode.
    Hz50 = 0x04,
    /// 100 Hz, normal mode.
    Hz100 = 0x05,
    /// 400 Hz, normal mode.
    Hz400 = 0x06,
    /// 1000 Hz, normal mode.
    Hz1000 = 0x07,
    /// 0.5 Hz, low-power mode.
    LowPowerHalfHz = 0x08,
    /// 1 Hz, low-power mode.
    LowPower1Hz = 0x0C,
    /// 2 Hz, low-power mode.
    LowPower2Hz = 0x10,
    /// 5 Hz, low-power mode.
    LowPower5Hz = 0x14,
    /// 10 Hz, low-power mode.
    LowPower10Hz = 0x18,
}

impl_field_code!(
    H3lis331DataRate,
    [
        PowerDown,
        Hz50,
        Hz100,
        Hz400,
        Hz1000,
        LowPowerHalfHz,
        LowPower1Hz,
        LowPower2Hz,
        LowPower5Hz,
        LowPower10Hz,
    ]
);

impl DataRateCode for H3lis331DataRate {
    fn is_low_power(self) -> bool {
        // PM[2:0] above 0b001 selects one of the low-power rates.
        ((self as u8) >> 2) > 0b001
    }
}

/// LIS331HH full-scale selections encoded in `CTRL_REG4[5:4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Lis331hhRange {
    /// ±6 g.
    G6 = 0b00,
    /// ±12 g.
    G12 = 0b01,
    /// ±24 g.
    G24 = 0b11,
}

impl_field_code!(Lis331hhRange, [G6, G12, G24]);

/// LIS331HH data rates encoded in `CTRL_REG1[7:3]` (PM[2:0] followed by DR[1:0]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Lis331hhDataRate {
    /// Power-down mode.
    PowerDown = 0x00,
    /// 50 Hz, normal mode.
    Hz50 = 0x04,
    /// 100 Hz, normal mode.
    Hz100 = 0x05,
    /// 400 Hz, normal mode.
    Hz400 = 0x06,
    /// 1000 Hz, normal mode.
    Hz1000 = 0x07,
    /// 0.5 Hz, low-power mode.
    LowPowerHalfHz = 0x08,
    /// 1 Hz, low-power mode.
    LowPower1Hz = 0x0C,
    /// 2 Hz, low-power mode.
    LowPower2Hz = 0x10,
    /// 5 Hz, low-power mode.
    LowPower5Hz = 0x14,
    /// 10 Hz, low-power mode.
    LowPower10Hz = 0x18,
}

impl_field_code!(
    Lis331hhDataRate,
    [
        PowerDown,
        Hz50,
        Hz100,
        Hz400,
        Hz1000,
        LowPowerHalfHz,
        LowPower1Hz,
        LowPower2Hz,
        LowPower5Hz,
        LowPower10Hz,
    ]
);

impl DataRateCode for Lis331hhDataRate {
    fn is_low_power(self) -> bool {
        ((self as u8) >> 2) > 0b001
    }
}

/// Axis enables held in `CTRL_REG1[2:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Axes {
    /// X-axis enabled.
    pub x: bool,
    /// Y-axis enabled.
    pub y: bool,
    /// Z-axis enabled.
    pub z: bool,
}

impl Axes {
    /// All three axes enabled.
    pub const ALL: Self = Self {
        x: true,
        y: true,
        z: true,
    };

    /// Packs the enables into the 3-bit field value.
    pub const fn bits(self) -> u8 {
        (self.x as u8) | ((self.y as u8) << 1) | ((self.z as u8) << 2)
    }

    /// Unpacks the 3-bit field value.
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            x: bits & 0b001 != 0,
            y: bits & 0b010 != 0,
            z: bits & 0b100 != 0,
        }
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self::ALL
    }
}

/// Click detection modes accepted by the LIS3DH click engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClickMode {
    /// Click interrupt off; `CLICK_CFG` cleared.
    Disabled,
    /// Single-click on all axes.
    Single,
    /// Double-click on all axes.
    Double,
}

/// Timing windows for the LIS3DH click engine, in ODR periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClickTiming {
    /// `TIME_LIMIT`: maximum duration of a click.
    pub limit: u8,
    /// `TIME_LATENCY`: dead time after the first click.
    pub latency: u8,
    /// `TIME_WINDOW`: window in which a second click may start.
    pub window: u8,
}

impl Default for ClickTiming {
    fn default() -> Self {
        Self {
            limit: 10,
            latency: 20,
            window: 255,
        }
    }
}

/// LIS3DH auxiliary ADC channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcChannel {
    /// ADC input 1.
    Adc1,
    /// ADC input 2.
    Adc2,
    /// ADC input 3 (or the temperature sensor when `TEMP_EN` is set).
    Adc3,
}

impl AdcChannel {
    /// Address of the channel's low output byte.
    pub const fn register(self) -> u8 {
        match self {
            Self::Adc1 => REG_OUT_ADC1_L,
            Self::Adc2 => REG_OUT_ADC2_L,
            Self::Adc3 => REG_OUT_ADC3_L,
        }
    }
}
