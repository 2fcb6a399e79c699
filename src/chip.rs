//! Per-variant constant tables and the chip marker types.
//!
//! The three parts share one register map. Everything that differs (identity
//! code, field placement, range table, scaling rule and optional blocks) lives in
//! a [`ChipProfile`], so the driver in [`crate::device`] is written once.

use crate::config::Config;
use crate::params::{
    Axes, DataRateCode, FieldCode, H3lis331DataRate, H3lis331Range, Lis331hhDataRate,
    Lis331hhRange, Lis3dhDataRate, Lis3dhRange,
};
use crate::registers::{FIELD_DATA_RATE, FIELD_RANGE, Field};

// Counts per 2 * full scale used by the 12-bit left-justified parts.
const LEFT_JUSTIFIED_SPAN: f32 = 4098.0;

/// Chip variants supported by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipKind {
    /// ST LIS3DH, ±2/4/8/16 g.
    Lis3dh,
    /// ST H3LIS331, ±100/200/400 g.
    H3lis331,
    /// ST LIS331HH, ±6/12/24 g.
    Lis331hh,
}

/// How raw axis counts are turned into g.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scaling {
    /// Full 16-bit count divided by a per-range divisor (`range code`, `divisor`).
    Divisor(&'static [(u8, f32)]),
    /// 12-bit count left-justified in 16 bits; after the shift each LSB is
    /// `2 * max_g / 4098` g.
    LeftJustified12,
}

/// One entry of a chip's full-scale table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeEntry {
    /// Field code written to `CTRL_REG4[5:4]`.
    pub code: u8,
    /// Full-scale magnitude in g.
    pub max_g: u16,
}

/// Constant description of one chip variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChipProfile {
    /// Part name reported in sensor descriptors.
    pub name: &'static str,
    /// Expected `WHO_AM_I` value.
    pub who_am_i: u8,
    /// Location of the data-rate setting.
    pub data_rate: Field,
    /// Location of the full-scale setting.
    pub range: Field,
    /// Full-scale table.
    pub ranges: &'static [RangeEntry],
    /// Raw-to-g conversion rule.
    pub scaling: Scaling,
    /// `CTRL_REG4.HR` is available.
    pub high_resolution: bool,
    /// `CTRL_REG3` uses the LIS3DH INT1 routing layout.
    pub int1_routing: bool,
    /// Auxiliary ADC block (`TEMP_CFG_REG`, `OUT_ADCx`) is present.
    pub auxiliary_adc: bool,
    /// Click engine (`CLICK_*` registers) is present.
    pub click: bool,
}

const LIS3DH_PROFILE: ChipProfile = ChipProfile {
    name: "LIS3DH",
    who_am_i: 0x33,
    data_rate: FIELD_DATA_RATE,
    range: FIELD_RANGE,
    ranges: &[
        RangeEntry { code: 0b00, max_g: 2 },
        RangeEntry { code: 0b01, max_g: 4 },
        RangeEntry { code: 0b10, max_g: 8 },
        RangeEntry { code: 0b11, max_g: 16 },
    ],
    scaling: Scaling::Divisor(&[(0b00, 16380.0), (0b01, 8190.0), (0b10, 4096.0), (0b11, 1365.0)]),
    high_resolution: true,
    int1_routing: true,
    auxiliary_adc: true,
    click: true,
};

const H3LIS331_PROFILE: ChipProfile = ChipProfile {
    name: "H3LIS331",
    who_am_i: 0x32,
    data_rate: FIELD_DATA_RATE,
    range: FIELD_RANGE,
    ranges: &[
        RangeEntry { code: 0b00, max_g: 100 },
        RangeEntry { code: 0b01, max_g: 200 },
        RangeEntry { code: 0b11, max_g: 400 },
    ],
    scaling: Scaling::LeftJustified12,
    high_resolution: false,
    int1_routing: false,
    auxiliary_adc: false,
    click: false,
};

const LIS331HH_PROFILE: ChipProfile = ChipProfile {
    name: "LIS331HH",
    who_am_i: 0x32,
    data_rate: FIELD_DATA_RATE,
    range: FIELD_RANGE,
    ranges: &[
        RangeEntry { code: 0b00, max_g: 6 },
        RangeEntry { code: 0b01, max_g: 12 },
        RangeEntry { code: 0b11, max_g: 24 },
    ],
    scaling: Scaling::LeftJustified12,
    high_resolution: false,
    int1_routing: false,
    auxiliary_adc: false,
    click: false,
};

impl ChipKind {
    /// Returns the constant table for this variant.
    pub const fn profile(self) -> &'static ChipProfile {
        match self {
            Self::Lis3dh => &LIS3DH_PROFILE,
            Self::H3lis331 => &H3LIS331_PROFILE,
            Self::Lis331hh => &LIS331HH_PROFILE,
        }
    }
}

impl ChipProfile {
    /// Full-scale magnitude in g for a range code, if the code is defined.
    pub fn max_g(&self, range_code: u8) -> Option<u16> {
        self.ranges
            .iter()
            .find(|entry| entry.code == range_code)
            .map(|entry| entry.max_g)
    }

    /// Largest full-scale magnitude the chip supports, in g.
    pub fn widest_range_g(&self) -> u16 {
        self.ranges.iter().map(|entry| entry.max_g).max().unwrap_or(0)
    }

    /// Converts one raw axis count into g for the given range code.
    ///
    /// Returns `None` when `range_code` has no entry in this chip's table.
    pub fn scale(&self, raw: i16, range_code: u8) -> Option<f32> {
        match self.scaling {
            Scaling::Divisor(table) => table
                .iter()
                .find(|(code, _)| *code == range_code)
                .map(|(_, divisor)| raw as f32 / divisor),
            Scaling::LeftJustified12 => self.max_g(range_code).map(|max_g| {
                let lsb = 2.0 * max_g as f32 / LEFT_JUSTIFIED_SPAN;
                (raw >> 4) as f32 * lsb
            }),
        }
    }
}

/// Compile-time binding between a marker type, its [`ChipKind`] and its typed settings.
pub trait Chip: Sized + Copy + core::fmt::Debug + PartialEq {
    /// Variant tag used to look up the [`ChipProfile`].
    const KIND: ChipKind;

    /// Full-scale enumeration of this chip.
    type Range: FieldCode;

    /// Data-rate enumeration of this chip.
    type DataRate: DataRateCode;

    /// Configuration applied by [`Config::default`].
    fn default_config() -> Config<Self>;

    /// Shortcut for `Self::KIND.profile()`.
    fn profile() -> &'static ChipProfile {
        Self::KIND.profile()
    }
}

/// Marker for the LIS3DH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lis3dh;

/// Marker for the H3LIS331.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct H3lis331;

/// Marker for the LIS331HH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lis331hh;

impl Chip for Lis3dh {
    const KIND: ChipKind = ChipKind::Lis3dh;
    type Range = Lis3dhRange;
    type DataRate = Lis3dhDataRate;

    fn default_config() -> Config<Self> {
        Config {
            range: Lis3dhRange::G2,
            data_rate: Lis3dhDataRate::Hz400,
            axes: Axes::ALL,
            block_data_update: true,
            high_resolution: true,
            data_ready_int1: true,
            adc: true,
            sensor_id: -1,
        }
    }
}

impl Chip for H3lis331 {
    const KIND: ChipKind = ChipKind::H3lis331;
    type Range = H3lis331Range;
    type DataRate = H3lis331DataRate;

    fn default_config() -> Config<Self> {
        Config {
            range: H3lis331Range::G100,
            data_rate: H3lis331DataRate::Hz1000,
            axes: Axes::ALL,
            block_data_update: false,
            high_resolution: false,
            data_ready_int1: false,
            adc: false,
            sensor_id: 0,
        }
    }
}

impl Chip for Lis331hh {
    const KIND: ChipKind = ChipKind::Lis331hh;
    type Range = Lis331hhRange;
    type DataRate = Lis331hhDataRate;

    fn default_config() -> Config<Self> {
        Config {
            range: Lis331hhRange::G24,
            data_rate: Lis331hhDataRate::Hz1000,
            axes: Axes::ALL,
            block_data_update: false,
            high_resolution: false,
            data_ready_int1: false,
            adc: false,
            sensor_id: 0,
        }
    }
}
