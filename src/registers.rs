//! Register map definitions shared by the LIS3DH, H3LIS331 and LIS331HH.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

/// Register address of `STATUS_REG_AUX` (LIS3DH).
pub const REG_STATUS_AUX: u8 = 0x07;
/// Register address of `OUT_ADC1_L` (LIS3DH).
pub const REG_OUT_ADC1_L: u8 = 0x08;
/// Register address of `OUT_ADC1_H` (LIS3DH).
pub const REG_OUT_ADC1_H: u8 = 0x09;
/// Register address of `OUT_ADC2_L` (LIS3DH).
pub const REG_OUT_ADC2_L: u8 = 0x0A;
/// Register address of `OUT_ADC2_H` (LIS3DH).
pub const REG_OUT_ADC2_H: u8 = 0x0B;
/// Register address of `OUT_ADC3_L` (LIS3DH).
pub const REG_OUT_ADC3_L: u8 = 0x0C;
/// Register address of `OUT_ADC3_H` (LIS3DH).
pub const REG_OUT_ADC3_H: u8 = 0x0D;
/// Register address of `WHO_AM_I`.
pub const REG_WHO_AM_I: u8 = 0x0F;
/// Register address of `TEMP_CFG_REG` (LIS3DH).
pub const REG_TEMP_CFG: u8 = 0x1F;
/// Register address of `CTRL_REG1`.
pub const REG_CTRL1: u8 = 0x20;
/// Register address of `CTRL_REG2`.
pub const REG_CTRL2: u8 = 0x21;
/// Register address of `CTRL_REG3`.
pub const REG_CTRL3: u8 = 0x22;
/// Register address of `CTRL_REG4`.
pub const REG_CTRL4: u8 = 0x23;
/// Register address of `CTRL_REG5`.
pub const REG_CTRL5: u8 = 0x24;
/// Register address of `CTRL_REG6` (LIS3DH).
pub const REG_CTRL6: u8 = 0x25;
/// Register address of `REFERENCE`.
pub const REG_REFERENCE: u8 = 0x26;
/// Register address of `STATUS_REG`.
pub const REG_STATUS: u8 = 0x27;
/// Register address of `OUT_X_L`.
pub const REG_OUT_X_L: u8 = 0x28;
/// Register address of `OUT_X_H`.
pub const REG_OUT_X_H: u8 = 0x29;
/// Register address of `OUT_Y_L`.
pub const REG_OUT_Y_L: u8 = 0x2A;
/// Register address of `OUT_Y_H`.
pub const REG_OUT_Y_H: u8 = 0x2B;
/// Register address of `OUT_Z_L`.
pub const REG_OUT_Z_L: u8 = 0x2C;
/// Register address of `OUT_Z_H`.
pub const REG_OUT_Z_H: u8 = 0x2D;
/// Register address of `FIFO_CTRL_REG` (LIS3DH).
pub const REG_FIFO_CTRL: u8 = 0x2E;
/// Register address of `FIFO_SRC_REG` (LIS3DH).
pub const REG_FIFO_SRC: u8 = 0x2F;
/// Register address of `INT1_CFG`.
pub const REG_INT1_CFG: u8 = 0x30;
/// Register address of `INT1_SRC`.
pub const REG_INT1_SRC: u8 = 0x31;
/// Register address of `INT1_THS`.
pub const REG_INT1_THS: u8 = 0x32;
/// Register address of `INT1_DURATION`.
pub const REG_INT1_DURATION: u8 = 0x33;
/// Register address of `INT2_CFG`.
pub const REG_INT2_CFG: u8 = 0x34;
/// Register address of `INT2_SRC`.
pub const REG_INT2_SRC: u8 = 0x35;
/// Register address of `INT2_THS`.
pub const REG_INT2_THS: u8 = 0x36;
/// Register address of `INT2_DURATION`.
pub const REG_INT2_DURATION: u8 = 0x37;
/// Register address of `CLICK_CFG` (LIS3DH).
pub const REG_CLICK_CFG: u8 = 0x38;
/// Register address of `CLICK_SRC` (LIS3DH).
pub const REG_CLICK_SRC: u8 = 0x39;
/// Register address of `CLICK_THS` (LIS3DH).
pub const REG_CLICK_THS: u8 = 0x3A;
/// Register address of `TIME_LIMIT` (LIS3DH).
pub const REG_TIME_LIMIT: u8 = 0x3B;
/// Register address of `TIME_LATENCY` (LIS3DH).
pub const REG_TIME_LATENCY: u8 = 0x3C;
/// Register address of `TIME_WINDOW` (LIS3DH).
pub const REG_TIME_WINDOW: u8 = 0x3D;

/// Location of a multi-bit setting inside a single 8-bit register.
///
/// Fields never straddle two registers in this family; [`Field::new`] rejects
/// descriptors that would.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Field {
    /// Register address holding the field.
    pub register: u8,
    /// Bit position of the field's least significant bit.
    pub offset: u8,
    /// Number of bits covered by the field.
    pub width: u8,
}

impl Field {
    /// Creates a new descriptor. Panics (at compile time in `const` context)
    /// when the field does not fit in one byte.
    pub const fn new(register: u8, offset: u8, width: u8) -> Self {
        assert!(width > 0 && offset + width <= 8, "field must fit inside one register");
        Self { register, offset, width }
    }

    /// Mask selecting the field bits in place.
    pub const fn mask(self) -> u8 {
        (((1u16 << self.width) - 1) as u8) << self.offset
    }

    /// Extracts the field value from a full register byte.
    pub const fn extract(self, byte: u8) -> u8 {
        (byte & self.mask()) >> self.offset
    }

    /// Returns `byte` with the field replaced by `value`.
    ///
    /// Bits of `value` that do not fit the field width are dropped.
    pub const fn insert(self, byte: u8, value: u8) -> u8 {
        (byte & !self.mask()) | ((value << self.offset) & self.mask())
    }
}

/// `CTRL_REG1[2:0]` X/Y/Z axis enables.
pub const FIELD_AXES: Field = Field::new(REG_CTRL1, 0, 3);
/// `CTRL_REG1[7:3]` data rate (LIS3DH: ODR + LPen, LIS331 parts: PM + DR).
pub const FIELD_DATA_RATE: Field = Field::new(REG_CTRL1, 3, 5);
/// `CTRL_REG4[5:4]` full-scale selection.
pub const FIELD_RANGE: Field = Field::new(REG_CTRL4, 4, 2);
/// `CTRL_REG3[7]` click interrupt routed to INT1 (LIS3DH).
pub const FIELD_I1_CLICK: Field = Field::new(REG_CTRL3, 7, 1);
/// `CTRL_REG5[3]` latch INT1 requests (LIS3DH).
pub const FIELD_LIR_INT1: Field = Field::new(REG_CTRL5, 3, 1);

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Write-only register.
    WriteOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every register value type.
pub trait Register {
    /// Raw storage backing the register payload.
    type Raw: Copy;
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
    /// Optional reset/default value defined by the datasheet.
    const RESET_VALUE: Option<Self::Raw>;
}

macro_rules! impl_byte_register {
    ($ty:ident, $address:expr, $access:ident, $reset:expr) => {
        impl From<u8> for $ty {
            fn from(value: u8) -> Self {
                Self::from_bytes([value])
            }
        }

        impl From<$ty> for u8 {
            fn from(value: $ty) -> Self {
                value.into_bytes()[0]
            }
        }

        impl Register for $ty {
            type Raw = u8;
            const ADDRESS: u8 = $address;
            const ACCESS: RegisterAccess = RegisterAccess::$access;
            const RESET_VALUE: Option<Self::Raw> = $reset;
        }
    };
}

/// Bitfield representation of `CTRL_REG1` (address `0x20`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ctrl1 {
    // X-axis enable (bit 0).
    pub x_enable: bool,
    // Y-axis enable (bit 1).
    pub y_enable: bool,
    // Z-axis enable (bit 2).
    pub z_enable: bool,
    // Chip-specific data rate code (bits 7:3).
    pub data_rate: B5,
}

/// Bitfield representation of the LIS3DH `CTRL_REG3` (address `0x22`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ctrl3 {
    #[skip]
    __: B1,
    // FIFO overrun on INT1 (bit 1).
    pub i1_overrun: bool,
    // FIFO watermark on INT1 (bit 2).
    pub i1_wtm: bool,
    // 321DA data ready on INT1 (bit 3).
    pub i1_321da: bool,
    // ZYXDA data ready on INT1 (bit 4).
    pub i1_zyxda: bool,
    // IA2 on INT1 (bit 5).
    pub i1_ia2: bool,
    // IA1 on INT1 (bit 6).
    pub i1_ia1: bool,
    // Click interrupt on INT1 (bit 7).
    pub i1_click: bool,
}

/// Bitfield representation of `CTRL_REG4` (address `0x23`).
///
/// Bit 3 is `HR` on the LIS3DH and `STsign` on the LIS331 parts; the driver
/// only sets it on chips that support high-resolution mode.
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ctrl4 {
    // SPI 3-wire mode (bit 0).
    pub sim: bool,
    // Self-test selection (bits 2:1).
    pub self_test: B2,
    // High-resolution output mode (bit 3).
    pub high_resolution: bool,
    // Full-scale selection (bits 5:4).
    pub full_scale: B2,
    // Big/little endian data selection (bit 6).
    pub ble: bool,
    // Block data update (bit 7).
    pub bdu: bool,
}

/// Bitfield representation of the LIS3DH `CTRL_REG5` (address `0x24`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ctrl5 {
    // 4D detection on INT2 (bit 0).
    pub d4d_int2: bool,
    // Latch INT2 requests (bit 1).
    pub lir_int2: bool,
    // 4D detection on INT1 (bit 2).
    pub d4d_int1: bool,
    // Latch INT1 requests (bit 3).
    pub lir_int1: bool,
    #[skip]
    __: B2,
    // FIFO enable (bit 6).
    pub fifo_enable: bool,
    // Reboot memory content (bit 7).
    pub boot: bool,
}

/// Bitfield representation of the LIS3DH `TEMP_CFG_REG` (address `0x1F`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TempCfg {
    #[skip]
    __: B6,
    // Temperature sensor routed to ADC3 (bit 6).
    pub temp_enable: bool,
    // Auxiliary ADC enable (bit 7).
    pub adc_enable: bool,
}

/// Bitfield representation of `STATUS_REG` (address `0x27`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    // New X-axis data available (bit 0).
    pub x_data_available: bool,
    // New Y-axis data available (bit 1).
    pub y_data_available: bool,
    // New Z-axis data available (bit 2).
    pub z_data_available: bool,
    // New data available on all axes (bit 3).
    pub zyx_data_available: bool,
    // X-axis overrun (bit 4).
    pub x_overrun: bool,
    // Y-axis overrun (bit 5).
    pub y_overrun: bool,
    // Z-axis overrun (bit 6).
    pub z_overrun: bool,
    // Overrun on any axis (bit 7).
    pub zyx_overrun: bool,
}

/// Bitfield representation of the LIS3DH `CLICK_CFG` (address `0x38`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickCfg {
    pub x_single: bool,
    pub x_double: bool,
    pub y_single: bool,
    pub y_double: bool,
    pub z_single: bool,
    pub z_double: bool,
    #[skip]
    __: B2,
}

impl ClickCfg {
    /// Single-click detection on every axis.
    pub fn single_all_axes() -> Self {
        Self::new()
            .with_x_single(true)
            .with_y_single(true)
            .with_z_single(true)
    }

    /// Double-click detection on every axis.
    pub fn double_all_axes() -> Self {
        Self::new()
            .with_x_double(true)
            .with_y_double(true)
            .with_z_double(true)
    }
}

/// Bitfield representation of the LIS3DH `CLICK_SRC` (address `0x39`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickSource {
    // Click detected on X (bit 0).
    pub x: bool,
    // Click detected on Y (bit 1).
    pub y: bool,
    // Click detected on Z (bit 2).
    pub z: bool,
    // Click sign, set when negative (bit 3).
    pub negative: bool,
    // Single-click detected (bit 4).
    pub single_click: bool,
    // Double-click detected (bit 5).
    pub double_click: bool,
    // Interrupt active (bit 6).
    pub active: bool,
    #[skip]
    __: B1,
}

impl_byte_register!(Ctrl1, REG_CTRL1, ReadWrite, Some(0x07));
impl_byte_register!(Ctrl3, REG_CTRL3, ReadWrite, Some(0x00));
impl_byte_register!(Ctrl4, REG_CTRL4, ReadWrite, Some(0x00));
impl_byte_register!(Ctrl5, REG_CTRL5, ReadWrite, Some(0x00));
impl_byte_register!(TempCfg, REG_TEMP_CFG, ReadWrite, Some(0x00));
impl_byte_register!(Status, REG_STATUS, ReadOnly, None);
impl_byte_register!(ClickCfg, REG_CLICK_CFG, ReadWrite, Some(0x00));
impl_byte_register!(ClickSource, REG_CLICK_SRC, ReadOnly, None);

#[cfg(feature = "defmt")]
impl defmt::Format for ClickSource {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "ClickSource {{ x: {}, y: {}, z: {}, negative: {}, single: {}, double: {}, active: {} }}",
            self.x(),
            self.y(),
            self.z(),
            self.negative(),
            self.single_click(),
            self.double_click(),
            self.active()
        );
    }
}

/// Sub-address bit requesting register auto-increment over I²C.
pub const I2C_AUTO_INCREMENT: u8 = 0x80;
/// Command bit selecting a read over SPI.
pub const SPI_READ: u8 = 0x80;
/// Command bit requesting register auto-increment over SPI.
pub const SPI_AUTO_INCREMENT: u8 = 0x40;
