//! Acceleration sample decoding.

use crate::chip::ChipProfile;

/// Number of consecutive bytes spanning the X, Y and Z output registers.
pub const RAW_AXIS_BYTES: usize = 6;

/// One decoded acceleration sample.
///
/// `raw` is what the device reported; `g` is derived from it using the range
/// in effect when the sample was read and is stale once the range changes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    /// Raw X, Y, Z counts as read from `OUT_X_L..OUT_Z_H`.
    pub raw: [i16; 3],
    /// X, Y, Z acceleration in g.
    pub g: [f32; 3],
}

impl Sample {
    /// Scales a raw triplet using `profile`'s rule for `range_code`.
    ///
    /// Returns `None` when the range code is undefined for the chip.
    pub fn scaled(raw: [i16; 3], profile: &ChipProfile, range_code: u8) -> Option<Self> {
        let mut g = [0.0f32; 3];
        for (out, count) in g.iter_mut().zip(raw) {
            *out = profile.scale(count, range_code)?;
        }
        Some(Self { raw, g })
    }

    /// X acceleration in g.
    pub fn x(&self) -> f32 {
        self.g[0]
    }

    /// Y acceleration in g.
    pub fn y(&self) -> f32 {
        self.g[1]
    }

    /// Z acceleration in g.
    pub fn z(&self) -> f32 {
        self.g[2]
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Sample {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Sample {{ raw: [{}, {}, {}], g: [{}, {}, {}] }}",
            self.raw[0],
            self.raw[1],
            self.raw[2],
            self.g[0],
            self.g[1],
            self.g[2]
        );
    }
}

/// Reassembles the little-endian X, Y, Z words of an output burst.
pub fn decode_axes(bytes: &[u8; RAW_AXIS_BYTES]) -> [i16; 3] {
    [
        i16::from_le_bytes([bytes[0], bytes[1]]),
        i16::from_le_bytes([bytes[2], bytes[3]]),
        i16::from_le_bytes([bytes[4], bytes[5]]),
    ]
}
