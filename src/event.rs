//! Generic timestamped sensor events.
//!
//! Mirrors the event/descriptor shape common to unified sensor frameworks so
//! accelerometer readings can be handed to code that knows nothing about the
//! LIS3x family.

use crate::chip::ChipProfile;
use crate::sample::Sample;

/// Standard gravity in m/s².
pub const GRAVITY_STANDARD: f32 = 9.80665;

/// Kind of measurement carried by an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SensorType {
    /// Acceleration in m/s².
    Accelerometer = 1,
}

/// One acceleration reading with its metadata.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorEvent {
    /// Size of this structure, used as a layout version.
    pub version: u32,
    /// Caller-assigned sensor identifier.
    pub sensor_id: i32,
    /// Measurement kind.
    pub sensor_type: SensorType,
    /// Caller-supplied timestamp; the driver has no clock of its own.
    pub timestamp: u32,
    /// X, Y, Z acceleration in m/s².
    pub acceleration: [f32; 3],
}

impl SensorEvent {
    /// Builds an event from a decoded sample.
    pub fn from_sample(sample: &Sample, sensor_id: i32, timestamp: u32) -> Self {
        Self {
            version: core::mem::size_of::<Self>() as u32,
            sensor_id,
            sensor_type: SensorType::Accelerometer,
            timestamp,
            acceleration: sample.g.map(|g| g * GRAVITY_STANDARD),
        }
    }
}

/// Static description of a sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorDescriptor {
    /// Part name.
    pub name: &'static str,
    /// Driver version.
    pub version: i32,
    /// Caller-assigned sensor identifier.
    pub sensor_id: i32,
    /// Measurement kind.
    pub sensor_type: SensorType,
    /// Largest reportable value in m/s².
    pub max_value: f32,
    /// Smallest reportable value in m/s².
    pub min_value: f32,
    /// Smallest reportable step in m/s²; 0 when it depends on the active range.
    pub resolution: f32,
    /// Minimum delay between events in microseconds; 0 when not rate-limited.
    pub min_delay: i32,
}

impl SensorDescriptor {
    /// Describes a chip using its widest full-scale range.
    pub fn for_chip(profile: &ChipProfile, sensor_id: i32) -> Self {
        let span = profile.widest_range_g() as f32 * GRAVITY_STANDARD;
        Self {
            name: profile.name,
            version: 1,
            sensor_id,
            sensor_type: SensorType::Accelerometer,
            max_value: span,
            min_value: -span,
            resolution: 0.0,
            min_delay: 0,
        }
    }
}
