//! Configuration primitives for the LIS3x driver family.

use crate::chip::Chip;
use crate::params::{Axes, DataRateCode};

/// User-facing configuration for one chip variant.
///
/// Defaults come from [`Chip::default_config`] and match the settings the
/// breakout boards are usually brought up with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config<C: Chip> {
    /// Full-scale selection.
    pub range: C::Range,
    /// Output data rate / power mode selection.
    pub data_rate: C::DataRate,
    /// Enabled axes.
    pub axes: Axes,
    /// Block data update: output registers hold until both bytes are read.
    pub block_data_update: bool,
    /// High-resolution (12-bit) output mode. LIS3DH only.
    pub high_resolution: bool,
    /// Route XYZ data-ready to INT1. LIS3DH only.
    pub data_ready_int1: bool,
    /// Enable the auxiliary ADC block. LIS3DH only.
    pub adc: bool,
    /// Identifier stamped into sensor events and descriptors.
    pub sensor_id: i32,
}

impl<C: Chip> Config<C> {
    /// Begins building a [`Config`] using the builder pattern.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> ConfigBuilder<C> {
        ConfigBuilder::new()
    }

    /// Checks whether this configuration is valid for the selected chip.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        let profile = C::profile();

        if (self.high_resolution && !profile.high_resolution)
            || (self.data_ready_int1 && !profile.int1_routing)
            || (self.adc && !profile.auxiliary_adc)
        {
            return Err(ConfigError::UnsupportedFeature);
        }

        if self.high_resolution && self.data_rate.is_low_power() {
            return Err(ConfigError::LowPowerWithHighResolution);
        }

        Ok(())
    }
}

impl<C: Chip> Default for Config<C> {
    fn default() -> Self {
        C::default_config()
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder<C: Chip> {
    config: Config<C>,
}

impl<C: Chip> ConfigBuilder<C> {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the full-scale selection.
    pub fn range(mut self, range: C::Range) -> Self {
        self.config.range = range;
        self
    }

    /// Overrides the output data rate.
    pub fn data_rate(mut self, data_rate: C::DataRate) -> Self {
        self.config.data_rate = data_rate;
        self
    }

    /// Selects which axes are sampled.
    pub fn axes(mut self, axes: Axes) -> Self {
        self.config.axes = axes;
        self
    }

    /// Enables or disables block data update.
    pub fn block_data_update(mut self, enabled: bool) -> Self {
        self.config.block_data_update = enabled;
        self
    }

    /// Enables or disables high-resolution output.
    pub fn high_resolution(mut self, enabled: bool) -> Self {
        self.config.high_resolution = enabled;
        self
    }

    /// Enables or disables data-ready signalling on INT1.
    pub fn data_ready_int1(mut self, enabled: bool) -> Self {
        self.config.data_ready_int1 = enabled;
        self
    }

    /// Enables or disables the auxiliary ADC.
    pub fn adc(mut self, enabled: bool) -> Self {
        self.config.adc = enabled;
        self
    }

    /// Sets the identifier reported in sensor events.
    pub fn sensor_id(mut self, sensor_id: i32) -> Self {
        self.config.sensor_id = sensor_id;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config<C> {
        self.config
    }
}

impl<C: Chip> Default for ConfigBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Validation errors generated while verifying a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A LIS3DH-only block was requested on a chip without it.
    UnsupportedFeature,
    /// Low-power data rates cannot be combined with high-resolution mode.
    LowPowerWithHighResolution,
}
