//! High-level LIS3x device driver implementation.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiDevice;

use crate::chip::{Chip, ChipProfile, Lis3dh};
use crate::click;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::event::{SensorDescriptor, SensorEvent};
use crate::interface::Lis3xInterface;
use crate::interface::i2c::I2cInterface;
use crate::interface::spi::SpiInterface;
use crate::log::{log_debug, log_trace, log_warn};
use crate::params::{AdcChannel, Axes, ClickMode, ClickTiming, DataRateCode, FieldCode};
use crate::registers::{
    ClickSource, Ctrl1, Ctrl3, Ctrl4, FIELD_AXES, Field, REG_CTRL1, REG_CTRL4, REG_OUT_X_L,
    REG_WHO_AM_I, Register, Status, TempCfg,
};
use crate::sample::{RAW_AXIS_BYTES, Sample, decode_axes};

// Power-up boot time before the register file is reliable (milliseconds).
const BOOT_DELAY_MS: u32 = 5;
/// Time a new full-scale selection needs to settle (milliseconds).
pub const RANGE_SETTLE_MS: u32 = 10;

/// High-level synchronous driver for one LIS3x accelerometer.
///
/// `C` selects the chip variant ([`Lis3dh`], [`H3lis331`](crate::chip::H3lis331)
/// or [`Lis331hh`](crate::chip::Lis331hh)); the transport is fixed by `IFACE`,
/// so a handle is bound to exactly one bus.
pub struct Lis3x<IFACE, C: Chip> {
    interface: IFACE,
    config: Config<C>,
    sample: Sample,
}

impl<IFACE, C: Chip> Lis3x<IFACE, C> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    pub fn new(interface: IFACE, config: Config<C>) -> Self {
        Self {
            interface,
            config,
            sample: Sample::default(),
        }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> (IFACE, Config<C>) {
        (self.interface, self.config)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Returns a shared reference to the active configuration.
    pub fn config(&self) -> &Config<C> {
        &self.config
    }

    /// Constant table of the selected chip.
    pub fn profile(&self) -> &'static ChipProfile {
        C::profile()
    }

    /// Most recently decoded sample; all zeros before the first [`read`](Self::read).
    pub fn sample(&self) -> &Sample {
        &self.sample
    }

    /// Static description of this sensor.
    pub fn descriptor(&self) -> SensorDescriptor {
        SensorDescriptor::for_chip(C::profile(), self.config.sensor_id)
    }
}

impl<I2C, C> Lis3x<I2cInterface<I2C>, C>
where
    I2C: I2c,
    C: Chip,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I²C transports.
    ///
    /// `address` is usually [`DEFAULT_ADDRESS`](crate::interface::i2c::DEFAULT_ADDRESS)
    /// or [`ALTERNATE_ADDRESS`](crate::interface::i2c::ALTERNATE_ADDRESS).
    pub fn new_i2c(i2c: I2C, address: u8, config: Config<C>) -> Self {
        Self::new(I2cInterface::new(i2c, address), config)
    }

    /// Releases the driver, returning the I²C bus and configuration.
    pub fn release_i2c(self) -> (I2C, Config<C>) {
        let (iface, config) = self.release();
        (iface.release(), config)
    }
}

impl<SPI, C> Lis3x<SpiInterface<SPI>, C>
where
    SPI: SpiDevice,
    C: Chip,
{
    // ==================================================================
    // == SPI Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for SPI transports.
    pub fn new_spi(spi: SPI, config: Config<C>) -> Self {
        Self::new(SpiInterface::new(spi), config)
    }

    /// Releases the driver, returning the SPI device and configuration.
    pub fn release_spi(self) -> (SPI, Config<C>) {
        let (iface, config) = self.release();
        (iface.release(), config)
    }
}

impl<IFACE, CommE, C> Lis3x<IFACE, C>
where
    IFACE: Lis3xInterface<Error = CommE>,
    C: Chip,
{
    // ==================================================================
    // == Initialization & Global Configuration ==========================
    // ==================================================================
    /// Initializes the sensor using the current configuration.
    ///
    /// Waits out the boot time, verifies `WHO_AM_I` and only then programs the
    /// control registers. On an identity mismatch nothing is written.
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), CommE> {
        self.config.validate().map_err(|_| Error::InvalidConfig)?;

        delay.delay_ms(BOOT_DELAY_MS);
        self.check_id()?;
        self.configure(self.config)?;
        delay.delay_ms(RANGE_SETTLE_MS);

        log_debug!("{=str} initialised", C::profile().name);
        Ok(())
    }

    /// Applies a new configuration to the device.
    ///
    /// Writes `CTRL_REG1` (axes, data rate) and `CTRL_REG4` (BDU, HR, range)
    /// whole; on the LIS3DH also `CTRL_REG3` (INT1 data-ready) and
    /// `TEMP_CFG_REG` (ADC enable).
    pub fn configure(&mut self, config: Config<C>) -> Result<(), CommE> {
        config.validate().map_err(|_| Error::InvalidConfig)?;
        let profile = C::profile();

        let axes = Ctrl1::new()
            .with_x_enable(config.axes.x)
            .with_y_enable(config.axes.y)
            .with_z_enable(config.axes.z);
        let ctrl1 = profile.data_rate.insert(u8::from(axes), config.data_rate.code());
        self.interface.write_register(REG_CTRL1, ctrl1)?;

        let flags = Ctrl4::new()
            .with_bdu(config.block_data_update)
            .with_high_resolution(config.high_resolution);
        let ctrl4 = profile.range.insert(u8::from(flags), config.range.code());
        self.interface.write_register(REG_CTRL4, ctrl4)?;

        if profile.int1_routing {
            self.write_bitfield(Ctrl3::new().with_i1_zyxda(config.data_ready_int1))?;
        }

        if profile.auxiliary_adc {
            self.write_bitfield(TempCfg::new().with_adc_enable(config.adc))?;
        }

        self.config = config;
        Ok(())
    }

    // ==================================================================
    // == Identification & Status =======================================
    // ==================================================================
    /// Reads `WHO_AM_I` and returns it verbatim.
    pub fn device_id(&mut self) -> Result<u8, CommE> {
        self.interface
            .read_register(REG_WHO_AM_I)
            .map_err(Error::from)
    }

    /// Verifies `WHO_AM_I` against the identity code of the selected chip.
    pub fn check_id(&mut self) -> Result<u8, CommE> {
        let found = self.device_id()?;
        let expected = C::profile().who_am_i;

        if found != expected {
            log_warn!(
                "WHO_AM_I mismatch: expected {=u8:#x}, found {=u8:#x}",
                expected,
                found
            );
            return Err(Error::DeviceNotFound { expected, found });
        }

        Ok(found)
    }

    /// Returns the decoded `STATUS_REG`.
    pub fn status(&mut self) -> Result<Status, CommE> {
        self.read_bitfield::<Status>()
    }

    /// Returns `true` when a new X/Y/Z set is waiting in the output registers.
    pub fn have_new_data(&mut self) -> Result<bool, CommE> {
        Ok(self.status()?.zyx_data_available())
    }

    // ==================================================================
    // == Register Field Access =========================================
    // ==================================================================
    /// Reads the bits selected by `field`.
    pub fn read_field(&mut self, field: Field) -> Result<u8, CommE> {
        self.interface.read_field(field).map_err(Error::from)
    }

    /// Read-modify-write of `field`; sibling bits are preserved.
    ///
    /// No validation is done here: `value` is truncated to the field width.
    pub fn write_field(&mut self, field: Field, value: u8) -> Result<(), CommE> {
        self.interface.write_field(field, value).map_err(Error::from)
    }

    // ==================================================================
    // == Range, Rate & Axis Configuration ==============================
    // ==================================================================
    /// Selects the full-scale range.
    ///
    /// The new range needs [`RANGE_SETTLE_MS`] before samples are meaningful.
    pub fn set_range(&mut self, range: C::Range) -> Result<(), CommE> {
        self.write_field(C::profile().range, range.code())?;
        self.config.range = range;
        Ok(())
    }

    /// Reads back the full-scale range.
    pub fn range(&mut self) -> Result<C::Range, CommE> {
        let code = self.read_field(C::profile().range)?;
        let range = C::Range::from_code(code).ok_or(Error::InvalidConfig)?;
        self.config.range = range;
        Ok(range)
    }

    /// Selects the output data rate.
    ///
    /// Low-power rates are refused while high-resolution mode is configured.
    pub fn set_data_rate(&mut self, data_rate: C::DataRate) -> Result<(), CommE> {
        if self.config.high_resolution && data_rate.is_low_power() {
            return Err(Error::InvalidConfig);
        }

        self.write_field(C::profile().data_rate, data_rate.code())?;
        self.config.data_rate = data_rate;
        Ok(())
    }

    /// Reads back the output data rate.
    pub fn data_rate(&mut self) -> Result<C::DataRate, CommE> {
        let code = self.read_field(C::profile().data_rate)?;
        let data_rate = C::DataRate::from_code(code).ok_or(Error::InvalidConfig)?;
        self.config.data_rate = data_rate;
        Ok(data_rate)
    }

    /// Enables or disables individual axes.
    pub fn set_axes(&mut self, axes: Axes) -> Result<(), CommE> {
        self.write_field(FIELD_AXES, axes.bits())?;
        self.config.axes = axes;
        Ok(())
    }

    /// Reads back the axis enables.
    pub fn axes(&mut self) -> Result<Axes, CommE> {
        let axes = Axes::from_bits(self.read_field(FIELD_AXES)?);
        self.config.axes = axes;
        Ok(axes)
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Reads a raw acceleration triplet.
    pub fn read_raw(&mut self) -> Result<[i16; 3], CommE> {
        let mut raw = [0u8; RAW_AXIS_BYTES];
        self.interface
            .read_many(REG_OUT_X_L, &mut raw)
            .map_err(Error::from)?;

        Ok(decode_axes(&raw))
    }

    /// Reads the output registers and scales them with the range currently
    /// programmed in the device.
    pub fn read(&mut self) -> Result<Sample, CommE> {
        let raw = self.read_raw()?;
        let profile = C::profile();
        let range_code = self.read_field(profile.range)?;

        let sample = Sample::scaled(raw, profile, range_code).ok_or(Error::InvalidConfig)?;
        log_trace!("raw {=i16} {=i16} {=i16}", raw[0], raw[1], raw[2]);

        self.sample = sample;
        Ok(sample)
    }

    /// Reads a sample and packages it as a [`SensorEvent`] in m/s².
    pub fn event(&mut self, timestamp: u32) -> Result<SensorEvent, CommE> {
        let sample = self.read()?;
        Ok(SensorEvent::from_sample(&sample, self.config.sensor_id, timestamp))
    }

    // ==================================================================
    // == Internal Register Helpers =====================================
    // ==================================================================
    pub(crate) fn read_bitfield<R>(&mut self) -> Result<R, CommE>
    where
        R: Register<Raw = u8> + From<u8>,
    {
        let raw = self
            .interface
            .read_register(R::ADDRESS)
            .map_err(Error::from)?;
        Ok(R::from(raw))
    }

    fn write_bitfield<R>(&mut self, value: R) -> Result<(), CommE>
    where
        R: Register<Raw = u8>,
        u8: From<R>,
    {
        self.interface
            .write_register(R::ADDRESS, u8::from(value))
            .map_err(Error::from)
    }
}

impl<IFACE, CommE> Lis3x<IFACE, Lis3dh>
where
    IFACE: Lis3xInterface<Error = CommE>,
{
    // ==================================================================
    // == LIS3DH Click Detection & Auxiliary ADC ========================
    // ==================================================================
    /// Configures single/double click detection on INT1, or disables it.
    pub fn set_click(
        &mut self,
        mode: ClickMode,
        threshold: u8,
        timing: ClickTiming,
    ) -> Result<(), CommE> {
        click::set_click(self, mode, threshold, timing)
    }

    /// Reads the click source register.
    pub fn click(&mut self) -> Result<ClickSource, CommE> {
        click::read_click(self)
    }

    /// Reads one auxiliary ADC channel as a raw left-justified count.
    pub fn read_adc(&mut self, channel: AdcChannel) -> Result<i16, CommE> {
        let mut raw = [0u8; 2];
        self.interface
            .read_many(channel.register(), &mut raw)
            .map_err(Error::from)?;

        Ok(i16::from_le_bytes(raw))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::chip::{H3lis331, Lis331hh};
    use crate::event::GRAVITY_STANDARD;
    use crate::interface::i2c::DEFAULT_ADDRESS;
    use crate::params::{
        H3lis331DataRate, H3lis331Range, Lis331hhDataRate, Lis331hhRange, Lis3dhDataRate,
        Lis3dhRange,
    };
    use crate::registers::{REG_CTRL3, REG_OUT_ADC2_L, REG_STATUS, REG_TEMP_CFG};
    use crate::testing::{FakeRegisters, NoDelay};
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    use std::vec;

    const SAMPLE_BYTES: [u8; 6] = [0x10, 0x00, 0x20, 0x00, 0x30, 0x00];

    fn assert_close(actual: [f32; 3], expected: [f32; 3]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() <= 1e-6, "{a} != {e}");
        }
    }

    fn loaded<C: Chip>(ctrl4: u8, config: Config<C>) -> Lis3x<FakeRegisters, C> {
        let mut registers = FakeRegisters::new();
        registers.set(REG_CTRL4, ctrl4);
        for (offset, byte) in SAMPLE_BYTES.iter().enumerate() {
            registers.set(REG_OUT_X_L + offset as u8, *byte);
        }
        Lis3x::new(registers, config)
    }

    #[test]
    fn init_lis3dh_programs_default_registers() {
        let expectations = [
            I2cTransaction::write_read(DEFAULT_ADDRESS, vec![0x0F], vec![0x33]),
            I2cTransaction::write(DEFAULT_ADDRESS, vec![0x20, 0x77]),
            I2cTransaction::write(DEFAULT_ADDRESS, vec![0x23, 0x88]),
            I2cTransaction::write(DEFAULT_ADDRESS, vec![0x22, 0x10]),
            I2cTransaction::write(DEFAULT_ADDRESS, vec![0x1F, 0x80]),
        ];
        let mut mock = I2cMock::new(&expectations);
        let mut device = Lis3x::<_, Lis3dh>::new_i2c(mock.clone(), DEFAULT_ADDRESS, Config::default());

        device.init(&mut NoDelay).unwrap();
        mock.done();
    }

    #[test]
    fn init_h3lis331_programs_rate_and_range_only() {
        let expectations = [
            I2cTransaction::write_read(DEFAULT_ADDRESS, vec![0x0F], vec![0x32]),
            I2cTransaction::write(DEFAULT_ADDRESS, vec![0x20, 0x3F]),
            I2cTransaction::write(DEFAULT_ADDRESS, vec![0x23, 0x00]),
        ];
        let mut mock = I2cMock::new(&expectations);
        let mut device =
            Lis3x::<_, H3lis331>::new_i2c(mock.clone(), DEFAULT_ADDRESS, Config::default());

        device.init(&mut NoDelay).unwrap();
        mock.done();
    }

    #[test]
    fn init_lis331hh_selects_widest_range() {
        let expectations = [
            I2cTransaction::write_read(0x19, vec![0x0F], vec![0x32]),
            I2cTransaction::write(0x19, vec![0x20, 0x3F]),
            I2cTransaction::write(0x19, vec![0x23, 0x30]),
        ];
        let mut mock = I2cMock::new(&expectations);
        let mut device = Lis3x::<_, Lis331hh>::new_i2c(mock.clone(), 0x19, Config::default());

        device.init(&mut NoDelay).unwrap();
        assert_eq!(device.config().range, Lis331hhRange::G24);
        mock.done();
    }

    #[test]
    fn identity_mismatch_fails_without_writes() {
        let expectations = [I2cTransaction::write_read(
            DEFAULT_ADDRESS,
            vec![0x0F],
            vec![0x32],
        )];
        let mut mock = I2cMock::new(&expectations);
        let mut device = Lis3x::<_, Lis3dh>::new_i2c(mock.clone(), DEFAULT_ADDRESS, Config::default());

        let result = device.init(&mut NoDelay);

        assert!(matches!(
            result,
            Err(Error::DeviceNotFound {
                expected: 0x33,
                found: 0x32
            })
        ));
        mock.done();
    }

    #[test]
    fn identity_mismatch_leaves_register_file_untouched() {
        let mut registers = FakeRegisters::new();
        registers.set(REG_WHO_AM_I, 0x00);
        let mut device = Lis3x::<_, Lis331hh>::new(registers, Config::default());

        assert!(device.init(&mut NoDelay).is_err());
        assert_eq!(device.interface_mut().write_count(), 0);
    }

    #[test]
    fn invalid_config_is_rejected_before_bus_access() {
        let expectations: [I2cTransaction; 0] = [];
        let mut mock = I2cMock::new(&expectations);
        let config = Config::<H3lis331>::new().high_resolution(true).build();
        let mut device = Lis3x::new_i2c(mock.clone(), DEFAULT_ADDRESS, config);

        assert!(matches!(device.init(&mut NoDelay), Err(Error::InvalidConfig)));
        mock.done();
    }

    #[test]
    fn bus_errors_surface_as_interface_errors() {
        let expectations = [
            I2cTransaction::write_read(DEFAULT_ADDRESS, vec![0x0F], vec![0x00])
                .with_error(ErrorKind::Other),
        ];
        let mut mock = I2cMock::new(&expectations);
        let mut device = Lis3x::<_, Lis3dh>::new_i2c(mock.clone(), DEFAULT_ADDRESS, Config::default());

        assert!(matches!(device.device_id(), Err(Error::Interface(_))));
        mock.done();
    }

    #[test]
    fn read_bursts_outputs_then_reads_range() {
        let expectations = [
            I2cTransaction::write_read(DEFAULT_ADDRESS, vec![0xA8], SAMPLE_BYTES.to_vec()),
            I2cTransaction::write_read(DEFAULT_ADDRESS, vec![0x23], vec![0x88]),
        ];
        let mut mock = I2cMock::new(&expectations);
        let mut device = Lis3x::<_, Lis3dh>::new_i2c(mock.clone(), DEFAULT_ADDRESS, Config::default());

        let sample = device.read().unwrap();
        assert_eq!(sample.raw, [0x10, 0x20, 0x30]);
        mock.done();
    }

    #[test]
    fn lis3dh_decode_divides_by_range_divisor() {
        let mut device = loaded::<Lis3dh>(0x88, Config::default());

        let sample = device.read().unwrap();

        assert_eq!(sample.raw, [16, 32, 48]);
        assert_close(sample.g, [16.0 / 16380.0, 32.0 / 16380.0, 48.0 / 16380.0]);
        assert_eq!(device.sample(), &sample);
    }

    #[test]
    fn h3lis331_decode_shifts_then_scales() {
        let mut device = loaded::<H3lis331>(0x00, Config::default());

        let sample = device.read().unwrap();

        let lsb = 2.0 * 100.0 / 4098.0;
        assert_close(sample.g, [1.0 * lsb, 2.0 * lsb, 3.0 * lsb]);
    }

    #[test]
    fn lis331hh_decode_shifts_then_scales() {
        let mut device = loaded::<Lis331hh>(0x30, Config::default());

        let sample = device.read().unwrap();

        let lsb = 2.0 * 24.0 / 4098.0;
        assert_close(sample.g, [1.0 * lsb, 2.0 * lsb, 3.0 * lsb]);
    }

    #[test]
    fn decode_follows_range_programmed_in_device() {
        let mut device = loaded::<Lis3dh>(0x88, Config::default());
        device.set_range(Lis3dhRange::G16).unwrap();

        let sample = device.read().unwrap();

        assert_close(sample.g, [16.0 / 1365.0, 32.0 / 1365.0, 48.0 / 1365.0]);
    }

    #[test]
    fn undefined_range_bits_are_reported() {
        let mut device = loaded::<H3lis331>(0b0010_0000, Config::default());

        assert_eq!(device.range(), Err(Error::InvalidConfig));
        assert_eq!(device.read(), Err(Error::InvalidConfig));
    }

    #[test]
    fn range_round_trips_and_preserves_sentinels() {
        const SENTINELS: u8 = 0b1100_1111;

        let mut device = loaded::<Lis3dh>(SENTINELS, Config::default());
        for range in [Lis3dhRange::G2, Lis3dhRange::G4, Lis3dhRange::G8, Lis3dhRange::G16] {
            device.set_range(range).unwrap();
            assert_eq!(device.range(), Ok(range));
            assert_eq!(device.interface_mut().get(REG_CTRL4) & !0x30, SENTINELS);
        }

        let mut device = loaded::<H3lis331>(SENTINELS, Config::default());
        for range in [H3lis331Range::G100, H3lis331Range::G200, H3lis331Range::G400] {
            device.set_range(range).unwrap();
            assert_eq!(device.range(), Ok(range));
            assert_eq!(device.interface_mut().get(REG_CTRL4) & !0x30, SENTINELS);
        }

        let mut device = loaded::<Lis331hh>(SENTINELS, Config::default());
        for range in [Lis331hhRange::G6, Lis331hhRange::G12, Lis331hhRange::G24] {
            device.set_range(range).unwrap();
            assert_eq!(device.range(), Ok(range));
            assert_eq!(device.config().range, range);
        }
    }

    #[test]
    fn data_rate_round_trips_and_preserves_axes() {
        let config = Config::<Lis3dh>::new().high_resolution(false).build();
        let mut device = Lis3x::new(FakeRegisters::new(), config);
        device.set_axes(Axes { x: true, y: false, z: true }).unwrap();

        for rate in [
            Lis3dhDataRate::PowerDown,
            Lis3dhDataRate::Hz1,
            Lis3dhDataRate::Hz10,
            Lis3dhDataRate::Hz25,
            Lis3dhDataRate::Hz50,
            Lis3dhDataRate::Hz100,
            Lis3dhDataRate::Hz200,
            Lis3dhDataRate::Hz400,
            Lis3dhDataRate::Hz1344,
            Lis3dhDataRate::LowPower1600Hz,
            Lis3dhDataRate::LowPower5376Hz,
        ] {
            device.set_data_rate(rate).unwrap();
            assert_eq!(device.data_rate(), Ok(rate));
            assert_eq!(device.interface_mut().get(REG_CTRL1) & 0b111, 0b101);
        }

        let mut device = Lis3x::<_, H3lis331>::new(FakeRegisters::new(), Config::default());
        for rate in [
            H3lis331DataRate::PowerDown,
            H3lis331DataRate::Hz50,
            H3lis331DataRate::Hz1000,
            H3lis331DataRate::LowPowerHalfHz,
            H3lis331DataRate::LowPower10Hz,
        ] {
            device.set_data_rate(rate).unwrap();
            assert_eq!(device.data_rate(), Ok(rate));
        }

        let mut device = Lis3x::<_, Lis331hh>::new(FakeRegisters::new(), Config::default());
        for rate in [
            Lis331hhDataRate::Hz100,
            Lis331hhDataRate::Hz400,
            Lis331hhDataRate::LowPower1Hz,
            Lis331hhDataRate::LowPower5Hz,
        ] {
            device.set_data_rate(rate).unwrap();
            assert_eq!(device.data_rate(), Ok(rate));
        }
    }

    #[test]
    fn low_power_rate_refused_in_high_resolution_mode() {
        let mut device = Lis3x::<_, Lis3dh>::new(FakeRegisters::new(), Config::default());

        let result = device.set_data_rate(Lis3dhDataRate::LowPower1600Hz);

        assert_eq!(result, Err(Error::InvalidConfig));
        assert_eq!(device.interface_mut().write_count(), 0);
    }

    #[test]
    fn raw_field_write_keeps_other_bits() {
        let mut registers = FakeRegisters::new();
        registers.set(0x30, 0b1010_0101);
        let mut device = Lis3x::<_, Lis3dh>::new(registers, Config::default());
        let field = Field::new(0x30, 2, 3);

        device.write_field(field, 0b110).unwrap();

        assert_eq!(device.interface_mut().get(0x30), 0b1011_1001);
        assert_eq!(device.read_field(field), Ok(0b110));
    }

    #[test]
    fn axes_round_trip() {
        let mut device = Lis3x::<_, Lis331hh>::new(FakeRegisters::new(), Config::default());
        let axes = Axes { x: false, y: true, z: false };

        device.set_axes(axes).unwrap();

        assert_eq!(device.axes(), Ok(axes));
        assert_eq!(device.interface_mut().get(REG_CTRL1), 0b010);
    }

    #[test]
    fn configure_writes_lis3dh_extras() {
        let mut device = Lis3x::<_, Lis3dh>::new(FakeRegisters::new(), Config::default());
        let config = Config::<Lis3dh>::new()
            .range(Lis3dhRange::G8)
            .data_rate(Lis3dhDataRate::Hz100)
            .data_ready_int1(false)
            .adc(false)
            .build();

        device.configure(config).unwrap();

        let registers = device.interface_mut();
        assert_eq!(registers.get(REG_CTRL1), 0x57);
        assert_eq!(registers.get(REG_CTRL4), 0xA8);
        assert_eq!(registers.get(REG_CTRL3), 0x00);
        assert_eq!(registers.get(REG_TEMP_CFG), 0x00);
        assert_eq!(device.config(), &config);
    }

    #[test]
    fn new_data_flag_comes_from_status() {
        let mut registers = FakeRegisters::new();
        registers.set(REG_STATUS, 0b0000_1000);
        let mut device = Lis3x::<_, Lis3dh>::new(registers, Config::default());
        assert_eq!(device.have_new_data(), Ok(true));

        device.interface_mut().set(REG_STATUS, 0b1111_0111);
        assert_eq!(device.have_new_data(), Ok(false));
        assert!(device.status().unwrap().zyx_overrun());
    }

    #[test]
    fn adc_channel_is_little_endian() {
        let mut registers = FakeRegisters::new();
        registers.set(REG_OUT_ADC2_L, 0x40);
        registers.set(REG_OUT_ADC2_L + 1, 0xFF);
        let mut device = Lis3x::<_, Lis3dh>::new(registers, Config::default());

        assert_eq!(device.read_adc(AdcChannel::Adc2), Ok(-192));
    }

    #[test]
    fn event_reports_acceleration_in_si_units() {
        let config = Config::<Lis3dh>::new().sensor_id(12).build();
        let mut device = loaded::<Lis3dh>(0x88, config);

        let event = device.event(250).unwrap();

        assert_eq!(event.sensor_id, 12);
        assert_eq!(event.timestamp, 250);
        assert_close(
            event.acceleration,
            [
                16.0 / 16380.0 * GRAVITY_STANDARD,
                32.0 / 16380.0 * GRAVITY_STANDARD,
                48.0 / 16380.0 * GRAVITY_STANDARD,
            ],
        );
    }

    #[test]
    fn descriptor_names_the_chip() {
        let device = Lis3x::<_, Lis331hh>::new(FakeRegisters::new(), Config::default());

        let descriptor = device.descriptor();

        assert_eq!(descriptor.name, "LIS331HH");
        assert_eq!(descriptor.sensor_id, 0);
        assert_eq!(descriptor.max_value, 24.0 * GRAVITY_STANDARD);
    }
}
