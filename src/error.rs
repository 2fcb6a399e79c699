//! Error handling primitives for the LIS3x driver family.

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Any error reported by the underlying bus interface.
    Interface(E),
    /// `WHO_AM_I` did not match the identity code of the selected chip.
    DeviceNotFound {
        /// Identity code of the chip the driver was built for.
        expected: u8,
        /// Value actually read back from `WHO_AM_I`.
        found: u8,
    },
    /// The provided configuration parameters are invalid, or the device
    /// reported a field value with no meaning for the selected chip.
    InvalidConfig,
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Interface(err)
    }
}
