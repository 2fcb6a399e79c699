//! LIS3DH click (tap) detection.

use crate::chip::Lis3dh;
use crate::device::Lis3x;
use crate::error::{Error, Result};
use crate::interface::Lis3xInterface;
use crate::log::log_debug;
use crate::params::{ClickMode, ClickTiming};
use crate::registers::{
    ClickCfg, ClickSource, FIELD_I1_CLICK, FIELD_LIR_INT1, REG_CLICK_CFG, REG_CLICK_THS,
    REG_TIME_LATENCY, REG_TIME_LIMIT, REG_TIME_WINDOW,
};

/// Highest threshold accepted by `CLICK_THS[6:0]`.
pub const MAX_CLICK_THRESHOLD: u8 = 0x7F;

/// Programs the click engine and its INT1 routing.
///
/// [`ClickMode::Disabled`] clears `CTRL_REG3.I1_CLICK` and `CLICK_CFG` and
/// touches nothing else. The other modes enable the INT1 click interrupt with
/// latching, select all three axes and load threshold and timing windows.
pub fn set_click<IFACE, CommE>(
    device: &mut Lis3x<IFACE, Lis3dh>,
    mode: ClickMode,
    threshold: u8,
    timing: ClickTiming,
) -> Result<(), CommE>
where
    IFACE: Lis3xInterface<Error = CommE>,
{
    let config = match mode {
        ClickMode::Disabled => {
            let interface = device.interface_mut();
            interface.write_field(FIELD_I1_CLICK, 0)?;
            interface.write_register(REG_CLICK_CFG, 0)?;
            log_debug!("click detection disabled");
            return Ok(());
        }
        ClickMode::Single => ClickCfg::single_all_axes(),
        ClickMode::Double => ClickCfg::double_all_axes(),
    };

    if threshold > MAX_CLICK_THRESHOLD {
        return Err(Error::InvalidConfig);
    }

    let interface = device.interface_mut();
    interface.write_field(FIELD_I1_CLICK, 1)?;
    interface.write_field(FIELD_LIR_INT1, 1)?;
    interface.write_register(REG_CLICK_CFG, u8::from(config))?;
    interface.write_register(REG_CLICK_THS, threshold)?;
    interface.write_register(REG_TIME_LIMIT, timing.limit)?;
    interface.write_register(REG_TIME_LATENCY, timing.latency)?;
    interface.write_register(REG_TIME_WINDOW, timing.window)?;

    log_debug!("click detection enabled, threshold {=u8}", threshold);
    Ok(())
}

/// Reads and decodes `CLICK_SRC`. Reading clears a latched click interrupt.
pub fn read_click<IFACE, CommE>(device: &mut Lis3x<IFACE, Lis3dh>) -> Result<ClickSource, CommE>
where
    IFACE: Lis3xInterface<Error = CommE>,
{
    device.read_bitfield::<ClickSource>()
}
