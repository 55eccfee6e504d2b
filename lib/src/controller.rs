// SPDX-FileCopyrightText: 2026 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Direction, Level, Pin, Result};

/// The operations required to configure and access pins.
///
/// [`SysfsController`] drives real hardware.  Alternate implementations
/// can stand in for the hardware, e.g. when testing.
///
/// [`SysfsController`]: crate::sysfs::SysfsController
pub trait PinController {
    /// The handle used to access the value of an opened pin.
    type Value: PinValue;

    /// Export the pin, making its attributes available.
    fn export(&mut self, pin: Pin) -> Result<()>;

    /// Set the direction of an exported pin.
    fn set_direction(&mut self, pin: Pin, direction: Direction) -> Result<()>;

    /// Open the value of an exported pin.
    ///
    /// The direction determines whether the handle is opened for reading
    /// only, or for reading and writing.
    ///
    /// The value is closed when the handle is dropped.
    fn open_value(&mut self, pin: Pin, direction: Direction) -> Result<Self::Value>;
}

/// An open handle to the value of a pin.
pub trait PinValue {
    /// Read the current level of the pin.
    fn read_level(&mut self) -> Result<Level>;

    /// Drive the pin to the given level.
    fn write_level(&mut self, level: Level) -> Result<()>;

    /// Drive the pin to the opposite of its current level.
    ///
    /// Anything other than a high reading is treated as low, so the pin
    /// is driven high unless it currently reads high.
    ///
    /// Returns the level written.
    fn toggle(&mut self) -> Result<Level> {
        let level = self.read_level()?.not();
        self.write_level(level)?;
        Ok(level)
    }
}
