// SPDX-FileCopyrightText: 2026 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A library for driving GPIO pins on Linux platforms
//! using the legacy sysfs GPIO interface.
//!
//! Pins are exported, configured and accessed through a [`PinController`],
//! of which [`SysfsController`] is the implementation backed by the
//! `/sys/class/gpio` attribute files.
//!
//! The [`Toggler`] uses a controller to toggle an output pin while an input
//! pin is high:
//! ```no_run
//! # use sysfs_gpio::Result;
//! use sysfs_gpio::{Pin, Shutdown, SysfsController, Toggler};
//!
//! # fn main() -> Result<()> {
//! let mut ctrl = SysfsController::default();
//! let shutdown = Shutdown::new();
//! Toggler::new(Pin(17), Pin(22)).run(&mut ctrl, &shutdown)?;
//! # Ok(())
//! # }
//! ```
//!
//! [`PinController`]: trait@controller::PinController
//! [`SysfsController`]: struct@sysfs::SysfsController
//! [`Toggler`]: struct@toggler::Toggler

use std::path::PathBuf;

/// The capability traits used to access pins.
pub mod controller;

/// Types describing pins and their levels.
pub mod pin;

/// Pin access via the sysfs GPIO attribute files.
pub mod sysfs;

/// Toggling an output pin under the control of an input pin.
pub mod toggler;

pub use controller::{PinController, PinValue};
pub use pin::{Direction, Level, Pin};
pub use sysfs::SysfsController;
pub use toggler::{Shutdown, Toggler};

/// Errors returned by [`sysfs_gpio`] functions.
///
/// [`sysfs_gpio`]: crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An attribute file could not be opened.
    #[error("unable to open {}", .0.display())]
    Open(PathBuf, #[source] std::io::Error),

    /// Reading an attribute file failed.
    #[error("error reading from {}", .0.display())]
    Read(PathBuf, #[source] std::io::Error),

    /// Writing an attribute file failed.
    #[error("error writing to {}", .0.display())]
    Write(PathBuf, #[source] std::io::Error),

    /// Fewer bytes than requested were written to an attribute file.
    #[error("short write to {}: wrote {} of {} bytes", .0.display(), .1, .2)]
    ShortWrite(PathBuf, usize, usize),
}

impl Error {
    /// The path of the attribute file the error relates to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::Open(p, _) => p,
            Error::Read(p, _) => p,
            Error::Write(p, _) => p,
            Error::ShortWrite(p, ..) => p,
        }
    }
}

/// The result returned by [`sysfs_gpio`] functions.
///
/// [`sysfs_gpio`]: crate
pub type Result<T> = std::result::Result<T, Error>;
