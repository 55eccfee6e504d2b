// SPDX-FileCopyrightText: 2026 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::controller::{PinController, PinValue};
use crate::{Direction, Error, Level, Pin, Result};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, Write};
use std::path::{Path, PathBuf};

/// The default location of the sysfs GPIO interface.
pub const SYSFS_GPIO_ROOT: &str = "/sys/class/gpio";

/// A [`PinController`] that accesses pins via the sysfs GPIO attribute files.
///
/// Pins are never unexported, so they remain exported after the
/// controller is dropped.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SysfsController {
    /// The directory containing the `export` attribute and pin directories.
    root: PathBuf,
}

impl Default for SysfsController {
    fn default() -> Self {
        Self::new(SYSFS_GPIO_ROOT)
    }
}

impl SysfsController {
    /// Create a controller for the sysfs GPIO interface located at `root`.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        SysfsController { root: root.into() }
    }

    /// The directory containing the sysfs GPIO interface.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The path of the attribute used to export pins.
    pub fn export_path(&self) -> PathBuf {
        self.root.join("export")
    }

    /// The directory containing the attributes of an exported pin.
    pub fn pin_dir(&self, pin: Pin) -> PathBuf {
        self.root.join(format!("gpio{}", pin))
    }

    /// The path of the direction attribute of an exported pin.
    pub fn direction_path(&self, pin: Pin) -> PathBuf {
        self.pin_dir(pin).join("direction")
    }

    /// The path of the value attribute of an exported pin.
    pub fn value_path(&self, pin: Pin) -> PathBuf {
        self.pin_dir(pin).join("value")
    }
}

impl PinController for SysfsController {
    type Value = SysfsValue;

    fn export(&mut self, pin: Pin) -> Result<()> {
        let path = self.export_path();
        log::debug!("exporting pin {} via {}", pin, path.display());
        write_attr(&path, &pin.to_string())
    }

    fn set_direction(&mut self, pin: Pin, direction: Direction) -> Result<()> {
        let path = self.direction_path(pin);
        log::debug!("setting pin {} as {}", pin, direction);
        write_attr(&path, direction.as_sysfs())
    }

    fn open_value(&mut self, pin: Pin, direction: Direction) -> Result<SysfsValue> {
        let path = self.value_path(pin);
        let file = OpenOptions::new()
            .read(true)
            .write(direction == Direction::Out)
            .open(&path)
            .map_err(|e| Error::Open(path.clone(), e))?;
        Ok(SysfsValue { path, file })
    }
}

/// An open sysfs pin value attribute.
///
/// The attribute is closed when the handle is dropped.
#[derive(Debug)]
pub struct SysfsValue {
    path: PathBuf,
    file: File,
}

impl SysfsValue {
    /// The path of the value attribute.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PinValue for SysfsValue {
    fn read_level(&mut self) -> Result<Level> {
        // sysfs attributes must be re-read from the start
        self.file
            .rewind()
            .map_err(|e| Error::Read(self.path.clone(), e))?;
        let mut buf = [0; 1];
        let n = self
            .file
            .read(&mut buf)
            .map_err(|e| Error::Read(self.path.clone(), e))?;
        Ok(Level::from_sysfs(&buf[..n]))
    }

    fn write_level(&mut self, level: Level) -> Result<()> {
        self.file
            .rewind()
            .map_err(|e| Error::Write(self.path.clone(), e))?;
        write_once(&mut self.file, &self.path, level.as_sysfs().as_bytes())
    }
}

// Helper to write a complete attribute in a single write.
fn write_attr(path: &Path, data: &str) -> Result<()> {
    let mut f = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::Open(path.into(), e))?;
    write_once(&mut f, path, data.as_bytes())
}

// sysfs attributes consume a write in one go, so a partial write is an error
// rather than something to be retried.
fn write_once<W: Write>(w: &mut W, path: &Path, data: &[u8]) -> Result<()> {
    let n = w.write(data).map_err(|e| Error::Write(path.into(), e))?;
    if n != data.len() {
        return Err(Error::ShortWrite(path.into(), n, data.len()));
    }
    Ok(())
}
