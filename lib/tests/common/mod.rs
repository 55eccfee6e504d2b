// SPDX-FileCopyrightText: 2026 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::rc::Rc;
use sysfs_gpio::{Direction, Error, Level, Pin, PinController, PinValue, Result, Shutdown};

/// The operations performed on a FakeController and its values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Call {
    Export(Pin),
    SetDirection(Pin, Direction),
    OpenValue(Pin, Direction),
    Read(Pin),
    Write(Pin, Level),
    Close(Pin),
}

impl Call {
    // the error returned if the call is set to fail.
    fn error(&self) -> Error {
        let e = std::io::Error::from(ErrorKind::PermissionDenied);
        match self {
            Call::Export(_) => Error::Open("fake/export".into(), e),
            Call::SetDirection(p, _) => Error::Open(format!("fake/gpio{}/direction", p).into(), e),
            Call::OpenValue(p, _) => Error::Open(format!("fake/gpio{}/value", p).into(), e),
            Call::Read(p) => Error::Read(format!("fake/gpio{}/value", p).into(), e),
            Call::Write(p, _) | Call::Close(p) => {
                Error::Write(format!("fake/gpio{}/value", p).into(), e)
            }
        }
    }
}

#[derive(Default)]
struct State {
    calls: Vec<Call>,
    levels: HashMap<Pin, Level>,
    scripts: HashMap<Pin, VecDeque<Level>>,
    fail: Option<Call>,
    writes: usize,
    stop: Option<(usize, Shutdown)>,
}

/// A PinController that records the operations performed on it rather than
/// touching any hardware.
#[derive(Clone, Default)]
pub struct FakeController(Rc<RefCell<State>>);

impl FakeController {
    pub fn new() -> FakeController {
        FakeController::default()
    }

    /// Set the level subsequently read from a pin.
    pub fn set_level(&self, pin: Pin, level: Level) {
        self.0.borrow_mut().levels.insert(pin, level);
    }

    /// The current level of a pin.
    pub fn level(&self, pin: Pin) -> Level {
        self.0.borrow().levels.get(&pin).copied().unwrap_or_default()
    }

    /// Provide the sequence of levels returned by reads of a pin.
    ///
    /// Once the script is exhausted the last level is held.
    pub fn script(&self, pin: Pin, levels: &[Level]) {
        self.0
            .borrow_mut()
            .scripts
            .insert(pin, levels.iter().copied().collect());
    }

    /// Fail the matching call with an error.
    pub fn fail_on(&self, call: Call) {
        self.0.borrow_mut().fail = Some(call);
    }

    /// Trigger the shutdown once the given number of writes have been made.
    pub fn stop_after_writes(&self, writes: usize, shutdown: &Shutdown) {
        self.0.borrow_mut().stop = Some((writes, shutdown.clone()));
    }

    /// All calls made, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().calls.clone()
    }

    /// The levels written to a pin, in order.
    pub fn writes(&self, pin: Pin) -> Vec<Level> {
        self.0
            .borrow()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Write(p, l) if *p == pin => Some(*l),
                _ => None,
            })
            .collect()
    }

    /// The number of times the value of a pin has been closed.
    pub fn closes(&self, pin: Pin) -> usize {
        self.0
            .borrow()
            .calls
            .iter()
            .filter(|c| **c == Call::Close(pin))
            .count()
    }

    fn record(&self, call: Call) -> Result<()> {
        let mut s = self.0.borrow_mut();
        s.calls.push(call);
        if s.fail == Some(call) {
            return Err(call.error());
        }
        Ok(())
    }
}

impl PinController for FakeController {
    type Value = FakeValue;

    fn export(&mut self, pin: Pin) -> Result<()> {
        self.record(Call::Export(pin))
    }

    fn set_direction(&mut self, pin: Pin, direction: Direction) -> Result<()> {
        self.record(Call::SetDirection(pin, direction))
    }

    fn open_value(&mut self, pin: Pin, direction: Direction) -> Result<FakeValue> {
        self.record(Call::OpenValue(pin, direction))?;
        Ok(FakeValue {
            pin,
            ctrl: self.clone(),
        })
    }
}

pub struct FakeValue {
    pin: Pin,
    ctrl: FakeController,
}

impl PinValue for FakeValue {
    fn read_level(&mut self) -> Result<Level> {
        self.ctrl.record(Call::Read(self.pin))?;
        let mut s = self.ctrl.0.borrow_mut();
        let scripted = s.scripts.get_mut(&self.pin).and_then(|l| l.pop_front());
        if let Some(level) = scripted {
            s.levels.insert(self.pin, level);
        }
        Ok(s.levels.get(&self.pin).copied().unwrap_or_default())
    }

    fn write_level(&mut self, level: Level) -> Result<()> {
        self.ctrl.record(Call::Write(self.pin, level))?;
        let mut s = self.ctrl.0.borrow_mut();
        s.levels.insert(self.pin, level);
        s.writes += 1;
        if let Some((limit, shutdown)) = &s.stop {
            if s.writes >= *limit {
                shutdown.trigger();
            }
        }
        Ok(())
    }
}

impl Drop for FakeValue {
    fn drop(&mut self) {
        _ = self.ctrl.record(Call::Close(self.pin));
    }
}

/// A fake sysfs tree containing the export attribute and the attributes of
/// the given pins, as they appear once exported.
pub fn fake_sysfs(pins: &[(Pin, &str)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    fs::write(dir.path().join("export"), "").unwrap();
    for (pin, value) in pins {
        let pd = pin_dir(&dir, *pin);
        fs::create_dir(&pd).unwrap();
        fs::write(pd.join("direction"), "").unwrap();
        fs::write(pd.join("value"), value).unwrap();
    }
    dir
}

pub fn pin_dir(dir: &tempfile::TempDir, pin: Pin) -> PathBuf {
    dir.path().join(format!("gpio{}", pin))
}

/// Read an attribute from the fake sysfs tree.
pub fn read_attr(dir: &tempfile::TempDir, file: &str) -> String {
    fs::read_to_string(dir.path().join(file)).expect("attr should be readable")
}
