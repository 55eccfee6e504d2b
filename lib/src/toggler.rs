// SPDX-FileCopyrightText: 2026 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::controller::{PinController, PinValue};
use crate::{Direction, Level, Pin, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// The default period between samples of the input pin.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(1);

/// A flag used to request a [`Toggler`] to stop.
///
/// Clones share the same flag, so one clone can be handed to whatever
/// detects the stop condition, e.g. a signal handler.
#[derive(Clone, Debug, Default)]
pub struct Shutdown(Arc<AtomicBool>);

impl Shutdown {
    /// Create a flag that has not been triggered.
    pub fn new() -> Shutdown {
        Shutdown::default()
    }

    /// Request the shutdown.
    ///
    /// Only performs an atomic store, so is safe to call from a signal handler.
    pub fn trigger(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Return true if shutdown has been requested.
    pub fn is_triggered(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Toggles an output pin each period while an input pin is high.
///
/// While the input is low the output is held low.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Toggler {
    input: Pin,
    output: Pin,
    period: Duration,
}

impl Toggler {
    /// Create a toggler for the given input and output pins,
    /// sampling with the [`DEFAULT_PERIOD`].
    pub fn new(input: Pin, output: Pin) -> Toggler {
        Toggler {
            input,
            output,
            period: DEFAULT_PERIOD,
        }
    }

    /// Set the period between samples of the input.
    pub fn with_period(&mut self, period: Duration) -> &mut Self {
        self.period = period;
        self
    }

    /// The input pin.
    pub fn input(&self) -> Pin {
        self.input
    }

    /// The output pin.
    pub fn output(&self) -> Pin {
        self.output
    }

    /// The period between samples of the input.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Export and configure both pins, and open their values.
    ///
    /// Returns the (input, output) value handles.
    ///
    /// The first failure aborts the setup, so no later steps are attempted.
    pub fn setup<C: PinController>(&self, ctrl: &mut C) -> Result<(C::Value, C::Value)> {
        ctrl.export(self.input)?;
        ctrl.export(self.output)?;
        ctrl.set_direction(self.input, Direction::In)?;
        ctrl.set_direction(self.output, Direction::Out)?;
        let input = ctrl.open_value(self.input, Direction::In)?;
        let output = ctrl.open_value(self.output, Direction::Out)?;
        Ok((input, output))
    }

    /// Setup the pins then sample the input each period until shutdown is
    /// triggered.
    ///
    /// The shutdown is checked once per period, so may take up to a period
    /// to be acted upon.
    ///
    /// The pins are left exported on return.
    ///
    /// Returns the number of periods run.
    pub fn run<C: PinController>(&self, ctrl: &mut C, shutdown: &Shutdown) -> Result<u64> {
        let (mut input, mut output) = self.setup(ctrl)?;
        let mut count = 0;
        while !shutdown.is_triggered() {
            let (level_in, level_out) = step(&mut input, &mut output)?;
            log::debug!(
                "input {} is {}, output {} set {}",
                self.input,
                level_in,
                self.output,
                level_out
            );
            count += 1;
            thread::sleep(self.period);
        }
        Ok(count)
    }
}

/// Perform one sample of the input and update the output to match.
///
/// If the input is high then the output is toggled, else it is set low.
///
/// Returns the level read from the input and the level written to the output.
pub fn step<I: PinValue, O: PinValue>(input: &mut I, output: &mut O) -> Result<(Level, Level)> {
    let level_in = input.read_level()?;
    let level_out = match level_in {
        Level::High => output.toggle()?,
        Level::Low => {
            output.write_level(Level::Low)?;
            Level::Low
        }
    };
    Ok((level_in, level_out))
}
