// SPDX-FileCopyrightText: 2026 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::common::{self, emit_error, EmitOpts};
use super::signal;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use sysfs_gpio::sysfs::SYSFS_GPIO_ROOT;
use sysfs_gpio::{Pin, PinController, Shutdown, SysfsController, Toggler};

#[derive(Debug, Parser)]
#[command(
    name = "gpiotoggle",
    about = "Toggle a GPIO output every period while a GPIO input is high.",
    long_about = "Toggle a GPIO output every period while a GPIO input is high.

While the input is low the output is held low.
Runs until interrupted (Ctrl-C).  The pins are left exported on exit.",
    version
)]
pub struct Opts {
    /// The input pin, sampled each period
    #[arg(short = 'i', long = "input", value_name = "gpio_in")]
    pub input: Pin,

    /// The output pin, toggled while the input is high
    #[arg(short = 'o', long = "output", value_name = "gpio_out")]
    pub output: Pin,

    /// The period between samples of the input
    ///
    /// The period is taken as milliseconds unless otherwise specified.
    #[arg(
        short = 'p',
        long,
        value_name = "period",
        default_value = "1s",
        value_parser = common::parse_duration
    )]
    pub period: Duration,

    /// The location of the sysfs GPIO interface
    #[arg(
        long,
        value_name = "path",
        env = "SYSFS_GPIO_ROOT",
        default_value = SYSFS_GPIO_ROOT
    )]
    pub sysfs_root: PathBuf,

    #[command(flatten)]
    pub emit: EmitOpts,
}

impl Opts {
    fn toggler(&self) -> Toggler {
        let mut t = Toggler::new(self.input, self.output);
        t.with_period(self.period);
        t
    }
}

pub fn cmd(opts: &Opts) -> bool {
    let shutdown = Shutdown::new();
    let res = signal::trigger_on_sigint(&shutdown).and_then(|()| {
        let mut ctrl = SysfsController::new(&opts.sysfs_root);
        run(opts, &mut ctrl, &shutdown)
    });
    match res {
        Ok(()) => true,
        Err(e) => {
            emit_error(&opts.emit, &e);
            false
        }
    }
}

// Configure the pins and toggle until shutdown.
pub fn run<C: PinController>(opts: &Opts, ctrl: &mut C, shutdown: &Shutdown) -> Result<()> {
    let t = opts.toggler();
    log::info!(
        "toggling output {} every {:?} while input {} is high",
        t.output(),
        t.period(),
        t.input()
    );
    let count = t.run(ctrl, shutdown).with_context(|| {
        format!(
            "failed to toggle output {} from input {}",
            t.output(),
            t.input()
        )
    })?;
    log::info!("stopped after {} periods", count);
    Ok(())
}
