// SPDX-FileCopyrightText: 2026 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A command line tool for toggling a GPIO output under the control of a
//! GPIO input, using the sysfs GPIO interface.

use clap::Parser;
use std::process::ExitCode;

mod common;
mod signal;
mod toggle;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    match toggle::Opts::try_parse() {
        Ok(opts) => {
            log::info!("input {} and output {} selected", opts.input, opts.output);
            return if toggle::cmd(&opts) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
        Err(e) => {
            _ = e.print();
            if !e.use_stderr() {
                // help or version
                return ExitCode::SUCCESS;
            }
        }
    }
    ExitCode::FAILURE
}
