// SPDX-FileCopyrightText: 2026 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anyhow::{bail, Context, Result};
use std::sync::OnceLock;
use sysfs_gpio::Shutdown;

// The handler cannot capture state, so it reaches the shutdown through here.
static SHUTDOWN: OnceLock<Shutdown> = OnceLock::new();

extern "C" fn handle_sigint(_sig: libc::c_int) {
    if let Some(shutdown) = SHUTDOWN.get() {
        shutdown.trigger();
    }
}

/// Trigger the shutdown when SIGINT is received.
///
/// May only be called once per process.
pub fn trigger_on_sigint(shutdown: &Shutdown) -> Result<()> {
    if SHUTDOWN.set(shutdown.clone()).is_err() {
        bail!("SIGINT handler is already installed");
    }
    let handler = handle_sigint as extern "C" fn(libc::c_int);
    // SAFETY: the handler only performs an atomic load and store.
    let prev = unsafe { libc::signal(libc::SIGINT, handler as libc::sighandler_t) };
    if prev == libc::SIG_ERR {
        return Err(std::io::Error::last_os_error()).context("unable to install SIGINT handler");
    }
    Ok(())
}
