// SPDX-FileCopyrightText: 2026 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use clap::Parser;
use std::time::Duration;

// common helper functions

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseDurationError {
    #[error("'{0}' unknown units - use 's', 'ms' or 'us'.")]
    Units(String),
    #[error("'{0}' must start with a digit")]
    NoDigits(String),
    #[error("'{0}' {1}")]
    ParseDigits(String, std::num::ParseIntError),
    #[error("'{0}' is too long a period")]
    Overflow(String),
}

/// Parse a period such as "250ms", "3us" or "1s".
///
/// A bare number is taken as milliseconds.
pub fn parse_duration(s: &str) -> std::result::Result<Duration, ParseDurationError> {
    let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let (num, units) = s.split_at(split);
    if num.is_empty() {
        return Err(ParseDurationError::NoDigits(s.into()));
    }
    let nanos_per_unit: u64 = match units {
        "" | "ms" => 1_000_000,
        "us" => 1_000,
        "s" => 1_000_000_000,
        _ => return Err(ParseDurationError::Units(s.into())),
    };
    let count = num
        .parse::<u64>()
        .map_err(|e| ParseDurationError::ParseDigits(num.into(), e))?;
    count
        .checked_mul(nanos_per_unit)
        .map(Duration::from_nanos)
        .ok_or_else(|| ParseDurationError::Overflow(s.into()))
}

// common command line parser options

#[derive(Clone, Copy, Debug, Default, Parser)]
pub struct EmitOpts {
    /// Provide more detailed error messages.
    #[arg(short = 'v', long, display_order = 800)]
    pub verbose: bool,
}

pub fn emit_error(opts: &EmitOpts, e: &anyhow::Error) {
    eprintln!("{}", format_error(opts, e));
}

pub fn format_error(opts: &EmitOpts, e: &anyhow::Error) -> String {
    if opts.verbose {
        return format!("{e:#}");
    }
    // always identify the attribute that failed
    match e
        .chain()
        .skip(1)
        .find_map(|c| c.downcast_ref::<sysfs_gpio::Error>())
    {
        Some(se) => format!("{e}: {se}"),
        None => format!("{e}"),
    }
}
