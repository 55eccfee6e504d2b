// SPDX-FileCopyrightText: 2026 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::str::FromStr;

/// The identifier of a GPIO pin in the sysfs GPIO numbering space.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Pin(pub u32);

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Pin {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<u32>().map(Pin)
    }
}

/// The direction of a pin.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    /// The pin is read.
    In,
    /// The pin is driven.
    Out,
}

impl Direction {
    /// The string written to the sysfs `direction` attribute.
    pub fn as_sysfs(&self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::In => "input",
            Direction::Out => "output",
        };
        write!(f, "{}", s)
    }
}

/// The logic level of a pin.
///
/// | Level | sysfs |
/// |-------|-------|
/// | **Low**  | `0` |
/// | **High** | `1` |
///
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Level {
    /// The pin is low.
    #[default]
    Low,
    /// The pin is high.
    High,
}

impl Level {
    /// The level opposite the current level.
    pub fn not(&self) -> Level {
        match self {
            Level::High => Level::Low,
            Level::Low => Level::High,
        }
    }

    /// The single character written to the sysfs `value` attribute.
    pub fn as_sysfs(&self) -> &'static str {
        match self {
            Level::Low => "0",
            Level::High => "1",
        }
    }

    /// Interpret the contents read from a sysfs `value` attribute.
    ///
    /// Only a leading '1' is high.  Anything else, including an empty
    /// read, is taken as low.
    pub fn from_sysfs(buf: &[u8]) -> Level {
        match buf.first() {
            Some(b'1') => Level::High,
            _ => Level::Low,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::High => "high",
            Level::Low => "low",
        };
        write!(f, "{}", s)
    }
}
