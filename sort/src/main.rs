// SPDX-FileCopyrightText: 2026 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

// Sorts a fixed set of values and prints them.

use insertion_sort::{print, sort, DEMO_VALUES};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut values = DEMO_VALUES;
    sort(&mut values);
    if let Err(e) = print(&values) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
