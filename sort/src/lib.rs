// SPDX-FileCopyrightText: 2026 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion sort, and printing of the sorted values.

use std::fmt::Display;
use std::io::{self, Write};

/// The values sorted by the demo.
pub const DEMO_VALUES: [i32; 30] = [
    2, 2, 1, 0, 1, 0, 1, 1, 0, 2, 2, 1, 1, 1, 2, 0, 0, 1, 1, 0, 1, 0, 1, 2, 0, 0, 0, 1, 1, 2,
];

/// Sort a slice in place, in ascending order, using insertion sort.
///
/// The sort is stable.  It takes O(n²) comparisons in the worst and average
/// cases, and O(n) if the slice is already sorted.
pub fn sort<T: Ord>(values: &mut [T]) {
    for i in 1..values.len() {
        let mut j = i;
        while j > 0 && values[j - 1] > values[i] {
            j -= 1;
        }
        // shift the larger values right one place and insert values[i] in the gap
        values[j..=i].rotate_right(1);
    }
}

/// Write the values, space separated, on a single line.
pub fn write_to<W: Write, T: Display>(w: &mut W, values: &[T]) -> io::Result<()> {
    let mut sep = "";
    for v in values {
        write!(w, "{sep}{v}")?;
        sep = " ";
    }
    writeln!(w)
}

/// Print the values, space separated, on a single line to stdout.
pub fn print<T: Display>(values: &[T]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_to(&mut lock, values)
}
