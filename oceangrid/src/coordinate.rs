// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Grid cell addressing using a letter row and a numbered column, e.g. `B7`.

use std::{fmt, str::FromStr};

pub use self::errors::{OutOfBounds, ParseCoordinateError};

mod errors;

/// Number of addressable rows. Rows are named by a single letter `A..=Z`.
pub const MAX_ROWS: usize = 26;

/// Largest zero-based column. Its number is the largest one that can be parsed back.
pub const MAX_COLUMN: usize = isize::max_value() as usize - 1;

/// A single cell on a grid. Rows grow downwards from `A`, columns grow rightwards from
/// `1`. Internally both axes are stored zero-based.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coordinate {
    /// Vertical index, `0` is row `A`.
    row: usize,
    /// Horizontal index, `0` is column `1`.
    column: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from zero-based indices. Returns `None` if `row` has no
    /// letter (`row >= MAX_ROWS`) or `column > MAX_COLUMN`.
    pub fn new(row: usize, column: usize) -> Option<Self> {
        if row < MAX_ROWS && column <= MAX_COLUMN {
            Some(Self { row, column })
        } else {
            None
        }
    }

    /// Zero-based row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Zero-based column index.
    pub fn column(&self) -> usize {
        self.column
    }

    /// The upper case letter naming the row.
    pub fn letter(&self) -> char {
        (b'A' + self.row as u8) as char
    }

    /// The one-based number naming the column.
    pub fn number(&self) -> usize {
        self.column + 1
    }

    /// Get the coordinate shifted by the given amounts. Rows increase downwards, columns
    /// increase rightwards. Grid dimensions are not consulted, only the global limits:
    /// neither axis may go below zero, the row must still have a letter and the column
    /// may not pass [`MAX_COLUMN`].
    pub fn offset(self, row_delta: isize, column_delta: isize) -> Result<Self, OutOfBounds> {
        if row_delta == 0 && column_delta == 0 {
            return Ok(self);
        }
        let err = OutOfBounds::new(self, row_delta, column_delta);
        let row = shift(self.row, row_delta)
            .filter(|&row| row < MAX_ROWS)
            .ok_or(err)?;
        let column = shift(self.column, column_delta)
            .filter(|&column| column <= MAX_COLUMN)
            .ok_or(err)?;
        Ok(Self { row, column })
    }
}

/// Apply a signed delta to an index, returning `None` on underflow or overflow.
fn shift(base: usize, delta: isize) -> Option<usize> {
    if delta >= 0 {
        base.checked_add(delta as usize)
    } else {
        base.checked_sub(delta.unsigned_abs())
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    /// Parses text like `A5`, `a5` or `A-5`. A single non-digit separator may follow the
    /// letter. The sign of the number is ignored.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut chars = text.chars();
        let letter = chars.next().ok_or(ParseCoordinateError::Empty)?;
        let rest = chars.as_str();

        let digits = match rest.chars().next() {
            Some(sep) if !sep.is_ascii_digit() && sep != '-' && sep != '+' => {
                &rest[sep.len_utf8()..]
            }
            _ => rest,
        };
        let number = digits
            .parse::<isize>()
            .map_err(|_| ParseCoordinateError::NotAnInteger(rest.to_owned()))?
            .unsigned_abs();
        if number == 0 {
            return Err(ParseCoordinateError::Zero);
        }
        if number - 1 > MAX_COLUMN {
            return Err(ParseCoordinateError::NotAnInteger(rest.to_owned()));
        }

        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return Err(ParseCoordinateError::InvalidLetter(letter));
        }

        Ok(Self {
            row: (letter as u8 - b'A') as usize,
            column: number - 1,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&format!("{}{}", self.letter(), self.number()))
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a zero-based `(row, column)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.column)
    }
}
