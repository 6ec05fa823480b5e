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
//! Errors produced while parsing or shifting a [`Coordinate`].

use thiserror::Error;

use crate::coordinate::Coordinate;

/// Reason why text could not be interpreted as a [`Coordinate`].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ParseCoordinateError {
    /// There was no text at all.
    #[error("coordinate text is empty")]
    Empty,

    /// The part after the letter was not a (native sized) integer. Carries everything
    /// that followed the letter.
    #[error("coordinate number must be an integer: {0}")]
    NotAnInteger(String),

    /// The number was zero. Columns are numbered from one.
    #[error("coordinate number must be > 0: 0")]
    Zero,

    /// The leading character was not a latin letter in `A..=Z`.
    #[error("coordinate letter must be a latin character: {0}")]
    InvalidLetter(char),
}

/// Error returned when an offset would move a [`Coordinate`] off the non-negative axes
/// or past the last letter row.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("coordinates out of bounds: {origin} offset by ({row_delta}, {column_delta})")]
pub struct OutOfBounds {
    /// Coordinate the offset was applied to.
    origin: Coordinate,
    /// Requested row change.
    row_delta: isize,
    /// Requested column change.
    column_delta: isize,
}

impl OutOfBounds {
    pub(super) fn new(origin: Coordinate, row_delta: isize, column_delta: isize) -> Self {
        Self {
            origin,
            row_delta,
            column_delta,
        }
    }

    /// The coordinate that could not be shifted.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// The requested `(row, column)` deltas.
    pub fn deltas(&self) -> (isize, isize) {
        (self.row_delta, self.column_delta)
    }
}
