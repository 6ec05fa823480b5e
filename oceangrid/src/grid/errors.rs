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
//! Errors used by the [`Grid`][crate::grid::Grid] and its dimensions.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::vessel::Vessel;

/// Reason why a vessel could not be placed on the grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// One or more of the vessel cells lies outside the grid.
    #[error("the vessel does not fit inside the grid")]
    OutOfBounds,
    /// One or more of the vessel cells is already taken by another vessel.
    #[error("the requested position was already occupied")]
    AlreadyOccupied,
}

/// Error returned when a vessel is rejected by the grid. Hands the vessel back so the
/// caller can retry or inspect it.
#[derive(Error)]
#[error("could not place vessel: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    vessel: Vessel,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    pub(super) fn new(reason: CannotPlaceReason, vessel: Vessel) -> Self {
        Self { reason, vessel }
    }

    /// Get the reason placement was rejected.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get a reference to the vessel that was rejected.
    pub fn vessel(&self) -> &Vessel {
        &self.vessel
    }

    /// Extract the rejected vessel from this error.
    pub fn into_vessel(self) -> Vessel {
        self.vessel
    }
}

/// Error returned for grid dimensions that cannot be built.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum InvalidDimensions {
    /// One of the axes was zero.
    #[error("grid dimensions must be nonzero, got {columns}x{rows}")]
    Empty { columns: usize, rows: usize },
    /// More rows than there are row letters.
    #[error("grid may have at most {max} rows, got {rows}")]
    TooManyRows { rows: usize, max: usize },
    /// The cell count does not fit in a `usize`.
    #[error("grid dimensions too large: {columns} * {rows} overflows usize")]
    TooLarge { columns: usize, rows: usize },
}
