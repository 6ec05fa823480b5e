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
use thiserror::Error;

use crate::vessel::VesselError;

/// Error returned when a [`Game`][crate::game::Game] cannot be set up from its
/// configuration.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum GameError {
    /// The fleet contains no vessels, so there would be nothing to sink.
    #[error("the fleet contains no vessels")]
    EmptyFleet,

    /// Random placement was given no orientations to choose from.
    #[error("no placement orientations allowed")]
    NoOrientations,

    /// A vessel is longer than every allowed axis of the grid.
    #[error("{name} of length {length} does not fit on a {columns}x{rows} grid")]
    DoesNotFit {
        name: String,
        length: usize,
        columns: usize,
        rows: usize,
    },

    /// The fleet needs more cells than the grid has.
    #[error("the fleet needs {cells} cells but the grid only has {capacity}")]
    Crowded { cells: usize, capacity: usize },

    /// A vessel could not be constructed.
    #[error(transparent)]
    Vessel(#[from] VesselError),
}
