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
//! Ships placed on the grid and the outcome of firing at them.

use std::collections::HashSet;

use enumflags2::BitFlags;
use thiserror::Error;

use crate::coordinate::{Coordinate, OutOfBounds};

/// Direction a vessel extends in from its stern.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Orientation {
    /// Extends towards higher column numbers.
    Horizontal = 0b01,
    /// Extends towards later row letters.
    Vertical = 0b10,
}

impl Orientation {
    /// `(row, column)` step taken per unit of length.
    fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// Outcome of a single shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HitDesignation {
    /// An afloat cell was struck and the vessel still has others.
    Hit,
    /// Nothing afloat was struck.
    Miss,
    /// The last afloat cell of the vessel was struck.
    Sink,
}

/// Error returned when a vessel cannot be constructed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum VesselError {
    /// Vessels must have at least one cell.
    #[error("vessel length must be >= 1: {0}")]
    InvalidSize(usize),

    /// Generating the cells walked off the addressable axes.
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBounds),
}

/// A single vessel. Tracks the cells it was placed on and the subset still afloat.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Vessel {
    /// Vessel designation, e.g. "Battleship".
    name: String,

    /// Direction the vessel extends in from `cells[0]`.
    orientation: Orientation,

    /// Cells occupied by the vessel, starting at the stern. Never changes.
    cells: Vec<Coordinate>,

    /// Cells not yet struck. Only ever shrinks.
    afloat: HashSet<Coordinate>,
}

impl Vessel {
    /// Construct a vessel of `length` cells, starting at `stern` and extending along
    /// `orientation` towards increasing indices.
    pub fn new(
        name: impl Into<String>,
        stern: Coordinate,
        length: usize,
        orientation: Orientation,
    ) -> Result<Self, VesselError> {
        if length < 1 {
            return Err(VesselError::InvalidSize(length));
        }
        let (row_step, column_step) = orientation.step();
        let cells = (0..length)
            .map(|i| {
                let i = i as isize;
                stern.offset(row_step * i, column_step * i)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let afloat = cells.iter().copied().collect();
        Ok(Self {
            name: name.into(),
            orientation,
            cells,
            afloat,
        })
    }

    /// Register a shot at `cell` and report what it did to this vessel.
    pub fn hit(&mut self, cell: &Coordinate) -> HitDesignation {
        if !self.afloat.remove(cell) {
            HitDesignation::Miss
        } else if self.is_sunk() {
            HitDesignation::Sink
        } else {
            HitDesignation::Hit
        }
    }

    /// Returns true if no cells are afloat.
    pub fn is_sunk(&self) -> bool {
        self.afloat.is_empty()
    }

    /// The vessel designation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of cells the vessel was built with.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The first cell of the vessel.
    pub fn stern(&self) -> Coordinate {
        // Construction rejects zero lengths.
        self.cells[0]
    }

    /// All cells of the vessel in order from the stern, struck or not.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Cells which have not been struck yet, in no particular order.
    pub fn afloat(&self) -> impl '_ + Iterator<Item = &Coordinate> {
        self.afloat.iter()
    }

    pub fn is_afloat(&self, cell: &Coordinate) -> bool {
        self.afloat.contains(cell)
    }
}
