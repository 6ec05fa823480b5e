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
//! Fleet composition and the rest of the tunable game setup.

use enumflags2::BitFlags;

use crate::{grid::GridDimensions, vessel::Orientation};

/// One kind of vessel in the fleet: its name, its length and how many to place.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FleetEntry {
    name: String,
    length: usize,
    count: usize,
}

impl FleetEntry {
    pub fn new(name: impl Into<String>, length: usize, count: usize) -> Self {
        Self {
            name: name.into(),
            length,
            count,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of cells each vessel of this kind occupies.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of vessels of this kind.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Ordered list of vessel kinds to place. Placement follows this order. Start from
/// [`empty`][Self::empty] for a custom fleet; [`classic`][Self::classic] (also the
/// `Default`) is the standard one.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Fleet {
    entries: Vec<FleetEntry>,
}

impl Fleet {
    /// An empty fleet. Add entries with [`with`][Self::with] or [`push`][Self::push].
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// One Battleship of length 5 and two Destroyers of length 4.
    pub fn classic() -> Self {
        Self::empty().with("Battleship", 5, 1).with("Destroyer", 4, 2)
    }

    /// Builder form of [`push`][Self::push].
    pub fn with(mut self, name: impl Into<String>, length: usize, count: usize) -> Self {
        self.push(FleetEntry::new(name, length, count));
        self
    }

    pub fn push(&mut self, entry: FleetEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[FleetEntry] {
        &self.entries
    }

    /// Total number of vessels across all entries.
    pub fn total_vessels(&self) -> usize {
        self.entries.iter().map(FleetEntry::count).sum()
    }

    /// Total number of cells the whole fleet occupies.
    pub fn total_cells(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.length.saturating_mul(entry.count))
            .fold(0, usize::saturating_add)
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::classic()
    }
}

/// Everything needed to set up a [`Game`][crate::game::Game].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameConfig {
    dimensions: GridDimensions,
    fleet: Fleet,
    orientations: BitFlags<Orientation>,
}

impl GameConfig {
    pub fn with_dimensions(mut self, dimensions: GridDimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn with_fleet(mut self, fleet: Fleet) -> Self {
        self.fleet = fleet;
        self
    }

    /// Restrict the orientations random placement may choose from.
    pub fn with_orientations<B: Into<BitFlags<Orientation>>>(mut self, orientations: B) -> Self {
        self.orientations = orientations.into();
        self
    }

    pub fn dimensions(&self) -> &GridDimensions {
        &self.dimensions
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn orientations(&self) -> BitFlags<Orientation> {
        self.orientations
    }

    pub(super) fn into_parts(self) -> (GridDimensions, Fleet, BitFlags<Orientation>) {
        (self.dimensions, self.fleet, self.orientations)
    }
}

impl Default for GameConfig {
    /// The classic setup: 10x10 grid, the default [`Fleet`] and both orientations.
    fn default() -> Self {
        Self {
            dimensions: GridDimensions::default(),
            fleet: Fleet::default(),
            orientations: BitFlags::all(),
        }
    }
}
