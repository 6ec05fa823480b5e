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
//! The ocean grid: where vessels are placed and where shots land.

use log::{debug, trace};

use crate::{
    coordinate::Coordinate,
    vessel::{HitDesignation, Vessel},
};

pub use self::{
    dimensions::GridDimensions,
    errors::{CannotPlaceReason, InvalidDimensions, PlaceError},
};

mod dimensions;
mod errors;

/// Handle to a vessel placed on a [`Grid`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct VesselId(usize);

/// A single cell in the grid.
#[derive(Debug, Default)]
struct GridCell {
    /// The vessel that occupies this cell, if any. Assigned once at placement.
    vessel: Option<VesselId>,

    /// Outcome of the most recent shot at this cell, if it was ever shot.
    shot: Option<HitDesignation>,
}

/// Result of a shot that landed inside the grid.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ShotResult {
    coord: Coordinate,
    vessel: Option<String>,
    designation: HitDesignation,
}

impl ShotResult {
    /// The cell that was shot.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Name of the vessel occupying the cell, `None` for open water.
    pub fn vessel(&self) -> Option<&str> {
        self.vessel.as_deref()
    }

    pub fn designation(&self) -> HitDesignation {
        self.designation
    }
}

/// Reference to a particular cell in the grid.
#[derive(Debug, Copy, Clone)]
pub struct CellRef<'a> {
    coord: Coordinate,
    shot: Option<HitDesignation>,
    vessel: Option<&'a Vessel>,
}

impl<'a> CellRef<'a> {
    /// The grid coordinate of this cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Outcome of the latest shot at this cell, `None` if never shot.
    pub fn shot(&self) -> Option<HitDesignation> {
        self.shot
    }

    /// The vessel occupying this cell, if any.
    pub fn vessel(&self) -> Option<&'a Vessel> {
        self.vessel
    }
}

/// A fixed size grid holding vessels and the history of shots fired at it.
#[derive(Debug)]
pub struct Grid {
    /// Bounds of this grid.
    dim: GridDimensions,

    /// Cells that make up this grid, row-major.
    cells: Box<[GridCell]>,

    /// Every vessel that was accepted, indexed by [`VesselId`].
    vessels: Vec<Vessel>,

    /// Number of vessels with at least one cell afloat.
    live: usize,
}

impl Grid {
    /// Construct an empty grid with the given [`GridDimensions`].
    pub fn new(dim: GridDimensions) -> Self {
        let cells = (0..dim.total_size()).map(|_| Default::default()).collect();
        Self {
            dim,
            cells,
            vessels: Vec::new(),
            live: 0,
        }
    }

    /// Get the [`GridDimensions`] of this grid.
    pub fn dimensions(&self) -> &GridDimensions {
        &self.dim
    }

    fn get(&self, coord: &Coordinate) -> Option<&GridCell> {
        self.dim
            .try_linearize(coord)
            .and_then(|i| self.cells.get(i))
    }

    fn get_mut(&mut self, coord: &Coordinate) -> Option<&mut GridCell> {
        self.dim
            .try_linearize(coord)
            .and_then(move |i| self.cells.get_mut(i))
    }

    /// Try to place the vessel. Every cell must be inside the grid and unoccupied,
    /// otherwise nothing is placed and the vessel is handed back in the error.
    pub fn add_vessel(&mut self, vessel: Vessel) -> Result<VesselId, PlaceError> {
        let rejected = vessel
            .cells()
            .iter()
            .find_map(|coord| match self.get(coord) {
                None => Some(CannotPlaceReason::OutOfBounds),
                Some(cell) if cell.vessel.is_some() => Some(CannotPlaceReason::AlreadyOccupied),
                Some(_) => None,
            });
        if let Some(reason) = rejected {
            trace!("rejected {} at {}: {}", vessel.name(), vessel.stern(), reason);
            return Err(PlaceError::new(reason, vessel));
        }

        let id = VesselId(self.vessels.len());
        for coord in vessel.cells() {
            // Every cell was checked above.
            if let Some(cell) = self.get_mut(coord) {
                cell.vessel = Some(id);
            }
        }
        if !vessel.is_sunk() {
            self.live += 1;
        }
        debug!(
            "placed {} at {} ({:?}, length {})",
            vessel.name(),
            vessel.stern(),
            vessel.orientation(),
            vessel.len()
        );
        self.vessels.push(vessel);
        Ok(id)
    }

    /// Fire at the given cell. Returns `None` if the cell is outside the grid, otherwise
    /// the outcome, which is also recorded in the hit history. Cells may be shot again;
    /// the vessel decides the new outcome and the history keeps the latest.
    pub fn shoot(&mut self, coord: Coordinate) -> Option<ShotResult> {
        let index = self.dim.try_linearize(&coord)?;
        let cell = &mut self.cells[index];
        let (vessel, designation) = match cell.vessel {
            None => (None, HitDesignation::Miss),
            Some(id) => {
                let vessel = &mut self.vessels[id.0];
                (Some(vessel.name().to_owned()), vessel.hit(&coord))
            }
        };
        cell.shot = Some(designation);
        if designation == HitDesignation::Sink {
            self.live = self.live.saturating_sub(1);
        }
        debug!("shot at {}: {:?} {:?}", coord, designation, vessel);
        Some(ShotResult {
            coord,
            vessel,
            designation,
        })
    }

    /// Number of vessels that still have a cell afloat.
    pub fn live_vessel_count(&self) -> usize {
        self.live
    }

    /// Outcome of the latest shot at the cell, `None` if it was never shot or is out of
    /// bounds.
    pub fn designation(&self, coord: &Coordinate) -> Option<HitDesignation> {
        self.get(coord).and_then(|cell| cell.shot)
    }

    /// Get an iterator over every shot cell and its latest outcome, row-major.
    pub fn hit_history(&self) -> impl '_ + Iterator<Item = (Coordinate, HitDesignation)> {
        self.dim
            .iter_coordinates()
            .flatten()
            .filter_map(move |coord| self.designation(&coord).map(|shot| (coord, shot)))
    }

    /// Get a reference to the cell at the given coordinate. Returns `None` if the
    /// coordinate is out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<CellRef> {
        self.get(&coord).map(|cell| CellRef {
            coord,
            shot: cell.shot,
            vessel: cell.vessel.and_then(|id| self.vessels.get(id.0)),
        })
    }

    /// Get the vessel occupying the given cell, if any.
    pub fn vessel_at(&self, coord: &Coordinate) -> Option<&Vessel> {
        self.get(coord)
            .and_then(|cell| cell.vessel)
            .and_then(|id| self.vessels.get(id.0))
    }

    /// Get the vessel with the given handle.
    pub fn vessel(&self, id: VesselId) -> Option<&Vessel> {
        self.vessels.get(id.0)
    }

    /// Get an iterator over all placed vessels in placement order.
    pub fn vessels(&self) -> impl Iterator<Item = (VesselId, &Vessel)> {
        self.vessels
            .iter()
            .enumerate()
            .map(|(i, vessel)| (VesselId(i), vessel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vessel::Orientation;

    fn c(text: &str) -> Coordinate {
        text.parse().unwrap()
    }

    fn vessel(name: &str, stern: &str, length: usize, orientation: Orientation) -> Vessel {
        Vessel::new(name, c(stern), length, orientation).unwrap()
    }

    fn occupied(grid: &Grid) -> Vec<Coordinate> {
        grid.dimensions()
            .iter_coordinates()
            .flatten()
            .filter(|coord| grid.vessel_at(coord).is_some())
            .collect()
    }

    #[test]
    fn accepts_vessel_inside_bounds() {
        let mut grid = Grid::new(GridDimensions::default());
        let id = grid
            .add_vessel(vessel("Destroyer", "A3", 2, Orientation::Vertical))
            .unwrap();
        assert_eq!(grid.live_vessel_count(), 1);
        assert_eq!(grid.vessel(id).map(Vessel::name), Some("Destroyer"));
        assert_eq!(occupied(&grid), vec![c("A3"), c("B3")]);
    }

    #[test]
    fn rejects_vessel_past_right_edge() {
        let mut grid = Grid::new(GridDimensions::default());
        let err = grid
            .add_vessel(vessel("Battleship", "A8", 5, Orientation::Horizontal))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
        assert_eq!(err.into_vessel().name(), "Battleship");
        assert_eq!(grid.live_vessel_count(), 0);
        assert!(occupied(&grid).is_empty());
    }

    #[test]
    fn rejects_vessel_past_bottom_edge() {
        let mut grid = Grid::new(GridDimensions::new(10, 4));
        let err = grid
            .add_vessel(vessel("Battleship", "B1", 4, Orientation::Vertical))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
    }

    #[test]
    fn rejects_overlap_without_partial_placement() {
        let mut grid = Grid::new(GridDimensions::default());
        grid.add_vessel(vessel("Destroyer", "C2", 4, Orientation::Horizontal))
            .unwrap();
        let before = occupied(&grid);

        let err = grid
            .add_vessel(vessel("Cruiser", "A4", 3, Orientation::Vertical))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
        assert_eq!(occupied(&grid), before);
        assert_eq!(grid.live_vessel_count(), 1);
        assert_eq!(grid.vessels().count(), 1);

        // The same vessel fits once moved clear.
        let moved = vessel("Cruiser", "D4", 3, Orientation::Vertical);
        assert!(grid.add_vessel(moved).is_ok());
        assert_eq!(grid.live_vessel_count(), 2);
    }

    #[test]
    fn shot_sequence() {
        let mut grid = Grid::new(GridDimensions::new(10, 10));
        grid.add_vessel(vessel("Destroyer", "A3", 2, Orientation::Vertical))
            .unwrap();

        assert_eq!(grid.shoot(c("Z15")), None);

        let miss = grid.shoot(c("A4")).unwrap();
        assert_eq!(miss.designation(), HitDesignation::Miss);
        assert_eq!(miss.vessel(), None);
        assert_eq!(grid.live_vessel_count(), 1);

        let hit = grid.shoot(c("B3")).unwrap();
        assert_eq!(hit.designation(), HitDesignation::Hit);
        assert_eq!(hit.vessel(), Some("Destroyer"));
        assert_eq!(grid.live_vessel_count(), 1);

        let sink = grid.shoot(c("A3")).unwrap();
        assert_eq!(sink.designation(), HitDesignation::Sink);
        assert_eq!(sink.vessel(), Some("Destroyer"));
        assert_eq!(sink.coord(), c("A3"));
        assert_eq!(grid.live_vessel_count(), 0);
    }

    #[test]
    fn out_of_bounds_shot_is_not_recorded() {
        let mut grid = Grid::new(GridDimensions::new(3, 3));
        assert_eq!(grid.shoot(c("A4")), None);
        assert_eq!(grid.shoot(c("D1")), None);
        assert_eq!(grid.hit_history().count(), 0);
    }

    #[test]
    fn re_shooting_records_the_latest_outcome() {
        let mut grid = Grid::new(GridDimensions::default());
        grid.add_vessel(vessel("Destroyer", "E5", 2, Orientation::Horizontal))
            .unwrap();
        assert_eq!(
            grid.shoot(c("E5")).map(|r| r.designation()),
            Some(HitDesignation::Hit)
        );
        let again = grid.shoot(c("E5")).unwrap();
        assert_eq!(again.designation(), HitDesignation::Miss);
        assert_eq!(again.vessel(), Some("Destroyer"));
        assert_eq!(grid.designation(&c("E5")), Some(HitDesignation::Miss));
        assert_eq!(grid.live_vessel_count(), 1);
    }

    #[test]
    fn history_lists_every_shot_cell() {
        let mut grid = Grid::new(GridDimensions::default());
        grid.add_vessel(vessel("Destroyer", "B2", 2, Orientation::Horizontal))
            .unwrap();
        grid.shoot(c("C7"));
        grid.shoot(c("B3"));
        grid.shoot(c("B2"));
        let history: Vec<_> = grid.hit_history().collect();
        assert_eq!(
            history,
            vec![
                (c("B2"), HitDesignation::Sink),
                (c("B3"), HitDesignation::Hit),
                (c("C7"), HitDesignation::Miss),
            ]
        );
        let cell = grid.cell(c("B3")).unwrap();
        assert_eq!(cell.shot(), Some(HitDesignation::Hit));
        assert!(cell.vessel().map_or(false, Vessel::is_sunk));
        assert!(grid.cell(c("K1")).is_none());
    }
}
