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
//! The single-player game engine. Owns the grid, places the fleet at random when
//! created and resolves one shot per [`tick`][Game::tick].

use enumflags2::BitFlags;
use log::{debug, info, trace};
use rand::Rng;

use crate::{
    coordinate::{Coordinate, ParseCoordinateError},
    grid::{Grid, GridDimensions, ShotResult},
    vessel::{Orientation, Vessel, VesselError},
};

pub use self::{
    config::{Fleet, FleetEntry, GameConfig},
    errors::GameError,
};

mod config;
mod errors;

/// Whether the game is still being played.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameStatus {
    /// At least one vessel is afloat.
    InProgress,
    /// Every vessel has been sunk. Terminal.
    Finished,
}

/// Outcome of the most recent [`tick`][Game::tick].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LastShot {
    /// No turn has been played yet.
    NoneYet,
    /// The target was outside the grid. Nothing was recorded.
    OutOfBounds(Coordinate),
    /// The shot landed on the grid.
    Resolved(ShotResult),
}

impl LastShot {
    /// Get the shot result if the shot landed on the grid.
    pub fn result(&self) -> Option<&ShotResult> {
        match self {
            LastShot::Resolved(result) => Some(result),
            LastShot::NoneYet | LastShot::OutOfBounds(_) => None,
        }
    }
}

/// Game engine for one session.
#[derive(Debug)]
pub struct Game {
    /// The hidden ocean grid being fired at.
    grid: Grid,

    /// Fleet that was placed on the grid.
    fleet: Fleet,

    /// Cell that will be fired at on the next tick.
    target: Coordinate,

    /// Result of the shot in the last tick.
    last_shot: LastShot,

    status: GameStatus,

    /// Number of ticks that fired a shot.
    turns: usize,
}

impl Game {
    /// Set up a game from the configuration, placing every vessel of the fleet at a
    /// uniformly random stern cell and allowed orientation.
    ///
    /// Placement retries until each vessel fits. Fleets which can never fit are rejected
    /// up front, but a fleet which fits only in very few arrangements may take a long
    /// time to place.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, GameError> {
        let (dimensions, fleet, orientations) = config.into_parts();
        let allowed = check_config(&dimensions, &fleet, orientations)?;

        let mut grid = Grid::new(dimensions);
        for entry in fleet.entries() {
            for _ in 0..entry.count() {
                place_vessel(&mut grid, entry, &allowed, rng)?;
            }
        }
        debug!(
            "placed {} vessels on a {}x{} grid",
            grid.live_vessel_count(),
            dimensions.columns(),
            dimensions.rows()
        );

        Ok(Self {
            grid,
            fleet,
            target: Coordinate::default(),
            last_shot: LastShot::NoneYet,
            status: GameStatus::InProgress,
            turns: 0,
        })
    }

    /// Returns `true` while the game is in progress.
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Parse `text` and make it the target of the next tick. On a parse error the
    /// previous target is kept.
    pub fn set_target(&mut self, text: &str) -> Result<Coordinate, ParseCoordinateError> {
        let coord = text.parse()?;
        self.target = coord;
        Ok(coord)
    }

    /// Make `coord` the target of the next tick.
    pub fn set_target_coordinate(&mut self, coord: Coordinate) {
        self.target = coord;
    }

    /// The cell that will be fired at on the next tick. `A1` until set.
    pub fn target(&self) -> Coordinate {
        self.target
    }

    /// Advance the game one turn by firing at the current target. Does nothing once the
    /// game is finished.
    pub fn tick(&mut self) -> &LastShot {
        if !self.is_running() {
            return &self.last_shot;
        }
        self.turns += 1;
        self.last_shot = match self.grid.shoot(self.target) {
            Some(result) => LastShot::Resolved(result),
            None => {
                debug!("target {} is out of bounds", self.target);
                LastShot::OutOfBounds(self.target)
            }
        };
        if self.grid.live_vessel_count() == 0 {
            info!("all vessels sunk after {} turns", self.turns);
            self.status = GameStatus::Finished;
        }
        &self.last_shot
    }

    /// Outcome of the most recent tick.
    pub fn last_shot(&self) -> &LastShot {
        &self.last_shot
    }

    /// The grid, for rendering. Ship positions are available through it, so callers
    /// decide how much to reveal.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Number of ticks which fired a shot, including out of bounds shots.
    pub fn turns(&self) -> usize {
        self.turns
    }
}

/// Reject configurations random placement could never satisfy. Returns the allowed
/// orientations in a fixed order.
fn check_config(
    dimensions: &GridDimensions,
    fleet: &Fleet,
    orientations: BitFlags<Orientation>,
) -> Result<Vec<Orientation>, GameError> {
    let allowed: Vec<Orientation> = [Orientation::Horizontal, Orientation::Vertical]
        .iter()
        .copied()
        .filter(|&orientation| orientations.contains(orientation))
        .collect();
    if allowed.is_empty() {
        return Err(GameError::NoOrientations);
    }
    if fleet.total_vessels() == 0 {
        return Err(GameError::EmptyFleet);
    }

    for entry in fleet.entries().iter().filter(|entry| entry.count() > 0) {
        if entry.length() < 1 {
            return Err(VesselError::InvalidSize(entry.length()).into());
        }
        let fits = allowed.iter().any(|orientation| match orientation {
            Orientation::Horizontal => entry.length() <= dimensions.columns(),
            Orientation::Vertical => entry.length() <= dimensions.rows(),
        });
        if !fits {
            return Err(GameError::DoesNotFit {
                name: entry.name().to_owned(),
                length: entry.length(),
                columns: dimensions.columns(),
                rows: dimensions.rows(),
            });
        }
    }

    let cells = fleet.total_cells();
    if cells > dimensions.total_size() {
        return Err(GameError::Crowded {
            cells,
            capacity: dimensions.total_size(),
        });
    }
    Ok(allowed)
}

/// Place one vessel of the given kind, retrying random positions until one is accepted.
fn place_vessel<R: Rng + ?Sized>(
    grid: &mut Grid,
    entry: &FleetEntry,
    allowed: &[Orientation],
    rng: &mut R,
) -> Result<(), GameError> {
    let dimensions = *grid.dimensions();
    let mut attempts = 0usize;
    loop {
        attempts += 1;
        let stern = Coordinate::new(
            rng.gen_range(0, dimensions.rows()),
            rng.gen_range(0, dimensions.columns()),
        );
        let orientation = allowed[rng.gen_range(0, allowed.len())];
        let stern = match stern {
            Some(stern) => stern,
            None => continue,
        };
        match Vessel::new(entry.name(), stern, entry.length(), orientation) {
            Ok(vessel) => match grid.add_vessel(vessel) {
                Ok(_) => {
                    trace!("{} placed after {} attempts", entry.name(), attempts);
                    return Ok(());
                }
                Err(_) => continue,
            },
            // Ran past the last row letter, which is just another position that does not
            // fit.
            Err(VesselError::OutOfBounds(err)) => trace!("{}", err),
            Err(err @ VesselError::InvalidSize(_)) => return Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vessel::HitDesignation;
    use rand::{rngs::StdRng, SeedableRng};

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn vessel_cells(game: &Game) -> Vec<Coordinate> {
        let mut cells: Vec<_> = game
            .grid()
            .vessels()
            .flat_map(|(_, vessel)| vessel.cells().iter().copied())
            .collect();
        cells.sort();
        cells
    }

    #[test]
    fn default_game_places_three_vessels() {
        let game = Game::new(GameConfig::default(), &mut rng(1)).unwrap();
        assert_eq!(game.grid().live_vessel_count(), 3);
        assert!(game.is_running());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.last_shot(), &LastShot::NoneYet);
        assert_eq!(game.target().to_string(), "A1");

        let names: Vec<_> = game.grid().vessels().map(|(_, v)| v.name()).collect();
        assert_eq!(names, vec!["Battleship", "Destroyer", "Destroyer"]);
    }

    #[test]
    fn placed_vessels_do_not_overlap() {
        for seed in 0..50 {
            let game = Game::new(GameConfig::default(), &mut rng(seed)).unwrap();
            let mut cells = vessel_cells(&game);
            assert_eq!(cells.len(), 13);
            cells.dedup();
            assert_eq!(cells.len(), 13, "overlap with seed {}", seed);
            let dim = game.grid().dimensions();
            assert!(cells.iter().all(|c| dim.contains(c)));
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = Game::new(GameConfig::default(), &mut rng(7)).unwrap();
        let b = Game::new(GameConfig::default(), &mut rng(7)).unwrap();
        assert_eq!(vessel_cells(&a), vessel_cells(&b));
    }

    #[test]
    fn orientation_restriction_is_honoured() {
        let config = GameConfig::default().with_orientations(Orientation::Vertical);
        let game = Game::new(config, &mut rng(3)).unwrap();
        assert!(game
            .grid()
            .vessels()
            .all(|(_, v)| v.orientation() == Orientation::Vertical));
    }

    #[test]
    fn tick_records_outcome() {
        let mut game = Game::new(GameConfig::default(), &mut rng(11)).unwrap();
        game.set_target("D6").unwrap();
        let outcome = game.tick().clone();
        let result = outcome.result().unwrap();
        assert_eq!(result.coord().to_string(), "D6");
        assert_eq!(game.turns(), 1);
        assert_eq!(game.grid().designation(&result.coord()), Some(result.designation()));
    }

    #[test]
    fn out_of_bounds_tick() {
        let mut game = Game::new(GameConfig::default(), &mut rng(11)).unwrap();
        let target = game.set_target("Z15").unwrap();
        assert_eq!(game.tick(), &LastShot::OutOfBounds(target));
        assert!(game.is_running());
        assert_eq!(game.grid().hit_history().count(), 0);
    }

    #[test]
    fn bad_target_keeps_previous() {
        let mut game = Game::new(GameConfig::default(), &mut rng(11)).unwrap();
        game.set_target("c-3").unwrap();
        assert_eq!(
            game.set_target("A0"),
            Err(ParseCoordinateError::Zero)
        );
        assert_eq!(game.target().to_string(), "C3");
    }

    #[test]
    fn sweeping_the_grid_finishes_the_game() {
        let mut game = Game::new(GameConfig::default(), &mut rng(5)).unwrap();
        let coords: Vec<_> = game.grid().dimensions().iter_coordinates().flatten().collect();
        let mut sinks = 0;
        for coord in coords {
            if !game.is_running() {
                break;
            }
            game.set_target_coordinate(coord);
            let before = game.grid().live_vessel_count();
            let sunk = game.tick().result().map(|r| r.designation()) == Some(HitDesignation::Sink);
            let after = game.grid().live_vessel_count();
            if sunk {
                sinks += 1;
                assert_eq!(after, before - 1);
            } else {
                assert_eq!(after, before);
            }
        }
        assert_eq!(sinks, 3);
        assert!(!game.is_running());
        assert_eq!(game.status(), GameStatus::Finished);

        // Finished games ignore further ticks.
        let turns = game.turns();
        let last = game.last_shot().clone();
        game.set_target("J10").unwrap();
        game.tick();
        assert_eq!(game.turns(), turns);
        assert_eq!(game.last_shot(), &last);
    }

    #[test]
    fn rejects_unplaceable_fleets() {
        let too_long = GameConfig::default().with_fleet(Fleet::empty().with("Carrier", 11, 1));
        assert!(matches!(
            Game::new(too_long, &mut rng(0)),
            Err(GameError::DoesNotFit { length: 11, .. })
        ));

        let vertical_only = GameConfig::default()
            .with_dimensions(GridDimensions::new(10, 3))
            .with_fleet(Fleet::empty().with("Cruiser", 4, 1))
            .with_orientations(Orientation::Vertical);
        assert!(matches!(
            Game::new(vertical_only, &mut rng(0)),
            Err(GameError::DoesNotFit { .. })
        ));

        let crowded = GameConfig::default()
            .with_dimensions(GridDimensions::new(2, 2))
            .with_fleet(Fleet::empty().with("Patrol", 2, 3));
        assert_eq!(
            Game::new(crowded, &mut rng(0)).unwrap_err(),
            GameError::Crowded {
                cells: 6,
                capacity: 4
            }
        );
    }

    #[test]
    fn rejects_degenerate_config() {
        let empty = GameConfig::default().with_fleet(Fleet::empty());
        assert_eq!(Game::new(empty, &mut rng(0)).unwrap_err(), GameError::EmptyFleet);

        let zero = GameConfig::default().with_fleet(Fleet::empty().with("Ghost", 0, 1));
        assert_eq!(
            Game::new(zero, &mut rng(0)).unwrap_err(),
            GameError::Vessel(VesselError::InvalidSize(0))
        );

        let none = GameConfig::default().with_orientations(BitFlags::empty());
        assert_eq!(
            Game::new(none, &mut rng(0)).unwrap_err(),
            GameError::NoOrientations
        );
    }

    #[test]
    fn tight_fleet_still_places() {
        // Two vessels filling a 2x2 grid completely.
        let config = GameConfig::default()
            .with_dimensions(GridDimensions::new(2, 2))
            .with_fleet(Fleet::empty().with("Patrol", 2, 2));
        let game = Game::new(config, &mut rng(9)).unwrap();
        assert_eq!(vessel_cells(&game).len(), 4);
        assert_eq!(game.grid().live_vessel_count(), 2);
    }

    #[test]
    fn full_height_vessels_place_on_lettered_rows() {
        let config = GameConfig::default()
            .with_dimensions(GridDimensions::new(3, 26))
            .with_fleet(Fleet::empty().with("Column", 26, 3))
            .with_orientations(Orientation::Vertical);
        let game = Game::new(config, &mut rng(2)).unwrap();
        assert_eq!(game.grid().live_vessel_count(), 3);
    }
}
