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
//! Game-state engine for a single-player game of Battleship.
//!
//! A [`Game`][game::Game] hides a fleet of [`Vessel`][vessel::Vessel]s on a
//! [`Grid`][grid::Grid] and resolves one shot per turn, reporting hits, misses and sunk
//! vessels until the whole fleet is gone. Targets are named by [`Coordinate`]s such as
//! `B7`. User interfaces plug in through the [`session::Ui`] trait.
//!
//! ```
//! use oceangrid::game::{Game, GameConfig};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut game = Game::new(GameConfig::default(), &mut StdRng::seed_from_u64(1)).unwrap();
//! game.set_target("c-3").unwrap();
//! game.tick();
//! assert!(game.last_shot().result().is_some());
//! ```

pub use self::coordinate::Coordinate;

pub mod coordinate;
pub mod game;
pub mod grid;
pub mod session;
pub mod vessel;
