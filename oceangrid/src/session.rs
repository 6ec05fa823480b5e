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
//! Drives a [`Game`] through a user interface, one turn at a time.

use std::io;

use crate::game::{Game, GameStatus};

/// Capabilities a user interface provides to the session loop. The game does not know
/// which interface is driving it.
pub trait Ui {
    /// Called once before the first turn.
    fn initialise(&mut self, game: &Game) -> io::Result<()>;

    /// Called before every turn. Should set the game's target. Return `false` when no
    /// more input is available, which ends the session.
    fn handle_input(&mut self, game: &mut Game) -> io::Result<bool>;

    /// Called after every turn.
    fn update(&mut self, game: &Game) -> io::Result<()>;
}

/// Run the game until every vessel is sunk or the interface runs out of input. Returns
/// the status the game ended in.
pub fn run<U: Ui + ?Sized>(game: &mut Game, ui: &mut U) -> io::Result<GameStatus> {
    ui.initialise(game)?;
    while game.is_running() {
        if !ui.handle_input(game)? {
            break;
        }
        game.tick();
        ui.update(game)?;
    }
    Ok(game.status())
}
