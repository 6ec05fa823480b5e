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
//! Text console implementation of the session [`Ui`].

use std::{
    fmt,
    io::{self, BufRead, Write},
};

use oceangrid::{
    game::{Game, LastShot},
    grid::{CellRef, Grid},
    session::Ui,
    vessel::HitDesignation,
};

const WELCOME_MSG: &str = "Welcome to Battleship (but less)!";
const PROMPT_MSG: &str = "Type in target coordinates:";
const GAME_END_MSG: &str = "It's over.";
const INPUT_HINT: &str = "Examples of proper coordinates: 'A4', 'B-2', 'g8', 'c-3'.";

/// Console interface. Reads targets line by line from `read` and draws to `out`.
pub struct ConsoleUi<B, W> {
    read: B,
    out: W,
    buf: String,
    /// Show the whole fleet once the game is over.
    reveal: bool,
}

impl<B, W> ConsoleUi<B, W> {
    pub fn new(read: B, out: W, reveal: bool) -> Self {
        Self {
            read,
            out,
            buf: String::new(),
            reveal,
        }
    }

    /// Extract the output sink.
    #[cfg(test)]
    fn into_out(self) -> W {
        self.out
    }
}

impl<B: BufRead, W: Write> ConsoleUi<B, W> {
    /// Print the prompt and read a line into the buffer. Returns `false` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<bool> {
        write!(self.out, "{} ", prompt)?;
        self.out.flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            writeln!(self.out)?;
            return Ok(false);
        }
        Ok(true)
    }
}

impl<B: BufRead, W: Write> Ui for ConsoleUi<B, W> {
    fn initialise(&mut self, game: &Game) -> io::Result<()> {
        writeln!(self.out, "{}", WELCOME_MSG)?;
        writeln!(self.out, "{}", TargetView(game.grid()))?;
        writeln!(self.out, "{}", PROMPT_MSG)
    }

    fn handle_input(&mut self, game: &mut Game) -> io::Result<bool> {
        loop {
            if !self.read_line(">")? {
                return Ok(false);
            }
            match game.set_target(self.buf.trim()) {
                Ok(_) => return Ok(true),
                Err(err) => writeln!(self.out, "Wrong input! {}. {}", err, INPUT_HINT)?,
            }
        }
    }

    fn update(&mut self, game: &Game) -> io::Result<()> {
        writeln!(self.out, "{}", TargetView(game.grid()))?;
        match game.last_shot() {
            LastShot::NoneYet => {}
            LastShot::OutOfBounds(_) => writeln!(self.out, "Out of bounds.\n")?,
            LastShot::Resolved(result) => {
                let name = result.vessel().unwrap_or("vessel");
                match result.designation() {
                    HitDesignation::Miss => writeln!(self.out, "Miss.\n")?,
                    HitDesignation::Hit => writeln!(self.out, "Hit! {}.\n", name)?,
                    HitDesignation::Sink => writeln!(self.out, "Sink! {}.\n", name)?,
                }
            }
        }

        if game.is_running() {
            writeln!(self.out, "{}", PROMPT_MSG)
        } else {
            writeln!(self.out, "{} {} turns.", GAME_END_MSG, game.turns())?;
            if self.reveal {
                writeln!(self.out, "{}", RevealedView(game.grid()))?;
            }
            Ok(())
        }
    }
}

/// How a single cell is drawn.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Symbol {
    Unknown,
    Water,
    Afloat,
    Shot(HitDesignation),
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Symbol::Unknown => "[?]",
            Symbol::Water => "[~]",
            Symbol::Afloat => "[O]",
            Symbol::Shot(HitDesignation::Hit) => "[H]",
            Symbol::Shot(HitDesignation::Miss) => "[M]",
            Symbol::Shot(HitDesignation::Sink) => "[S]",
        })
    }
}

/// The grid as the player sees it: only shot cells are known.
struct TargetView<'a>(&'a Grid);

impl fmt::Display for TargetView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_board(f, self.0, |cell| {
            cell.shot().map_or(Symbol::Unknown, Symbol::Shot)
        })
    }
}

/// The grid with every vessel shown.
struct RevealedView<'a>(&'a Grid);

impl fmt::Display for RevealedView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_board(f, self.0, |cell| match (cell.shot(), cell.vessel()) {
            (Some(shot), _) => Symbol::Shot(shot),
            (None, Some(_)) => Symbol::Afloat,
            (None, None) => Symbol::Water,
        })
    }
}

/// Write the board with a column number header and a row letter in front of each row.
fn write_board(
    f: &mut fmt::Formatter,
    grid: &Grid,
    symbol: impl Fn(CellRef) -> Symbol,
) -> fmt::Result {
    let dim = grid.dimensions();
    write!(f, "  ")?;
    for number in 1..=dim.columns() {
        write!(f, "{:^3}", number)?;
    }
    for row in dim.iter_coordinates() {
        writeln!(f)?;
        let mut row = row.peekable();
        if let Some(first) = row.peek() {
            write!(f, "{} ", first.letter())?;
        }
        for coord in row {
            let cell = grid.cell(coord).map_or(Symbol::Unknown, &symbol);
            write!(f, "{}", cell)?;
        }
    }
    Ok(())
}
