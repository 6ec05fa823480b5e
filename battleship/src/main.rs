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
use std::io;

use clap::{value_t, App, Arg, ArgMatches};
use enumflags2::BitFlags;
use log::debug;
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, SeedableRng};
use regex::Regex;

use oceangrid::{
    game::{Fleet, Game, GameConfig},
    grid::GridDimensions,
    session,
    vessel::Orientation,
};

use crate::console::ConsoleUi;

mod console;
mod logging;

fn main() -> io::Result<()> {
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Single-player command line battleship. Sink the hidden fleet.")
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed the ship placement for a repeatable game")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("size")
                .long("size")
                .value_name("COLSxROWS")
                .help("grid size, at most 26 rows (default 10x10)")
                .takes_value(true)
                .validator(|v| parse_size(&v).map(|_| ())),
        )
        .arg(
            Arg::with_name("ship")
                .long("ship")
                .value_name("NAME:LENGTH[:COUNT]")
                .help("add a kind of ship to the fleet, replacing the default fleet")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .validator(|v| parse_ship(&v).map(|_| ())),
        )
        .arg(
            Arg::with_name("orientation")
                .long("orientation")
                .value_name("ORIENTATION")
                .help("directions ships may be placed in")
                .takes_value(true)
                .possible_values(&["horizontal", "vertical", "both"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("reveal")
                .long("reveal")
                .help("show the whole fleet when the game is over"),
        )
        .get_matches();

    logging::init_logging();

    let config = build_config(&matches).unwrap_or_else(|err| {
        clap::Error::with_description(&err, clap::ErrorKind::InvalidValue).exit()
    });
    let mut rng = if matches.is_present("seed") {
        let seed = value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit());
        debug!("placing ships with seed {}", seed);
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_entropy()
    };

    let mut game = Game::new(config, &mut rng)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut ui = ConsoleUi::new(stdin.lock(), stdout.lock(), matches.is_present("reveal"));
    session::run(&mut game, &mut ui)?;
    Ok(())
}

/// Build the [`GameConfig`] from command line arguments. Values were already checked by
/// the argument validators, but are parsed again here.
fn build_config(matches: &ArgMatches) -> Result<GameConfig, String> {
    let mut config = GameConfig::default();
    if let Some(size) = matches.value_of("size") {
        config = config.with_dimensions(parse_size(size)?);
    }
    if let Some(ships) = matches.values_of("ship") {
        let mut fleet = Fleet::empty();
        for ship in ships {
            let (name, length, count) = parse_ship(ship)?;
            fleet = fleet.with(name, length, count);
        }
        config = config.with_fleet(fleet);
    }
    if let Some(orientation) = matches.value_of("orientation") {
        config = config.with_orientations(parse_orientations(orientation)?);
    }
    Ok(config)
}

/// Parse grid dimensions written as `COLSxROWS`, e.g. `12x8`.
fn parse_size(text: &str) -> Result<GridDimensions, String> {
    static SIZE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)^(?P<columns>[0-9]+)\s*x\s*(?P<rows>[0-9]+)$").unwrap());

    let captures = SIZE
        .captures(text.trim())
        .ok_or_else(|| format!("invalid size \"{}\", expected COLSxROWS, e.g. 10x10", text))?;
    let columns = captures["columns"]
        .parse()
        .map_err(|_| format!("invalid column count: {}", &captures["columns"]))?;
    let rows = captures["rows"]
        .parse()
        .map_err(|_| format!("invalid row count: {}", &captures["rows"]))?;
    GridDimensions::try_new(columns, rows).map_err(|err| err.to_string())
}

/// Parse a fleet entry written as `NAME:LENGTH` or `NAME:LENGTH:COUNT`. Count defaults
/// to 1.
fn parse_ship(text: &str) -> Result<(String, usize, usize), String> {
    static SHIP: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)
        (?P<name>[^:]+?)\s*:\s*
        (?P<length>[0-9]+)
        (?:\s*:\s*(?P<count>[0-9]+))?$",
        )
        .unwrap()
    });

    let captures = SHIP.captures(text.trim()).ok_or_else(|| {
        format!(
            "invalid ship \"{}\", expected NAME:LENGTH[:COUNT], e.g. Cruiser:3:2",
            text
        )
    })?;
    let length = match captures["length"].parse() {
        Ok(0) | Err(_) => {
            return Err(format!(
                "ship length must be a number >= 1, got {}",
                &captures["length"]
            ))
        }
        Ok(length) => length,
    };
    let count = match captures.name("count") {
        None => 1,
        Some(count) => count
            .as_str()
            .parse()
            .map_err(|_| format!("invalid ship count: {}", count.as_str()))?,
    };
    Ok((captures["name"].to_owned(), length, count))
}

/// Parse an orientation choice. Matching is case-insensitive.
fn parse_orientations(text: &str) -> Result<BitFlags<Orientation>, String> {
    match text.to_ascii_lowercase().as_str() {
        "horizontal" => Ok(Orientation::Horizontal.into()),
        "vertical" => Ok(Orientation::Vertical.into()),
        "both" => Ok(BitFlags::all()),
        other => Err(format!(
            "invalid orientation {}, choose \"horizontal\", \"vertical\", or \"both\"",
            other
        )),
    }
}
