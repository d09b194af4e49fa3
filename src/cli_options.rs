/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Starmap.

Starmap is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Starmap is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Starmap. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! These options are intended for developers tuning the catalogs and for checking solutions.
//! Every generated starmap is verified against its own example solution.
//!
//! # Examples
//!
//! Generate a starmap with a fixed seed:
//!
//! ```
//! $ starmap --seed 42 --bomb bomb.json
//! Attempt #1
//!   Star #0: <name> <faction> <regime> (<corridors>)
//!   ...
//!   Answer example: <trails>
//! ```
//!
//! Verify a solution for the same starmap (same seed and bomb). The command prints
//! `Module solved` or the strike, and exits with status 2 on a strike:
//!
//! ```
//! $ starmap --seed 42 --bomb bomb.json --submit "0-7-1; 2-7-3; 4-5-6-7-4"
//! ```
//!
//! Generate 1000 starmaps and print some statistics:
//!
//! ```
//! $ starmap -c 1000 --summary > /dev/null
//! ```

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::env;
use std::fmt;
use std::path::PathBuf;

use starmap::bomb_info::BombSnapshot;
use starmap::config::{COPYRIGHT_NOTICE, STARS_COUNT};
use starmap::game::Game;
use starmap::generator::names;
use starmap::generator::star_info::Star;
use starmap::generator::starmap::Starmap;
use starmap::verifier::{Verdict, verify};

/// Generate and verify Starmap Reconstruction puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Seed for the random generator
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file that describes the bomb (indicators, batteries, ports, serial number)
    #[arg(short, long)]
    bomb: Option<PathBuf>,

    /// Identifier of the first attempt, used in the logs
    #[arg(short, long, default_value_t = 1)]
    attempt: usize,

    /// Number of starmaps to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print some statistics after generating the starmaps
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Starmap to verify against the first generated attempt, such as "0-7-1; 2-7-3"
    #[arg(long)]
    submit: Option<String>,

    /// Print the starmaps and the verdict in JSON format
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Star with its required number of corridors, for the JSON output.
#[derive(Serialize)]
struct StarReport<'a> {
    #[serde(flatten)]
    star: &'a Star,
    corridors: usize,
}

/// Attempt, for the JSON output.
#[derive(Serialize)]
struct AttemptReport<'a> {
    attempt: usize,
    stars: Vec<StarReport<'a>>,
    answer_example: String,
}

/// Statistics printed by `--summary`.
#[derive(Debug, Default)]
struct Summary {
    attempts: usize,
    named_stars: usize,
    errors: usize,
}

impl Summary {
    /// Total number of generated stars, saturating on very large counts.
    fn total_stars(&self) -> usize {
        self.attempts.saturating_mul(STARS_COUNT)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "
          attempts = {}
       named stars = {} / {}
            errors = {}",
            self.attempts,
            self.named_stars,
            self.total_stars(),
            self.errors
        )
    }
}

/// Parse and process command-line options, and return the exit status.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let bomb: BombSnapshot = match &args.bomb {
        Some(path) => match BombSnapshot::load(path) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("Cannot read the bomb description {}: {e}", path.display());
                return 1;
            }
        },
        None => BombSnapshot::default(),
    };
    debug!("Bomb: {bomb:?}");

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    // Only the first attempt is kept, for --submit
    let mut first_game: Option<Game> = None;
    let mut summary: Summary = Summary::default();

    for i in 0..args.count {
        let attempt_id: usize = args.attempt.saturating_add(i);
        let game: Game = match Game::generate(attempt_id, &bomb, &mut rng) {
            Ok(g) => g,
            Err(e) => {
                eprintln!("Attempt #{attempt_id}: {e}");
                return 1;
            }
        };

        // The example solution must always pass
        let verdict: Verdict = verify(game.answer_example(), game.stars(), &bomb);
        if !verdict.is_pass() {
            summary.errors += 1;
            eprintln!("Attempt #{attempt_id}: example solution rejected: {verdict}");
        }
        summary.attempts += 1;
        summary.named_stars += game
            .stars()
            .iter()
            .filter(|s| names::required_distance(&s.name).is_some())
            .count();

        if args.json {
            let report = AttemptReport {
                attempt: attempt_id,
                stars: game
                    .stars()
                    .iter()
                    .map(|star| StarReport {
                        star,
                        corridors: star.required_corridors(&bomb),
                    })
                    .collect(),
                answer_example: game.answer_example().to_compact_string(),
            };
            match serde_json::to_string_pretty(&report) {
                Ok(s) => println!("{s}"),
                Err(e) => {
                    eprintln!("Cannot serialize attempt #{attempt_id}: {e}");
                    return 1;
                }
            }
        } else {
            println!("Attempt #{attempt_id}");
            for star in game.stars() {
                println!(
                    "  Star #{}: {} ({})",
                    star.id,
                    star,
                    star.required_corridors(&bomb)
                );
            }
            println!(
                "  Answer example: {}",
                game.answer_example().to_compact_string()
            );
        }
        if first_game.is_none() {
            first_game = Some(game);
        }
    }

    if args.summary {
        println!("{summary}");
    }

    //
    // Verify the submitted starmap against the first attempt
    //
    if let Some(compact) = &args.submit {
        let Some(game) = first_game.as_mut() else {
            eprintln!("No attempt to verify the starmap against");
            return 1;
        };
        let map: Starmap = match Starmap::from_compact_str(STARS_COUNT, compact) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("Invalid starmap: {e}");
                return 1;
            }
        };
        for (a, b) in map.corridors() {
            game.select(a);
            game.select(b);
        }
        let verdict: Verdict = game.submit(&bomb);
        if args.json {
            match serde_json::to_string_pretty(&verdict) {
                Ok(s) => println!("{s}"),
                Err(e) => {
                    eprintln!("Cannot serialize the verdict: {e}");
                    return 1;
                }
            }
        } else {
            println!("{verdict}");
        }
        if !verdict.is_pass() {
            return 2;
        }
    }

    if summary.errors > 0 { 1 } else { 0 }
}
