/*
generator.rs

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

//! Generate random starmaps.
//!
//! A starmap is generated in three steps:
//!
//! * A variant of corridor counts is drawn from
//!   [`corridor_counts::CORRIDORS_COUNT_VARIANTS`] and [`realizer::realize`] builds an example
//!   [`starmap::Starmap`] where every star has that number of corridors.
//!   This example is a valid solution of the puzzle.
//!
//! * Each star receives a faction and a regime that require exactly its number of corridors in
//!   the example. See [`attributes::AttributeTable`].
//!
//! * Stars are named by [`names::assign_names`]. Pairs of named stars come with a distance that
//!   matches the distance in the example.
//!
//! The random source is provided by the caller, so that a seeded generator always produces the
//! same starmap.

pub mod attributes;
pub mod corridor_counts;
pub mod names;
pub mod realizer;
pub mod star_info;
pub mod starmap;

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use crate::bomb_info::BombInfo;
use attributes::AttributeTable;
use realizer::RealizeError;
use star_info::Star;
use starmap::Starmap;

/// Type of errors.
///
/// All of them denote a defect in the catalogs, not a situation that the player can cause.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// The corridor counts cannot be realized.
    Realize(RealizeError),

    /// No (faction, regime) combination requires the given number of corridors.
    NoAttributes(usize),

    /// No random name left for the given star.
    NoFallbackName(usize),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenerateError::Realize(e) => write!(f, "{e}"),
            GenerateError::NoAttributes(c) => {
                write!(f, "No faction and regime require {c} corridors")
            }
            GenerateError::NoFallbackName(star) => write!(f, "No name left for star {star}"),
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GenerateError::Realize(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RealizeError> for GenerateError {
    fn from(e: RealizeError) -> Self {
        GenerateError::Realize(e)
    }
}

/// Result of the generation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GeneratedStarmap {
    /// Corridor counts variant used for the example.
    pub corridors_count: Vec<usize>,

    /// Stars, indexed by their ID.
    pub stars: Vec<Star>,

    /// A valid solution.
    pub answer_example: Starmap,
}

/// Generate a starmap from a random variant of corridor counts.
pub fn generate_starmap<B, R>(bomb: &B, rng: &mut R) -> Result<GeneratedStarmap, GenerateError>
where
    B: BombInfo + ?Sized,
    R: Rng + ?Sized,
{
    let corridors_count = corridor_counts::pick_random(rng);
    generate_from_counts(&corridors_count, bomb, rng)
}

/// Generate a starmap from the given corridor counts.
pub fn generate_from_counts<B, R>(
    corridors_count: &[usize],
    bomb: &B,
    rng: &mut R,
) -> Result<GeneratedStarmap, GenerateError>
where
    B: BombInfo + ?Sized,
    R: Rng + ?Sized,
{
    let map: Starmap = realizer::realize(corridors_count)?;
    let table: AttributeTable = AttributeTable::new(bomb);
    let names: Vec<String> = names::assign_names(&map, rng)?;

    let mut stars: Vec<Star> = Vec::with_capacity(map.size());
    for (id, name) in names.into_iter().enumerate() {
        let corridors: usize = map.degree(id);
        let (faction, regime) = table
            .pick(corridors, rng)
            .ok_or(GenerateError::NoAttributes(corridors))?;
        debug!("Star {id}: {name} {faction} {regime} ({corridors})");
        stars.push(Star {
            id,
            name,
            faction,
            regime,
        });
    }

    Ok(GeneratedStarmap {
        corridors_count: corridors_count.to_vec(),
        stars,
        answer_example: map,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bomb_info::BombSnapshot;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn stars_match_the_example() {
        let bomb = BombSnapshot {
            off_indicators: 3,
            ports: 2,
            serial_number: "K4L8".to_string(),
            ..Default::default()
        };
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let g = generate_starmap(&bomb, &mut rng).unwrap();
            assert_eq!(g.stars.len(), 8);
            for (id, star) in g.stars.iter().enumerate() {
                assert_eq!(star.id, id);
                assert_eq!(star.required_corridors(&bomb), g.answer_example.degree(id));
                assert_eq!(g.corridors_count[id], g.answer_example.degree(id));
            }
        }
    }

    #[test]
    fn same_seed_same_starmap() {
        let bomb = BombSnapshot::default();
        let a = generate_starmap(&bomb, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_starmap(&bomb, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unrealizable_counts() {
        let bomb = BombSnapshot::default();
        let err = generate_from_counts(&[1, 1, 1], &bomb, &mut StdRng::seed_from_u64(0));
        assert_eq!(
            err,
            Err(GenerateError::Realize(RealizeError::NotRealizable(
                "left corridors eq 1".to_string()
            )))
        );
    }

    #[test]
    fn missing_attributes() {
        // A star with seven corridors cannot get a faction and a regime
        let counts = [7, 1, 1, 1, 1, 1, 1, 1];
        let bomb = BombSnapshot::default();
        let err = generate_from_counts(&counts, &bomb, &mut StdRng::seed_from_u64(0));
        assert_eq!(err, Err(GenerateError::NoAttributes(7)));
    }
}
