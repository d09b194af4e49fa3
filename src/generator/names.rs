/*
names.rs

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

//! Star names and the distances between named stars.
//!
//! Some pairs of names come with a required distance: if both stars exist in the starmap, then
//! the shortest path between them must have that length. When naming the stars of a generated
//! starmap, pairs of stars are matched against these constraints. The stars that could not be
//! paired get a name from [`RANDOM_STAR_NAMES`], which carry no constraint.

use log::debug;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::collections::BTreeSet;

use super::GenerateError;
use super::starmap::Starmap;

/// Required distance between two named stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Distance {
    pub from: &'static str,
    pub to: &'static str,
    pub distance: usize,
}

impl Distance {
    const fn new(from: &'static str, distance: usize, to: &'static str) -> Self {
        Self { from, to, distance }
    }
}

/// Catalog of the named pairs.
pub const DISTANCES: [Distance; 18] = [
    Distance::new("Achernar", 3, "Spica"),
    Distance::new("Acrux", 4, "Toliman"),
    Distance::new("Adhara", 4, "Deneb"),
    Distance::new("Aldebaran", 3, "Betelgeuse"),
    Distance::new("Alioth", 6, "KausAustralis"),
    Distance::new("Alnitak", 5, "Elnath"),
    Distance::new("Antares", 3, "Altair"),
    Distance::new("Bellatrix", 5, "Alnair"),
    Distance::new("Canopus", 2, "Rigel"),
    Distance::new("Capella", 2, "Sirius"),
    Distance::new("Miaplacidus", 5, "Alnilam"),
    Distance::new("Mimosa", 4, "Gacrux"),
    Distance::new("Mirfak", 6, "Dubhe"),
    Distance::new("Pollux", 3, "Hadar"),
    Distance::new("Procyon", 2, "Arcturus"),
    Distance::new("Regulus", 4, "Fomalhaut"),
    Distance::new("RigilKentaurus", 2, "Vega"),
    Distance::new("Wezen", 7, "Alkaid"),
];

/// Names for the stars that are not part of a named pair.
pub const RANDOM_STAR_NAMES: [&str; 8] = [
    "Avior",
    "Sargas",
    "Menkalinan",
    "Atria",
    "Alhena",
    "Peacock",
    "Castor",
    "Mirzam",
];

/// Return the partner of the given star name and their required distance.
///
/// The name can be either side of the pair. Return [`None`] if the name is not in
/// [`DISTANCES`].
pub fn required_distance(name: &str) -> Option<(&'static str, usize)> {
    DISTANCES.iter().find_map(|d| {
        if d.from == name {
            Some((d.to, d.distance))
        } else if d.to == name {
            Some((d.from, d.distance))
        } else {
            None
        }
    })
}

/// Give a unique name to every star of the starmap.
///
/// The returned vector is indexed by star ID.
///
/// Stars are paired greedily, in random order: a pair that could have been named might be
/// missed. Those stars then get a random name without constraint.
///
/// # Errors
///
/// The function returns an error when there are not enough names left in
/// [`RANDOM_STAR_NAMES`]. This does not happen for starmaps of eight stars.
pub fn assign_names<R: Rng + ?Sized>(
    map: &Starmap,
    rng: &mut R,
) -> Result<Vec<String>, GenerateError> {
    let size: usize = map.size();
    let mut unnamed: Vec<usize> = (0..size).collect();
    let mut used: BTreeSet<&'static str> = BTreeSet::new();
    let mut names: Vec<Option<&'static str>> = vec![None; size];

    while !unnamed.is_empty() {
        let star: usize = unnamed.remove(rng.random_range(0..unnamed.len()));
        let mut others: Vec<usize> = unnamed.clone();
        others.shuffle(rng);

        for other in others {
            let Some(dist) = map.distance(star, other) else {
                continue;
            };
            let pairs: Vec<&Distance> = DISTANCES
                .iter()
                .filter(|d| d.distance == dist && !used.contains(d.from) && !used.contains(d.to))
                .collect();
            let Some(pair) = pairs.choose(rng) else {
                continue;
            };
            debug!(
                "Stars {star} and {other} at distance {dist}: {} and {}",
                pair.from, pair.to
            );
            names[star] = Some(pair.from);
            names[other] = Some(pair.to);
            used.insert(pair.from);
            used.insert(pair.to);
            unnamed.retain(|s| *s != other);
            break;
        }
    }

    let mut ret: Vec<String> = Vec::with_capacity(size);
    for (star, name) in names.into_iter().enumerate() {
        let name: &'static str = match name {
            Some(n) => n,
            None => {
                let available: Vec<&'static str> = RANDOM_STAR_NAMES
                    .iter()
                    .copied()
                    .filter(|n| !used.contains(n))
                    .collect();
                let n: &'static str = *available
                    .choose(rng)
                    .ok_or(GenerateError::NoFallbackName(star))?;
                debug!("Star {star}: random name {n}");
                used.insert(n);
                n
            }
        };
        ret.push(name.to_string());
    }
    Ok(ret)
}
