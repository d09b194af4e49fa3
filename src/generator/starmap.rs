/*
starmap.rs

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

//! Corridors between the stars of a starmap.
//!
//! A [`Starmap`] is an undirected simple graph: stars are the vertexes and corridors are the
//! edges. The same structure stores the generated example solution and the map that the player
//! submits.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Undirected graph stored as a symmetric adjacency matrix.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "StarmapData")]
pub struct Starmap {
    /// Number of stars.
    size: usize,

    /// `data[i][j]` is `true` when a corridor connects the stars `i` and `j`.
    /// The matrix is always symmetric and its diagonal is always `false`.
    data: Vec<Vec<bool>>,
}

/// Unchecked shape of a deserialized [`Starmap`].
#[derive(Deserialize)]
struct StarmapData {
    size: usize,
    data: Vec<Vec<bool>>,
}

impl TryFrom<StarmapData> for Starmap {
    type Error = String;

    /// Rebuild the map corridor by corridor, rejecting matrices that are not square,
    /// not symmetric, or that connect a star to itself.
    fn try_from(value: StarmapData) -> Result<Self, Self::Error> {
        let size: usize = value.size;
        if value.data.len() != size {
            return Err(format!("Expected {size} rows, found {}", value.data.len()));
        }
        if let Some((i, row)) = value.data.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(format!("Row {i} has {} columns, expected {size}", row.len()));
        }
        let mut map: Starmap = Starmap::new(size);
        for (i, row) in value.data.iter().enumerate() {
            for (j, connected) in row.iter().enumerate() {
                if *connected != value.data[j][i] {
                    return Err(format!("Corridor {i}-{j} is not symmetric"));
                }
                if *connected {
                    if i == j {
                        return Err(format!("Corridor {i}-{j} connects a star to itself"));
                    }
                    map.add(i, j);
                }
            }
        }
        Ok(map)
    }
}

impl Starmap {
    /// Create a [`Starmap`] object with `size` stars and no corridors.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            data: vec![vec![false; size]; size],
        }
    }

    /// Build a [`Starmap`] object from the output of [`Starmap::to_compact_string`].
    ///
    /// Trails are separated by `;` and the stars of a trail by `-`. Spaces are ignored.
    ///
    /// # Errors
    ///
    /// The method returns an error when a star identifier is not a number, is out of range, or
    /// when a corridor would connect a star to itself.
    pub fn from_compact_str(size: usize, compact: &str) -> Result<Self, String> {
        let mut map: Starmap = Starmap::new(size);

        for trail in compact.split(';').map(str::trim).filter(|t| !t.is_empty()) {
            let mut previous: Option<usize> = None;
            for token in trail.split('-').map(str::trim) {
                let star: usize = token
                    .parse()
                    .map_err(|_| format!("Invalid star `{token}` in `{trail}`"))?;
                if star >= size {
                    return Err(format!("Star {star} is out of range (0..{size})"));
                }
                if let Some(p) = previous {
                    if p == star {
                        return Err(format!("Corridor {p}-{star} connects a star to itself"));
                    }
                    map.add(p, star);
                }
                previous = Some(star);
            }
        }
        Ok(map)
    }

    /// Number of stars.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Add a corridor between two stars.
    ///
    /// Return `false` if the corridor already exists (the map is not changed), `true` if it has
    /// been added. Self-loops and out of range stars are ignored and return `false`.
    pub fn add(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.size || to >= self.size || self.data[from][to] {
            return false;
        }
        self.data[from][to] = true;
        self.data[to][from] = true;
        true
    }

    /// Remove the corridor between two stars and return whether it existed.
    pub fn remove(&mut self, from: usize, to: usize) -> bool {
        if !self.contains(from, to) {
            return false;
        }
        self.data[from][to] = false;
        self.data[to][from] = false;
        true
    }

    /// Remove all the corridors.
    pub fn clear(&mut self) {
        for row in self.data.iter_mut() {
            row.fill(false);
        }
    }

    /// Whether a corridor connects the two stars.
    pub fn contains(&self, from: usize, to: usize) -> bool {
        self.data
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(false)
    }

    /// Number of stars connected to the given star.
    pub fn degree(&self, star: usize) -> usize {
        match self.data.get(star) {
            Some(row) => row.iter().filter(|c| **c).count(),
            None => 0,
        }
    }

    /// Stars connected to the given star, in ascending order.
    pub fn neighbors(&self, star: usize) -> impl Iterator<Item = usize> + '_ {
        self.data
            .get(star)
            .into_iter()
            .flat_map(|row| row.iter().enumerate())
            .filter(|(_, c)| **c)
            .map(|(i, _)| i)
    }

    /// All the corridors as `(i, j)` pairs with `i < j`, in ascending order.
    pub fn corridors(&self) -> Vec<(usize, usize)> {
        let mut ret: Vec<(usize, usize)> = Vec::new();
        for i in 0..self.size {
            ret.extend(self.neighbors(i).filter(|j| *j > i).map(|j| (i, j)));
        }
        ret
    }

    /// Number of corridors.
    pub fn len(&self) -> usize {
        (0..self.size).map(|i| self.degree(i)).sum::<usize>() / 2
    }

    /// Whether the map has no corridors.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length of the shortest path between two stars (breadth-first search).
    ///
    /// Return [`None`] when no path connects the stars.
    pub fn distance(&self, from: usize, to: usize) -> Option<usize> {
        if from >= self.size || to >= self.size {
            return None;
        }
        let mut length: Vec<Option<usize>> = vec![None; self.size];
        let mut queue: VecDeque<(usize, usize)> = VecDeque::from([(from, 0)]);

        length[from] = Some(0);
        while length[to].is_none() {
            let Some((star, dist)) = queue.pop_front() else {
                break;
            };
            for other in self.neighbors(star) {
                if length[other].is_some() {
                    continue;
                }
                length[other] = Some(dist + 1);
                queue.push_back((other, dist + 1));
            }
        }
        length[to]
    }

    /// Decompose the corridors into trails, for the logs.
    ///
    /// Starting from each star in turn, a trail is extended by always following the unused
    /// corridor to the star with the smallest identifier. A trail is retried from the same star
    /// until no corridor leaves it. The result only depends on the set of corridors, such as
    /// `0-6-7-1; 2-7-3; 4-7-5`.
    pub fn to_compact_string(&self) -> String {
        let mut logged: Starmap = Starmap::new(self.size);
        let mut trails: Vec<String> = Vec::new();
        let mut start: usize = 0;

        while start < self.size {
            let mut trail: Vec<usize> = vec![start];
            let mut from: usize = start;
            while let Some(to) = self.neighbors(from).find(|to| !logged.contains(from, *to)) {
                logged.add(from, to);
                trail.push(to);
                from = to;
            }
            if trail.len() == 1 {
                start += 1;
            } else {
                trails.push(
                    trail
                        .iter()
                        .map(|s| s.to_string())
                        .collect::<Vec<String>>()
                        .join("-"),
                );
            }
        }
        trails.join("; ")
    }

    /// Print the adjacency list.
    pub fn debug(&self) {
        for star in 0..self.size {
            let mut s: String = format!("{star:>3} -->");
            for other in self.neighbors(star) {
                s.push_str(&format!(" {other}"));
            }
            debug!("{s}");
        }
    }
}

impl fmt::Display for Starmap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let corridors: Vec<String> = self
            .corridors()
            .iter()
            .map(|(i, j)| format!("{i}-{j}"))
            .collect();
        if corridors.is_empty() {
            write!(f, "starmap ({}): none", self.size)
        } else {
            write!(f, "starmap ({}): {}", self.size, corridors.join(";"))
        }
    }
}
