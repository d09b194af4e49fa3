/*
realizer.rs

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

//! Build a starmap from a list of corridor counts.
//!
//! The algorithm is a greedy reduction tuned to the shapes present in
//! [`crate::generator::corridor_counts::CORRIDORS_COUNT_VARIANTS`]: stars are sorted by their
//! remaining number of corridors, and the star with the smallest non-zero count is resolved at
//! each step.
//!
//! * A star with one remaining corridor is connected to the first star with an odd count greater
//!   than one (or to the busiest star).
//! * When every remaining count is two, the stars are closed into a cycle.
//! * Otherwise, the two last stars with two remaining corridors form a triangle with the busiest
//!   star.
//!
//! Any other situation means that the counts cannot be realized.

use log::{Level, debug, log_enabled};
use std::error::Error;
use std::fmt;

use super::starmap::Starmap;

/// Type of errors.
#[derive(Debug, Clone, PartialEq)]
pub enum RealizeError {
    /// The corridor counts reached a state that the algorithm cannot resolve.
    NotRealizable(String),
}

impl fmt::Display for RealizeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RealizeError::NotRealizable(reason) => {
                write!(f, "Unable to create starmap: {reason}")
            }
        }
    }
}

impl Error for RealizeError {}

/// Builder that owns the starmap during its construction.
struct Realizer<'a> {
    /// Target number of corridors for each star.
    corridors_count: &'a [usize],

    /// Pairs of (remaining corridors, star ID).
    remaining: Vec<(usize, usize)>,

    /// Starmap being built.
    map: Starmap,
}

impl<'a> Realizer<'a> {
    fn new(corridors_count: &'a [usize]) -> Self {
        Self {
            corridors_count,
            remaining: corridors_count
                .iter()
                .enumerate()
                .map(|(star, count)| (*count, star))
                .collect(),
            map: Starmap::new(corridors_count.len()),
        }
    }

    /// Connect the stars at the given positions in [`Realizer::remaining`].
    fn connect(&mut self, i: usize, j: usize) -> Result<(), RealizeError> {
        let (count_i, star_i) = self.remaining[i];
        let (count_j, star_j) = self.remaining[j];

        if count_i == 0 || count_j == 0 {
            return Err(RealizeError::NotRealizable(format!(
                "no corridor left for {star_i}-{star_j}"
            )));
        }
        if !self.map.add(star_i, star_j) {
            return Err(RealizeError::NotRealizable(format!(
                "corridor {star_i}-{star_j} already exists"
            )));
        }
        debug!("    Corridor {star_i}-{star_j}");
        self.remaining[i].0 = count_i - 1;
        self.remaining[j].0 = count_j - 1;
        Ok(())
    }

    fn count(&self, i: usize) -> usize {
        self.remaining[i].0
    }

    fn realize(mut self) -> Result<Starmap, RealizeError> {
        let mut n: usize = self.remaining.len().saturating_sub(1);

        loop {
            // Stable sort: stars with the same count keep their relative order
            self.remaining.sort_by(|a, b| b.0.cmp(&a.0));
            while n > 0 && self.count(n) == 0 {
                n -= 1;
            }
            if n == 0 {
                break;
            }

            if self.count(n) == 1 {
                let pos: usize = (0..n)
                    .find(|i| self.count(*i) % 2 == 1 && self.count(*i) > 1)
                    .unwrap_or(0);
                if self.count(pos) == 1 && n > 1 {
                    return Err(RealizeError::NotRealizable("left corridors eq 1".to_string()));
                }
                self.connect(pos, n)?;
                continue;
            }
            if self.count(n) != 2 {
                return Err(RealizeError::NotRealizable(
                    "corridors counts gt 2".to_string(),
                ));
            }
            if n < 2 {
                return Err(RealizeError::NotRealizable("lt 2 corridors left".to_string()));
            }

            // Only stars with two remaining corridors: close them into a cycle
            if self.count(0) == 2 {
                for i in 0..n {
                    self.connect(i, i + 1)?;
                }
                self.connect(n, 0)?;
                continue;
            }

            // Triangle with the busiest star
            if self.count(n - 1) != 2 {
                return Err(RealizeError::NotRealizable(
                    "only one corridor eq 2".to_string(),
                ));
            }
            self.connect(n - 1, n)?;
            self.connect(n, 0)?;
            self.connect(0, n - 1)?;
        }

        for (star, count) in self.corridors_count.iter().enumerate() {
            if self.map.degree(star) != *count {
                return Err(RealizeError::NotRealizable(format!(
                    "star {star} has {} corridors instead of {count}",
                    self.map.degree(star)
                )));
            }
        }

        if log_enabled!(Level::Debug) {
            self.map.debug();
        }
        Ok(self.map)
    }
}

/// Build a [`Starmap`] where each star `i` has exactly `corridors_count[i]` corridors.
///
/// # Errors
///
/// The function returns an error when the counts cannot be realized by the algorithm. This does
/// not happen for the variants of the catalog.
pub fn realize(corridors_count: &[usize]) -> Result<Starmap, RealizeError> {
    debug!(
        "Corridors counts: {}",
        corridors_count
            .iter()
            .map(|c| c.to_string())
            .collect::<String>()
    );
    Realizer::new(corridors_count).realize()
}
