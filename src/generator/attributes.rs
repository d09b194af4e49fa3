/*
attributes.rs

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

//! Choose a faction and a regime for each star.
//!
//! All the (faction, regime) combinations are grouped by the number of corridors that they
//! require for the current bomb. A star then draws a random combination from the group that
//! matches its number of corridors in the generated starmap.

use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;

use super::star_info::{Faction, Regime, required_corridors};
use crate::bomb_info::BombInfo;

/// (faction, regime) combinations grouped by their required number of corridors.
#[derive(Debug, Clone)]
pub struct AttributeTable {
    groups: BTreeMap<usize, Vec<(Faction, Regime)>>,
}

impl AttributeTable {
    /// Create an [`AttributeTable`] object for the given bomb.
    pub fn new<B: BombInfo + ?Sized>(bomb: &B) -> Self {
        let mut groups: BTreeMap<usize, Vec<(Faction, Regime)>> = BTreeMap::new();

        for faction in Faction::all() {
            for regime in Regime::all() {
                groups
                    .entry(required_corridors(faction, regime, bomb))
                    .or_default()
                    .push((faction, regime));
            }
        }
        Self { groups }
    }

    /// Return the combinations that require the given number of corridors.
    pub fn get(&self, corridors: usize) -> &[(Faction, Regime)] {
        self.groups
            .get(&corridors)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Draw a random combination that requires the given number of corridors.
    ///
    /// Return [`None`] if no combination requires that number.
    pub fn pick<R: Rng + ?Sized>(
        &self,
        corridors: usize,
        rng: &mut R,
    ) -> Option<(Faction, Regime)> {
        self.get(corridors).choose(rng).copied()
    }
}
