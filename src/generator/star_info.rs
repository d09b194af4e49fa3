/*
star_info.rs

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

//! Stars and their attributes.
//!
//! The number of corridors that a star requires derives from its faction and its regime. For
//! some combinations, the number also depends on the bomb. See [`required_corridors`].

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

use crate::bomb_info::BombInfo;

/// Faction that populates a star.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, FromRepr,
)]
#[repr(u8)]
pub enum Faction {
    Faeyans,
    Humans,
    Gaals,
    Pelengs,
    Maloqs,
}

impl Faction {
    /// All the factions in declaration order.
    pub fn all() -> impl Iterator<Item = Faction> {
        (0..=u8::MAX).map_while(Faction::from_repr)
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Faction::Faeyans => write!(f, "Faeyans"),
            Faction::Humans => write!(f, "Humans"),
            Faction::Gaals => write!(f, "Gaals"),
            Faction::Pelengs => write!(f, "Pelengs"),
            Faction::Maloqs => write!(f, "Maloqs"),
        }
    }
}

/// Political regime of a star.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, FromRepr,
)]
#[repr(u8)]
pub enum Regime {
    Democracy,
    Aristocracy,
    Monarchy,
    Dictatorship,
    Anarchy,
}

impl Regime {
    /// All the regimes in declaration order.
    pub fn all() -> impl Iterator<Item = Regime> {
        (0..=u8::MAX).map_while(Regime::from_repr)
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Regime::Democracy => write!(f, "Democracy"),
            Regime::Aristocracy => write!(f, "Aristocracy"),
            Regime::Monarchy => write!(f, "Monarchy"),
            Regime::Dictatorship => write!(f, "Dictatorship"),
            Regime::Anarchy => write!(f, "Anarchy"),
        }
    }
}

/// Reduce a bomb value to a number of corridors between 1 and 6.
fn reduce(value: usize) -> usize {
    value % 6 + 1
}

/// Number of corridors required for a star with the given faction and regime.
///
/// The bomb is queried on every call.
pub fn required_corridors<B: BombInfo + ?Sized>(
    faction: Faction,
    regime: Regime,
    bomb: &B,
) -> usize {
    match (faction, regime) {
        (Faction::Faeyans, Regime::Dictatorship) => reduce(bomb.off_indicators()),
        (Faction::Faeyans, Regime::Democracy) => 6,
        (Faction::Faeyans, Regime::Aristocracy) => 5,
        (Faction::Faeyans, Regime::Monarchy) => 3,
        (Faction::Faeyans, Regime::Anarchy) => 2,

        (Faction::Humans, Regime::Democracy) => 4,
        (Faction::Humans, Regime::Anarchy) => 1,
        (Faction::Humans, _) => 2,

        (Faction::Gaals, Regime::Monarchy) => reduce(bomb.battery_holders()),
        (Faction::Gaals, Regime::Democracy | Regime::Aristocracy) => 2,
        (Faction::Gaals, _) => 1,

        // A serial number without digits counts as digit 0
        (Faction::Pelengs, Regime::Democracy) => {
            reduce(bomb.serial_digits().first().copied().unwrap_or(0))
        }
        (Faction::Pelengs, Regime::Aristocracy) => reduce(bomb.on_indicators()),
        (Faction::Pelengs, Regime::Monarchy) => reduce(bomb.d_batteries()),
        (Faction::Pelengs, Regime::Dictatorship) => reduce(bomb.port_plates()),
        (Faction::Pelengs, Regime::Anarchy) => 1,

        (Faction::Maloqs, Regime::Democracy) => {
            reduce(bomb.serial_digits().into_iter().min().unwrap_or(0))
        }
        (Faction::Maloqs, Regime::Anarchy) => reduce(bomb.ports()),
        (Faction::Maloqs, _) => 1,
    }
}

/// Star of the puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Star {
    /// Star ID, which is the vertex in the [`crate::generator::starmap::Starmap`] objects.
    pub id: usize,

    /// Unique name.
    pub name: String,

    pub faction: Faction,

    pub regime: Regime,
}

impl Star {
    /// Number of corridors that the star requires. See [`required_corridors`].
    pub fn required_corridors<B: BombInfo + ?Sized>(&self, bomb: &B) -> usize {
        required_corridors(self.faction, self.regime, bomb)
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.faction, self.regime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bomb_info::BombSnapshot;

    #[test]
    fn all_variants() {
        assert_eq!(Faction::all().count(), 5);
        assert_eq!(Regime::all().count(), 5);
        assert_eq!(Faction::all().next(), Some(Faction::Faeyans));
        assert_eq!(Regime::all().last(), Some(Regime::Anarchy));
    }

    #[test]
    fn fixed_values() {
        let bomb = BombSnapshot::default();
        assert_eq!(required_corridors(Faction::Faeyans, Regime::Democracy, &bomb), 6);
        assert_eq!(required_corridors(Faction::Faeyans, Regime::Aristocracy, &bomb), 5);
        assert_eq!(required_corridors(Faction::Humans, Regime::Democracy, &bomb), 4);
        assert_eq!(required_corridors(Faction::Faeyans, Regime::Monarchy, &bomb), 3);
        assert_eq!(required_corridors(Faction::Humans, Regime::Dictatorship, &bomb), 2);
        assert_eq!(required_corridors(Faction::Gaals, Regime::Anarchy, &bomb), 1);
        assert_eq!(required_corridors(Faction::Pelengs, Regime::Anarchy, &bomb), 1);
    }

    #[test]
    fn bomb_dependent_values() {
        let bomb = BombSnapshot {
            off_indicators: 7,
            on_indicators: 2,
            battery_holders: 5,
            d_batteries: 6,
            port_plates: 3,
            ports: 10,
            serial_number: "AB7CD2".to_string(),
        };
        assert_eq!(required_corridors(Faction::Faeyans, Regime::Dictatorship, &bomb), 2);
        assert_eq!(required_corridors(Faction::Gaals, Regime::Monarchy, &bomb), 6);
        assert_eq!(required_corridors(Faction::Pelengs, Regime::Democracy, &bomb), 2);
        assert_eq!(required_corridors(Faction::Pelengs, Regime::Aristocracy, &bomb), 3);
        assert_eq!(required_corridors(Faction::Pelengs, Regime::Monarchy, &bomb), 1);
        assert_eq!(required_corridors(Faction::Pelengs, Regime::Dictatorship, &bomb), 4);
        assert_eq!(required_corridors(Faction::Maloqs, Regime::Democracy, &bomb), 3);
        assert_eq!(required_corridors(Faction::Maloqs, Regime::Anarchy, &bomb), 5);
    }

    #[test]
    fn values_stay_in_range() {
        for n in 0..20 {
            let bomb = BombSnapshot {
                off_indicators: n,
                on_indicators: n * 3,
                battery_holders: n + 1,
                d_batteries: n * 7,
                port_plates: n / 2,
                ports: n * 11,
                serial_number: format!("{}X{}", n % 10, (n * 3) % 10),
            };
            for faction in Faction::all() {
                for regime in Regime::all() {
                    let c = required_corridors(faction, regime, &bomb);
                    assert!((1..=6).contains(&c), "{faction} {regime}: {c}");
                }
            }
        }
    }

    #[test]
    fn star_display() {
        let star = Star {
            id: 3,
            name: "Vega".to_string(),
            faction: Faction::Gaals,
            regime: Regime::Monarchy,
        };
        assert_eq!(star.to_string(), "Vega Gaals Monarchy");
        let bomb = BombSnapshot {
            battery_holders: 2,
            ..Default::default()
        };
        assert_eq!(star.required_corridors(&bomb), 3);
    }
}
