/*
verifier.rs

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

//! Verify the starmap that the player submits.
//!
//! The expected values are computed again from the stars and the bomb at submission time:
//!
//! 1. Each star must have exactly the number of corridors that its faction and regime require.
//! 2. Each named star from [`crate::generator::names::DISTANCES`] must be at the required
//!    distance from its partner.
//!
//! The first violation is returned as a [`Verdict`], which the caller reports as a strike.

use log::debug;
use serde::Serialize;
use std::fmt;

use crate::bomb_info::BombInfo;
use crate::generator::names;
use crate::generator::star_info::Star;
use crate::generator::starmap::Starmap;

/// Result of a verification.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The starmap satisfies all the constraints.
    Pass,

    /// A star does not have the required number of corridors.
    DegreeMismatch {
        star_id: usize,
        star: String,
        actual: usize,
        expected: usize,
    },

    /// Two named stars are not at the required distance.
    /// `actual` is [`None`] when no path connects the stars.
    DistanceMismatch {
        from: String,
        to: String,
        actual: Option<usize>,
        expected: usize,
    },
}

impl Verdict {
    /// Whether the starmap passed the verification.
    pub fn is_pass(&self) -> bool {
        *self == Verdict::Pass
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "Module solved"),
            Verdict::DegreeMismatch {
                star,
                actual,
                expected,
                ..
            } => write!(
                f,
                "STRIKE: Star {star} has {actual} connected stars. Expected: {expected}"
            ),
            Verdict::DistanceMismatch {
                from,
                to,
                actual: Some(actual),
                expected,
            } => write!(
                f,
                "STRIKE: Distance from {from} to {to} is {actual}. Expected: {expected}"
            ),
            Verdict::DistanceMismatch {
                from,
                to,
                actual: None,
                expected,
            } => write!(
                f,
                "STRIKE: {from} and {to} are not connected. Expected distance: {expected}"
            ),
        }
    }
}

/// Verify the submitted starmap against the stars.
pub fn verify<B: BombInfo + ?Sized>(map: &Starmap, stars: &[Star], bomb: &B) -> Verdict {
    check_corridors(map, stars, bomb)
        .or_else(|| check_distances(map, stars))
        .unwrap_or(Verdict::Pass)
}

/// Return the first star that does not have its required number of corridors.
pub fn check_corridors<B: BombInfo + ?Sized>(
    map: &Starmap,
    stars: &[Star],
    bomb: &B,
) -> Option<Verdict> {
    stars.iter().find_map(|star| {
        let expected: usize = star.required_corridors(bomb);
        let actual: usize = map.degree(star.id);
        (actual != expected).then(|| Verdict::DegreeMismatch {
            star_id: star.id,
            star: star.name.clone(),
            actual,
            expected,
        })
    })
}

/// Return the first pair of named stars that are not at their required distance.
pub fn check_distances(map: &Starmap, stars: &[Star]) -> Option<Verdict> {
    for star in stars {
        let Some((partner, expected)) = names::required_distance(&star.name) else {
            continue;
        };
        let Some(other) = stars.iter().find(|s| s.name == partner) else {
            debug!("{} has no partner {partner}: skipping", star.name);
            continue;
        };
        let actual: Option<usize> = map.distance(star.id, other.id);
        if actual != Some(expected) {
            return Some(Verdict::DistanceMismatch {
                from: star.name.clone(),
                to: other.name.clone(),
                actual,
                expected,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bomb_info::BombSnapshot;
    use crate::generator::star_info::{Faction, Regime};

    fn star(id: usize, name: &str, faction: Faction, regime: Regime) -> Star {
        Star {
            id,
            name: name.to_string(),
            faction,
            regime,
        }
    }

    /// Stars for the `[1, 1, 1, 1, 1, 1, 2, 6]` example: star 7 is the hub and star 6 links
    /// star 0 to the hub.
    fn hub_stars() -> Vec<Star> {
        vec![
            star(0, "Canopus", Faction::Humans, Regime::Anarchy),
            star(1, "Capella", Faction::Gaals, Regime::Dictatorship),
            star(2, "Sirius", Faction::Humans, Regime::Anarchy),
            star(3, "Procyon", Faction::Pelengs, Regime::Anarchy),
            star(4, "RigilKentaurus", Faction::Maloqs, Regime::Monarchy),
            star(5, "Vega", Faction::Humans, Regime::Anarchy),
            star(6, "Arcturus", Faction::Humans, Regime::Monarchy),
            star(7, "Rigel", Faction::Faeyans, Regime::Democracy),
        ]
    }

    fn hub_map() -> Starmap {
        Starmap::from_compact_str(8, "0-6-7-1; 2-7-3; 4-7-5").unwrap()
    }

    fn path_map() -> Starmap {
        Starmap::from_compact_str(8, "0-1-2-3-4-5-6-7").unwrap()
    }

    fn path_stars(names: [&str; 8]) -> Vec<Star> {
        names
            .iter()
            .enumerate()
            .map(|(id, name)| {
                let regime = if id == 0 || id == 7 {
                    Regime::Anarchy
                } else {
                    Regime::Monarchy
                };
                star(id, name, Faction::Humans, regime)
            })
            .collect()
    }

    #[test]
    fn pass() {
        let verdict = verify(&hub_map(), &hub_stars(), &BombSnapshot::default());
        assert_eq!(verdict, Verdict::Pass);
        assert!(verdict.is_pass());
    }

    #[test]
    fn degree_mismatch() {
        let mut map = hub_map();
        map.remove(0, 6);
        let verdict = verify(&map, &hub_stars(), &BombSnapshot::default());
        assert_eq!(
            verdict,
            Verdict::DegreeMismatch {
                star_id: 0,
                star: "Canopus".to_string(),
                actual: 0,
                expected: 1,
            }
        );
        assert_eq!(
            verdict.to_string(),
            "STRIKE: Star Canopus has 0 connected stars. Expected: 1"
        );
    }

    #[test]
    fn degree_uses_the_bomb() {
        // Pelengs Dictatorship requires port plates % 6 + 1 corridors
        let mut stars = hub_stars();
        stars[7].faction = Faction::Pelengs;
        stars[7].regime = Regime::Dictatorship;
        let mut bomb = BombSnapshot {
            port_plates: 5,
            ..Default::default()
        };
        assert!(verify(&hub_map(), &stars, &bomb).is_pass());
        bomb.port_plates = 4;
        assert_eq!(
            verify(&hub_map(), &stars, &bomb),
            Verdict::DegreeMismatch {
                star_id: 7,
                star: "Rigel".to_string(),
                actual: 6,
                expected: 5,
            }
        );
    }

    #[test]
    fn distance_mismatch() {
        let stars = path_stars([
            "Achernar", "Avior", "Sargas", "Atria", "Spica", "Alhena", "Castor", "Mirzam",
        ]);
        let verdict = verify(&path_map(), &stars, &BombSnapshot::default());
        assert_eq!(
            verdict,
            Verdict::DistanceMismatch {
                from: "Achernar".to_string(),
                to: "Spica".to_string(),
                actual: Some(4),
                expected: 3,
            }
        );
        assert_eq!(
            verdict.to_string(),
            "STRIKE: Distance from Achernar to Spica is 4. Expected: 3"
        );
    }

    #[test]
    fn distance_match() {
        let stars = path_stars([
            "Achernar", "Avior", "Sargas", "Spica", "Atria", "Alhena", "Castor", "Wezen",
        ]);
        // Wezen has no Alkaid partner
        assert!(verify(&path_map(), &stars, &BombSnapshot::default()).is_pass());
    }

    #[test]
    fn unreachable_partner() {
        let map = Starmap::from_compact_str(8, "0-1-2-3-0; 4-5-6-7-4").unwrap();
        let stars: Vec<Star> = [
            "Achernar", "Avior", "Sargas", "Atria", "Spica", "Alhena", "Castor", "Mirzam",
        ]
        .iter()
        .enumerate()
        .map(|(id, name)| star(id, name, Faction::Humans, Regime::Monarchy))
        .collect();
        let verdict = verify(&map, &stars, &BombSnapshot::default());
        assert_eq!(
            verdict,
            Verdict::DistanceMismatch {
                from: "Achernar".to_string(),
                to: "Spica".to_string(),
                actual: None,
                expected: 3,
            }
        );
    }

    #[test]
    fn degrees_are_checked_first() {
        let mut map = path_map();
        map.remove(6, 7);
        let stars = path_stars([
            "Achernar", "Avior", "Sargas", "Atria", "Spica", "Alhena", "Castor", "Mirzam",
        ]);
        assert!(matches!(
            verify(&map, &stars, &BombSnapshot::default()),
            Verdict::DegreeMismatch { star_id: 6, actual: 1, expected: 2, .. }
        ));
    }

    #[test]
    fn partial_checks() {
        let stars = path_stars([
            "Achernar", "Avior", "Sargas", "Atria", "Spica", "Alhena", "Castor", "Mirzam",
        ]);
        let bomb = BombSnapshot::default();
        assert_eq!(check_corridors(&path_map(), &stars, &bomb), None);
        assert!(matches!(
            check_distances(&path_map(), &stars),
            Some(Verdict::DistanceMismatch { actual: Some(4), .. })
        ));
        assert_eq!(check_distances(&hub_map(), &hub_stars()), None);
    }

    #[test]
    fn verdict_json() {
        let verdict = Verdict::DistanceMismatch {
            from: "Achernar".to_string(),
            to: "Spica".to_string(),
            actual: None,
            expected: 3,
        };
        assert_eq!(
            serde_json::to_string(&verdict).unwrap(),
            r#"{"DistanceMismatch":{"from":"Achernar","to":"Spica","actual":null,"expected":3}}"#
        );
        assert_eq!(serde_json::to_string(&Verdict::Pass).unwrap(), r#""Pass""#);
    }
}
