/*
corridor_counts.rs

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

//! Catalog of the corridor counts that a starmap can be built from.
//!
//! Each variant lists the number of corridors for each of the eight stars. The last two entries
//! are the hubs. Every variant has an even sum and can be realized by
//! [`crate::generator::realizer::realize`].

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::config::STARS_COUNT;

/// Corridor count variants.
pub const CORRIDORS_COUNT_VARIANTS: [[usize; STARS_COUNT]; 24] = [
    [1, 1, 1, 1, 1, 1, 2, 6],
    [1, 1, 1, 1, 2, 2, 2, 6],
    [1, 1, 2, 2, 2, 2, 2, 6],
    [2, 2, 2, 2, 2, 2, 2, 6],
    [1, 1, 1, 1, 1, 1, 3, 5],
    [1, 1, 1, 1, 2, 2, 3, 5],
    [1, 1, 2, 2, 2, 2, 3, 5],
    [2, 2, 2, 2, 2, 2, 3, 5],
    [1, 1, 1, 1, 1, 2, 2, 5],
    [1, 1, 1, 2, 2, 2, 2, 5],
    [1, 2, 2, 2, 2, 2, 2, 5],
    [1, 1, 1, 1, 1, 2, 3, 4],
    [1, 1, 1, 2, 2, 2, 3, 4],
    [1, 2, 2, 2, 2, 2, 3, 4],
    [1, 1, 1, 1, 2, 2, 2, 4],
    [1, 1, 2, 2, 2, 2, 2, 4],
    [2, 2, 2, 2, 2, 2, 2, 4],
    [1, 1, 1, 1, 2, 2, 3, 3],
    [1, 1, 2, 2, 2, 2, 3, 3],
    [2, 2, 2, 2, 2, 2, 3, 3],
    [1, 1, 1, 2, 2, 2, 2, 3],
    [1, 2, 2, 2, 2, 2, 2, 3],
    [1, 1, 2, 2, 2, 2, 2, 2],
    [2, 2, 2, 2, 2, 2, 2, 2],
];

/// Return a random variant from [`CORRIDORS_COUNT_VARIANTS`].
pub fn pick_random<R: Rng + ?Sized>(rng: &mut R) -> [usize; STARS_COUNT] {
    // The catalog is not empty
    *CORRIDORS_COUNT_VARIANTS
        .choose(rng)
        .unwrap_or(&CORRIDORS_COUNT_VARIANTS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn variants_are_well_formed() {
        for variant in CORRIDORS_COUNT_VARIANTS {
            let sum: usize = variant.iter().sum();
            assert_eq!(sum % 2, 0, "odd sum for {variant:?}");
            assert!(variant.iter().all(|c| (1..=6).contains(c)), "{variant:?}");
            // The hubs come last
            let max_other: usize = *variant[..STARS_COUNT - 2].iter().max().unwrap();
            assert!(variant[STARS_COUNT - 2] >= max_other, "{variant:?}");
            assert!(variant[STARS_COUNT - 1] >= variant[STARS_COUNT - 2], "{variant:?}");
        }
    }

    #[test]
    fn pick_random_returns_a_catalog_entry() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let variant = pick_random(&mut rng);
            assert!(CORRIDORS_COUNT_VARIANTS.contains(&variant));
        }
    }
}
