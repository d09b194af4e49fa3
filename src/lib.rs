/*
lib.rs

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

//! Generate and verify Starmap Reconstruction puzzles.
//!
//! The player must connect eight stars with corridors. Each star requires a number of corridors
//! that depends on its faction, its regime, and the bomb. Some pairs of named stars must also be
//! at a given distance from each other.
//!
//! * [`generator`] builds a random starmap, its stars, and an example solution.
//! * [`verifier`] checks the starmap that the player submits.
//! * [`game`] holds the state of an attempt and processes the player actions.
//! * [`bomb_info`] is the boundary with the bomb state.

pub mod bomb_info;
pub mod config;
pub mod game;
pub mod generator;
pub mod verifier;
