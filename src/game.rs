/*
game.rs

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

//! Manage an attempt in progress.
//!
//! A [`Game`] object holds the generated stars, the corridors that the player builds, and the
//! strike counter. The presentation layer forwards the player actions to [`Game::select`],
//! [`Game::clear`], and [`Game::submit`].
//!
//! Corridors are built by selecting two stars in turn. Selecting the same star twice cancels
//! the selection. Selecting two stars that are already connected removes their corridor.

use log::{debug, info};
use rand::Rng;

use crate::bomb_info::BombInfo;
use crate::config::MODULE_NAME;
use crate::generator::star_info::Star;
use crate::generator::starmap::Starmap;
use crate::generator::{GenerateError, GeneratedStarmap, generate_starmap};
use crate::verifier::{Verdict, check_corridors, check_distances};

/// Effect of a star selection.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The selection has no effect (unknown star or solved attempt).
    Ignored,

    /// The star is now selected, waiting for a second star.
    Armed(usize),

    /// The selected star was selected again: no star is selected anymore.
    Cancelled(usize),

    /// A corridor now connects the two stars.
    Connected(usize, usize),

    /// The corridor between the two stars has been removed.
    Disconnected(usize, usize),
}

/// Manage the status of the attempt in progress.
#[derive(Debug, Clone)]
pub struct Game {
    /// Attempt identifier, used in the logs.
    attempt_id: usize,

    /// Stars, indexed by their ID.
    stars: Vec<Star>,

    /// A valid solution, only used for the logs.
    answer_example: Starmap,

    /// Corridors built by the player.
    corridors: Starmap,

    /// Star waiting for a second selection.
    selected_star: Option<usize>,

    /// Number of failed submissions.
    strikes: usize,

    /// Whether the player solved the puzzle. No more input is accepted.
    solved: bool,
}

impl Game {
    /// Create a [`Game`] object from a generated starmap and log the stars.
    pub fn new<B: BombInfo + ?Sized>(
        attempt_id: usize,
        generated: GeneratedStarmap,
        bomb: &B,
    ) -> Self {
        let size: usize = generated.answer_example.size();
        let game = Self {
            attempt_id,
            stars: generated.stars,
            answer_example: generated.answer_example,
            corridors: Starmap::new(size),
            selected_star: None,
            strikes: 0,
            solved: false,
        };
        for star in &game.stars {
            info!(
                "[{MODULE_NAME} #{attempt_id}] Star #{}: {} ({})",
                star.id,
                star,
                star.required_corridors(bomb)
            );
        }
        info!(
            "[{MODULE_NAME} #{attempt_id}] Answer example: {}",
            game.answer_example.to_compact_string()
        );
        game
    }

    /// Generate a random starmap and create the [`Game`] object.
    ///
    /// # Errors
    ///
    /// See [`GenerateError`].
    pub fn generate<B, R>(attempt_id: usize, bomb: &B, rng: &mut R) -> Result<Self, GenerateError>
    where
        B: BombInfo + ?Sized,
        R: Rng + ?Sized,
    {
        let generated: GeneratedStarmap = generate_starmap(bomb, rng)?;
        Ok(Self::new(attempt_id, generated, bomb))
    }

    pub fn attempt_id(&self) -> usize {
        self.attempt_id
    }

    /// Stars, indexed by their ID.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn answer_example(&self) -> &Starmap {
        &self.answer_example
    }

    /// Corridors built by the player so far.
    pub fn corridors(&self) -> &Starmap {
        &self.corridors
    }

    pub fn selected_star(&self) -> Option<usize> {
        self.selected_star
    }

    pub fn strikes(&self) -> usize {
        self.strikes
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Process the selection of a star.
    pub fn select(&mut self, star_id: usize) -> SelectOutcome {
        if self.solved || star_id >= self.stars.len() {
            debug!("Selection of star {star_id} ignored");
            return SelectOutcome::Ignored;
        }

        let Some(selected) = self.selected_star.take() else {
            self.selected_star = Some(star_id);
            return SelectOutcome::Armed(star_id);
        };
        if selected == star_id {
            return SelectOutcome::Cancelled(star_id);
        }
        if self.corridors.remove(selected, star_id) {
            debug!("Corridor {selected}-{star_id} removed");
            SelectOutcome::Disconnected(selected, star_id)
        } else {
            self.corridors.add(selected, star_id);
            debug!("Corridor {selected}-{star_id} added");
            SelectOutcome::Connected(selected, star_id)
        }
    }

    /// Remove all the corridors and the pending selection.
    pub fn clear(&mut self) {
        if self.solved {
            return;
        }
        self.selected_star = None;
        self.corridors.clear();
    }

    /// Verify the corridors built by the player.
    ///
    /// A failed verification increments the strike counter. The attempt continues and the
    /// player can fix the corridors.
    pub fn submit<B: BombInfo + ?Sized>(&mut self, bomb: &B) -> Verdict {
        if self.solved {
            return Verdict::Pass;
        }
        self.selected_star = None;

        // The submitted map is only logged once every star has its corridors
        let verdict: Verdict = check_corridors(&self.corridors, &self.stars, bomb)
            .or_else(|| {
                info!(
                    "[{MODULE_NAME} #{}] Submitted map: {}",
                    self.attempt_id,
                    self.corridors.to_compact_string()
                );
                check_distances(&self.corridors, &self.stars)
            })
            .unwrap_or(Verdict::Pass);
        if verdict.is_pass() {
            self.solved = true;
        } else {
            self.strikes += 1;
        }
        info!("[{MODULE_NAME} #{}] {verdict}", self.attempt_id);
        verdict
    }
}
