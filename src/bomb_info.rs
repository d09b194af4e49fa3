/*
bomb_info.rs

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

//! Puzzle state provided by the bomb that hosts the module.
//!
//! The required number of corridors of some stars depends on the bomb (indicators, batteries,
//! ports, serial number). The [`BombInfo`] trait is the boundary with the component that knows
//! the bomb. The values are read each time they are needed and are never cached.
//!
//! [`BombSnapshot`] is a fixed description of a bomb that can be loaded from a JSON file, such
//! as:
//!
//! ```json
//! {
//!     "off_indicators": 2,
//!     "on_indicators": 1,
//!     "battery_holders": 2,
//!     "d_batteries": 1,
//!     "port_plates": 1,
//!     "ports": 3,
//!     "serial_number": "AB3CD5"
//! }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read-only access to the bomb state.
pub trait BombInfo {
    /// Number of unlit indicators.
    fn off_indicators(&self) -> usize;

    /// Number of lit indicators.
    fn on_indicators(&self) -> usize;

    /// Number of battery holders.
    fn battery_holders(&self) -> usize;

    /// Number of D batteries.
    fn d_batteries(&self) -> usize;

    /// Number of port plates.
    fn port_plates(&self) -> usize;

    /// Total number of ports.
    fn ports(&self) -> usize;

    /// Digits of the serial number, in order of appearance.
    fn serial_digits(&self) -> Vec<usize>;
}

/// Fixed bomb description.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BombSnapshot {
    pub off_indicators: usize,
    pub on_indicators: usize,
    pub battery_holders: usize,
    pub d_batteries: usize,
    pub port_plates: usize,
    pub ports: usize,
    pub serial_number: String,
}

impl BombSnapshot {
    /// Load a [`BombSnapshot`] object from a JSON file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        debug!("Bomb description file: {path:?}");
        let file: File = File::open(path)?;
        let reader: BufReader<File> = BufReader::new(file);
        let bomb: BombSnapshot = serde_json::from_reader(reader)?;
        Ok(bomb)
    }
}

impl BombInfo for BombSnapshot {
    fn off_indicators(&self) -> usize {
        self.off_indicators
    }

    fn on_indicators(&self) -> usize {
        self.on_indicators
    }

    fn battery_holders(&self) -> usize {
        self.battery_holders
    }

    fn d_batteries(&self) -> usize {
        self.d_batteries
    }

    fn port_plates(&self) -> usize {
        self.port_plates
    }

    fn ports(&self) -> usize {
        self.ports
    }

    fn serial_digits(&self) -> Vec<usize> {
        self.serial_number
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| d as usize)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_digits() {
        let bomb = BombSnapshot {
            serial_number: "AB3CD5".to_string(),
            ..Default::default()
        };
        assert_eq!(bomb.serial_digits(), vec![3, 5]);
        assert!(BombSnapshot::default().serial_digits().is_empty());
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let bomb: BombSnapshot =
            serde_json::from_str(r#"{"ports": 4, "serial_number": "X9Y"}"#).unwrap();
        assert_eq!(bomb.ports(), 4);
        assert_eq!(bomb.off_indicators(), 0);
        assert_eq!(bomb.serial_digits(), vec![9]);
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("starmap-bomb-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"battery_holders": 3, "d_batteries": 2}"#).unwrap();
        let bomb = BombSnapshot::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(bomb.battery_holders(), 3);
        assert_eq!(bomb.d_batteries(), 2);
        assert!(BombSnapshot::load(&path).is_err());
    }
}
