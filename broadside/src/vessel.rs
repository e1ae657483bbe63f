// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Types used for defining vessels and tracking the damage they have taken.
use std::fmt;

use thiserror::Error;

use crate::board::Coordinate;

/// Smallest supported vessel size.
pub const MIN_SIZE: usize = 1;
/// Largest supported vessel size.
pub const MAX_SIZE: usize = 5;

/// Error returned when constructing a [`Vessel`] with an unsupported size.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("vessel size must be between {} and {}, got {0}", MIN_SIZE, MAX_SIZE)]
pub struct InvalidSize(pub usize);

/// Class of a vessel. Each size maps to exactly one class, and the class doubles as the
/// vessel's ID within a single board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Class {
    /// Carrier: length 5.
    Carrier,
    /// Battleship: length 4.
    Battleship,
    /// Destroyer: length 3.
    Destroyer,
    /// Submarine: length 2.
    Submarine,
    /// Patrol boat: length 1.
    Patrol,
}

impl Class {
    /// Every class, largest first. This is also the standard fleet.
    pub const ALL: &'static [Class] = &[
        Class::Carrier,
        Class::Battleship,
        Class::Destroyer,
        Class::Submarine,
        Class::Patrol,
    ];

    /// Get the class cooresponding to the given size, if any.
    pub fn from_size(size: usize) -> Option<Self> {
        match size {
            5 => Some(Class::Carrier),
            4 => Some(Class::Battleship),
            3 => Some(Class::Destroyer),
            2 => Some(Class::Submarine),
            1 => Some(Class::Patrol),
            _ => None,
        }
    }

    /// Get the length of this class.
    pub fn size(self) -> usize {
        match self {
            Class::Carrier => 5,
            Class::Battleship => 4,
            Class::Destroyer => 3,
            Class::Submarine => 2,
            Class::Patrol => 1,
        }
    }

    /// Lowercase label for this class.
    pub fn name(self) -> &'static str {
        match self {
            Class::Carrier => "carrier",
            Class::Battleship => "battleship",
            Class::Destroyer => "destroyer",
            Class::Submarine => "submarine",
            Class::Patrol => "patrol",
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A single vessel: its class, how much damage it has taken, and where it sits on the
/// grid.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Vessel {
    class: Class,

    /// Number of hits taken. Never exceeds the size of the class.
    damage: usize,

    /// Cells occupied by this vessel, in run order. Empty while unplaced.
    cells: Vec<Coordinate>,
}

impl Vessel {
    /// Construct an unplaced, undamaged vessel of the given size.
    pub fn new(size: usize) -> Result<Self, InvalidSize> {
        Class::from_size(size)
            .map(Self::of_class)
            .ok_or(InvalidSize(size))
    }

    /// Construct an unplaced, undamaged vessel of the given class.
    pub fn of_class(class: Class) -> Self {
        Self {
            class,
            damage: 0,
            cells: Vec::new(),
        }
    }

    pub fn class(&self) -> Class {
        self.class
    }

    pub fn size(&self) -> usize {
        self.class.size()
    }

    pub fn damage(&self) -> usize {
        self.damage
    }

    /// Coordinates this vessel occupies. Always either empty or exactly `size` long.
    pub fn occupied_cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Whether this vessel currently sits on the grid.
    pub fn placed(&self) -> bool {
        !self.cells.is_empty()
    }

    /// Record one hit. Hits on an already destroyed vessel are absorbed.
    pub fn register_hit(&mut self) {
        if self.damage < self.size() {
            self.damage += 1;
        }
    }

    /// Returns true once the vessel has taken as many hits as it has cells.
    pub fn is_destroyed(&self) -> bool {
        self.damage == self.size()
    }

    pub(crate) fn set_cells(&mut self, cells: Vec<Coordinate>) {
        self.cells = cells;
    }

    /// Clear the placement and any recorded damage, returning the cells that were
    /// occupied.
    pub(crate) fn take_cells(&mut self) -> Vec<Coordinate> {
        self.damage = 0;
        std::mem::take(&mut self.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unsupported_sizes() {
        assert_eq!(Vessel::new(0), Err(InvalidSize(0)));
        assert_eq!(Vessel::new(6), Err(InvalidSize(6)));
        for size in MIN_SIZE..=MAX_SIZE {
            let vessel = Vessel::new(size).unwrap();
            assert_eq!(vessel.size(), size);
            assert_eq!(vessel.damage(), 0);
            assert!(vessel.occupied_cells().is_empty());
        }
    }

    #[test]
    fn class_follows_size() {
        assert_eq!(Vessel::new(5).unwrap().class(), Class::Carrier);
        assert_eq!(Vessel::new(4).unwrap().class(), Class::Battleship);
        assert_eq!(Vessel::new(3).unwrap().class(), Class::Destroyer);
        assert_eq!(Vessel::new(2).unwrap().class(), Class::Submarine);
        assert_eq!(Vessel::new(1).unwrap().class(), Class::Patrol);
        for &class in Class::ALL {
            assert_eq!(Class::from_size(class.size()), Some(class));
        }
    }

    #[test]
    fn destroyed_once_damage_reaches_size() {
        let mut vessel = Vessel::new(3).unwrap();
        vessel.register_hit();
        vessel.register_hit();
        assert!(!vessel.is_destroyed());
        vessel.register_hit();
        assert!(vessel.is_destroyed());
    }

    #[test]
    fn extra_hits_do_not_overflow_damage() {
        let mut vessel = Vessel::new(1).unwrap();
        vessel.register_hit();
        vessel.register_hit();
        assert_eq!(vessel.damage(), 1);
        assert!(vessel.is_destroyed());
    }

    #[test]
    fn display_uses_class_label() {
        assert_eq!(Class::Patrol.to_string(), "patrol");
        assert_eq!(format!("{:>8}", Class::Carrier), " carrier");
    }
}
