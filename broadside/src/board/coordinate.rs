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

use std::{convert::TryFrom, fmt};

use crate::board::GRID_SIZE;

/// Column labels used when rendering a coordinate as a grid label like `B7`.
const COLUMN_LABELS: &[u8; GRID_SIZE] = b"ABCDEFGHIJ";

/// Zero-based coordinates of a cell in the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Vertical position of the cell.
    pub row: usize,
    /// Horizontal position of the cell.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`. Does not check bounds.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Construct a [`Coordinate`] from signed input, returning `None` unless both
    /// components fall inside the grid.
    pub fn checked(row: isize, col: isize) -> Option<Self> {
        let row = usize::try_from(row).ok().filter(|&r| r < GRID_SIZE)?;
        let col = usize::try_from(col).ok().filter(|&c| c < GRID_SIZE)?;
        Some(Self { row, col })
    }

    /// Whether this coordinate lies inside the grid.
    pub fn in_bounds(&self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Grid label for this coordinate: column letter followed by the one-based row, e.g.
    /// `(6, 1)` is `B7`. Returns `None` when out of bounds.
    pub fn label(&self) -> Option<String> {
        if self.in_bounds() {
            Some(format!(
                "{}{}",
                COLUMN_LABELS[self.col] as char,
                self.row + 1
            ))
        } else {
            None
        }
    }

    /// Parse a grid label such as `B7` or `j10`.
    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        let letter = chars.next()?.to_ascii_uppercase();
        let col = COLUMN_LABELS.iter().position(|&c| c as char == letter)?;
        let row: usize = chars.as_str().parse().ok()?;
        if row == 0 || row > GRID_SIZE {
            return None;
        }
        Some(Self::new(row - 1, col))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_rejects_outside_grid() {
        assert_eq!(Coordinate::checked(0, 0), Some(Coordinate::new(0, 0)));
        assert_eq!(Coordinate::checked(9, 9), Some(Coordinate::new(9, 9)));
        assert_eq!(Coordinate::checked(-1, 0), None);
        assert_eq!(Coordinate::checked(0, -1), None);
        assert_eq!(Coordinate::checked(10, 0), None);
        assert_eq!(Coordinate::checked(0, 10), None);
    }

    #[test]
    fn tuple_conversions() {
        let coord = Coordinate::from((3, 7));
        assert_eq!(coord, Coordinate::new(3, 7));
        assert_eq!(<(usize, usize)>::from(coord), (3, 7));
    }

    #[test]
    fn labels() {
        assert_eq!(Coordinate::new(6, 1).label().as_deref(), Some("B7"));
        assert_eq!(Coordinate::new(9, 9).label().as_deref(), Some("J10"));
        assert_eq!(Coordinate::new(10, 0).label(), None);
        assert_eq!(Coordinate::from_label("b7"), Some(Coordinate::new(6, 1)));
        assert_eq!(Coordinate::from_label("J10"), Some(Coordinate::new(9, 9)));
        assert_eq!(Coordinate::from_label("A0"), None);
        assert_eq!(Coordinate::from_label("A11"), None);
        assert_eq!(Coordinate::from_label("K1"), None);
        assert_eq!(Coordinate::from_label(""), None);
    }
}
