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

//! Placement requests and parsing of the raw text the input layer hands over.
use std::{convert::TryFrom, str::FromStr};

use crate::board::{AttackError, CannotPlaceReason, Coordinate, PlaceError, GRID_SIZE};

/// Requested position of a vessel: the anchor cell and the direction the run extends.
/// Horizontal runs extend rightward (increasing `col`), vertical runs extend downward
/// (increasing `row`).
///
/// Coordinates are signed so that negative input survives until validation and is
/// reported as out of bounds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Placement {
    pub row: isize,
    pub col: isize,
    pub horizontal: bool,
}

impl Placement {
    pub fn new(row: isize, col: isize, horizontal: bool) -> Self {
        Self {
            row,
            col,
            horizontal,
        }
    }

    /// Placement extending rightward from `(row, col)`.
    pub fn horizontal(row: isize, col: isize) -> Self {
        Self::new(row, col, true)
    }

    /// Placement extending downward from `(row, col)`.
    pub fn vertical(row: isize, col: isize) -> Self {
        Self::new(row, col, false)
    }

    /// Returns true if a run of `size` cells from this anchor stays inside the grid.
    pub fn fits(&self, size: usize) -> bool {
        let (row, col) = match (usize::try_from(self.row), usize::try_from(self.col)) {
            (Ok(row), Ok(col)) => (row, col),
            _ => return false,
        };
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return false;
        }
        let start = if self.horizontal { col } else { row };
        size <= GRID_SIZE - start
    }

    /// Coordinates covered by a run of `size` cells, or `None` if it leaves the grid.
    pub fn run(&self, size: usize) -> Option<Vec<Coordinate>> {
        if !self.fits(size) {
            return None;
        }
        // fits() already checked both components are non-negative.
        let (row, col) = (self.row as usize, self.col as usize);
        Some(
            (0..size)
                .map(|i| {
                    if self.horizontal {
                        Coordinate::new(row, col + i)
                    } else {
                        Coordinate::new(row + i, col)
                    }
                })
                .collect(),
        )
    }
}

/// Interpret an orientation token. Returns `Some(true)` for horizontal.
fn parse_orientation(token: &str) -> Option<bool> {
    match token.to_ascii_lowercase().as_str() {
        "h" | "horizontal" | "right" | "r" | "true" => Some(true),
        "v" | "vertical" | "down" | "d" | "false" => Some(false),
        _ => None,
    }
}

fn parse_component(token: Option<&str>) -> Result<isize, PlaceError> {
    token
        .ok_or_else(|| PlaceError::input(CannotPlaceReason::MissingArgument))?
        .parse()
        .map_err(|_| PlaceError::input(CannotPlaceReason::TypeMismatch))
}

impl FromStr for Placement {
    type Err = PlaceError;

    /// Parse `"<row> <col> [orientation]"`. Commas may separate the parts. Orientation
    /// defaults to horizontal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty());
        let row = parse_component(tokens.next())?;
        let col = parse_component(tokens.next())?;
        let horizontal = match tokens.next() {
            None => true,
            Some(token) => parse_orientation(token)
                .ok_or_else(|| PlaceError::input(CannotPlaceReason::TypeMismatch))?,
        };
        if tokens.next().is_some() {
            return Err(PlaceError::input(CannotPlaceReason::TypeMismatch));
        }
        Ok(Self::new(row, col, horizontal))
    }
}

/// Parse an attack target. Accepts `"row col"`, `"row,col"`, or a grid label such as
/// `"B7"`. Only the shape of the input is checked here; bounds are left to the board.
pub fn parse_target(s: &str) -> Result<(isize, isize), AttackError> {
    let s = s.trim();
    if let Some(coord) = Coordinate::from_label(s) {
        return Ok((coord.row as isize, coord.col as isize));
    }
    let parts: Vec<&str> = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    match parts.as_slice() {
        [row, col] => match (row.parse(), col.parse()) {
            (Ok(row), Ok(col)) => Ok((row, col)),
            _ => Err(AttackError::Malformed(s.to_owned())),
        },
        _ => Err(AttackError::Malformed(s.to_owned())),
    }
}
