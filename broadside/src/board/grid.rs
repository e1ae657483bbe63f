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

//! Defines the cell storage behind a [`Board`][crate::board::Board].

use std::ops::{Index, IndexMut};

use crate::{board::Coordinate, vessel::Class};

/// Width and height of every grid.
pub const GRID_SIZE: usize = 10;

/// A single cell in the player's grid.
#[derive(Debug, Default, Clone)]
pub(super) struct GridCell {
    /// Class of the vessel that occupies this cell, if any.
    pub(super) vessel: Option<Class>,

    /// Whether a hit has landed on this cell.
    pub(super) damaged: bool,
}

/// Fixed-size square grid of cells, stored row-major.
#[derive(Debug)]
pub(super) struct Grid {
    cells: Box<[GridCell]>,
}

impl Grid {
    pub(super) fn new() -> Self {
        let cells = (0..GRID_SIZE * GRID_SIZE)
            .map(|_| Default::default())
            .collect();
        Self { cells }
    }

    /// Convert a coordinate to a linear index, or `None` if it is out of bounds.
    fn try_linearize(coord: &Coordinate) -> Option<usize> {
        if coord.in_bounds() {
            Some(coord.row * GRID_SIZE + coord.col)
        } else {
            None
        }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get(&self, coord: &Coordinate) -> Option<&GridCell> {
        Self::try_linearize(coord).and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut(&mut self, coord: &Coordinate) -> Option<&mut GridCell> {
        Self::try_linearize(coord).and_then(move |i| self.cells.get_mut(i))
    }
}

/// Iterate rows of coordinates, top to bottom. Each row is an iterator over the
/// coordinates of that row, left to right.
pub fn iter_coordinates() -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
    (0..GRID_SIZE).map(|row| (0..GRID_SIZE).map(move |col| Coordinate { row, col }))
}

impl Index<&Coordinate> for Grid {
    type Output = GridCell;

    fn index(&self, coord: &Coordinate) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl IndexMut<&Coordinate> for Grid {
    fn index_mut(&mut self, coord: &Coordinate) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
