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

//! Errors used by the [`Board`][crate::board::Board].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{board::Placement, vessel::Class};

/// Reason why a vessel could not be placed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// A required placement argument was not supplied.
    #[error("a required placement argument was missing")]
    MissingArgument,
    /// A placement argument could not be interpreted as the expected kind of value.
    #[error("a placement argument had the wrong type")]
    TypeMismatch,
    /// The vessel size has no matching class.
    #[error("vessel size is outside the supported range")]
    SizeOutOfRange,
    /// Some cell of the run falls outside the grid.
    #[error("the placement does not fit on the grid")]
    OutOfBounds,
    /// The vessel is already on the grid.
    #[error("the vessel was already placed")]
    AlreadyPlaced,
    /// One or more of the cells in the run was already occupied.
    #[error("the requested position was already occupied")]
    CellOccupied,
    /// Random placement gave up without finding a free run.
    #[error("no free position was found for the vessel")]
    PlacementFailed,
}

/// Error caused when attempting to place a vessel in an invalid position.
#[derive(Error, Clone, Eq, PartialEq)]
#[error("could not place vessel: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    /// Class of the vessel being placed, if known when the error was raised.
    class: Option<Class>,
    /// Requested placement, if it had been parsed when the error was raised.
    placement: Option<Placement>,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    /// Construct a placement error from a reason, class, and placement.
    pub(crate) fn new(
        reason: CannotPlaceReason,
        class: Option<Class>,
        placement: Option<Placement>,
    ) -> Self {
        Self {
            reason,
            class,
            placement,
        }
    }

    /// Construct an error for malformed placement input.
    pub(crate) fn input(reason: CannotPlaceReason) -> Self {
        Self::new(reason, None, None)
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Class of the vessel that was being placed.
    pub fn class(&self) -> Option<Class> {
        self.class
    }

    /// Get the [`Placement`] that was attempted.
    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }
}

/// Error returned when removing a vessel from the grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum RemoveError {
    /// The requested vessel does not exist.
    #[error("no vessel of size {0} exists")]
    InvalidVessel(usize),
    /// The vessel exists but is not currently on the grid.
    #[error("the {0} is not on the board")]
    VesselNotFound(Class),
}

/// Error returned when an attack target is malformed or outside the grid.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum AttackError {
    /// The target could not be read as a pair of integer coordinates.
    #[error("invalid attack target {0:?}")]
    Malformed(String),
    /// The target lies outside the grid.
    #[error("attack target ({row}, {col}) is outside the grid")]
    OutOfBounds { row: isize, col: isize },
}

/// Error returned when querying the fleet of a board that has no vessels placed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("the board has no vessels")]
pub struct NoVessels;
