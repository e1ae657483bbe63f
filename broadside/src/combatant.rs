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

//! Participants in a match.
use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::board::{Board, Coordinate};

/// Default display name for a new [`Combatant`].
pub const DEFAULT_NAME: &str = "Player 1";

/// Kind of participant. Only a label: both kinds follow exactly the same rules.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CombatantKind {
    Human,
    Automated,
}

impl Default for CombatantKind {
    fn default() -> Self {
        CombatantKind::Human
    }
}

impl fmt::Display for CombatantKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            CombatantKind::Human => "human",
            CombatantKind::Automated => "automated",
        })
    }
}

/// Error returned when parsing an unknown [`CombatantKind`].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown combatant kind {0:?}")]
pub struct UnknownKind(String);

impl FromStr for CombatantKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" | "real" | "me" => Ok(CombatantKind::Human),
            "automated" | "computer" | "bot" => Ok(CombatantKind::Automated),
            _ => Err(UnknownKind(s.to_owned())),
        }
    }
}

/// A named participant with their own board and a log of the shots they have fired.
#[derive(Debug)]
pub struct Combatant {
    name: String,
    kind: CombatantKind,
    board: Board,

    /// Shots fired by this combatant, oldest first. May contain repeats.
    shots: Vec<Coordinate>,

    victories: u32,
    defeats: u32,
}

impl Combatant {
    /// Create a combatant with a fresh board and an empty shot log.
    pub fn new<S: Into<String>>(name: S, kind: CombatantKind) -> Self {
        Self {
            name: name.into(),
            kind,
            board: Board::new(),
            shots: Vec::new(),
            victories: 0,
            defeats: 0,
        }
    }

    /// Create a fresh combatant carrying the same name and kind as this one.
    pub fn renewed(&self) -> Self {
        Self::new(self.name.clone(), self.kind)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CombatantKind {
        self.kind
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the board, used while positioning vessels.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Coordinates this combatant has fired at, in the order they were fired.
    pub fn shots(&self) -> &[Coordinate] {
        &self.shots
    }

    /// Whether this combatant has already fired at the given coordinate.
    pub fn has_fired_at(&self, coord: Coordinate) -> bool {
        self.shots.contains(&coord)
    }

    /// Number of matches won since this combatant was created.
    pub fn victories(&self) -> u32 {
        self.victories
    }

    /// Number of matches lost since this combatant was created.
    pub fn defeats(&self) -> u32 {
        self.defeats
    }

    pub(crate) fn record_shot(&mut self, coord: Coordinate) {
        self.shots.push(coord);
    }

    pub(crate) fn record_victory(&mut self) {
        self.victories += 1;
    }

    pub(crate) fn record_defeat(&mut self) {
        self.defeats += 1;
    }

    /// Reset the board and forget every shot, keeping identity and tallies.
    pub(crate) fn clear(&mut self) {
        self.board.reset();
        self.shots.clear();
    }
}

impl Default for Combatant {
    fn default() -> Self {
        Self::new(DEFAULT_NAME, CombatantKind::Human)
    }
}
