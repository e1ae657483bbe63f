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

//! Coordination of a two-sided match: turn order, routing of attacks, and win
//! detection.
use log::{debug, info};
#[cfg(feature = "rng_gen")]
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::{
    board::{AttackError, Coordinate, Impact, NoVessels},
    combatant::{Combatant, CombatantKind},
    vessel::{Class, Vessel},
};

pub use self::errors::TurnError;

mod errors;

/// Default display name of the second side.
pub const DEFAULT_OPPONENT_NAME: &str = "Player 2";

/// One of the two sides of a match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

#[cfg(feature = "rng_gen")]
impl Distribution<Side> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Side {
        if rng.gen() {
            Side::A
        } else {
            Side::B
        }
    }
}

/// Stage of a match, derived from the state of both boards.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// At least one side has vessels left to place.
    Positioning,
    /// Both fleets are placed and neither is destroyed.
    Attacking,
    /// One fleet has been destroyed.
    Finished,
}

/// Outcome of a turn taken through [`Match::take_turn`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TurnOutcome {
    /// Nothing was hit.
    Miss,
    /// The given vessel was hit, and this shot did not destroy it.
    Hit(Class),
    /// The given vessel was destroyed but the target still has other vessels.
    Sunk(Class),
    /// The given vessel was destroyed and the target has no remaining vessels.
    Victory(Class),
}

/// Owns both combatants and tracks whose move it is.
///
/// [`attack`](Match::attack) is advisory: it routes a shot to any target regardless of
/// whose turn it is, leaving turn discipline to the caller.
/// [`take_turn`](Match::take_turn) is the enforced variant that always fires from the
/// active side and advances the turn.
#[derive(Debug)]
pub struct Match {
    side_a: Combatant,
    side_b: Combatant,

    /// Side whose move it currently is.
    active: Side,
}

impl Match {
    /// Start a match between the two given combatants. Side A moves first.
    pub fn new(side_a: Combatant, side_b: Combatant) -> Self {
        Self {
            side_a,
            side_b,
            active: Side::A,
        }
    }

    /// Get the combatant on the given side.
    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::A => &self.side_a,
            Side::B => &self.side_b,
        }
    }

    /// Mutably get the combatant on the given side.
    pub fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::A => &mut self.side_a,
            Side::B => &mut self.side_b,
        }
    }

    /// Fire at `target`'s board on behalf of the other side and log the shot for the
    /// attacker. Does not check whose turn it is.
    pub fn attack(
        &mut self,
        target: Side,
        row: isize,
        col: isize,
    ) -> Result<Impact, AttackError> {
        let coord =
            Coordinate::checked(row, col).ok_or(AttackError::OutOfBounds { row, col })?;
        let impact = self
            .combatant_mut(target)
            .board_mut()
            .receive_attack(row, col)?;
        self.combatant_mut(target.opponent()).record_shot(coord);
        Ok(impact)
    }

    /// Get the winner, if any. Both boards are queried, so an unpopulated fleet on
    /// either side is reported as [`NoVessels`].
    pub fn winner(&self) -> Result<Option<Side>, NoVessels> {
        let a_destroyed = self.side_a.board().all_vessels_destroyed()?;
        let b_destroyed = self.side_b.board().all_vessels_destroyed()?;
        Ok(if a_destroyed {
            Some(Side::B)
        } else if b_destroyed {
            Some(Side::A)
        } else {
            None
        })
    }

    /// Pass the move to the other side.
    pub fn change_turn(&mut self) {
        self.active = self.active.opponent();
        debug!("turn passes to {:?}", self.active);
    }

    /// Get the side whose move it currently is.
    pub fn current_side(&self) -> Side {
        self.active
    }

    /// Get the combatant whose move it currently is.
    pub fn current_combatant(&self) -> &Combatant {
        self.combatant(self.active)
    }

    /// Check whether it is the given side's move.
    pub fn is_side_active(&self, side: Side) -> bool {
        self.active == side
    }

    /// Stage of the match.
    pub fn phase(&self) -> Phase {
        if !self.side_a.board().is_fully_placed() || !self.side_b.board().is_fully_placed() {
            return Phase::Positioning;
        }
        match self.winner() {
            Ok(Some(_)) => Phase::Finished,
            _ => Phase::Attacking,
        }
    }

    /// Fire from the active side at its opponent. A turn that does not end the match
    /// passes the move; a winning turn updates both combatants' tallies.
    pub fn take_turn(&mut self, row: isize, col: isize) -> Result<TurnOutcome, TurnError> {
        match self.phase() {
            Phase::Positioning => return Err(TurnError::NotReady),
            Phase::Finished => return Err(TurnError::AlreadyOver),
            Phase::Attacking => {}
        }
        let attacker = self.active;
        let target = attacker.opponent();
        let already_sunk = Coordinate::checked(row, col)
            .and_then(|coord| self.combatant(target).board().cell(coord))
            .and_then(|cell| cell.vessel())
            .map_or(false, Vessel::is_destroyed);
        let outcome = match self.attack(target, row, col)? {
            Impact::Miss => TurnOutcome::Miss,
            Impact::Hit(class) => {
                let board = self.combatant(target).board();
                if already_sunk || !board.vessel(class).is_destroyed() {
                    TurnOutcome::Hit(class)
                } else if board.all_vessels_destroyed()? {
                    TurnOutcome::Victory(class)
                } else {
                    TurnOutcome::Sunk(class)
                }
            }
        };
        if let TurnOutcome::Victory(_) = outcome {
            self.combatant_mut(attacker).record_victory();
            self.combatant_mut(target).record_defeat();
            info!("{} wins the match", self.combatant(attacker).name());
        } else {
            self.change_turn();
        }
        Ok(outcome)
    }

    /// Replace both combatants with fresh ones carrying the same names and kinds. Boards,
    /// shot logs, and tallies start over and side A moves first.
    pub fn reset_match(&mut self) {
        self.side_a = self.side_a.renewed();
        self.side_b = self.side_b.renewed();
        self.active = Side::A;
        debug!("match reset");
    }

    /// Reset both boards and shot logs in place and hand the move back to side A. The
    /// combatants themselves, and their tallies, are kept.
    pub fn clear_match(&mut self) {
        self.side_a.clear();
        self.side_b.clear();
        self.active = Side::A;
        debug!("match cleared");
    }
}

impl Default for Match {
    /// A match between a default human and an automated second player.
    fn default() -> Self {
        Self::new(
            Combatant::default(),
            Combatant::new(DEFAULT_OPPONENT_NAME, CombatantKind::Automated),
        )
    }
}
