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

use thiserror::Error;

use crate::board::{AttackError, NoVessels};

/// Reason why a turn could not be taken.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum TurnError {
    /// At least one side still has vessels to position.
    #[error("both fleets must be placed before attacking")]
    NotReady,

    /// One side has already been defeated.
    #[error("the match is already over")]
    AlreadyOver,

    /// The attack target was rejected by the board.
    #[error(transparent)]
    Attack(#[from] AttackError),

    /// A fleet query was made against a board with no vessels.
    #[error(transparent)]
    Fleet(#[from] NoVessels),
}
