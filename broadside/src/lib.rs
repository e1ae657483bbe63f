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

//! Game-state core for two-player naval combat.
//!
//! Each side hides a fleet of five vessels on a private 10x10 [`Board`][board::Board]
//! and the sides take turns firing at each other's grid until one fleet is destroyed.
//!
//! - [`vessel`] defines the vessel classes and their damage tracking.
//! - [`board`] handles placement, incoming attacks, and fleet status for one side.
//! - [`combatant`] pairs an identity with a board and a log of shots fired.
//! - [`game`] coordinates two combatants: turn order, attack routing, and win detection.
//!
//! ```
//! use broadside::{board::Placement, game::{Match, Side, TurnOutcome}, vessel::Class};
//!
//! let mut game = Match::default();
//! for &side in &[Side::A, Side::B] {
//!     let board = game.combatant_mut(side).board_mut();
//!     for (row, &class) in Class::ALL.iter().enumerate() {
//!         board.place_vessel(class, Placement::horizontal(row as isize, 0)).unwrap();
//!     }
//! }
//! assert_eq!(game.take_turn(9, 9), Ok(TurnOutcome::Miss));
//! assert_eq!(game.current_side(), Side::B);
//! ```
//!
//! Rendering and input are left to the caller. [`Board::rows`][board::Board::rows] and
//! [`Board::markers`][board::Board::markers] expose what a renderer needs, and
//! [`parse_target`][board::parse_target] turns user text into attack coordinates.

pub mod board;
pub mod combatant;
pub mod game;
pub mod vessel;
