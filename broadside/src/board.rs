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

//! Types that make up the game board.

use enumflags2::BitFlags;
use log::debug;
#[cfg(feature = "rng_gen")]
use rand::Rng;

use crate::vessel::{Class, Vessel};

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    errors::{AttackError, CannotPlaceReason, NoVessels, PlaceError, RemoveError},
    grid::{iter_coordinates, GRID_SIZE},
    placement::{parse_target, Placement},
};

mod coordinate;
mod errors;
mod grid;
mod placement;

/// Number of anchors tried by random placement before giving up.
#[cfg(feature = "rng_gen")]
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Marks a renderer may draw on a cell. A cell can carry several at once.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Marker {
    /// A vessel occupies the cell.
    Ship = 0b0001,
    /// A hit has landed on the vessel in this cell.
    Hit = 0b0010,
    /// A shot at this cell found open water.
    Miss = 0b0100,
    /// The vessel in this cell has been destroyed.
    Sunk = 0b1000,
}

/// Reference to a particular cell in the grid.
#[derive(Debug, Copy, Clone)]
pub struct CellRef<'a> {
    /// Coordinate of this cell.
    coord: Coordinate,

    /// Whether a hit landed on this cell.
    damaged: bool,

    /// The vessel that occupies this cell, if any.
    vessel: Option<&'a Vessel>,
}

impl<'a> CellRef<'a> {
    /// The grid coordinate of this cell.
    pub fn coord(&self) -> &Coordinate {
        &self.coord
    }

    /// Whether a hit has landed on this cell.
    pub fn damaged(&self) -> bool {
        self.damaged
    }

    /// The vessel that occupies this cell, if any.
    pub fn vessel(&self) -> Option<&'a Vessel> {
        self.vessel
    }
}

/// Effect of an attack on a single board. Whether the hit destroyed the vessel is a
/// separate query.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Impact {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit the vessel of the given class.
    Hit(Class),
}

/// Represents a single player's board: their grid, their vessels, and the shots that
/// missed them.
#[derive(Debug)]
pub struct Board {
    /// Grid of cells occupied by vessels.
    grid: Grid,

    /// One vessel of every class, indexed by `Class as usize`. Only the placed ones
    /// belong to the fleet.
    vessels: Vec<Vessel>,

    /// Shots that landed on open water, in the order received.
    misses: Vec<Coordinate>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// One fresh vessel of every class.
fn fresh_roster() -> Vec<Vessel> {
    Class::ALL.iter().copied().map(Vessel::of_class).collect()
}

impl Board {
    /// Construct an empty board with the standard, unplaced roster.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            vessels: fresh_roster(),
            misses: Vec::new(),
        }
    }

    /// Get the vessel of the given class.
    pub fn vessel(&self, class: Class) -> &Vessel {
        &self.vessels[class as usize]
    }

    /// Get an iterator over every vessel owned by this board, placed or not.
    pub fn vessels(&self) -> impl Iterator<Item = &Vessel> {
        self.vessels.iter()
    }

    /// Get an iterator over the fleet: the vessels currently on the grid.
    pub fn fleet(&self) -> impl Iterator<Item = &Vessel> {
        self.vessels.iter().filter(|vessel| vessel.placed())
    }

    /// Get an iterator over the classes which still need to be placed.
    pub fn pending(&self) -> impl Iterator<Item = Class> + '_ {
        self.vessels
            .iter()
            .filter(|vessel| !vessel.placed())
            .map(Vessel::class)
    }

    /// Returns true once every vessel in the roster is on the grid.
    pub fn is_fully_placed(&self) -> bool {
        self.vessels.iter().all(Vessel::placed)
    }

    /// Shots that hit no vessel, in the order they were received.
    pub fn recorded_misses(&self) -> &[Coordinate] {
        &self.misses
    }

    /// Check whether a run of `size` cells from `(row, col)` stays inside the grid.
    /// Does not account for occupied cells.
    pub fn validate_placement(
        &self,
        size: usize,
        row: isize,
        col: isize,
        horizontal: bool,
    ) -> bool {
        Placement::new(row, col, horizontal).fits(size)
    }

    /// Place the vessel of the given class. The grid is left untouched on failure.
    pub fn place_vessel(
        &mut self,
        class: Class,
        placement: Placement,
    ) -> Result<&Vessel, PlaceError> {
        let fail = |reason| PlaceError::new(reason, Some(class), Some(placement));
        let run = placement
            .run(class.size())
            .ok_or_else(|| fail(CannotPlaceReason::OutOfBounds))?;
        if self.vessel(class).placed() {
            return Err(fail(CannotPlaceReason::AlreadyPlaced));
        }
        if run.iter().any(|coord| self.grid[coord].vessel.is_some()) {
            return Err(fail(CannotPlaceReason::CellOccupied));
        }
        // Already ensured that every cell is in bounds and unoccupied.
        for coord in &run {
            self.grid[coord].vessel = Some(class);
        }
        debug!("placed {} at {:?}", class, placement);
        let vessel = &mut self.vessels[class as usize];
        vessel.set_cells(run);
        Ok(vessel)
    }

    /// Place the vessel with the given size. Fails with
    /// [`SizeOutOfRange`][CannotPlaceReason::SizeOutOfRange] if no class has that size.
    pub fn place_vessel_sized(
        &mut self,
        size: usize,
        placement: Placement,
    ) -> Result<&Vessel, PlaceError> {
        let class = Class::from_size(size).ok_or_else(|| {
            PlaceError::new(CannotPlaceReason::SizeOutOfRange, None, Some(placement))
        })?;
        self.place_vessel(class, placement)
    }

    /// Place the vessel of the given class at a random free position, returning the
    /// chosen placement. Collisions are retried up to [`MAX_PLACEMENT_ATTEMPTS`] times.
    #[cfg(feature = "rng_gen")]
    pub fn place_vessel_randomly(
        &mut self,
        class: Class,
        rng: &mut impl Rng,
    ) -> Result<Placement, PlaceError> {
        self.place_randomly_within(class, rng, MAX_PLACEMENT_ATTEMPTS)
    }

    #[cfg(feature = "rng_gen")]
    fn place_randomly_within(
        &mut self,
        class: Class,
        rng: &mut impl Rng,
        attempts: usize,
    ) -> Result<Placement, PlaceError> {
        let size = class.size();
        for _ in 0..attempts {
            let horizontal: bool = rng.gen();
            let (rows, cols) = if horizontal {
                (GRID_SIZE, GRID_SIZE - size + 1)
            } else {
                (GRID_SIZE - size + 1, GRID_SIZE)
            };
            let placement = Placement::new(
                rng.gen_range(0, rows) as isize,
                rng.gen_range(0, cols) as isize,
                horizontal,
            );
            match self.place_vessel(class, placement) {
                Ok(_) => return Ok(placement),
                Err(err) if err.reason() == CannotPlaceReason::CellOccupied => {}
                Err(err) => return Err(err),
            }
        }
        Err(PlaceError::new(
            CannotPlaceReason::PlacementFailed,
            Some(class),
            None,
        ))
    }

    /// Randomly place every vessel that is not yet on the grid.
    #[cfg(feature = "rng_gen")]
    pub fn place_fleet_randomly(&mut self, rng: &mut impl Rng) -> Result<(), PlaceError> {
        let pending: Vec<Class> = self.pending().collect();
        for class in pending {
            self.place_vessel_randomly(class, rng)?;
        }
        Ok(())
    }

    /// Take the vessel of the given class off the grid, clearing its cells and damage.
    /// Returns the cells it occupied.
    pub fn remove_vessel(&mut self, class: Class) -> Result<Vec<Coordinate>, RemoveError> {
        if !self.vessel(class).placed() {
            return Err(RemoveError::VesselNotFound(class));
        }
        let cells = self.vessels[class as usize].take_cells();
        for coord in &cells {
            let cell = &mut self.grid[coord];
            cell.vessel = None;
            cell.damaged = false;
        }
        debug!("removed {} from {} cells", class, cells.len());
        Ok(cells)
    }

    /// Take the vessel with the given size off the grid. Fails with
    /// [`InvalidVessel`][RemoveError::InvalidVessel] if no vessel has that size.
    pub fn remove_vessel_sized(&mut self, size: usize) -> Result<Vec<Coordinate>, RemoveError> {
        let class = Class::from_size(size).ok_or(RemoveError::InvalidVessel(size))?;
        self.remove_vessel(class)
    }

    /// Receive a shot at `(row, col)`. A vessel in that cell takes one hit, otherwise the
    /// shot is recorded as a miss. Repeated shots at the same cell repeat their effect.
    pub fn receive_attack(&mut self, row: isize, col: isize) -> Result<Impact, AttackError> {
        let coord =
            Coordinate::checked(row, col).ok_or(AttackError::OutOfBounds { row, col })?;
        let cell = &mut self.grid[&coord];
        match cell.vessel {
            Some(class) => {
                cell.damaged = true;
                self.vessels[class as usize].register_hit();
                debug!("attack at {} hit the {}", coord, class);
                Ok(Impact::Hit(class))
            }
            None => {
                self.misses.push(coord);
                debug!("attack at {} missed", coord);
                Ok(Impact::Miss)
            }
        }
    }

    /// Returns true if every vessel in the fleet has been destroyed. Fails with
    /// [`NoVessels`] when no vessel has been placed, so an unpopulated board is never
    /// mistaken for a defeated one.
    pub fn all_vessels_destroyed(&self) -> Result<bool, NoVessels> {
        let mut fleet = self.fleet().peekable();
        if fleet.peek().is_none() {
            return Err(NoVessels);
        }
        Ok(fleet.all(Vessel::is_destroyed))
    }

    /// Return the board to an empty grid with a fresh roster and no recorded misses.
    pub fn reset(&mut self) {
        self.grid = Grid::new();
        self.vessels = fresh_roster();
        self.misses.clear();
        debug!("board reset");
    }

    /// Get a reference to the cell at the given coordinate. Returns `None` if the
    /// coordinate is out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<CellRef> {
        self.grid.get(&coord).map(|cell| CellRef {
            coord,
            damaged: cell.damaged,
            vessel: cell.vessel.map(|class| self.vessel(class)),
        })
    }

    /// Get an iterator over the rows of this board. Each row is an iterator over the
    /// cells of that row.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = CellRef> + '_> + '_ {
        iter_coordinates().map(move |row| row.filter_map(move |coord| self.cell(coord)))
    }

    /// Compute the markers a renderer should draw on the given cell.
    pub fn markers(&self, coord: Coordinate) -> BitFlags<Marker> {
        let mut markers = BitFlags::<Marker>::empty();
        if let Some(cell) = self.cell(coord) {
            if let Some(vessel) = cell.vessel() {
                markers |= Marker::Ship;
                if cell.damaged() {
                    markers |= Marker::Hit;
                }
                if vessel.is_destroyed() {
                    markers |= Marker::Sunk;
                }
            }
            if self.misses.contains(&coord) {
                markers |= Marker::Miss;
            }
        }
        markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.vessels().count(), 5);
        assert_eq!(board.fleet().count(), 0);
        assert!(board.recorded_misses().is_empty());
        assert!(board
            .rows()
            .flatten()
            .all(|cell| cell.vessel().is_none() && !cell.damaged()));
        assert_eq!(board.rows().flatten().count(), GRID_SIZE * GRID_SIZE);
    }

    #[test]
    fn placement_links_cells_and_vessel() {
        let mut board = Board::new();
        let vessel = board
            .place_vessel(Class::Battleship, Placement::vertical(2, 7))
            .unwrap();
        assert_eq!(vessel.occupied_cells().len(), 4);
        for &coord in board.vessel(Class::Battleship).occupied_cells() {
            let cell = board.cell(coord).unwrap();
            assert_eq!(cell.vessel().map(Vessel::class), Some(Class::Battleship));
        }
        assert_eq!(
            board.cell(Coordinate::new(6, 7)).unwrap().vessel().map(Vessel::class),
            None
        );
        assert_eq!(board.fleet().count(), 1);
    }

    #[test]
    fn out_of_bounds_placements_fail_in_both_orientations() {
        let mut board = Board::new();
        for placement in &[
            Placement::horizontal(0, 9),
            Placement::vertical(9, 0),
            Placement::horizontal(-1, 0),
            Placement::vertical(0, -3),
            Placement::horizontal(12, 0),
        ] {
            let err = board.place_vessel(Class::Submarine, *placement).unwrap_err();
            assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
            assert_eq!(err.class(), Some(Class::Submarine));
            assert_eq!(err.placement(), Some(placement));
        }
        assert_eq!(board.fleet().count(), 0);
    }

    #[test]
    fn overlapping_placement_fails_without_mutation() {
        let mut board = Board::new();
        board
            .place_vessel(Class::Carrier, Placement::horizontal(4, 0))
            .unwrap();
        let err = board
            .place_vessel(Class::Destroyer, Placement::vertical(2, 3))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::CellOccupied);
        assert!(!board.vessel(Class::Destroyer).placed());
        assert_eq!(
            board.cell(Coordinate::new(2, 3)).unwrap().vessel().map(Vessel::class),
            None
        );
        assert_eq!(
            board.cell(Coordinate::new(4, 3)).unwrap().vessel().map(Vessel::class),
            Some(Class::Carrier)
        );
    }

    #[test]
    fn vessel_cannot_be_placed_twice() {
        let mut board = Board::new();
        board
            .place_vessel(Class::Patrol, Placement::horizontal(0, 0))
            .unwrap();
        let err = board
            .place_vessel(Class::Patrol, Placement::horizontal(5, 5))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyPlaced);
        assert!(board.cell(Coordinate::new(5, 5)).unwrap().vessel().is_none());
    }

    #[test]
    fn sized_placement_checks_range() {
        let mut board = Board::new();
        for &size in &[0, 6, 100] {
            let err = board
                .place_vessel_sized(size, Placement::horizontal(0, 0))
                .unwrap_err();
            assert_eq!(err.reason(), CannotPlaceReason::SizeOutOfRange);
            assert_eq!(err.class(), None);
        }
        let vessel = board
            .place_vessel_sized(3, Placement::horizontal(0, 0))
            .unwrap();
        assert_eq!(vessel.class(), Class::Destroyer);
    }

    #[test]
    fn validate_placement_is_pure() {
        let board = Board::new();
        assert!(board.validate_placement(5, 0, 5, true));
        assert!(!board.validate_placement(5, 0, 6, true));
        assert!(board.validate_placement(5, 5, 0, false));
        assert!(!board.validate_placement(5, 6, 0, false));
        assert!(!board.validate_placement(1, -1, 0, true));
        assert_eq!(board.fleet().count(), 0);
    }

    #[test]
    fn removal_clears_cells_and_damage() {
        let mut board = Board::new();
        board
            .place_vessel(Class::Submarine, Placement::horizontal(1, 1))
            .unwrap();
        board.receive_attack(1, 1).unwrap();
        let cells = board.remove_vessel(Class::Submarine).unwrap();
        assert_eq!(cells, vec![Coordinate::new(1, 1), Coordinate::new(1, 2)]);
        let vessel = board.vessel(Class::Submarine);
        assert!(vessel.occupied_cells().is_empty());
        assert_eq!(vessel.damage(), 0);
        for coord in cells {
            let cell = board.cell(coord).unwrap();
            assert!(cell.vessel().is_none());
            assert!(!cell.damaged());
        }
        // The cells can be reused afterwards.
        board
            .place_vessel(Class::Destroyer, Placement::horizontal(1, 0))
            .unwrap();
    }

    #[test]
    fn removal_errors() {
        let mut board = Board::new();
        assert_eq!(
            board.remove_vessel(Class::Carrier),
            Err(RemoveError::VesselNotFound(Class::Carrier))
        );
        assert_eq!(board.remove_vessel_sized(7), Err(RemoveError::InvalidVessel(7)));
        assert_eq!(
            board.remove_vessel_sized(1),
            Err(RemoveError::VesselNotFound(Class::Patrol))
        );
    }

    #[test]
    fn hit_damages_vessel_without_recording_miss() {
        let mut board = Board::new();
        board
            .place_vessel(Class::Destroyer, Placement::vertical(3, 3))
            .unwrap();
        assert_eq!(board.receive_attack(4, 3), Ok(Impact::Hit(Class::Destroyer)));
        assert_eq!(board.vessel(Class::Destroyer).damage(), 1);
        assert!(board.recorded_misses().is_empty());
        assert!(board.cell(Coordinate::new(4, 3)).unwrap().damaged());
    }

    #[test]
    fn rehitting_a_damaged_cell_adds_damage() {
        let mut board = Board::new();
        board
            .place_vessel(Class::Destroyer, Placement::horizontal(5, 2))
            .unwrap();
        for expected in 1..=3 {
            assert_eq!(board.receive_attack(5, 3), Ok(Impact::Hit(Class::Destroyer)));
            assert_eq!(board.vessel(Class::Destroyer).damage(), expected);
        }
        assert!(board.vessel(Class::Destroyer).is_destroyed());
        assert_eq!(board.all_vessels_destroyed(), Ok(true));
        assert!(board.recorded_misses().is_empty());
    }

    #[test]
    fn miss_is_recorded_once() {
        let mut board = Board::new();
        board
            .place_vessel(Class::Destroyer, Placement::vertical(3, 3))
            .unwrap();
        assert_eq!(board.receive_attack(0, 0), Ok(Impact::Miss));
        assert_eq!(board.recorded_misses(), &[Coordinate::new(0, 0)]);
        assert_eq!(board.vessel(Class::Destroyer).damage(), 0);
        // Repeated shots are legal and repeat their effect.
        assert_eq!(board.receive_attack(0, 0), Ok(Impact::Miss));
        assert_eq!(board.recorded_misses().len(), 2);
    }

    #[test]
    fn attack_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(
            board.receive_attack(10, 0),
            Err(AttackError::OutOfBounds { row: 10, col: 0 })
        );
        assert_eq!(
            board.receive_attack(0, -1),
            Err(AttackError::OutOfBounds { row: 0, col: -1 })
        );
        assert!(board.recorded_misses().is_empty());
    }

    #[test]
    fn single_patrol_boat_sinks() {
        let mut board = Board::new();
        board
            .place_vessel(Class::Patrol, Placement::horizontal(5, 5))
            .unwrap();
        assert_eq!(board.all_vessels_destroyed(), Ok(false));
        board.receive_attack(5, 5).unwrap();
        assert!(board.vessel(Class::Patrol).is_destroyed());
        assert_eq!(board.all_vessels_destroyed(), Ok(true));
    }

    #[test]
    fn fleet_destroyed_only_when_every_vessel_is() {
        let mut board = Board::new();
        board
            .place_vessel(Class::Patrol, Placement::horizontal(0, 0))
            .unwrap();
        board
            .place_vessel(Class::Submarine, Placement::horizontal(2, 0))
            .unwrap();
        board.receive_attack(0, 0).unwrap();
        board.receive_attack(2, 0).unwrap();
        assert_eq!(board.all_vessels_destroyed(), Ok(false));
        board.receive_attack(2, 1).unwrap();
        assert_eq!(board.all_vessels_destroyed(), Ok(true));
    }

    #[test]
    fn empty_fleet_has_no_vessels() {
        let board = Board::new();
        assert_eq!(board.all_vessels_destroyed(), Err(NoVessels));
    }

    #[test]
    fn reset_restores_fresh_state() {
        let mut board = Board::new();
        board
            .place_vessel(Class::Carrier, Placement::horizontal(0, 0))
            .unwrap();
        board.receive_attack(0, 0).unwrap();
        board.receive_attack(9, 9).unwrap();
        board.reset();
        assert_eq!(board.fleet().count(), 0);
        assert!(board.recorded_misses().is_empty());
        assert!(board.vessels().all(|v| v.damage() == 0 && !v.placed()));
        assert!(board.rows().flatten().all(|cell| cell.vessel().is_none()));
        assert_eq!(board.all_vessels_destroyed(), Err(NoVessels));
    }

    #[test]
    fn markers_follow_cell_state() {
        let mut board = Board::new();
        board
            .place_vessel(Class::Submarine, Placement::horizontal(0, 0))
            .unwrap();
        let origin = Coordinate::new(0, 0);
        assert_eq!(board.markers(origin), BitFlags::from(Marker::Ship));
        board.receive_attack(0, 0).unwrap();
        assert_eq!(board.markers(origin), Marker::Ship | Marker::Hit);
        board.receive_attack(0, 1).unwrap();
        assert_eq!(
            board.markers(origin),
            Marker::Ship | Marker::Hit | Marker::Sunk
        );
        board.receive_attack(3, 3).unwrap();
        assert_eq!(
            board.markers(Coordinate::new(3, 3)),
            BitFlags::from(Marker::Miss)
        );
        assert!(board.markers(Coordinate::new(4, 4)).is_empty());
        assert!(board.markers(Coordinate::new(10, 4)).is_empty());
    }

    #[cfg(feature = "rng_gen")]
    mod random {
        use rand::{rngs::StdRng, SeedableRng};

        use crate::{
            board::{iter_coordinates, Board, CannotPlaceReason},
            vessel::Class,
        };

        #[test]
        fn random_fleet_covers_expected_cells() {
            let mut rng = StdRng::seed_from_u64(42);
            let mut board = Board::new();
            board.place_fleet_randomly(&mut rng).unwrap();
            assert!(board.is_fully_placed());
            let occupied = board
                .rows()
                .flatten()
                .filter(|cell| cell.vessel().is_some())
                .count();
            let total: usize = Class::ALL.iter().map(|class| class.size()).sum();
            assert_eq!(occupied, total);
            for vessel in board.fleet() {
                assert_eq!(vessel.occupied_cells().len(), vessel.size());
            }
        }

        #[test]
        fn random_placement_reports_its_choice() {
            let mut rng = StdRng::seed_from_u64(7);
            let mut board = Board::new();
            let placement = board
                .place_vessel_randomly(Class::Battleship, &mut rng)
                .unwrap();
            assert_eq!(
                board.vessel(Class::Battleship).occupied_cells(),
                placement.run(4).unwrap().as_slice()
            );
        }

        #[test]
        fn random_placement_gives_up_after_attempt_limit() {
            let mut rng = StdRng::seed_from_u64(3);
            let mut board = Board::new();
            // Every run of two or more cells crosses an occupied square.
            for coord in iter_coordinates().flatten() {
                if (coord.row + coord.col) % 2 == 0 {
                    board.grid[&coord].vessel = Some(Class::Patrol);
                }
            }
            let err = board
                .place_randomly_within(Class::Carrier, &mut rng, 25)
                .unwrap_err();
            assert_eq!(err.reason(), CannotPlaceReason::PlacementFailed);
            assert_eq!(err.class(), Some(Class::Carrier));
            assert!(!board.vessel(Class::Carrier).placed());
            assert!(board
                .rows()
                .flatten()
                .all(|cell| cell.vessel().map(|v| v.class()) != Some(Class::Carrier)));
        }

        #[test]
        fn random_placement_of_placed_vessel_fails() {
            let mut rng = StdRng::seed_from_u64(1);
            let mut board = Board::new();
            board.place_vessel_randomly(Class::Patrol, &mut rng).unwrap();
            let err = board
                .place_vessel_randomly(Class::Patrol, &mut rng)
                .unwrap_err();
            assert_eq!(err.reason(), CannotPlaceReason::AlreadyPlaced);
        }
    }
}
