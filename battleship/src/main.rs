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

use std::{
    fmt,
    io::{self, BufRead, Write},
};

use broadside::{
    board::{
        iter_coordinates, parse_target, Board, CannotPlaceReason, Coordinate, Marker, Placement,
        GRID_SIZE,
    },
    combatant::{Combatant, CombatantKind, DEFAULT_NAME},
    game::{Match, Side, TurnError, TurnOutcome, DEFAULT_OPPONENT_NAME},
    vessel::Class,
};
use clap::{value_t, App, Arg, ArgMatches};
use log::{debug, info};
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use regex::Regex;

fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Simple command line battleship game.")
        .arg(
            Arg::with_name("first_player")
                .short("f")
                .long("first_player")
                .value_name("FIRST_PLAYER")
                .help("pre-specify which player goes first")
                .takes_value(true)
                .possible_values(&["human", "me", "computer", "bot", "random", "rand"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("name")
                .short("n")
                .long("name")
                .value_name("NAME")
                .help("your display name")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("opponent")
                .short("o")
                .long("opponent")
                .value_name("NAME")
                .help("display name of the computer player")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed for random placement and computer fire")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("auto_place")
                .short("a")
                .long("auto_place")
                .help("place your ships randomly instead of choosing positions"),
        )
        .get_matches();
    let settings = Settings::from_matches(&matches);
    debug!("starting with {:?}", settings);

    let stdin = std::io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let human = choose_side(&settings, &mut input, &mut rng)?;
    let player = Combatant::new(settings.name.clone(), CombatantKind::Human);
    let bot = Combatant::new(settings.opponent.clone(), CombatantKind::Automated);
    let mut game = match human {
        Side::A => Match::new(player, bot),
        Side::B => Match::new(bot, player),
    };

    loop {
        if settings.auto_place {
            place_randomly(&mut rng, game.combatant_mut(human).board_mut())?;
        } else {
            choose_placements(&mut rng, game.combatant_mut(human).board_mut(), &mut input)?;
        }
        place_randomly(&mut rng, game.combatant_mut(human.opponent()).board_mut())?;

        let winner = play(&mut game, human, &mut rng, &mut input)?;
        println!();
        if winner == human {
            println!("You sank the enemy fleet. You win!");
        } else {
            println!("Your fleet has been destroyed. You lose.");
        }
        println!();
        println!("Enemy board:");
        show_revealed_board(game.combatant(human.opponent()).board());
        println!();
        println!("Your board:");
        show_revealed_board(game.combatant(human).board());
        let player = game.combatant(human);
        println!();
        println!(
            "Record: {} won, {} lost",
            player.victories(),
            player.defeats()
        );

        let again = input.read_input_lower("Play again? (y/N)", |input| match input {
            "yes" | "y" => Some(true),
            "no" | "n" | "" => Some(false),
            _ => {
                println!("Invalid selection.");
                None
            }
        })?;
        if !again {
            break;
        }
        game.clear_match();
    }
    Ok(())
}

/// Options collected from the command line.
#[derive(Debug)]
struct Settings {
    /// Who should move first, if chosen on the command line.
    first_player: Option<FirstPlayer>,
    name: String,
    opponent: String,
    seed: Option<u64>,
    auto_place: bool,
}

#[derive(Debug, Copy, Clone)]
enum FirstPlayer {
    Human,
    Computer,
    Random,
}

impl Settings {
    fn from_matches(matches: &ArgMatches) -> Self {
        let first_player = matches
            .value_of("first_player")
            .map(|choice| match choice.to_ascii_lowercase().as_str() {
                "human" | "me" => FirstPlayer::Human,
                "computer" | "bot" => FirstPlayer::Computer,
                "random" | "rand" => FirstPlayer::Random,
                _ => unreachable!(),
            });
        let seed = if matches.is_present("seed") {
            Some(value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit()))
        } else {
            None
        };
        Self {
            first_player,
            name: matches.value_of("name").unwrap_or(DEFAULT_NAME).to_owned(),
            opponent: matches
                .value_of("opponent")
                .unwrap_or(DEFAULT_OPPONENT_NAME)
                .to_owned(),
            seed,
            auto_place: matches.is_present("auto_place"),
        }
    }
}

/// Choose which [`Side`] the human plays based on either args or cli input. Side A
/// always moves first.
fn choose_side<B: BufRead>(
    settings: &Settings,
    input: &mut InputReader<B>,
    rng: &mut impl Rng,
) -> io::Result<Side> {
    Ok(match settings.first_player {
        Some(FirstPlayer::Human) => Side::A,
        Some(FirstPlayer::Computer) => Side::B,
        Some(FirstPlayer::Random) => rng.gen(),
        None => input.read_input_lower("Do you want to go first? (Y/n)", |input| match input {
            "yes" | "y" | "first" | "1" | "1st" | "" => Some(Side::A),
            "no" | "n" | "second" | "2" | "2nd" => Some(Side::B),
            _ => {
                println!("Invalid selection.");
                None
            }
        })?,
    })
}

/// Vessel named in a command, either by class or by size.
#[derive(Debug, Copy, Clone)]
enum VesselArg {
    Class(Class),
    Size(usize),
}

impl VesselArg {
    fn parse(token: &str) -> Option<Self> {
        if let Ok(size) = token.parse() {
            return Some(VesselArg::Size(size));
        }
        Some(VesselArg::Class(match token {
            "cv" | "carrier" => Class::Carrier,
            "bb" | "battleship" => Class::Battleship,
            "dd" | "destroyer" => Class::Destroyer,
            "ss" | "sub" | "submarine" => Class::Submarine,
            "pt" | "patrol" => Class::Patrol,
            _ => return None,
        }))
    }
}

/// Choose placements for all vessels using input from the player.
fn choose_placements(
    rng: &mut impl Rng,
    board: &mut Board,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<()> {
    enum Command {
        Done,
        Place(VesselArg, Placement),
        Remove(VesselArg),
        Clear,
        RandomizeRest,
        Help,
    }
    /// Matcher for commands with args.
    static PLACE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:place|put)\s+
    (?P<vessel>\w+)
    (?:\s+(?:at|on|to|->|=>))?
    (?P<placement>.*)$",
        )
        .unwrap()
    });
    static REMOVE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:remove|un-?place)\s+
    (?P<vessel>\w+)$",
        )
        .unwrap()
    });

    println!();
    println!("Place ships. Type help or ? for commands.");
    loop {
        println!();
        if board.is_fully_placed() {
            println!("All ships placed, type done to start the game");
        } else {
            let pending: Vec<String> = board
                .pending()
                .map(|class| format!("{} ({})", class, class.size()))
                .collect();
            println!("Remaining ships to place: {}", pending.join(", "));
        }
        println!("Your current board setup:");
        show_revealed_board(board);
        println!();

        let cmd = input.read_input_lower(">", |input| match input {
            "?" | "help" | "h" => Some(Command::Help),
            "randomize" | "rand" | "random" => Some(Command::RandomizeRest),
            "done" | "start" => Some(Command::Done),
            "clear" | "remove all" => Some(Command::Clear),
            other => {
                if let Some(captures) = PLACE.captures(other) {
                    let vessel = captures.name("vessel").unwrap().as_str();
                    let vessel = match VesselArg::parse(vessel) {
                        Some(vessel) => vessel,
                        None => {
                            println!("invalid ship: {}, choose \"carrier\", \"battleship\", \"destroyer\", \"submarine\", \"patrol\", or a size", vessel);
                            return None;
                        }
                    };
                    match captures.name("placement").unwrap().as_str().parse() {
                        Ok(placement) => Some(Command::Place(vessel, placement)),
                        Err(err) => {
                            println!("{}", err);
                            None
                        }
                    }
                } else if let Some(captures) = REMOVE.captures(other) {
                    let vessel = captures.name("vessel").unwrap().as_str();
                    match VesselArg::parse(vessel) {
                        Some(vessel) => Some(Command::Remove(vessel)),
                        None => {
                            println!("invalid ship: {}", vessel);
                            None
                        }
                    }
                } else {
                    println!(
                        "Invalid ship-placement command \"{}\". Use '?' for help",
                        other
                    );
                    None
                }
            }
        })?;

        match cmd {
            Command::Done if board.is_fully_placed() => break,
            Command::Done => println!("You must place all your ships first!"),
            Command::Place(vessel, placement) => {
                let placed_class = match vessel {
                    VesselArg::Class(class) => Some(class),
                    VesselArg::Size(size) => Class::from_size(size),
                }
                .filter(|&class| board.vessel(class).placed());
                let placed = match placed_class {
                    Some(class) => move_vessel(board, class, placement)?,
                    None => match vessel {
                        VesselArg::Class(class) => board.place_vessel(class, placement),
                        VesselArg::Size(size) => board.place_vessel_sized(size, placement),
                    }
                    .map(|_| ())
                    .map_err(|err| err.reason()),
                };
                if let Err(reason) = placed {
                    println!("Invalid placement: {}.", reason);
                }
            }
            Command::Remove(vessel) => {
                let removed = match vessel {
                    VesselArg::Class(class) => board.remove_vessel(class),
                    VesselArg::Size(size) => board.remove_vessel_sized(size),
                };
                if let Err(err) = removed {
                    println!("{}", err);
                }
            }
            Command::Clear => board.reset(),
            Command::RandomizeRest => place_randomly(rng, board)?,
            Command::Help => {
                println!(
                    "Available Commands:
    done                            if all ships are placed, start the game.
    place <ship> <row> <col> [dir]  place the ship with its first cell at the given row and
        column. Rows and columns count from 0. Possible directions are \"h\" (rightward, the
        default) and \"v\" (downward). See below for ships.
    remove <ship>                   clear the placement of the specified ship.
    clear                           clears all ship placements.
    randomize                       randomize the placements of the remaining ships.

Available Ships (a size may be given instead of a name):
    \"carrier\" (\"cv\", 5)
    \"battleship\" (\"bb\", 4)
    \"destroyer\" (\"dd\", 3)
    \"submarine\" (\"ss\", 2)
    \"patrol\" (\"pt\", 1)",
                );
            }
        }
    }
    Ok(())
}

/// Randomly place every vessel on the board that is not yet placed.
/// Move an already placed vessel. The new position is checked against the rest of the
/// fleet first, so a rejected move keeps the old one.
fn move_vessel(
    board: &mut Board,
    class: Class,
    placement: Placement,
) -> io::Result<Result<(), CannotPlaceReason>> {
    let run = match placement.run(class.size()) {
        Some(run) => run,
        None => return Ok(Err(CannotPlaceReason::OutOfBounds)),
    };
    let blocked = run.into_iter().any(|coord| {
        board
            .cell(coord)
            .and_then(|cell| cell.vessel())
            .map_or(false, |vessel| vessel.class() != class)
    });
    if blocked {
        return Ok(Err(CannotPlaceReason::CellOccupied));
    }
    board
        .remove_vessel(class)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    Ok(board
        .place_vessel(class, placement)
        .map(|_| ())
        .map_err(|err| err.reason()))
}

fn place_randomly(rng: &mut impl Rng, board: &mut Board) -> io::Result<()> {
    board
        .place_fleet_randomly(rng)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))
}

/// Run turns until one side wins, returning the winner.
fn play(
    game: &mut Match,
    human: Side,
    rng: &mut impl Rng,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<Side> {
    info!(
        "{} vs {}",
        game.combatant(Side::A).name(),
        game.combatant(Side::B).name()
    );
    loop {
        let side = game.current_side();
        let (row, col) = if game.combatant(side).kind() == CombatantKind::Automated {
            computer_target(game.combatant(side), rng)
        } else {
            println!();
            println!("Enemy board:");
            show_obfuscated_board(game.combatant(human.opponent()).board());
            println!();
            println!("Your board:");
            show_revealed_board(game.combatant(human).board());
            println!();
            input.read_input("Fire at (e.g. B7 or \"6 1\"):", |input| {
                match parse_target(input) {
                    Ok(target) => Some(target),
                    Err(err) => {
                        println!("{}", err);
                        None
                    }
                }
            })?
        };
        let shooter = game.combatant(side).name().to_owned();
        let label = Coordinate::checked(row, col)
            .and_then(|coord| coord.label())
            .unwrap_or_default();
        match game.take_turn(row, col) {
            Ok(TurnOutcome::Miss) => println!("{} fires at {}: miss.", shooter, label),
            Ok(TurnOutcome::Hit(_)) => println!("{} fires at {}: hit!", shooter, label),
            Ok(TurnOutcome::Sunk(class)) | Ok(TurnOutcome::Victory(class)) => {
                println!("{} fires at {}: {} sunk!", shooter, label, class)
            }
            Err(TurnError::Attack(err)) => println!("{}", err),
            Err(err) => return Err(io::Error::new(io::ErrorKind::Other, err)),
        }
        if let Ok(Some(winner)) = game.winner() {
            return Ok(winner);
        }
    }
}

/// Pick a random cell the computer has not fired at yet.
fn computer_target(computer: &Combatant, rng: &mut impl Rng) -> (isize, isize) {
    let open: Vec<Coordinate> = iter_coordinates()
        .flatten()
        .filter(|&coord| !computer.has_fired_at(coord))
        .collect();
    let coord = open
        .choose(rng)
        .copied()
        .unwrap_or_else(|| Coordinate::new(0, 0));
    (coord.row as isize, coord.col as isize)
}

/// Print out the fully-revealed board.
fn show_revealed_board(board: &Board) {
    enum RevealedCell {
        Empty,
        Shot,
        NotShot(ShipAbbreviation),
        Hit(ShipAbbreviation),
        Sunk(ShipAbbreviation),
    }
    impl fmt::Display for RevealedCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                RevealedCell::Empty => f.pad("~~"),
                RevealedCell::Shot => f.pad("x"),
                RevealedCell::NotShot(ship) => fmt::Display::fmt(ship, f),
                RevealedCell::Hit(ship) => f.pad(&format!("x{}", ship.abbrev())),
                RevealedCell::Sunk(ship) => f.pad(&format!("X{}", ship.abbrev())),
            }
        }
    }
    show_board(iter_coordinates().map(|row| {
        row.map(|coord| {
            let markers = board.markers(coord);
            match board.cell(coord).and_then(|cell| cell.vessel()) {
                None if markers.contains(Marker::Miss) => RevealedCell::Shot,
                None => RevealedCell::Empty,
                Some(vessel) => {
                    let abbrev = ShipAbbreviation(vessel.class());
                    if markers.contains(Marker::Sunk) {
                        RevealedCell::Sunk(abbrev)
                    } else if markers.contains(Marker::Hit) {
                        RevealedCell::Hit(abbrev)
                    } else {
                        RevealedCell::NotShot(abbrev)
                    }
                }
            }
        })
    }))
}

/// Print out the obfuscated board, hiding vessels that have not been hit.
fn show_obfuscated_board(board: &Board) {
    enum HiddenCell {
        NotShot,
        Miss,
        Hit,
        Sunk(ShipAbbreviation),
    }
    impl fmt::Display for HiddenCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                HiddenCell::NotShot => f.pad("~~"),
                HiddenCell::Miss => f.pad("x"),
                HiddenCell::Hit => f.pad("X"),
                HiddenCell::Sunk(ship) => f.pad(&format!("X{}", ship.abbrev())),
            }
        }
    }
    show_board(iter_coordinates().map(|row| {
        row.map(|coord| {
            let markers = board.markers(coord);
            if markers.contains(Marker::Sunk) {
                // Sunk implies a vessel occupies the cell.
                match board.cell(coord).and_then(|cell| cell.vessel()) {
                    Some(vessel) => HiddenCell::Sunk(ShipAbbreviation(vessel.class())),
                    None => HiddenCell::Hit,
                }
            } else if markers.contains(Marker::Hit) {
                HiddenCell::Hit
            } else if markers.contains(Marker::Miss) {
                HiddenCell::Miss
            } else {
                HiddenCell::NotShot
            }
        })
    }))
}

/// Show the board by printing the grid, labelled the same way targets are entered.
/// Takes an iterator over the rows of iterators over the items.
fn show_board(rows: impl Iterator<Item = impl Iterator<Item = impl fmt::Display>>) {
    print!("    ");
    for col in 0..GRID_SIZE {
        print!("{:^4}", (b'A' + col as u8) as char);
    }
    println!();
    for (i, row) in rows.enumerate() {
        print!("{:>2}  ", i + 1);
        for cell in row {
            print!("{:^4}", cell);
        }
        println!();
    }
}

/// Display helper that prints the vessel's class abbreviation.
struct ShipAbbreviation(Class);

impl ShipAbbreviation {
    fn abbrev(&self) -> &'static str {
        match self.0 {
            Class::Carrier => "cv",
            Class::Battleship => "bb",
            Class::Destroyer => "dd",
            Class::Submarine => "ss",
            Class::Patrol => "pt",
        }
    }
}

impl fmt::Display for ShipAbbreviation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.abbrev())
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Repeatedly tries to read input until the input checker returns `Some`.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_two_vessels() -> Board {
        let mut board = Board::new();
        board
            .place_vessel(Class::Destroyer, Placement::horizontal(0, 0))
            .unwrap();
        board
            .place_vessel(Class::Submarine, Placement::vertical(4, 4))
            .unwrap();
        board
    }

    #[test]
    fn move_relocates_a_placed_vessel() {
        let mut board = board_with_two_vessels();
        let result = move_vessel(&mut board, Class::Destroyer, Placement::vertical(6, 0));
        assert_eq!(result.unwrap(), Ok(()));
        assert_eq!(
            board.vessel(Class::Destroyer).occupied_cells(),
            &[
                Coordinate::new(6, 0),
                Coordinate::new(7, 0),
                Coordinate::new(8, 0)
            ]
        );
        assert!(board.cell(Coordinate::new(0, 0)).unwrap().vessel().is_none());
    }

    #[test]
    fn move_may_overlap_its_own_cells() {
        let mut board = board_with_two_vessels();
        let result = move_vessel(&mut board, Class::Destroyer, Placement::horizontal(0, 1));
        assert_eq!(result.unwrap(), Ok(()));
        assert_eq!(
            board.vessel(Class::Destroyer).occupied_cells()[0],
            Coordinate::new(0, 1)
        );
    }

    #[test]
    fn rejected_move_keeps_old_position() {
        let mut board = board_with_two_vessels();
        let before = board.vessel(Class::Destroyer).occupied_cells().to_vec();

        let blocked = move_vessel(&mut board, Class::Destroyer, Placement::horizontal(5, 3));
        assert_eq!(blocked.unwrap(), Err(CannotPlaceReason::CellOccupied));
        assert_eq!(board.vessel(Class::Destroyer).occupied_cells(), &before[..]);

        let outside = move_vessel(&mut board, Class::Destroyer, Placement::horizontal(0, 8));
        assert_eq!(outside.unwrap(), Err(CannotPlaceReason::OutOfBounds));
        assert_eq!(board.vessel(Class::Destroyer).occupied_cells(), &before[..]);
        assert_eq!(board.fleet().count(), 2);
    }
}
