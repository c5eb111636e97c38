use std::fmt::{Debug, Display, Formatter};
use std::iter::Map;
use std::ops::RangeInclusive;

/// One of the two players.
///
/// `Red` always moves first: it is the human in the single player game.
/// `Green` is the computer in the single player game.
/// The declaration order matches the order of the tags, so sorting moves sorts their textual form.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Player {
    Green,
    Red,
}

/// The absolute outcome for a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    WonBy(Player),
    Draw,
}

/// A cell on the board, numbered 1 to 9 in row-major order:
/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 9
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Cell(u8);

/// A single move token like `r5`: the player and the cell they took.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Move {
    pub player: Player,
    pub cell: Cell,
}

/// The 8 winning triples, in the order they are scanned: rows, columns, then diagonals.
pub const LINES: [[Cell; 3]; 8] = [
    [Cell::new(1), Cell::new(2), Cell::new(3)],
    [Cell::new(4), Cell::new(5), Cell::new(6)],
    [Cell::new(7), Cell::new(8), Cell::new(9)],
    [Cell::new(1), Cell::new(4), Cell::new(7)],
    [Cell::new(2), Cell::new(5), Cell::new(8)],
    [Cell::new(3), Cell::new(6), Cell::new(9)],
    [Cell::new(1), Cell::new(5), Cell::new(9)],
    [Cell::new(3), Cell::new(5), Cell::new(7)],
];

impl Player {
    /// Both players, sorted by tag.
    pub const BOTH: [Player; 2] = [Player::Green, Player::Red];

    pub fn other(self) -> Player {
        match self {
            Player::Green => Player::Red,
            Player::Red => Player::Green,
        }
    }

    /// The single character used for this player in move tokens and css classes.
    pub fn tag(self) -> char {
        match self {
            Player::Green => 'g',
            Player::Red => 'r',
        }
    }

    pub fn from_tag(tag: char) -> Option<Player> {
        match tag {
            'g' => Some(Player::Green),
            'r' => Some(Player::Red),
            _ => None,
        }
    }
}

impl Outcome {
    /// The suffix of the `winner-*` css class.
    pub fn to_char(self) -> char {
        match self {
            Outcome::WonBy(player) => player.tag(),
            Outcome::Draw => 'd',
        }
    }
}

impl Cell {
    pub const CENTER: Cell = Cell::new(5);
    pub const CORNERS: [Cell; 4] = [Cell::new(1), Cell::new(3), Cell::new(7), Cell::new(9)];
    pub const EDGES: [Cell; 4] = [Cell::new(2), Cell::new(4), Cell::new(6), Cell::new(8)];

    /// Panics if `number` is not in `1..=9`.
    pub const fn new(number: u8) -> Cell {
        assert!(number >= 1 && number <= 9, "Cell number must be in 1..=9");
        Cell(number)
    }

    pub fn try_new(number: u8) -> Option<Cell> {
        if (1..=9).contains(&number) {
            Some(Cell(number))
        } else {
            None
        }
    }

    /// All cells in ascending order.
    pub fn all() -> Map<RangeInclusive<u8>, fn(u8) -> Cell> {
        let f: fn(u8) -> Cell = Cell;
        (1..=9).map(f)
    }

    /// The number of this cell, in `1..=9`.
    pub fn number(self) -> u8 {
        self.0
    }

    /// The zero-based index of this cell, in `0..9`.
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl Move {
    pub fn new(player: Player, cell: Cell) -> Self {
        Move { player, cell }
    }
}

impl Debug for Cell {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.player.tag(), self.cell.0)
    }
}
