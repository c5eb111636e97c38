//! Game states and their canonical string form.
//!
//! A state is the set of moves played so far. Different move orders that reach the same board
//! are the same state, so the canonical form sorts the move tokens and joins them with `-`.
//!
//! # Example
//!
//! ```
//! use css_ttt::state::{normalize, State};
//! use css_ttt::board::{Outcome, Player};
//!
//! assert_eq!(normalize("r9 g5 r1"), "g5-r1-r9");
//!
//! let state: State = "r1 r2 r3 g5 g9".parse().unwrap();
//! assert_eq!(state.to_string(), "g5-g9-r1-r2-r3");
//! assert_eq!(state.outcome(), Some(Outcome::WonBy(Player::Red)));
//! ```
use std::fmt::{Debug, Display, Formatter};
use std::ops::ControlFlow;
use std::str::FromStr;

use internal_iterator::InternalIterator;
use itertools::Itertools;
use nom::Finish;

use crate::board::{Cell, Move, Outcome, Player, LINES};

/// The delimiter between tokens in the canonical form.
pub const DELIMITER: char = '-';

/// Fewest moves that can contain a completed line.
pub const MIN_MOVES_FOR_WIN: usize = 5;

/// Normalize a raw state string: split on spaces or `-`, drop empty tokens, sort and join with `-`.
///
/// This is idempotent and independent of the token order. It does not validate the tokens.
pub fn normalize(raw: &str) -> String {
    raw.split(|c| c == ' ' || c == DELIMITER)
        .filter(|token| !token.is_empty())
        .sorted()
        .join(&DELIMITER.to_string())
}

/// The set of moves played so far.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
pub struct State {
    tiles: [Option<Player>; 9],
}

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("invalid state {input:?}: {reason}")]
pub struct InvalidState {
    pub input: String,
    pub reason: &'static str,
}

impl State {
    pub fn empty() -> Self {
        State::default()
    }

    pub fn from_moves(moves: impl IntoIterator<Item = Move>) -> Result<State, InvalidState> {
        let mut state = State::empty();
        for mv in moves {
            if state.tile(mv.cell).is_some() {
                return Err(InvalidState {
                    input: mv.to_string(),
                    reason: "cell played twice",
                });
            }
            state.tiles[mv.cell.index()] = Some(mv.player);
        }
        Ok(state)
    }

    pub fn tile(&self, cell: Cell) -> Option<Player> {
        self.tiles[cell.index()]
    }

    pub fn is_empty_cell(&self, cell: Cell) -> bool {
        self.tile(cell).is_none()
    }

    pub fn holds(&self, player: Player, cell: Cell) -> bool {
        self.tile(cell) == Some(player)
    }

    pub fn move_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_some()).count()
    }

    pub fn count_of(&self, player: Player) -> usize {
        self.tiles.iter().filter(|&&t| t == Some(player)).count()
    }

    pub fn is_full(&self) -> bool {
        self.tiles.iter().all(|t| t.is_some())
    }

    pub fn is_start(&self) -> bool {
        self.tiles.iter().all(|t| t.is_none())
    }

    /// The player to move when turns alternate, `Red` starting.
    pub fn next_player(&self) -> Player {
        if self.move_count() % 2 == 0 {
            Player::Red
        } else {
            Player::Green
        }
    }

    /// The moves of this state in canonical order.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        Player::BOTH.into_iter().flat_map(move |player| {
            Cell::all()
                .filter(move |&cell| self.holds(player, cell))
                .map(move |cell| Move::new(player, cell))
        })
    }

    /// Whether `player` holds all three cells of some winning line.
    pub fn has_line(&self, player: Player) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&cell| self.holds(player, cell)))
    }

    /// The outcome of this state, `None` while the game is still going.
    ///
    /// A completed line by `Red` is checked before one by `Green`,
    /// and a draw is only declared once all cells are filled without a line.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.move_count() < MIN_MOVES_FOR_WIN {
            return None;
        }

        if let Some(&player) = [Player::Red, Player::Green].iter().find(|&&p| self.has_line(p)) {
            Some(Outcome::WonBy(player))
        } else if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    pub fn is_done(&self) -> bool {
        self.outcome().is_some()
    }

    /// Iterator over the cells that can still be played, in ascending order.
    /// Yields nothing when the game is done.
    pub fn available_cells(&self) -> AvailableCells<'_> {
        AvailableCells { state: self }
    }

    /// Play the move `mv`, modifying this state. Panics if the cell is already taken.
    pub fn play(&mut self, mv: Move) {
        assert!(
            self.is_empty_cell(mv.cell),
            "Cell {} already taken in state {}",
            mv.cell,
            self
        );
        self.tiles[mv.cell.index()] = Some(mv.player);
    }

    /// Clone this state, play `mv` on it and return the new state.
    pub fn clone_and_play(&self, mv: Move) -> State {
        let mut next = self.clone();
        next.play(mv);
        next
    }
}

/// See [State::available_cells].
#[derive(Debug)]
pub struct AvailableCells<'a> {
    state: &'a State,
}

impl<'a> InternalIterator for AvailableCells<'a> {
    type Item = Cell;

    fn try_for_each<R, F>(self, mut f: F) -> ControlFlow<R>
    where
        F: FnMut(Self::Item) -> ControlFlow<R>,
    {
        if self.state.is_done() {
            return ControlFlow::Continue(());
        }
        for cell in Cell::all() {
            if self.state.is_empty_cell(cell) {
                if let ControlFlow::Break(r) = f(cell) {
                    return ControlFlow::Break(r);
                }
            }
        }
        ControlFlow::Continue(())
    }
}

mod parse {
    use nom::character::complete::one_of;
    use nom::combinator::{eof, map, map_opt};
    use nom::multi::many0;
    use nom::sequence::{pair, preceded, terminated};
    use nom::IResult;

    use super::*;

    fn separators(input: &str) -> IResult<&str, Vec<char>> {
        many0(one_of(" -"))(input)
    }

    fn token(input: &str) -> IResult<&str, Move> {
        map(
            pair(
                map_opt(one_of("rg"), Player::from_tag),
                map_opt(one_of("123456789"), |c: char| {
                    c.to_digit(10).and_then(|d| Cell::try_new(d as u8))
                }),
            ),
            |(player, cell)| Move::new(player, cell),
        )(input)
    }

    pub(super) fn tokens(input: &str) -> IResult<&str, Vec<Move>> {
        terminated(many0(preceded(separators, token)), terminated(separators, eof))(input)
    }
}

impl FromStr for State {
    type Err = InvalidState;

    /// Parse a raw or canonical state, tokens separated by spaces or `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let moves = match parse::tokens(s).finish() {
            Ok((_, moves)) => moves,
            Err(_) => {
                return Err(InvalidState {
                    input: s.to_owned(),
                    reason: "expected tokens like 'r5' or 'g1'",
                })
            }
        };

        State::from_moves(moves).map_err(|e| InvalidState {
            input: s.to_owned(),
            reason: e.reason,
        })
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.moves().join(&DELIMITER.to_string()))
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "State({:?})", self.to_string())
    }
}
