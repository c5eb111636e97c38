//! Hand-written rules for the computer's reply.
//!
//! The computer is always [Player::Green] and only ever moves directly after the human ([Player::Red]).
//! The rules in [RULES] are tried in order and the first one that applies picks the reply.
//!
//! # Example
//!
//! ```
//! use css_ttt::ai::heuristic::{select_reply, Rule};
//! use css_ttt::board::Cell;
//! use css_ttt::state::State;
//!
//! // the human took the center, so the computer takes a corner
//! let state: State = "r5".parse().unwrap();
//! assert_eq!(select_reply(&state), Some((Rule::RespondOpen, Cell::new(9))));
//! ```
use tracing::debug;

use crate::board::{Cell, Player, LINES};
use crate::state::State;

const HUMAN: Player = Player::Red;
const COMPUTER: Player = Player::Green;

/// Cells tried by [Rule::Fallback]: center, corners, edges.
pub const PREFERENCE: [Cell; 9] = [
    Cell::CENTER,
    Cell::CORNERS[0],
    Cell::CORNERS[1],
    Cell::CORNERS[2],
    Cell::CORNERS[3],
    Cell::EDGES[0],
    Cell::EDGES[1],
    Cell::EDGES[2],
    Cell::EDGES[3],
];

/// A single decision rule of the computer opponent.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Rule {
    /// Reply to the opening move: the center, or a corner if the center is taken.
    RespondOpen,
    /// Fixed answers to the second human move that would otherwise let the human build a fork.
    ForkBlock,
    /// Complete a line of our own.
    TakeWin,
    /// Take the last open cell of a line the human is about to complete.
    BlockWin,
    /// The first empty cell in [PREFERENCE] order.
    Fallback,
}

/// All rules, in the order they are evaluated.
pub const RULES: [Rule; 5] = [
    Rule::RespondOpen,
    Rule::ForkBlock,
    Rule::TakeWin,
    Rule::BlockWin,
    Rule::Fallback,
];

impl Rule {
    /// The cell this rule would play on `state`, if it applies.
    pub fn apply(self, state: &State) -> Option<Cell> {
        match self {
            Rule::RespondOpen => respond_open(state),
            Rule::ForkBlock => fork_block(state),
            Rule::TakeWin => complete_line(state, COMPUTER),
            Rule::BlockWin => complete_line(state, HUMAN),
            Rule::Fallback => PREFERENCE.iter().copied().find(|&cell| state.is_empty_cell(cell)),
        }
    }
}

/// Pick the computer's reply on `state`, which already includes the human's latest move.
///
/// Returns `None` only if the game is already decided (including a full board).
/// The returned cell is always empty.
pub fn select_reply(state: &State) -> Option<(Rule, Cell)> {
    if state.is_done() {
        return None;
    }

    let (rule, cell) = RULES
        .iter()
        .find_map(|&rule| rule.apply(state).map(|cell| (rule, cell)))
        .unwrap_or_else(|| panic!("Undecided state {} must have an empty cell", state));

    debug_assert!(state.is_empty_cell(cell), "{:?} picked taken cell {} in {}", rule, cell, state);
    debug!(state = %state, ?rule, %cell, "selected reply");
    Some((rule, cell))
}

fn respond_open(state: &State) -> Option<Cell> {
    if state.count_of(HUMAN) != 1 {
        return None;
    }

    let cell = if state.holds(HUMAN, Cell::CENTER) {
        Cell::new(9)
    } else {
        Cell::CENTER
    };
    Some(cell).filter(|&cell| state.is_empty_cell(cell))
}

fn fork_block(state: &State) -> Option<Cell> {
    if state.count_of(HUMAN) != 2 {
        return None;
    }

    let holds_pair = |a: u8, b: u8| state.holds(HUMAN, Cell::new(a)) && state.holds(HUMAN, Cell::new(b));

    // opposite corners around our center: any corner lets them fork, an edge forces them to block
    if state.holds(COMPUTER, Cell::CENTER) && (holds_pair(1, 9) || holds_pair(3, 7)) {
        return Some(Cell::new(2)).filter(|&cell| state.is_empty_cell(cell));
    }

    // center and the corner opposite ours: take a corner that lines up with ours
    if state.holds(COMPUTER, Cell::new(9)) && holds_pair(1, 5) {
        return Some(Cell::new(3)).filter(|&cell| state.is_empty_cell(cell));
    }

    None
}

/// The first line (in [LINES] order) that `player` completes with one more move,
/// where the other player holds none of the cells.
fn complete_line(state: &State, player: Player) -> Option<Cell> {
    LINES.iter().find_map(|line| {
        if line.iter().any(|&cell| state.holds(player.other(), cell)) {
            return None;
        }

        let mut missing = line.iter().copied().filter(|&cell| !state.holds(player, cell));
        match (missing.next(), missing.next()) {
            (Some(cell), None) => Some(cell),
            _ => None,
        }
    })
}
