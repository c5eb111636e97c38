use std::fmt::{Display, Formatter};

use crate::ai::heuristic::select_reply;
use crate::board::{Cell, Move, Player};
use crate::state::State;

/// The rules that decide how a click on a cell changes the state.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Variant {
    /// The human plays `Red`, the computer immediately answers as `Green`.
    SinglePlayer,
    /// Two humans take turns, `Red` first.
    TwoPlayer,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::SinglePlayer, Variant::TwoPlayer];

    /// The player whose click is handled on `state`.
    pub fn player_to_move(self, state: &State) -> Player {
        match self {
            Variant::SinglePlayer => Player::Red,
            Variant::TwoPlayer => state.next_player(),
        }
    }

    /// The state reached when `cell` is clicked on `state`, including the computer reply if any.
    /// Panics if `cell` is already taken.
    pub fn successor(self, state: &State, cell: Cell) -> State {
        let mut next = state.clone_and_play(Move::new(self.player_to_move(state), cell));

        if self == Variant::SinglePlayer {
            if let Some((_, reply)) = select_reply(&next) {
                next.play(Move::new(Player::Green, reply));
            }
        }

        next
    }

    /// For every cell the state a click leads to. Taken cells and cells on a finished board
    /// lead back to `state` itself.
    pub fn next_states(self, state: &State) -> [State; 9] {
        let done = state.is_done();
        let mut result: [State; 9] = Default::default();
        for (slot, cell) in result.iter_mut().zip(Cell::all()) {
            *slot = if !done && state.is_empty_cell(cell) {
                self.successor(state, cell)
            } else {
                state.clone()
            };
        }
        result
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::SinglePlayer => write!(f, "1-player"),
            Variant::TwoPlayer => write!(f, "2-player"),
        }
    }
}
