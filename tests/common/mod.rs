#![allow(dead_code)]

use internal_iterator::InternalIterator;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro64StarStar;

use css_ttt::board::{Cell, Move};
use css_ttt::state::State;

pub fn consistent_rng() -> impl Rng {
    Xoroshiro64StarStar::seed_from_u64(0)
}

pub fn state(s: &str) -> State {
    s.parse()
        .unwrap_or_else(|e| panic!("Test state {:?} should parse: {}", s, e))
}

pub fn available(state: &State) -> Vec<Cell> {
    state.available_cells().collect()
}

/// Play random alternating moves from the empty board until the game is done,
/// returning every state along the way, including the empty start and the final state.
pub fn random_game(rng: &mut impl Rng) -> Vec<State> {
    let mut current = State::empty();
    let mut result = vec![current.clone()];

    loop {
        let cells = available(&current);
        let cell = match cells.choose(rng) {
            Some(&cell) => cell,
            None => break,
        };
        current.play(Move::new(current.next_player(), cell));
        result.push(current.clone());
    }

    result
}
