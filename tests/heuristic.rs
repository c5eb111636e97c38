use internal_iterator::InternalIterator;

use css_ttt::ai::heuristic::{select_reply, Rule, PREFERENCE, RULES};
use css_ttt::board::{Cell, Move, Player};
use css_ttt::state::State;
use css_ttt::util::state_space::StateSpace;
use css_ttt::variant::Variant;

use common::{consistent_rng, random_game, state};

mod common;

fn reply(s: &str) -> Option<(Rule, Cell)> {
    select_reply(&state(s))
}

#[test]
fn respond_to_opening() {
    assert_eq!(reply("r5"), Some((Rule::RespondOpen, Cell::new(9))));
    for corner_or_edge in [1, 2, 3, 4, 6, 7, 8, 9] {
        let s = format!("r{}", corner_or_edge);
        assert_eq!(reply(&s), Some((Rule::RespondOpen, Cell::new(5))), "after {}", s);
    }
}

#[test]
fn fork_block_opposite_corners() {
    assert_eq!(reply("g5 r1 r9"), Some((Rule::ForkBlock, Cell::new(2))));
    assert_eq!(reply("g5 r3 r7"), Some((Rule::ForkBlock, Cell::new(2))));
}

#[test]
fn fork_block_center_and_corner() {
    assert_eq!(reply("g9 r1 r5"), Some((Rule::ForkBlock, Cell::new(3))));
}

#[test]
fn fork_block_needs_two_human_moves() {
    // same corners, but a third human move: the generic rules take over
    assert_ne!(reply("g2 g5 r1 r8 r9").map(|(rule, _)| rule), Some(Rule::ForkBlock));
}

#[test]
fn block_adjacent_pair() {
    assert_eq!(reply("g5 r1 r2"), Some((Rule::BlockWin, Cell::new(3))));
}

#[test]
fn take_win() {
    assert_eq!(reply("g3 g5 r1 r2 r8"), Some((Rule::TakeWin, Cell::new(7))));
}

#[test]
fn take_win_before_block() {
    // the human threatens 3, but the computer can finish 4-5-6 first
    assert_eq!(reply("g4 g5 r1 r2 r9"), Some((Rule::TakeWin, Cell::new(6))));
}

#[test]
fn fallback_preference() {
    assert_eq!(PREFERENCE[0], Cell::CENTER);
    assert_eq!(RULES.last(), Some(&Rule::Fallback));

    // no wins or threats, center taken: first free corner
    assert_eq!(Rule::Fallback.apply(&state("g5 r1")), Some(Cell::new(3)));
    assert_eq!(Rule::Fallback.apply(&state("")), Some(Cell::CENTER));
    assert_eq!(Rule::Fallback.apply(&state("r1 g2 r3 g4 g5 r6 r7 r8 g9")), None);
}

#[test]
fn no_reply_when_decided() {
    assert_eq!(reply("r1 r2 r3 g4 g5"), None);
    assert_eq!(reply("g1 g2 g3 r4 r5 r9"), None);
    assert_eq!(reply("r1 g2 r3 g4 g5 r6 r7 r8 g9"), None);
}

#[test]
fn deterministic() {
    for s in ["r1", "g5 r1 r9", "g5 r1 r2", "g3 g5 r1 r2 r8"] {
        assert_eq!(reply(s), reply(s));
    }
}

fn check_reply(pre: &State) {
    match select_reply(pre) {
        None => assert!(pre.is_done(), "No reply for undecided state {}", pre),
        Some((rule, cell)) => {
            assert!(!pre.is_done(), "Reply {:?} for decided state {}", cell, pre);
            assert!(
                pre.is_empty_cell(cell),
                "{:?} picked taken cell {:?} in {}",
                rule,
                cell,
                pre
            );
        }
    }
}

#[test]
fn never_taken_cell_reachable() {
    let space = StateSpace::enumerate(Variant::SinglePlayer, None).unwrap();

    let empty = State::empty();
    let mut checked = 0;
    for s in std::iter::once(&empty).chain(space.states()) {
        s.available_cells().for_each(|cell| {
            check_reply(&s.clone_and_play(Move::new(Player::Red, cell)));
            checked += 1;
        });
    }
    assert!(checked > 0);
}

#[test]
fn never_taken_cell_random() {
    let mut rng = consistent_rng();

    for _ in 0..1000 {
        for s in random_game(&mut rng) {
            // only boards where the human just moved
            if s.count_of(Player::Red) == s.count_of(Player::Green) + 1 {
                check_reply(&s);
            }
        }
    }
}
