use std::collections::HashMap;

use itertools::Itertools;

use css_ttt::board::{Outcome, Player};
use css_ttt::error::Error;
use css_ttt::state::State;
use css_ttt::util::state_space::StateSpace;
use css_ttt::variant::Variant;

use common::state;

mod common;

fn outcome_counts(space: &StateSpace) -> HashMap<Option<Outcome>, usize> {
    space.states().iter().map(|s| s.outcome()).counts()
}

#[test]
fn single_player_counts() {
    let space = StateSpace::enumerate(Variant::SinglePlayer, None).unwrap();

    assert_eq!(space.len(), 227);
    assert_eq!(space.level_sizes(), vec![9, 35, 105, 66, 12]);
    assert_eq!(space.depth(), 5);

    let counts = outcome_counts(&space);
    assert_eq!(counts[&None], 99);
    assert_eq!(counts[&Some(Outcome::WonBy(Player::Green))], 113);
    assert_eq!(counts[&Some(Outcome::WonBy(Player::Red))], 3);
    assert_eq!(counts[&Some(Outcome::Draw)], 12);
}

#[test]
fn two_player_counts() {
    let space = StateSpace::enumerate(Variant::TwoPlayer, None).unwrap();

    // the well known 5478 legal positions, minus the empty board
    assert_eq!(space.len(), 5477);
    assert_eq!(
        space.level_sizes(),
        vec![9, 72, 252, 756, 1260, 1520, 1140, 390, 78]
    );

    let counts = outcome_counts(&space);
    assert_eq!(counts[&Some(Outcome::WonBy(Player::Red))], 626);
    assert_eq!(counts[&Some(Outcome::WonBy(Player::Green))], 316);
    assert_eq!(counts[&Some(Outcome::Draw)], 16);
}

#[test]
fn states_are_unique() {
    for variant in Variant::ALL {
        let space = StateSpace::enumerate(variant, None).unwrap();
        assert!(space.states().iter().map(|s| s.to_string()).all_unique());
        assert!(!space.contains(&State::empty()));

        for (i, s) in space.states().iter().enumerate() {
            assert_eq!(space.index_of(s), Some(i));
        }
    }
}

#[test]
fn closed_under_successors() {
    for variant in Variant::ALL {
        let space = StateSpace::enumerate(variant, None).unwrap();
        let empty = State::empty();

        for s in std::iter::once(&empty).chain(space.states()) {
            for next in variant.next_states(s).iter() {
                assert!(
                    next == s || space.contains(next),
                    "{}: successor {} of {} was not enumerated",
                    variant,
                    next,
                    s
                );
            }
        }
    }
}

#[test]
fn levels_by_depth() {
    let space = StateSpace::enumerate(Variant::TwoPlayer, None).unwrap();

    assert!(space.level(0).is_empty());
    assert!(space.level(space.depth() + 1).is_empty());

    for depth in 1..=space.depth() {
        assert!(space.level(depth).iter().all(|s| s.move_count() == depth));
    }
}

#[test]
fn computer_always_replied() {
    let space = StateSpace::enumerate(Variant::SinglePlayer, None).unwrap();

    for s in space.states() {
        let red = s.count_of(Player::Red);
        let green = s.count_of(Player::Green);
        assert!(
            red == green || (s.is_done() && red == green + 1),
            "unexpected move counts in {}",
            s
        );
    }

    // the fork block line is reachable
    assert!(space.contains(&state("g2 g5 r1 r9")));
}

#[test]
fn depth_limit() {
    assert!(StateSpace::enumerate(Variant::SinglePlayer, Some(5)).is_ok());
    assert!(StateSpace::enumerate(Variant::TwoPlayer, Some(9)).is_ok());

    match StateSpace::enumerate(Variant::SinglePlayer, Some(4)) {
        Err(Error::DepthLimitExceeded { variant, limit }) => {
            assert_eq!(variant, Variant::SinglePlayer);
            assert_eq!(limit, 4);
        }
        other => panic!("expected depth limit error, got {:?}", other.map(|s| s.len())),
    }

    assert!(matches!(
        StateSpace::enumerate(Variant::TwoPlayer, Some(0)),
        Err(Error::DepthLimitExceeded { limit: 0, .. })
    ));
}
