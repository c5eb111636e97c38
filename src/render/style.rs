use std::fmt::{self, Write};

use crate::board::{Cell, Outcome, Player};

const CELL_SIZE_PX: u32 = 100;

fn player_color(player: Player) -> &'static str {
    match player {
        Player::Green => "#2ecc71",
        Player::Red => "#e74c3c",
    }
}

fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::WonBy(Player::Red) => "Red wins!",
        Outcome::WonBy(Player::Green) => "Green wins!",
        Outcome::Draw => "It's a draw!",
    }
}

/// Write the shared stylesheet.
///
/// Only the board directly after the checked radio input is shown. Each move token class on a board
/// colours the matching label, and taken cells stop looking clickable.
pub fn write_stylesheet(f: &mut impl Write) -> fmt::Result {
    writeln!(f, "body {{ font-family: sans-serif; }}")?;
    writeln!(f, ".app {{ max-width: {}px; margin: 0 auto; text-align: center; }}", CELL_SIZE_PX * 6)?;
    writeln!(f, r#"input[name="game-state"] {{ display: none; }}"#)?;
    writeln!(
        f,
        ".game {{ display: none; grid-template-columns: repeat(3, {0}px); grid-auto-rows: {0}px; \
         gap: 4px; justify-content: center; margin: 1em auto; }}",
        CELL_SIZE_PX
    )?;
    writeln!(f, r#"input[name="game-state"]:checked + .game {{ display: grid; }}"#)?;
    writeln!(f, ".game label {{ background: #ecf0f1; cursor: pointer; }}")?;
    writeln!(f, ".game label:hover {{ background: #bdc3c7; }}")?;

    for player in Player::BOTH {
        for cell in Cell::all() {
            writeln!(
                f,
                ".game.{0}{1} label:nth-child({1}) {{ background: {2}; cursor: default; }}",
                player.tag(),
                cell,
                player_color(player)
            )?;
        }
    }

    writeln!(
        f,
        r#".game[class*="winner-"] label {{ pointer-events: none; }}"#
    )?;
    writeln!(
        f,
        ".game[class*=\"winner-\"]::after {{ grid-column: 1 / -1; font-size: 1.5em; }}"
    )?;
    for outcome in [
        Outcome::WonBy(Player::Red),
        Outcome::WonBy(Player::Green),
        Outcome::Draw,
    ] {
        writeln!(
            f,
            ".game.winner-{}::after {{ content: \"{}\"; }}",
            outcome.to_char(),
            outcome_message(outcome)
        )?;
    }

    writeln!(f, "#resetButton {{ display: inline-block; padding: 0.5em 1em; cursor: pointer; background: #34495e; color: white; }}")
}

pub fn stylesheet() -> String {
    let mut result = String::new();
    write_stylesheet(&mut result).expect("Writing to a String cannot fail");
    result
}
