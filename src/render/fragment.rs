use std::fmt::{self, Write};

use itertools::Itertools;

use crate::state::State;
use crate::variant::Variant;

/// The id of the radio input that selects the start board.
pub const START_ID: &str = "start";

/// The id of the radio input that selects `state`.
pub fn state_id(state: &State) -> String {
    if state.is_start() {
        START_ID.to_owned()
    } else {
        state.to_string()
    }
}

/// The class list of the board div: `game`, one class per move token and the winner marker.
pub fn board_classes(state: &State) -> String {
    let winner = state.outcome().map(|outcome| format!("winner-{}", outcome.to_char()));

    std::iter::once("game".to_owned())
        .chain(state.moves().map(|mv| mv.to_string()))
        .chain(winner)
        .join(" ")
}

/// Write the radio input and board for `state`, with one label per cell pointing to the state
/// that clicking the cell leads to.
pub fn write_board(f: &mut impl Write, variant: Variant, state: &State, checked: bool) -> fmt::Result {
    let checked = if checked { " checked" } else { "" };

    writeln!(
        f,
        r#"    <input type="radio" name="game-state" id="{}"{}>"#,
        state_id(state),
        checked
    )?;
    writeln!(f, r#"    <div class="{}">"#, board_classes(state))?;
    for next in variant.next_states(state).iter() {
        writeln!(f, r#"      <label for="{}"></label>"#, state_id(next))?;
    }
    writeln!(f, "    </div>")
}

/// The markup fragment for a single state.
pub fn render_fragment(variant: Variant, state: &State) -> String {
    let mut result = String::new();
    write_board(&mut result, variant, state, false).expect("Writing to a String cannot fail");
    result
}
