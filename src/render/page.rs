use std::fmt::{self, Write};

use crate::render::fragment::{write_board, START_ID};
use crate::state::State;
use crate::util::state_space::StateSpace;
use crate::variant::Variant;

const REPOSITORY: &str = "https://github.com/lukebatchelor/css-tic-tac-toe";

/// The fixed texts of the page for one variant.
#[derive(Debug, Copy, Clone)]
struct PageText {
    title: &'static str,
    heading: &'static str,
    stylesheet: &'static str,
    other_href: &'static str,
    other_text: &'static str,
}

fn page_text(variant: Variant) -> PageText {
    match variant {
        Variant::SinglePlayer => PageText {
            title: "CSS Tic Tac Toe AI",
            heading: "CSS Tic Tac Toe AI",
            stylesheet: "styles.css",
            other_href: "./2/",
            other_text: "if you would like a 2-player version!",
        },
        Variant::TwoPlayer => PageText {
            title: "CSS Tic Tac Toe",
            heading: "2 Player CSS Tic Tac Toe",
            stylesheet: "../styles.css",
            other_href: "../",
            other_text: "to play against a computer!",
        },
    }
}

/// Write the full html document: the start board, every state of `space` and the reset button.
pub fn write_page(f: &mut impl Write, space: &StateSpace) -> fmt::Result {
    let variant = space.variant();
    let text = page_text(variant);

    writeln!(f, "<!DOCTYPE html>")?;
    writeln!(f, r#"<html lang="en">"#)?;
    writeln!(f, "<head>")?;
    writeln!(f, r#"  <meta charset="UTF-8">"#)?;
    writeln!(f, r#"  <meta name="viewport" content="width=device-width, initial-scale=1.0">"#)?;
    writeln!(f, "  <title>{}</title>", text.title)?;
    writeln!(f, r#"  <link href="{}" rel="stylesheet">"#, text.stylesheet)?;
    writeln!(f, "</head>")?;
    writeln!(f, "<body>")?;
    writeln!(f, r#"  <div class="app">"#)?;
    writeln!(f, "    <h1>{}</h1>", text.heading)?;
    writeln!(f, "    <p>This game is built entirely out of HTML and CSS, no JavaScript at all!</p>")?;
    writeln!(
        f,
        r#"    <p>Or go <a href="{}">here</a> {}</p>"#,
        text.other_href, text.other_text
    )?;

    write_board(f, variant, &State::empty(), true)?;
    for state in space.states() {
        write_board(f, variant, state, false)?;
    }

    writeln!(f, r#"    <label for="{}" id="resetButton">Reset</label>"#, START_ID)?;
    writeln!(
        f,
        r#"    <p>Check out <a href="{0}">{0}</a> if you're interested in how it works!</p>"#,
        REPOSITORY
    )?;
    writeln!(f, "  </div>")?;
    writeln!(f, "</body>")?;
    writeln!(f, "</html>")
}

pub fn render_page(space: &StateSpace) -> String {
    let mut result = String::new();
    write_page(&mut result, space).expect("Writing to a String cannot fail");
    result
}
