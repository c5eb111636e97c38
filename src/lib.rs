#![warn(missing_debug_implementations)]

//! Builds a tic-tac-toe website that runs entirely on html and css.
//!
//! Every state reachable from the empty board is enumerated up front and rendered as a hidden radio input
//! followed by a board. Clicking a cell checks the radio input of the next state, and the stylesheet only shows
//! the board after the checked input.
//!
//! # Features
//!
//! Two variants are supported, see [Variant](crate::variant::Variant):
//! * a single player game against a computer opponent that follows a fixed list of
//!     [rules](crate::ai::heuristic::Rule),
//! * a two player game where both players click in turn.
//!
//! The main pieces are:
//! * [State](crate::state::State), a set of moves with a canonical string form so transpositions collapse,
//!     and the win and draw detection.
//! * [StateSpace](crate::util::state_space::StateSpace), the breadth-first enumeration of all reachable states.
//! * [render](crate::render), the html fragments, the page and the stylesheet.
//! * [site::build](crate::site::build), which puts it all together and writes the files.
//!
//! # Examples
//!
//! ## Enumerate the single player game and look at its first level.
//!
//! ```
//! use css_ttt::util::state_space::StateSpace;
//! use css_ttt::variant::Variant;
//!
//! let space = StateSpace::enumerate(Variant::SinglePlayer, None).unwrap();
//! for state in space.level(1) {
//!     println!("{}", state);
//! }
//! assert_eq!(space.level(1).len(), 9);
//! ```
//!
//! ## Render the board for a single state.
//!
//! ```
//! use css_ttt::render::fragment::render_fragment;
//! use css_ttt::state::State;
//! use css_ttt::variant::Variant;
//!
//! let state: State = "r1 g5".parse().unwrap();
//! let fragment = render_fragment(Variant::TwoPlayer, &state);
//! assert!(fragment.contains(r#"<label for="g5-r1-r2"></label>"#));
//! ```

pub mod board;
pub mod state;
pub mod variant;

pub mod ai;

pub mod util;

pub mod render;

pub mod config;
pub mod error;
pub mod site;
