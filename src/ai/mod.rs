//! The computer opponent of the single player game.
//!
//! This is not a search based bot: it evaluates a short, fixed list of hand-written rules.
pub mod heuristic;
