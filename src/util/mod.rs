//! Utilities that work on whole sets of states.
pub mod state_space;
