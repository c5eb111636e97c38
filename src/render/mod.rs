//! Static html and css output.
//!
//! Every state becomes a hidden radio input followed by its board. Each board has one label per cell,
//! and each label checks the radio input of the state that clicking the cell leads to.
//! The stylesheet only shows the board after the checked input, so the page works without any script.
pub mod fragment;
pub mod page;
pub mod style;
