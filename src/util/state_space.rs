//! Breadth-first enumeration of every state reachable from the empty board.
use std::collections::HashMap;
use std::ops::Range;

use internal_iterator::InternalIterator;
use tracing::info;

use crate::error::{Error, Result};
use crate::state::State;
use crate::variant::Variant;

/// All states reachable from the empty board under the rules of a [Variant].
///
/// States are stored in discovery order: all states of depth 1 first, then depth 2, and so on.
/// The depth of a state is the number of clicks needed to reach it.
/// The empty start state itself is not included.
#[derive(Debug, Clone)]
pub struct StateSpace {
    variant: Variant,
    states: Vec<State>,
    index: HashMap<State, usize>,
    levels: Vec<Range<usize>>,
}

impl StateSpace {
    /// Enumerate all reachable states.
    ///
    /// If `depth_limit` is set and the traversal would go deeper than that many levels,
    /// this fails with [Error::DepthLimitExceeded] instead.
    pub fn enumerate(variant: Variant, depth_limit: Option<u32>) -> Result<StateSpace> {
        let mut space = StateSpace {
            variant,
            states: vec![],
            index: HashMap::new(),
            levels: vec![],
        };

        let mut frontier = 0..0;
        let mut depth = 0;
        loop {
            info!(%variant, depth, states = space.states.len(), "expanding level");

            let start = space.states.len();
            if depth == 0 {
                space.expand(&State::empty());
            } else {
                for i in frontier.clone() {
                    let state = space.states[i].clone();
                    space.expand(&state);
                }
            }
            let level = start..space.states.len();

            if level.is_empty() {
                break;
            }

            depth += 1;
            if let Some(limit) = depth_limit {
                if depth > limit {
                    return Err(Error::DepthLimitExceeded { variant, limit });
                }
            }

            space.levels.push(level.clone());
            frontier = level;
        }

        info!(%variant, depth, states = space.states.len(), "enumeration done");
        Ok(space)
    }

    /// Add the unseen successors of `state` to the end of the arena.
    fn expand(&mut self, state: &State) {
        let variant = self.variant;
        state.available_cells().for_each(|cell| {
            let next = variant.successor(state, cell);
            if !self.index.contains_key(&next) {
                self.index.insert(next.clone(), self.states.len());
                self.states.push(next);
            }
        });
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// All states, in discovery order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn contains(&self, state: &State) -> bool {
        self.index.contains_key(state)
    }

    pub fn index_of(&self, state: &State) -> Option<usize> {
        self.index.get(state).copied()
    }

    /// The number of levels, which is the depth of the deepest state.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// The states first discovered at `depth`, starting from 1.
    pub fn level(&self, depth: usize) -> &[State] {
        match depth.checked_sub(1).and_then(|i| self.levels.get(i)) {
            Some(range) => &self.states[range.clone()],
            None => &[],
        }
    }

    pub fn level_sizes(&self) -> Vec<usize> {
        self.levels.iter().map(|range| range.len()).collect()
    }
}
