// Search problem interface
//
// The abstract state-transition problem consumed by the generic search
// engine. Problems are owned and supplied entirely by the caller; the engine
// only reads them.

use std::hash::Hash;

/// Cost returned by `actions_cost` for a plan containing an illegal move
///
/// A large finite sentinel rather than a panic, so callers can compare plans
/// without unwinding.
pub const ILLEGAL_PLAN_COST: f64 = 999_999.0;

/// A single successor produced by expanding a state
#[derive(Debug, Clone)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub cost: f64,
}

/// An abstract search problem over opaque, hashable states
///
/// Equal states must hash and compare equal regardless of how they were
/// reached; no path information may be embedded in a state.
pub trait SearchProblem {
    type State: Clone + Eq + Hash;
    type Action: Clone;

    /// The state the search starts from
    fn starting_state(&self) -> Self::State;

    /// Whether a state satisfies the goal
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All `(state, action, cost)` successors of a state
    ///
    /// Step costs must be non-negative. Implementations may account the
    /// expansion (see `num_expanded`) through interior mutability.
    fn successor_states(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Total cost of an action sequence from the start
    ///
    /// Returns `ILLEGAL_PLAN_COST` (never panics) if the sequence contains an
    /// illegal move.
    fn actions_cost(&self, actions: &[Self::Action]) -> f64;

    /// Number of states expanded so far
    ///
    /// Problems that do not track expansions report 0.
    fn num_expanded(&self) -> usize {
        0
    }
}
