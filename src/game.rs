// Game-state capability traits
//
// The live game simulation is an external collaborator; the engines only see
// these interfaces. States are immutable snapshots: every recursive step of
// the game-tree engine consumes a freshly generated successor and nothing is
// ever mutated in place.

use crate::types::{Coord, Grid};

/// A multi-agent turn-based game state
///
/// Agent index 0 is the maximizing agent; indices in `1..num_agents()` are
/// adversaries, visited in increasing order.
pub trait Game: Clone {
    type Action: Clone + Eq + std::fmt::Debug;

    /// Legal actions for an agent, including the no-op if the game has one
    ///
    /// The engines filter the no-op out before expansion at every level,
    /// maximizer included.
    fn legal_actions(&self, agent: usize) -> Vec<Self::Action>;

    /// The state after `agent` takes `action`
    fn generate_successor(&self, agent: usize, action: &Self::Action) -> Self;

    /// Whether the game has ended
    fn is_over(&self) -> bool;

    /// Total number of agents, at least 1
    fn num_agents(&self) -> usize;

    /// The game's running score, higher is better for agent 0
    fn score(&self) -> f64;

    /// The "stay" action the engines strip before recursing, if any
    fn noop_action() -> Option<Self::Action> {
        None
    }
}

/// A threat (ghost-like adversary) as seen by the evaluation function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreatState {
    pub position: Coord,
    /// Remaining vulnerability time; 0 means the threat is active
    pub vulnerable_timer: u32,
}

impl ThreatState {
    pub fn is_active(&self) -> bool {
        self.vulnerable_timer == 0
    }
}

/// Read-only maze accessors consumed by heuristics and evaluation
///
/// Never read by the engines themselves; the game-tree engine works against
/// plain `Game`.
pub trait MazeGame: Game {
    /// Current position of the maximizing agent
    fn agent_position(&self) -> Coord;

    /// Remaining food cells
    fn food(&self) -> &Grid;

    /// Static obstacle layout
    fn walls(&self) -> &Grid;

    /// Remaining power-up locations
    fn capsules(&self) -> Vec<Coord>;

    /// Threat positions with their vulnerability timers
    fn threats(&self) -> Vec<ThreatState>;
}
