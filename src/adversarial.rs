// Adversarial game-tree search engine
//
// Depth-bounded recursive exploration of a multi-agent game tree: one
// maximizing agent against one or more adversaries, evaluated at the depth
// limit or at terminal states by a pluggable scoring function. Three
// policies: exact minimax, alpha-beta-pruned minimax, and expectimax with
// uniform-random adversaries.

use std::error::Error;
use std::fmt;

use log::info;
use rand::Rng;

use crate::game::Game;

/// How adversary nodes are valued and whether siblings are pruned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPolicy {
    /// Exact minimax: adversaries play the worst case
    Minimax,
    /// Minimax with alpha-beta pruning; identical decisions, less work
    AlphaBeta,
    /// Adversaries choose uniformly at random; nodes return the mean
    Expectimax,
}

impl SearchPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchPolicy::Minimax => "minimax",
            SearchPolicy::AlphaBeta => "alpha-beta",
            SearchPolicy::Expectimax => "expectimax",
        }
    }
}

/// Contract violations surfaced by the engine
///
/// An agent with no legal actions outside the terminal/cutoff check means the
/// terminal-test wiring is broken. The engine never recovers from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTreeError {
    NoLegalActions { agent: usize },
}

impl fmt::Display for GameTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameTreeError::NoLegalActions { agent } => {
                write!(f, "agent {} has no legal actions in a non-terminal state", agent)
            }
        }
    }
}

impl Error for GameTreeError {}

/// Legal actions for an agent with the game's no-op stripped out
pub fn expandable_actions<G: Game>(state: &G, agent: usize) -> Vec<G::Action> {
    let mut actions = state.legal_actions(agent);
    if let Some(noop) = G::noop_action() {
        actions.retain(|action| *action != noop);
    }
    actions
}

/// Depth-bounded game-tree search
///
/// `max_ply_depth` counts full plies: one maximizer move plus one move by
/// every adversary. It is the sole admission-control knob; callers under a
/// wall-clock budget must pick it adaptively themselves.
#[derive(Debug, Clone, Copy)]
pub struct GameTreeSearch {
    policy: SearchPolicy,
    max_ply_depth: u32,
}

impl GameTreeSearch {
    pub fn new(policy: SearchPolicy, max_ply_depth: u32) -> Self {
        GameTreeSearch { policy, max_ply_depth }
    }

    pub fn policy(&self) -> SearchPolicy {
        self.policy
    }

    /// Picks a best first-ply action for the maximizer
    ///
    /// Values every legal non-noop root action and returns one achieving the
    /// maximum, breaking ties uniformly at random through the injected `rng`
    /// so adversaries cannot probe for a deterministic pattern. Each root
    /// child is valued under a fresh full alpha-beta window, so the pruned
    /// variant selects from exactly the same tying set as exact minimax.
    pub fn choose_action<G, F, R>(
        &self,
        state: &G,
        evaluation: &F,
        rng: &mut R,
    ) -> Result<G::Action, GameTreeError>
    where
        G: Game,
        F: Fn(&G) -> f64,
        R: Rng + ?Sized,
    {
        let actions = expandable_actions(state, 0);
        if actions.is_empty() {
            return Err(GameTreeError::NoLegalActions { agent: 0 });
        }

        let (next_agent, next_depth) = advance(0, state.num_agents(), 0);

        let mut best_value = f64::NEG_INFINITY;
        let mut best_actions: Vec<G::Action> = Vec::new();

        for action in actions {
            let successor = state.generate_successor(0, &action);
            let value = self.value(
                &successor,
                next_agent,
                next_depth,
                f64::NEG_INFINITY,
                f64::INFINITY,
                evaluation,
            )?;

            if value > best_value {
                best_value = value;
                best_actions.clear();
                best_actions.push(action);
            } else if value == best_value {
                best_actions.push(action);
            }
        }

        let tie_count = best_actions.len();
        let chosen = best_actions.swap_remove(rng.random_range(0..tie_count));

        info!(
            "{} depth {}: chose {:?} (value {}, {} tied)",
            self.policy.as_str(),
            self.max_ply_depth,
            chosen,
            best_value,
            tie_count
        );

        Ok(chosen)
    }

    /// Value of a state with the maximizer to move, full window
    ///
    /// Exposed for callers that want the root value rather than an action.
    pub fn root_value<G, F>(&self, state: &G, evaluation: &F) -> Result<f64, GameTreeError>
    where
        G: Game,
        F: Fn(&G) -> f64,
    {
        self.value(state, 0, 0, f64::NEG_INFINITY, f64::INFINITY, evaluation)
    }

    /// Recursive state-machine over `(state, agent, ply depth)`
    ///
    /// Terminal/cutoff is checked before any agent dispatch, so the adversary
    /// transitions never see a zero-action state on a well-formed game.
    /// `alpha`/`beta` only move under the alpha-beta policy.
    fn value<G, F>(
        &self,
        state: &G,
        agent: usize,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        evaluation: &F,
    ) -> Result<f64, GameTreeError>
    where
        G: Game,
        F: Fn(&G) -> f64,
    {
        if state.is_over() || depth == self.max_ply_depth {
            return Ok(evaluation(state));
        }

        let actions = expandable_actions(state, agent);
        if actions.is_empty() {
            return Err(GameTreeError::NoLegalActions { agent });
        }

        let (next_agent, next_depth) = advance(agent, state.num_agents(), depth);

        if agent == 0 {
            let mut best = f64::NEG_INFINITY;
            for action in &actions {
                let successor = state.generate_successor(agent, action);
                let value =
                    self.value(&successor, next_agent, next_depth, alpha, beta, evaluation)?;
                if value > best {
                    best = value;
                }
                if self.policy == SearchPolicy::AlphaBeta {
                    if value > alpha {
                        alpha = value;
                    }
                    if alpha >= beta {
                        break;
                    }
                }
            }
            return Ok(best);
        }

        match self.policy {
            SearchPolicy::Expectimax => {
                // Uniform distribution over the adversary's legal actions
                let mut total = 0.0;
                for action in &actions {
                    let successor = state.generate_successor(agent, action);
                    total +=
                        self.value(&successor, next_agent, next_depth, alpha, beta, evaluation)?;
                }
                Ok(total / actions.len() as f64)
            }
            SearchPolicy::Minimax | SearchPolicy::AlphaBeta => {
                let mut worst = f64::INFINITY;
                for action in &actions {
                    let successor = state.generate_successor(agent, action);
                    let value =
                        self.value(&successor, next_agent, next_depth, alpha, beta, evaluation)?;
                    if value < worst {
                        worst = value;
                    }
                    if self.policy == SearchPolicy::AlphaBeta {
                        if value < beta {
                            beta = value;
                        }
                        if alpha >= beta {
                            break;
                        }
                    }
                }
                Ok(worst)
            }
        }
    }
}

/// Next agent in the cycle, bumping the ply depth after the last adversary
///
/// The depth counter increments exactly once per ply: when the cycle wraps
/// back to agent 0. With a single agent every maximizer move completes a ply.
fn advance(agent: usize, num_agents: usize, depth: u32) -> (usize, u32) {
    let next = (agent + 1) % num_agents;
    if next == 0 {
        (next, depth + 1)
    } else {
        (next, depth)
    }
}
