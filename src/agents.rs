// Decision agents
//
// Thin wiring from the engines to a live game state: the reflex agent scores
// one move ahead, the adversarial agent runs the game-tree engine, and the
// route planner chains breadth-first segments into a full food-collection
// plan with strict replay validation.

use std::error::Error;
use std::fmt;

use log::{error, info};
use rand::Rng;

use crate::adversarial::{expandable_actions, GameTreeError, GameTreeSearch, SearchPolicy};
use crate::config::{Config, EvalWeights};
use crate::eval::{evaluate_action, evaluate_state};
use crate::game::MazeGame;
use crate::problems::AnyFoodSearchProblem;
use crate::search::breadth_first_search;
use crate::types::{Coord, Direction};

/// Chooses actions by scoring each alternative one move ahead
pub struct ReflexAgent {
    weights: EvalWeights,
}

impl ReflexAgent {
    pub fn new(weights: EvalWeights) -> Self {
        ReflexAgent { weights }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.weights.clone())
    }

    /// Scores every legal non-noop action and picks a best one
    ///
    /// Ties are broken uniformly at random through the injected `rng`.
    pub fn choose_action<G, R>(&self, state: &G, rng: &mut R) -> Result<G::Action, GameTreeError>
    where
        G: MazeGame,
        R: Rng + ?Sized,
    {
        let actions = expandable_actions(state, 0);
        if actions.is_empty() {
            return Err(GameTreeError::NoLegalActions { agent: 0 });
        }

        let mut best_score = f64::NEG_INFINITY;
        let mut best_actions: Vec<G::Action> = Vec::new();

        for action in actions {
            let score = evaluate_action(state, &action, &self.weights);
            if score > best_score {
                best_score = score;
                best_actions.clear();
                best_actions.push(action);
            } else if score == best_score {
                best_actions.push(action);
            }
        }

        let tie_count = best_actions.len();
        Ok(best_actions.swap_remove(rng.random_range(0..tie_count)))
    }
}

/// Chooses actions by depth-bounded game-tree search
pub struct AdversarialAgent {
    search: GameTreeSearch,
    weights: EvalWeights,
}

impl AdversarialAgent {
    pub fn new(policy: SearchPolicy, max_ply_depth: u32, weights: EvalWeights) -> Self {
        AdversarialAgent {
            search: GameTreeSearch::new(policy, max_ply_depth),
            weights,
        }
    }

    /// Builds an agent at the config's default depth
    pub fn from_config(policy: SearchPolicy, config: &Config) -> Self {
        Self::new(policy, config.adversarial.default_ply_depth, config.weights.clone())
    }

    pub fn choose_action<G, R>(&self, state: &G, rng: &mut R) -> Result<G::Action, GameTreeError>
    where
        G: MazeGame,
        R: Rng + ?Sized,
    {
        let weights = &self.weights;
        self.search
            .choose_action(state, &|leaf: &G| evaluate_state(leaf, weights), rng)
    }
}

/// Failures of the food-route planner
#[derive(Debug, Clone, PartialEq)]
pub enum PlanError {
    /// A planned action was not legal when replayed against the live state.
    /// The plan and the game diverged; this is a state-model inconsistency,
    /// never a recoverable condition.
    IllegalAction { step: usize, action: Direction },
    /// Some remaining food cannot be reached from the given position
    NoPath { position: Coord },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::IllegalAction { step, action } => {
                write!(f, "planned action {} illegal at replay step {}", action.as_str(), step)
            }
            PlanError::NoPath { position } => {
                write!(f, "no path to remaining food from {:?}", position)
            }
        }
    }
}

impl Error for PlanError {}

/// Plans a complete food-collection route by chained closest-food searches
///
/// Repeatedly breadth-first-searches to the nearest remaining food and
/// replays each segment against the live state, so the plan is validated
/// move by move as it is built.
pub fn plan_food_route<G>(game: &G) -> Result<Vec<Direction>, PlanError>
where
    G: MazeGame<Action = Direction>,
{
    let mut current = game.clone();
    let mut plan: Vec<Direction> = Vec::new();

    while current.food().count() > 0 {
        let problem = AnyFoodSearchProblem::new(
            current.walls().clone(),
            current.food().clone(),
            current.agent_position(),
        );

        let mut segment = breadth_first_search(&problem)
            .ok_or(PlanError::NoPath { position: current.agent_position() })?;

        // An empty segment means the agent is standing on food. The cell is
        // only consumed on entry, so step aside; the next segment routes back
        // through it.
        if segment.is_empty() {
            let aside = expandable_actions(&current, 0)
                .into_iter()
                .next()
                .ok_or(PlanError::NoPath { position: current.agent_position() })?;
            segment = vec![aside];
        }

        for action in segment {
            let legal = current.legal_actions(0);
            if !legal.contains(&action) {
                error!(
                    "Route diverged from the game at step {}: {} not legal at {:?}",
                    plan.len(),
                    action.as_str(),
                    current.agent_position()
                );
                return Err(PlanError::IllegalAction { step: plan.len(), action });
            }

            current = current.generate_successor(0, &action);
            plan.push(action);
        }
    }

    info!("Food route planned: {} actions", plan.len());
    Ok(plan)
}
