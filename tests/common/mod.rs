// Shared fixtures for the integration tests: a synthetic game tree with
// fixed leaf values, and a minimal maze game implementing the full
// `MazeGame` surface.
//
// Each test binary compiles this module separately and uses a different
// subset of it.
#![allow(dead_code)]

use std::rc::Rc;

use maze_agents::game::{Game, MazeGame, ThreatState};
use maze_agents::types::{Coord, Direction, Grid};

/// Installs the test logger; safe to call from every test
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One node of a synthetic game tree
pub struct TreeNode {
    pub value: f64,
    pub children: Vec<usize>,
    /// A node with no children that is NOT terminal; used to provoke the
    /// zero-branching contract violation
    pub stuck: bool,
}

/// Builds an interior or leaf node
pub fn node(value: f64, children: Vec<usize>) -> TreeNode {
    TreeNode { value, children, stuck: false }
}

/// Builds a non-terminal node with no legal actions
pub fn stuck_node() -> TreeNode {
    TreeNode { value: 0.0, children: Vec::new(), stuck: true }
}

/// A game over a fixed tree: actions are child indices, scores are the
/// stored node values
#[derive(Clone)]
pub struct TreeGame {
    nodes: Rc<Vec<TreeNode>>,
    current: usize,
    num_agents: usize,
}

impl TreeGame {
    /// Roots the game at node 0
    pub fn new(nodes: Vec<TreeNode>, num_agents: usize) -> Self {
        TreeGame { nodes: Rc::new(nodes), current: 0, num_agents }
    }

    fn node(&self) -> &TreeNode {
        &self.nodes[self.current]
    }
}

impl Game for TreeGame {
    type Action = usize;

    fn legal_actions(&self, _agent: usize) -> Vec<usize> {
        (0..self.node().children.len()).collect()
    }

    fn generate_successor(&self, _agent: usize, action: &usize) -> Self {
        let mut next = self.clone();
        next.current = self.node().children[*action];
        next
    }

    fn is_over(&self) -> bool {
        self.node().children.is_empty() && !self.node().stuck
    }

    fn num_agents(&self) -> usize {
        self.num_agents
    }

    fn score(&self) -> f64 {
        self.node().value
    }
}

/// Leaf evaluator for synthetic trees: just the stored value
pub fn leaf_value(state: &TreeGame) -> f64 {
    state.score()
}

/// A minimal maze game: one maximizer, optional threats, food and capsules
/// on a wall grid. Movement is the only rule; food raises the score, each
/// step costs one point.
#[derive(Clone)]
pub struct TestMaze {
    pub walls: Grid,
    pub food: Grid,
    pub capsules: Vec<Coord>,
    pub position: Coord,
    pub threats: Vec<ThreatState>,
    pub score: f64,
    /// Cells the game forbids entering without marking them as walls;
    /// lets tests make a planned route diverge from the live rules
    pub blocked: Vec<Coord>,
}

impl TestMaze {
    pub fn new(walls: Grid, food: Grid, start: Coord) -> Self {
        TestMaze {
            walls,
            food,
            capsules: Vec::new(),
            position: start,
            threats: Vec::new(),
            score: 0.0,
            blocked: Vec::new(),
        }
    }

    fn agent_coord(&self, agent: usize) -> Coord {
        if agent == 0 {
            self.position
        } else {
            self.threats[agent - 1].position
        }
    }
}

impl Game for TestMaze {
    type Action = Direction;

    fn legal_actions(&self, agent: usize) -> Vec<Direction> {
        let from = self.agent_coord(agent);
        let mut actions = vec![Direction::Stop];
        for direction in &Direction::CARDINAL {
            let next = direction.apply(&from);
            if self.walls.in_bounds(next) && !self.walls.get(next) && !self.blocked.contains(&next)
            {
                actions.push(*direction);
            }
        }
        actions
    }

    fn generate_successor(&self, agent: usize, action: &Direction) -> Self {
        let mut next = self.clone();

        if agent == 0 {
            next.position = action.apply(&self.position);
            next.score -= 1.0;

            if next.food.get(next.position) {
                next.food.set(next.position, false);
                next.score += 10.0;
            }

            if let Some(index) = next.capsules.iter().position(|c| *c == next.position) {
                next.capsules.remove(index);
                for threat in &mut next.threats {
                    threat.vulnerable_timer = 40;
                }
            }
        } else {
            let threat = &mut next.threats[agent - 1];
            threat.position = action.apply(&threat.position);
            if threat.vulnerable_timer > 0 {
                threat.vulnerable_timer -= 1;
            }
        }

        next
    }

    fn is_over(&self) -> bool {
        self.food.count() == 0
    }

    fn num_agents(&self) -> usize {
        1 + self.threats.len()
    }

    fn score(&self) -> f64 {
        self.score
    }

    fn noop_action() -> Option<Direction> {
        Some(Direction::Stop)
    }
}

impl MazeGame for TestMaze {
    fn agent_position(&self) -> Coord {
        self.position
    }

    fn food(&self) -> &Grid {
        &self.food
    }

    fn walls(&self) -> &Grid {
        &self.walls
    }

    fn capsules(&self) -> Vec<Coord> {
        self.capsules.clone()
    }

    fn threats(&self) -> Vec<ThreatState> {
        self.threats.clone()
    }
}
