// Library exports for the maze-agents crate
// Generic graph search over abstract problems, plus depth-bounded
// adversarial game-tree search over a supplied game-state abstraction

pub mod adversarial;
pub mod agents;
pub mod config;
pub mod distance;
pub mod eval;
pub mod frontier;
pub mod game;
pub mod heuristics;
pub mod problem;
pub mod problems;
pub mod search;
pub mod types;
