// Distance oracle
//
// Shortest unweighted grid distance between two cells, ignoring every dynamic
// game element. This is the single reusable building block under all the
// informed-search heuristics.

use std::collections::{HashMap, VecDeque};

use crate::types::{Coord, Direction, Grid};

/// Finite stand-in for an unreachable target
///
/// Heuristics substitute this for `None` oracle results so informed search
/// degrades to uninformed behavior instead of crashing.
pub const UNREACHABLE_COST: f64 = 999_999.0;

/// True shortest-path length between two open cells of a static wall grid
///
/// Breadth-first over 4-connected open cells. Returns `None` when `end` is
/// unreachable from `start` (distinct from a zero-length path) or when either
/// endpoint is a wall or out of bounds.
pub fn maze_distance(walls: &Grid, start: Coord, end: Coord) -> Option<u32> {
    if !walls.in_bounds(start) || !walls.in_bounds(end) || walls.get(start) || walls.get(end) {
        return None;
    }

    let mut visited = Grid::new(walls.width(), walls.height());
    let mut queue: VecDeque<(Coord, u32)> = VecDeque::new();

    visited.set(start, true);
    queue.push_back((start, 0));

    while let Some((position, dist)) = queue.pop_front() {
        if position == end {
            return Some(dist);
        }

        for direction in &Direction::CARDINAL {
            let next = direction.apply(&position);
            if walls.in_bounds(next) && !walls.get(next) && !visited.get(next) {
                visited.set(next, true);
                queue.push_back((next, dist + 1));
            }
        }
    }

    None
}

/// Memo for oracle queries against one fixed wall grid
///
/// Owned by the problem and passed alongside it; never invalidated, since the
/// wall grid is static for the lifetime of the problem. Keys are unordered
/// coordinate pairs (the grid is undirected).
#[derive(Debug, Default)]
pub struct DistanceCache {
    memo: HashMap<(Coord, Coord), Option<u32>>,
}

impl DistanceCache {
    pub fn new() -> Self {
        DistanceCache { memo: HashMap::new() }
    }

    /// Cached oracle lookup
    pub fn distance(&mut self, walls: &Grid, a: Coord, b: Coord) -> Option<u32> {
        let key = if a <= b { (a, b) } else { (b, a) };
        *self
            .memo
            .entry(key)
            .or_insert_with(|| maze_distance(walls, a, b))
    }

    /// Number of distinct pairs computed so far
    pub fn len(&self) -> usize {
        self.memo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }
}
