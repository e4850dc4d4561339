// Concrete maze search problems
//
// Each problem pairs a static wall grid with a goal formulation. Expansion
// counts are tracked through interior mutability so the engine can take
// `&self`, and the corner/food problems carry the cache slot their heuristics
// memoize oracle queries in.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;

use log::warn;

use crate::distance::DistanceCache;
use crate::problem::{SearchProblem, Successor, ILLEGAL_PLAN_COST};
use crate::types::{Coord, Direction, Grid};

/// Replays a unit-cost plan against the wall grid
///
/// Returns `ILLEGAL_PLAN_COST` as soon as a step leaves the grid or enters a
/// wall.
fn plan_cost(walls: &Grid, start: Coord, actions: &[Direction]) -> f64 {
    let mut position = start;
    for action in actions {
        position = action.apply(&position);
        if !walls.in_bounds(position) || walls.get(position) {
            return ILLEGAL_PLAN_COST;
        }
    }
    actions.len() as f64
}

/// Expands the four cardinal moves that do not hit a wall, at unit cost
fn cardinal_moves(walls: &Grid, position: Coord) -> Vec<(Coord, Direction)> {
    Direction::CARDINAL
        .iter()
        .filter_map(|&direction| {
            let next = direction.apply(&position);
            if walls.in_bounds(next) && !walls.get(next) {
                Some((next, direction))
            } else {
                None
            }
        })
        .collect()
}

/// Navigation to a single goal cell
pub struct PositionSearchProblem {
    walls: Grid,
    start: Coord,
    goal: Coord,
    num_expanded: Cell<usize>,
}

impl PositionSearchProblem {
    pub fn new(walls: Grid, start: Coord, goal: Coord) -> Self {
        PositionSearchProblem {
            walls,
            start,
            goal,
            num_expanded: Cell::new(0),
        }
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    pub fn walls(&self) -> &Grid {
        &self.walls
    }
}

impl SearchProblem for PositionSearchProblem {
    type State = Coord;
    type Action = Direction;

    fn starting_state(&self) -> Coord {
        self.start
    }

    fn is_goal(&self, state: &Coord) -> bool {
        *state == self.goal
    }

    fn successor_states(&self, state: &Coord) -> Vec<Successor<Coord, Direction>> {
        self.num_expanded.set(self.num_expanded.get() + 1);
        cardinal_moves(&self.walls, *state)
            .into_iter()
            .map(|(next, action)| Successor { state: next, action, cost: 1.0 })
            .collect()
    }

    fn actions_cost(&self, actions: &[Direction]) -> f64 {
        plan_cost(&self.walls, self.start, actions)
    }

    fn num_expanded(&self) -> usize {
        self.num_expanded.get()
    }
}

/// Search state for the corner tour: a position plus the corners still owed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CornersState {
    pub position: Coord,
    pub remaining: BTreeSet<Coord>,
}

/// Finds a path visiting all four corners of the layout
pub struct CornersProblem {
    walls: Grid,
    start: Coord,
    corners: [Coord; 4],
    num_expanded: Cell<usize>,
    cache: RefCell<DistanceCache>,
}

impl CornersProblem {
    /// Builds the problem from the wall layout and the food grid
    ///
    /// Corners sit one cell inside the outer wall ring. A corner without food
    /// is still a target; it only draws a warning.
    pub fn new(walls: Grid, food: &Grid, start: Coord) -> Self {
        let top = walls.height() - 2;
        let right = walls.width() - 2;
        let corners = [
            Coord::new(1, 1),
            Coord::new(1, top),
            Coord::new(right, 1),
            Coord::new(right, top),
        ];

        for corner in &corners {
            if !food.get(*corner) {
                warn!("No food in corner {:?}", corner);
            }
        }

        CornersProblem {
            walls,
            start,
            corners,
            num_expanded: Cell::new(0),
            cache: RefCell::new(DistanceCache::new()),
        }
    }

    pub fn corners(&self) -> &[Coord; 4] {
        &self.corners
    }

    pub fn walls(&self) -> &Grid {
        &self.walls
    }

    /// Problem-owned memo slot used by the corner-tour heuristic
    pub fn cache(&self) -> &RefCell<DistanceCache> {
        &self.cache
    }
}

impl SearchProblem for CornersProblem {
    type State = CornersState;
    type Action = Direction;

    fn starting_state(&self) -> CornersState {
        let remaining = self
            .corners
            .iter()
            .copied()
            .filter(|&corner| corner != self.start)
            .collect();
        CornersState { position: self.start, remaining }
    }

    fn is_goal(&self, state: &CornersState) -> bool {
        state.remaining.is_empty()
    }

    fn successor_states(&self, state: &CornersState) -> Vec<Successor<CornersState, Direction>> {
        self.num_expanded.set(self.num_expanded.get() + 1);
        cardinal_moves(&self.walls, state.position)
            .into_iter()
            .map(|(next, action)| {
                let mut remaining = state.remaining.clone();
                remaining.remove(&next);
                Successor {
                    state: CornersState { position: next, remaining },
                    action,
                    cost: 1.0,
                }
            })
            .collect()
    }

    fn actions_cost(&self, actions: &[Direction]) -> f64 {
        plan_cost(&self.walls, self.start, actions)
    }

    fn num_expanded(&self) -> usize {
        self.num_expanded.get()
    }
}

/// Search state for full food collection: a position plus the food left
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FoodState {
    pub position: Coord,
    pub food: Grid,
}

/// Finds a path collecting every food cell
pub struct FoodSearchProblem {
    walls: Grid,
    start: Coord,
    food: Grid,
    num_expanded: Cell<usize>,
    cache: RefCell<DistanceCache>,
}

impl FoodSearchProblem {
    pub fn new(walls: Grid, food: Grid, start: Coord) -> Self {
        FoodSearchProblem {
            walls,
            start,
            food,
            num_expanded: Cell::new(0),
            cache: RefCell::new(DistanceCache::new()),
        }
    }

    pub fn walls(&self) -> &Grid {
        &self.walls
    }

    /// Problem-owned memo slot used by the food heuristic
    pub fn cache(&self) -> &RefCell<DistanceCache> {
        &self.cache
    }
}

impl SearchProblem for FoodSearchProblem {
    type State = FoodState;
    type Action = Direction;

    fn starting_state(&self) -> FoodState {
        FoodState { position: self.start, food: self.food.clone() }
    }

    fn is_goal(&self, state: &FoodState) -> bool {
        state.food.count() == 0
    }

    fn successor_states(&self, state: &FoodState) -> Vec<Successor<FoodState, Direction>> {
        self.num_expanded.set(self.num_expanded.get() + 1);
        cardinal_moves(&self.walls, state.position)
            .into_iter()
            .map(|(next, action)| {
                let mut food = state.food.clone();
                if food.get(next) {
                    food.set(next, false);
                }
                Successor {
                    state: FoodState { position: next, food },
                    action,
                    cost: 1.0,
                }
            })
            .collect()
    }

    fn actions_cost(&self, actions: &[Direction]) -> f64 {
        plan_cost(&self.walls, self.start, actions)
    }

    fn num_expanded(&self) -> usize {
        self.num_expanded.get()
    }
}

/// Navigation to the nearest cell holding food
///
/// Same state space as `PositionSearchProblem`, different goal test. Driving
/// breadth-first search over this problem yields a shortest path to the
/// closest food without naming it up front.
pub struct AnyFoodSearchProblem {
    walls: Grid,
    food: Grid,
    start: Coord,
    num_expanded: Cell<usize>,
}

impl AnyFoodSearchProblem {
    pub fn new(walls: Grid, food: Grid, start: Coord) -> Self {
        AnyFoodSearchProblem {
            walls,
            food,
            start,
            num_expanded: Cell::new(0),
        }
    }
}

impl SearchProblem for AnyFoodSearchProblem {
    type State = Coord;
    type Action = Direction;

    fn starting_state(&self) -> Coord {
        self.start
    }

    fn is_goal(&self, state: &Coord) -> bool {
        self.food.get(*state)
    }

    fn successor_states(&self, state: &Coord) -> Vec<Successor<Coord, Direction>> {
        self.num_expanded.set(self.num_expanded.get() + 1);
        cardinal_moves(&self.walls, *state)
            .into_iter()
            .map(|(next, action)| Successor { state: next, action, cost: 1.0 })
            .collect()
    }

    fn actions_cost(&self, actions: &[Direction]) -> f64 {
        plan_cost(&self.walls, self.start, actions)
    }

    fn num_expanded(&self) -> usize {
        self.num_expanded.get()
    }
}
